use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of career sectors. Declaration order is significant: it is the
/// tie-break order when quiz tallies are ranked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CareerCategory {
    Technology,
    Healthcare,
    Creative,
    Business,
    Education,
    Engineering,
}

impl CareerCategory {
    pub const ALL: [CareerCategory; 6] = [
        CareerCategory::Technology,
        CareerCategory::Healthcare,
        CareerCategory::Creative,
        CareerCategory::Business,
        CareerCategory::Education,
        CareerCategory::Engineering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerCategory::Technology => "Technology",
            CareerCategory::Healthcare => "Healthcare",
            CareerCategory::Creative => "Creative",
            CareerCategory::Business => "Business",
            CareerCategory::Education => "Education",
            CareerCategory::Engineering => "Engineering",
        }
    }

    /// Position in `ALL`.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A career profile. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    pub category: CareerCategory,
    pub description: String,
    pub salary_range: String,
    pub education: String,
    pub skills: Vec<String>,
    pub image_url: String,
}
