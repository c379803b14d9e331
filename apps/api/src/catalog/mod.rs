//! Static catalog of careers, resources and quiz questions.
//!
//! Built once at startup, either from the built-in seed or from a JSON file,
//! then shared read-only for the life of the process.

pub mod handlers;
pub mod seed;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::career::CareerRecord;
use crate::models::quiz::QuizQuestion;
use crate::models::resource::{ResourceRecord, ResourceType};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate career id '{0}'")]
    DuplicateCareerId(String),

    #[error("duplicate resource id '{0}'")]
    DuplicateResourceId(String),

    #[error("career '{0}' has no skills")]
    CareerWithoutSkills(String),

    #[error("quiz question '{0}' has no options")]
    QuestionWithoutOptions(String),

    #[error("catalog has no quiz questions")]
    NoQuestions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub careers: Vec<CareerRecord>,
    #[serde(default)]
    pub resources: Vec<ResourceRecord>,
    pub questions: Vec<QuizQuestion>,
}

impl Catalog {
    /// The built-in content.
    pub fn seed() -> Self {
        Self {
            careers: seed::careers(),
            resources: seed::resources(),
            questions: seed::questions(),
        }
    }

    /// Reads and validates a catalog document from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file '{}' is not valid JSON", path.display()))?;
        catalog
            .validate()
            .with_context(|| format!("Catalog file '{}' failed validation", path.display()))?;
        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise falls back to the seed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => {
                info!("Loading catalog from {}", p.display());
                Self::from_file(p)?
            }
            None => {
                info!("Using built-in catalog");
                Self::seed()
            }
        };
        info!(
            careers = catalog.careers.len(),
            resources = catalog.resources.len(),
            questions = catalog.questions.len(),
            "Catalog ready"
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for career in &self.careers {
            if !seen.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateCareerId(career.id.clone()));
            }
            if career.skills.is_empty() {
                return Err(CatalogError::CareerWithoutSkills(career.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(resource.id.as_str()) {
                return Err(CatalogError::DuplicateResourceId(resource.id.clone()));
            }
        }

        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }
        if let Some(q) = self.questions.iter().find(|q| q.options.is_empty()) {
            return Err(CatalogError::QuestionWithoutOptions(q.id.clone()));
        }

        Ok(())
    }

    pub fn career(&self, id: &str) -> Option<&CareerRecord> {
        self.careers.iter().find(|c| c.id == id)
    }

    pub fn resources_of_type(&self, resource_type: Option<ResourceType>) -> Vec<ResourceRecord> {
        self.resources
            .iter()
            .filter(|r| resource_type.map_or(true, |t| r.resource_type == t))
            .cloned()
            .collect()
    }
}
