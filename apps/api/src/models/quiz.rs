use serde::{Deserialize, Serialize};

use crate::models::career::CareerCategory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    pub label: String,
    pub category: CareerCategory,
    pub description: String,
}

/// One multiple-choice question. Each option votes for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}
