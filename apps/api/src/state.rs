use std::sync::Arc;

use crate::catalog::Catalog;
use crate::quiz::engine::QuizEngine;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup; quiz sessions travel with each request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub quiz: Arc<QuizEngine>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let quiz = QuizEngine::new(catalog.questions.clone());
        Self {
            catalog: Arc::new(catalog),
            quiz: Arc::new(quiz),
        }
    }
}
