//! Axum route handlers for the quiz.
//!
//! The server keeps no quiz state: clients send their `QuizSession` with each
//! call and receive the updated session back.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::career::CareerCategory;
use crate::models::quiz::QuizQuestion;
use crate::quiz::engine::{
    build_report, AnswerOutcome, QuizEngine, QuizSession, RecommendationReport,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuizQuestion>,
    pub question_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session: QuizSession,
    pub progress_percent: u32,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuizQuestion>,
}

impl SessionView {
    fn new(engine: &QuizEngine, session: QuizSession) -> Self {
        Self {
            progress_percent: engine.progress_percent(&session),
            question_count: engine.question_count(),
            current_question: engine.current_question(&session).cloned(),
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session: QuizSession,
}

/// Exactly one of `category` or `option_index` must be set.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub session: QuizSession,
    pub category: Option<CareerCategory>,
    pub option_index: Option<usize>,
    /// `false` records the choice without moving to the next question.
    #[serde(default = "default_advance")]
    pub advance: bool,
}

fn default_advance() -> bool {
    true
}

fn ambiguous_choice() -> AppError {
    AppError::Validation("Provide exactly one of category or option_index".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.quiz.questions().to_vec(),
        question_count: state.quiz.question_count(),
    })
}

/// POST /api/v1/quiz/session
pub async fn handle_start_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(SessionView::new(&state.quiz, QuizSession::new()))
}

/// POST /api/v1/quiz/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let engine = state.quiz.as_ref();
    let mut session = req.session;
    engine.validate_session(&session)?;

    if session.is_complete {
        return Err(AppError::QuizComplete);
    }

    if req.advance {
        let outcome = match (req.category, req.option_index) {
            (Some(category), None) => engine.answer(&mut session, category),
            (None, Some(index)) => engine.answer_option(&mut session, index)?,
            _ => return Err(ambiguous_choice()),
        };
        match outcome {
            AnswerOutcome::Advanced { next_index } => debug!("Quiz moved to question {next_index}"),
            AnswerOutcome::Completed => info!("Quiz completed"),
            AnswerOutcome::Ignored => return Err(AppError::QuizComplete),
        }
    } else {
        let category = match (req.category, req.option_index) {
            (Some(category), None) => category,
            (None, Some(index)) => engine.option_category(&session, index)?,
            _ => return Err(ambiguous_choice()),
        };
        engine.set_answer(&mut session, category)?;
    }

    Ok(Json(SessionView::new(engine, session)))
}

/// POST /api/v1/quiz/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Json<SessionView> {
    let mut session = req.session;
    session.reset();
    Json(SessionView::new(&state.quiz, session))
}

/// POST /api/v1/quiz/recommendations
///
/// Incomplete sessions get an empty recommendation list, not an error.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<RecommendationReport>, AppError> {
    state.quiz.validate_session(&req.session)?;
    let report = build_report(&state.catalog.careers, &req.session);
    if req.session.is_complete {
        info!(
            top = ?report.top_categories,
            careers = report.careers.len(),
            "Recommendations computed"
        );
    }
    Ok(Json(report))
}
