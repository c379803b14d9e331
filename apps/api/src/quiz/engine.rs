//! Quiz engine — drives a session through a fixed question sequence and turns
//! the recorded answers into career recommendations.
//!
//! Sessions are plain values owned by the caller. Every operation here takes
//! the session explicitly; the engine itself only holds the immutable
//! question list.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::career::{CareerCategory, CareerRecord};
use crate::models::quiz::QuizQuestion;

/// How many of the highest-scoring categories feed into recommendations.
pub const TOP_CATEGORY_LIMIT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Session state
// ────────────────────────────────────────────────────────────────────────────

/// Transient quiz progress for one user.
///
/// `answers[i]` is the category chosen for question `i`. Once complete,
/// `current_index` stays on the last question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuizSession {
    pub current_index: usize,
    pub answers: Vec<CareerCategory>,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress(usize),
    Complete,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QuizState {
        if self.is_complete {
            QuizState::Complete
        } else {
            QuizState::InProgress(self.current_index)
        }
    }

    /// Back to `InProgress(0)` with no answers, from any state.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.is_complete = false;
    }

    fn record(&mut self, category: CareerCategory) {
        match self.answers.get_mut(self.current_index) {
            Some(slot) => *slot = category,
            None => self.answers.push(category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Advanced { next_index: usize },
    Completed,
    /// Session was already complete; nothing changed.
    Ignored,
}

#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("option {index} is out of range for question '{question_id}' ({count} options)")]
    OptionOutOfRange {
        question_id: String,
        index: usize,
        count: usize,
    },

    #[error("quiz is already complete")]
    AlreadyComplete,

    #[error("malformed session: {0}")]
    MalformedSession(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
}

impl QuizEngine {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the session is complete.
    pub fn current_question(&self, session: &QuizSession) -> Option<&QuizQuestion> {
        match session.state() {
            QuizState::InProgress(index) => self.questions.get(index),
            QuizState::Complete => None,
        }
    }

    /// Records `category` for the current question and moves on.
    ///
    /// A complete session is left untouched.
    pub fn answer(&self, session: &mut QuizSession, category: CareerCategory) -> AnswerOutcome {
        if session.is_complete {
            warn!("Answer {category} ignored: quiz already complete");
            return AnswerOutcome::Ignored;
        }

        session.record(category);

        let next_index = session.current_index + 1;
        if next_index < self.question_count() {
            session.current_index = next_index;
            AnswerOutcome::Advanced { next_index }
        } else {
            session.is_complete = true;
            debug!("Quiz complete with {} answers", session.answers.len());
            AnswerOutcome::Completed
        }
    }

    /// Records `category` for the current question without advancing.
    /// Re-answering replaces the previous choice.
    pub fn set_answer(
        &self,
        session: &mut QuizSession,
        category: CareerCategory,
    ) -> Result<(), QuizError> {
        if session.is_complete {
            return Err(QuizError::AlreadyComplete);
        }
        session.record(category);
        Ok(())
    }

    /// Category behind option `option_index` of the current question.
    pub fn option_category(
        &self,
        session: &QuizSession,
        option_index: usize,
    ) -> Result<CareerCategory, QuizError> {
        let question = self
            .current_question(session)
            .ok_or(QuizError::AlreadyComplete)?;
        question
            .options
            .get(option_index)
            .map(|option| option.category)
            .ok_or_else(|| QuizError::OptionOutOfRange {
                question_id: question.id.clone(),
                index: option_index,
                count: question.options.len(),
            })
    }

    /// Answers the current question by option position.
    pub fn answer_option(
        &self,
        session: &mut QuizSession,
        option_index: usize,
    ) -> Result<AnswerOutcome, QuizError> {
        let category = self.option_category(session, option_index)?;
        Ok(self.answer(session, category))
    }

    /// `round(100 * (current_index + complete) / question_count)`.
    pub fn progress_percent(&self, session: &QuizSession) -> u32 {
        let count = self.question_count();
        if count == 0 {
            return 0;
        }
        let done = session.current_index + usize::from(session.is_complete);
        (100.0 * done as f64 / count as f64).round() as u32
    }

    /// Rejects sessions that could not have been produced by this engine.
    pub fn validate_session(&self, session: &QuizSession) -> Result<(), QuizError> {
        let count = self.question_count();
        let idx = session.current_index;
        let answered = session.answers.len();

        if session.is_complete {
            if count > 0 && (idx + 1 != count || answered != count) {
                return Err(QuizError::MalformedSession(format!(
                    "complete session must sit on question {} with {count} answers",
                    count - 1
                )));
            }
            return Ok(());
        }

        if idx >= count {
            return Err(QuizError::MalformedSession(format!(
                "current_index {idx} out of range for {count} questions"
            )));
        }
        if answered < idx || answered > idx + 1 {
            return Err(QuizError::MalformedSession(format!(
                "{answered} answers recorded at question {idx}"
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    pub category: CareerCategory,
    pub count: usize,
}

/// Recommendation output returned once a quiz is finished.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationReport {
    pub tally: Vec<CategoryScore>,
    pub top_categories: Vec<CareerCategory>,
    pub careers: Vec<CareerRecord>,
}

/// Answer count per category, in enumeration order, zeros included.
pub fn tally(session: &QuizSession) -> Vec<CategoryScore> {
    let mut counts = [0usize; CareerCategory::ALL.len()];
    for category in &session.answers {
        counts[category.ordinal()] += 1;
    }
    CareerCategory::ALL
        .iter()
        .zip(counts)
        .map(|(&category, count)| CategoryScore { category, count })
        .collect()
}

/// Up to `TOP_CATEGORY_LIMIT` categories by descending count.
///
/// Zero counts are dropped. The sort is stable over enumeration order, so
/// ties resolve to the earlier category.
pub fn rank_categories(session: &QuizSession) -> Vec<CareerCategory> {
    let mut scores: Vec<_> = tally(session).into_iter().filter(|s| s.count > 0).collect();
    scores.sort_by(|a, b| b.count.cmp(&a.count));
    scores
        .into_iter()
        .take(TOP_CATEGORY_LIMIT)
        .map(|s| s.category)
        .collect()
}

/// Careers in the top-ranked categories, catalog order preserved.
/// Empty until the session is complete.
pub fn recommend(catalog: &[CareerRecord], session: &QuizSession) -> Vec<CareerRecord> {
    if !session.is_complete {
        return Vec::new();
    }
    let top = rank_categories(session);
    catalog
        .iter()
        .filter(|career| top.contains(&career.category))
        .cloned()
        .collect()
}

pub fn build_report(catalog: &[CareerRecord], session: &QuizSession) -> RecommendationReport {
    let top_categories = if session.is_complete {
        rank_categories(session)
    } else {
        Vec::new()
    };
    RecommendationReport {
        tally: tally(session),
        top_categories,
        careers: recommend(catalog, session),
    }
}
