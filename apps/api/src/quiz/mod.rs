// Career quiz: linear question wizard with tally-based recommendations.

pub mod engine;
pub mod handlers;
