// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod catalog;
pub mod engine;
pub mod evaluation;
pub mod recommendation;
pub mod today;

pub use evaluation::{EvaluationService, EvaluationSummary, NewFeedback};
pub use recommendation::RecommendationService;
