// SPDX-License-Identifier: MIT

//! Gymrec: personalised gym-workout recommendation API
//!
//! This crate provides the backend API for generating workout
//! recommendations from a stored fitness profile and an exercise
//! catalog, and for aggregating the user feedback used to evaluate
//! recommendation quality over time.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{EvaluationService, RecommendationService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub recommendation_service: RecommendationService,
    pub evaluation_service: EvaluationService,
}
