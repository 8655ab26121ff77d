// SPDX-License-Identifier: MIT

//! Workout log model and aggregate metrics.
//!
//! A workout log records whether a user actually performed a
//! recommended workout. At most one log exists per (user,
//! recommendation) pair; the document ID encodes both so the store
//! rejects duplicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workout log entry stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Document ID (`{user_id}_{recommendation_id}`)
    pub id: String,
    pub user_id: String,
    pub recommendation_id: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutLog {
    /// Compose the document ID enforcing one log per recommendation.
    pub fn document_id(user_id: &str, recommendation_id: &str) -> String {
        format!("{}_{}", user_id, recommendation_id)
    }
}

/// Aggregate metrics over a user's workout logs, recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    pub total_logs: u32,
    pub completed_logs: u32,
    /// Fraction of logs completed, 0.0 when there are no logs
    pub completion_rate: f64,
    /// Mean of the rated logs; absent when nothing is rated
    pub avg_rating: Option<f64>,
    pub rating_count: u32,
}

impl WorkoutMetrics {
    pub fn from_logs(logs: &[WorkoutLog]) -> Self {
        let total_logs = logs.len() as u32;
        let completed_logs = logs.iter().filter(|l| l.completed).count() as u32;

        let ratings: Vec<i64> = logs.iter().filter_map(|l| l.rating).collect();
        let rating_count = ratings.len() as u32;
        let avg_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<i64>() as f64 / ratings.len() as f64)
        };

        let completion_rate = if total_logs == 0 {
            0.0
        } else {
            f64::from(completed_logs) / f64::from(total_logs)
        };

        Self {
            total_logs,
            completed_logs,
            completion_rate,
            avg_rating,
            rating_count,
        }
    }
}
