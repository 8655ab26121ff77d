// SPDX-License-Identifier: MIT

//! Feedback recording and evaluation aggregation.
//!
//! Feedback rows are append-only and must reference a recommendation
//! owned by the submitting user. Summary statistics are recomputed on
//! every read over the full feedback history, so they stay consistent
//! with the underlying rows regardless of write order or partial
//! failures. "No data yet" is a valid state and yields numeric zeros.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::Feedback;

/// New feedback submitted against a recommendation.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub recommendation_id: String,
    pub exercise_id: Option<String>,
    pub completed: bool,
    pub rating: i64,
    pub notes: String,
}

/// Cumulative evaluation summary for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    pub total_logs: u32,
    /// Percent of feedback rows marked completed, rounded
    pub completion_rate: u32,
    /// Mean rating rounded to 2 decimals
    pub average_rating: f64,
}

/// Compute the summary over all of a user's feedback rows.
pub fn summarize(rows: &[Feedback]) -> EvaluationSummary {
    let total_logs = rows.len() as u32;
    if total_logs == 0 {
        return EvaluationSummary {
            total_logs: 0,
            completion_rate: 0,
            average_rating: 0.0,
        };
    }

    let completed = rows.iter().filter(|r| r.completed).count() as f64;
    let completion_rate = (completed / f64::from(total_logs) * 100.0).round() as u32;

    let mean = rows.iter().map(|r| r.rating as f64).sum::<f64>() / f64::from(total_logs);
    let average_rating = (mean * 100.0).round() / 100.0;

    EvaluationSummary {
        total_logs,
        completion_rate,
        average_rating,
    }
}

/// Records feedback and serves evaluation summaries.
#[derive(Clone)]
pub struct EvaluationService {
    db: FirestoreDb,
}

impl EvaluationService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Record feedback for a recommendation.
    ///
    /// Rejects ratings outside 1..=5 and recommendations not owned by
    /// the submitting user. The recommendation's condition and
    /// algorithm version are copied onto the row for later evaluation
    /// queries.
    pub async fn record_feedback(&self, user_id: &str, input: NewFeedback) -> Result<Feedback> {
        if !(1..=5).contains(&input.rating) {
            return Err(AppError::Validation(
                "rating must be an integer between 1 and 5".to_string(),
            ));
        }

        let recommendation = self
            .db
            .get_recommendation(user_id, &input.recommendation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Recommendation not found for this user".to_string())
            })?;

        let feedback = Feedback {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            recommendation_id: input.recommendation_id,
            exercise_id: input.exercise_id,
            completed: input.completed,
            rating: input.rating,
            notes: input.notes,
            condition: recommendation.condition,
            algorithm_version: recommendation.algorithm_version,
            created_at: Utc::now(),
        };

        self.db.create_feedback(&feedback).await?;

        tracing::info!(
            user_id,
            recommendation_id = %feedback.recommendation_id,
            rating = feedback.rating,
            completed = feedback.completed,
            "Feedback recorded"
        );

        Ok(feedback)
    }

    /// Cumulative summary over all of the user's feedback.
    pub async fn summary(&self, user_id: &str) -> Result<EvaluationSummary> {
        let rows = self.db.get_feedback_for_user(user_id).await?;
        Ok(summarize(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::Condition;

    fn row(completed: bool, rating: i64) -> Feedback {
        Feedback {
            id: Uuid::new_v4().to_string(),
            user_id: "alice".to_string(),
            recommendation_id: "rec-1".to_string(),
            exercise_id: None,
            completed,
            rating,
            notes: String::new(),
            condition: Condition::Personalised,
            algorithm_version: "rule-based-v1".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_with_no_rows_is_all_zeros() {
        assert_eq!(
            summarize(&[]),
            EvaluationSummary {
                total_logs: 0,
                completion_rate: 0,
                average_rating: 0.0,
            }
        );
    }

    #[test]
    fn test_summary_half_completed() {
        let rows = vec![row(true, 5), row(false, 3)];
        assert_eq!(
            summarize(&rows),
            EvaluationSummary {
                total_logs: 2,
                completion_rate: 50,
                average_rating: 4.0,
            }
        );
    }

    #[test]
    fn test_average_rating_rounds_to_two_decimals() {
        let rows = vec![row(true, 5), row(true, 4), row(false, 4)];
        let summary = summarize(&rows);

        assert_eq!(summary.total_logs, 3);
        // 2/3 -> 66.66..% rounds to 67
        assert_eq!(summary.completion_rate, 67);
        // 13/3 = 4.333.. rounds to 4.33
        assert_eq!(summary.average_rating, 4.33);
    }
}
