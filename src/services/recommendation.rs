// SPDX-License-Identifier: MIT

//! Recommendation workflow service.
//!
//! Orchestrates one generation request: pick the experiment condition,
//! read the profile and catalog, run the engine, and append the result
//! to the recommendation log as an immutable event.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::recommendation::Condition;
use crate::models::{Exercise, Recommendation};
use crate::services::{engine, today};

#[derive(Clone)]
pub struct RecommendationService {
    db: FirestoreDb,
}

impl RecommendationService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Generate and persist a recommendation for a user.
    ///
    /// When no explicit condition is supplied, the condition alternates
    /// against the user's most recent recommendation. The read is not
    /// isolated from concurrent generates, so two simultaneous requests
    /// can land on the same arm; that only skews statistical balance,
    /// not correctness, and is accepted.
    pub async fn generate_for_user(
        &self,
        user_id: &str,
        condition_override: Option<Condition>,
        rng: &mut (impl Rng + Send),
    ) -> Result<Recommendation> {
        let condition = match condition_override {
            Some(condition) => condition,
            None => {
                let last = self.db.latest_recommendation(user_id).await?;
                Condition::next_after(last.map(|r| r.condition))
            }
        };

        let profile = self.db.get_profile(user_id).await?.ok_or_else(|| {
            AppError::NotFound("Profile not found. Create /api/profile first.".to_string())
        })?;

        let pool = self.db.list_exercises().await?;
        let workout = engine::generate(&profile, &pool, condition, rng)?;

        let recommendation = Recommendation {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            condition,
            algorithm_version: engine::ALGORITHM_VERSION.to_string(),
            workout,
            created_at: Utc::now(),
        };

        self.db.create_recommendation(&recommendation).await?;

        tracing::info!(
            user_id,
            recommendation_id = %recommendation.id,
            condition = ?condition,
            exercises = recommendation.workout.exercises().len(),
            "Recommendation generated"
        );

        Ok(recommendation)
    }

    /// Fetch a recommendation by ID, scoped to its owner.
    pub async fn get_for_user(&self, user_id: &str, id: &str) -> Result<Recommendation> {
        self.db
            .get_recommendation(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recommendation not found for this user".to_string()))
    }

    /// Feedback-driven shortlist for users without a recommendation
    /// context. Delegates to the today's-pick selector, which is
    /// independent of the engine.
    pub async fn todays_picks_for_user(&self, user_id: &str) -> Result<Vec<Exercise>> {
        let catalog = self.db.list_exercises().await?;
        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let feedback = self.db.get_feedback_for_user(user_id).await?;
        Ok(today::todays_picks(&catalog, &feedback))
    }
}
