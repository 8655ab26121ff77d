// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (one document per user, keyed by user ID)
//! - Exercises (read-only catalog)
//! - Recommendations (append-only event log)
//! - Feedback (append-only evaluation rows)
//! - Workout logs (one per user/recommendation pair)

use futures_util::{stream, StreamExt};

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Exercise, Feedback, Profile, Recommendation, WorkoutLog};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Transient(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Transient(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Transient("Database not connected (offline mode)".to_string()))
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Get a user's fitness profile.
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PROFILES)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Transient(e.to_string()))
    }

    /// Create or replace a user's profile.
    ///
    /// The document is keyed by user ID, which is the store's
    /// uniqueness constraint: concurrent upserts for the same user
    /// cannot create duplicates, the last writer wins.
    pub async fn set_profile(&self, profile: &Profile) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::PROFILES)
            .document_id(&profile.user_id)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;
        Ok(())
    }

    // ─── Exercise Catalog Operations ─────────────────────────────

    /// Get the full exercise catalog in its natural name-sorted order.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .order_by([("name", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))
    }

    /// Seed the exercise catalog if it is empty.
    ///
    /// Returns `false` without writing when any exercise already
    /// exists, so repeated seeding is harmless.
    pub async fn seed_exercises(&self, exercises: &[Exercise]) -> Result<bool, AppError> {
        let client = self.get_client()?;

        let existing: Vec<Exercise> = client
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;

        if !existing.is_empty() {
            return Ok(false);
        }

        stream::iter(exercises.to_vec())
            .map(|exercise| async move {
                let _created: Exercise = client
                    .fluent()
                    .insert()
                    .into(collections::EXERCISES)
                    .document_id(&exercise.id)
                    .object(&exercise)
                    .execute()
                    .await
                    .map_err(|e| AppError::Transient(e.to_string()))?;

                Ok::<_, AppError>(())
            })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<(), AppError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, AppError>>()?;

        tracing::info!(count = exercises.len(), "Exercise catalog seeded");

        Ok(true)
    }

    // ─── Recommendation Operations ───────────────────────────────

    /// Append a recommendation event. There is no update or delete:
    /// recommendations are immutable once written.
    pub async fn create_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<(), AppError> {
        let _created: Recommendation = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::RECOMMENDATIONS)
            .document_id(&recommendation.id)
            .object(recommendation)
            .execute()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;
        Ok(())
    }

    /// Get a recommendation by ID, scoped to its owner.
    ///
    /// A recommendation owned by a different user is reported as
    /// absent, never returned.
    pub async fn get_recommendation(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Recommendation>, AppError> {
        let found: Option<Recommendation> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::RECOMMENDATIONS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;

        Ok(found.filter(|r| r.user_id == user_id))
    }

    /// Get a user's most recent recommendation, if any.
    pub async fn latest_recommendation(
        &self,
        user_id: &str,
    ) -> Result<Option<Recommendation>, AppError> {
        let user_id = user_id.to_string();
        let mut results: Vec<Recommendation> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::RECOMMENDATIONS)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([(
                "created_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;

        Ok(results.pop())
    }

    // ─── Feedback Operations ─────────────────────────────────────

    /// Append a feedback row.
    pub async fn create_feedback(&self, feedback: &Feedback) -> Result<(), AppError> {
        let _created: Feedback = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::FEEDBACK)
            .document_id(&feedback.id)
            .object(feedback)
            .execute()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;
        Ok(())
    }

    /// Get all feedback rows for a user, newest first.
    pub async fn get_feedback_for_user(&self, user_id: &str) -> Result<Vec<Feedback>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::FEEDBACK)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([(
                "created_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))
    }

    // ─── Workout Log Operations ──────────────────────────────────

    /// Create a workout log entry.
    ///
    /// The document ID encodes (user, recommendation), so a second log
    /// for the same recommendation is a conflict.
    pub async fn create_workout_log(&self, log: &WorkoutLog) -> Result<(), AppError> {
        let client = self.get_client()?;

        let existing: Option<WorkoutLog> = client
            .fluent()
            .select()
            .by_id_in(collections::WORKOUT_LOGS)
            .obj()
            .one(&log.id)
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;

        if existing.is_some() {
            return Err(AppError::Conflict(
                "Already logged for this recommendation".to_string(),
            ));
        }

        let _created: WorkoutLog = client
            .fluent()
            .insert()
            .into(collections::WORKOUT_LOGS)
            .document_id(&log.id)
            .object(log)
            .execute()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))?;
        Ok(())
    }

    /// Get all workout logs for a user, newest first.
    pub async fn get_workout_logs(&self, user_id: &str) -> Result<Vec<WorkoutLog>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUT_LOGS)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([(
                "created_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Transient(e.to_string()))
    }
}
