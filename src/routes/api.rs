// SPDX-License-Identifier: MIT

//! API routes for authenticated users.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::recommendation::Condition;
use crate::models::{
    Equipment, Exercise, FitnessLevel, Goal, Profile, Recommendation, Feedback, WorkoutLog,
    WorkoutMetrics,
};
use crate::services::{catalog, EvaluationSummary, NewFeedback};
use crate::AppState;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile).post(upsert_profile))
        .route("/api/exercises", get(get_exercises))
        .route("/api/exercises/seed", post(seed_exercises))
        .route(
            "/api/recommendations/generate",
            post(generate_recommendation),
        )
        .route("/api/recommendations/today", get(todays_picks))
        .route("/api/recommendations/{id}", get(get_recommendation))
        .route("/api/evaluation/feedback", post(submit_feedback))
        .route("/api/feedback/summary", get(feedback_summary))
        .route("/api/workouts/log", post(create_workout_log))
        .route("/api/workouts/logs", get(get_workout_logs))
        .route("/api/workouts/metrics", get(workout_metrics))
}

// ─── Profile ─────────────────────────────────────────────────

/// Get the current user's profile.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Profile>> {
    let profile = state
        .db
        .get_profile(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

/// Profile upsert payload. Optional fields left out keep their stored
/// value instead of being wiped.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    pub fitness_level: Option<FitnessLevel>,
    pub goal: Option<Goal>,
    #[validate(range(min = 1, max = 7, message = "days_per_week must be between 1 and 7"))]
    pub days_per_week: Option<u8>,
    pub equipment: Option<Equipment>,
    #[validate(range(min = 50.0, max = 250.0, message = "height_cm out of range"))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 20.0, max = 300.0, message = "weight_kg out of range"))]
    pub weight_kg: Option<f64>,
    #[validate(length(max = 500, message = "injuries_notes too long"))]
    pub injuries_notes: Option<String>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub profile: Profile,
}

/// Create or update the current user's profile (upsert).
///
/// Answers 201 when the profile was created and 200 when an existing
/// one was replaced. Repeating the same payload is idempotent: the
/// stored document ends up identical, no duplicates.
async fn upsert_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (Some(fitness_level), Some(goal), Some(days_per_week)) =
        (body.fitness_level, body.goal, body.days_per_week)
    else {
        return Err(AppError::Validation(
            "fitness_level, goal, and days_per_week are required".to_string(),
        ));
    };

    if fitness_level == FitnessLevel::Unknown {
        return Err(AppError::Validation(
            "fitness_level must be one of beginner, intermediate, advanced".to_string(),
        ));
    }
    if goal == Goal::Unknown {
        return Err(AppError::Validation(
            "goal must be one of strength, hypertrophy, endurance, fat_loss".to_string(),
        ));
    }

    let existing = state.db.get_profile(&user.user_id).await?;
    let replaced = existing.is_some();

    let profile = Profile {
        user_id: user.user_id.clone(),
        fitness_level,
        goal,
        days_per_week,
        equipment: body
            .equipment
            .or(existing.as_ref().map(|p| p.equipment))
            .unwrap_or_default(),
        height_cm: body.height_cm.or(existing.as_ref().and_then(|p| p.height_cm)),
        weight_kg: body.weight_kg.or(existing.as_ref().and_then(|p| p.weight_kg)),
        injuries_notes: body
            .injuries_notes
            .or(existing.and_then(|p| p.injuries_notes)),
        updated_at: Utc::now().to_rfc3339(),
    };

    state.db.set_profile(&profile).await?;

    let status = if replaced {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((
        status,
        Json(ProfileResponse {
            message: "Profile saved successfully".to_string(),
            profile,
        }),
    ))
}

// ─── Exercise Catalog ────────────────────────────────────────

/// Get all catalog exercises, name-sorted.
async fn get_exercises(
    State(state): State<Arc<AppState>>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<Vec<Exercise>>> {
    Ok(Json(state.db.list_exercises().await?))
}

#[derive(Serialize)]
pub struct SeedResponse {
    pub message: String,
}

/// Seed the sample exercise catalog (idempotent).
async fn seed_exercises(
    State(state): State<Arc<AppState>>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<SeedResponse>> {
    let seeded = state.db.seed_exercises(&catalog::sample_exercises()).await?;

    let message = if seeded {
        "Sample exercises seeded"
    } else {
        "Exercises already seeded"
    };

    Ok(Json(SeedResponse {
        message: message.to_string(),
    }))
}

// ─── Recommendations ─────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    /// Explicit experiment condition; omitted means automatic
    /// alternation against the user's last recommendation.
    #[serde(default)]
    pub condition: Option<Condition>,
}

/// Generate a workout recommendation.
async fn generate_recommendation(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    body: Option<Json<GenerateRequest>>,
) -> Result<(StatusCode, Json<Recommendation>)> {
    let condition_override = body.and_then(|Json(b)| b.condition);

    let mut rng = StdRng::from_entropy();
    let recommendation = state
        .recommendation_service
        .generate_for_user(&user.user_id, condition_override, &mut rng)
        .await?;

    Ok((StatusCode::CREATED, Json(recommendation)))
}

/// Get one recommendation by ID (owner-scoped).
async fn get_recommendation(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Recommendation>> {
    let recommendation = state
        .recommendation_service
        .get_for_user(&user.user_id, &id)
        .await?;
    Ok(Json(recommendation))
}

/// Today's exercise shortlist, driven by the user's feedback history.
async fn todays_picks(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Exercise>>> {
    let picks = state
        .recommendation_service
        .todays_picks_for_user(&user.user_id)
        .await?;
    Ok(Json(picks))
}

// ─── Evaluation Feedback ─────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub recommendation_id: Option<String>,
    pub exercise_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub rating: Option<i64>,
    #[serde(default)]
    pub notes: String,
}

/// Submit feedback against a recommendation.
async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<Feedback>)> {
    let recommendation_id = body
        .recommendation_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("recommendation_id is required".to_string()))?;
    let rating = body
        .rating
        .ok_or_else(|| AppError::Validation("rating is required".to_string()))?;

    let feedback = state
        .evaluation_service
        .record_feedback(
            &user.user_id,
            NewFeedback {
                recommendation_id,
                exercise_id: body.exercise_id,
                completed: body.completed,
                rating,
                notes: body.notes,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Cumulative evaluation summary over all of the user's feedback.
async fn feedback_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<EvaluationSummary>> {
    Ok(Json(state.evaluation_service.summary(&user.user_id).await?))
}

// ─── Workout Logs ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WorkoutLogRequest {
    pub recommendation_id: Option<String>,
    pub completed: Option<bool>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
}

/// Log that a recommended workout was (or was not) performed.
///
/// At most one log per recommendation; a second attempt is a 409.
async fn create_workout_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<WorkoutLogRequest>,
) -> Result<(StatusCode, Json<WorkoutLog>)> {
    let recommendation_id = body
        .recommendation_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("recommendation_id is required".to_string()))?;
    let completed = body
        .completed
        .ok_or_else(|| AppError::Validation("completed must be a boolean".to_string()))?;

    if let Some(rating) = body.rating {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(
                "rating must be an integer between 1 and 5".to_string(),
            ));
        }
    }

    // Ownership check mirrors feedback: logging against someone else's
    // recommendation reads as "not found".
    state
        .recommendation_service
        .get_for_user(&user.user_id, &recommendation_id)
        .await?;

    let log = WorkoutLog {
        id: WorkoutLog::document_id(&user.user_id, &recommendation_id),
        user_id: user.user_id.clone(),
        recommendation_id,
        completed,
        rating: body.rating,
        notes: body.notes,
        created_at: Utc::now(),
    };

    state.db.create_workout_log(&log).await?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// Get the user's workout logs, newest first.
async fn get_workout_logs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<WorkoutLog>>> {
    Ok(Json(state.db.get_workout_logs(&user.user_id).await?))
}

/// Aggregate workout-log metrics, recomputed on read.
async fn workout_metrics(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<WorkoutMetrics>> {
    let logs = state.db.get_workout_logs(&user.user_id).await?;
    Ok(Json(WorkoutMetrics::from_logs(&logs)))
}
