// SPDX-License-Identifier: MIT

//! Recommendation event model.
//!
//! A recommendation is an immutable event: it is created once when the
//! engine generates a workout and never updated, only superseded by a
//! newer event. All feedback references a recommendation, making it the
//! unit of evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::profile::{Equipment, FitnessLevel, Goal};

/// Experiment arm assigned per recommendation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Fixed non-personalised template (control)
    Baseline,
    /// Rule-derived plan
    Personalised,
}

impl Condition {
    /// Pick the condition for the next recommendation.
    ///
    /// Alternates against the user's most recent recommendation so each
    /// user sees both experiment arms across sessions without client
    /// coordination. First-ever recommendation is personalised.
    pub fn next_after(last: Option<Condition>) -> Condition {
        match last {
            Some(Condition::Baseline) => Condition::Personalised,
            Some(Condition::Personalised) => Condition::Baseline,
            None => Condition::Personalised,
        }
    }
}

/// Rep scheme for one workout exercise. Most exercises prescribe a
/// count; timed holds (e.g. planks) carry a duration string like "30s".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Timed(String),
}

/// One exercise row within a generated workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Catalog exercise ID; absent for baseline template entries which
    /// are not drawn from the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    pub name: String,
    pub sets: u32,
    pub reps: Reps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kcal_per_minute: Option<f64>,
}

/// Sets/reps prescription computed by the rule pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub sets: u32,
    pub reps: u32,
}

/// Profile inputs the personalised branch actually used, recorded on
/// the event for later evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputsUsed {
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    pub days_per_week: u8,
    pub equipment: Equipment,
}

/// Fixed non-personalised workout (control condition).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineWorkout {
    pub title: String,
    /// Days per week, echoed from the profile
    pub frequency: u8,
    pub exercises: Vec<WorkoutExercise>,
    pub notes: String,
}

/// Rule-derived workout (treatment condition).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalisedWorkout {
    pub title: String,
    pub frequency: u8,
    pub inputs_used: InputsUsed,
    pub prescription: Prescription,
    pub exercises: Vec<WorkoutExercise>,
    pub notes: String,
}

/// A generated workout, tagged by the branch that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Workout {
    Baseline(BaselineWorkout),
    Personalised(PersonalisedWorkout),
}

impl Workout {
    pub fn exercises(&self) -> &[WorkoutExercise] {
        match self {
            Workout::Baseline(w) => &w.exercises,
            Workout::Personalised(w) => &w.exercises,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Workout::Baseline(w) => &w.title,
            Workout::Personalised(w) => &w.title,
        }
    }
}

/// A recommendation event stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Document ID
    pub id: String,
    pub user_id: String,
    pub condition: Condition,
    pub algorithm_version: String,
    pub workout: Workout,
    pub created_at: DateTime<Utc>,
}
