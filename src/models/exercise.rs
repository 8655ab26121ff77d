// SPDX-License-Identifier: MIT

//! Exercise catalog model.
//!
//! Exercises are read-only reference data: seeded once, never mutated
//! by the recommendation engine.

use serde::{Deserialize, Serialize};

/// Difficulty rating of a catalog exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A catalog exercise stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Document ID
    pub id: String,
    pub name: String,
    /// Estimated calorie burn rate
    pub kcal_per_minute: f64,
    /// Primary muscle group (free-form tag, e.g. "legs", "back")
    pub muscle_group: String,
    /// Equipment tag matched against the profile's equipment setting
    pub equipment: String,
    pub difficulty: Difficulty,
}
