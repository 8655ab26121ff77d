// SPDX-License-Identifier: MIT

//! Fitness profile model.
//!
//! Exactly one profile exists per user (the document is keyed by
//! `user_id`, so the store itself enforces uniqueness). Profiles are
//! created via upsert: created on first save, overwritten thereafter.

use serde::{Deserialize, Serialize};

/// Self-reported fitness level.
///
/// `Unknown` absorbs dirty or legacy stored values so reads never fail;
/// the engine falls back to a safe default prescription for it. The API
/// rejects it on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(other)]
    Unknown,
}

/// Training goal driving the prescription adjustment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    FatLoss,
    #[serde(other)]
    Unknown,
}

/// Available equipment, matched against catalog exercise tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Gym,
    Home,
    Calisthenics,
    Mixed,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Gym => "gym",
            Equipment::Home => "home",
            Equipment::Calisthenics => "calisthenics",
            Equipment::Mixed => "mixed",
        }
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Equipment::Mixed
    }
}

/// A user's fitness profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user (also used as document ID)
    pub user_id: String,
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    /// Training days per week, 1..=7
    pub days_per_week: u8,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injuries_notes: Option<String>,
    /// Last save timestamp (RFC 3339)
    pub updated_at: String,
}
