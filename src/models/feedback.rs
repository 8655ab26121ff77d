// SPDX-License-Identifier: MIT

//! Feedback model.
//!
//! A feedback row ties a user's post-hoc rating/completion report to a
//! specific recommendation event. The condition and algorithm version
//! are denormalised from the recommendation at write time so evaluation
//! queries never need a join.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::recommendation::Condition;

/// A feedback row stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    /// Document ID
    pub id: String,
    pub user_id: String,
    /// Must resolve to a recommendation owned by the same user
    pub recommendation_id: String,
    /// Optional per-exercise granularity (drives the today's-pick
    /// selector)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Integer 1..=5
    pub rating: i64,
    #[serde(default)]
    pub notes: String,
    pub condition: Condition,
    pub algorithm_version: String,
    pub created_at: DateTime<Utc>,
}
