// SPDX-License-Identifier: MIT

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const PROFILES: &str = "profiles";
    pub const EXERCISES: &str = "exercises";
    pub const RECOMMENDATIONS: &str = "recommendations";
    pub const FEEDBACK: &str = "feedback";
    pub const WORKOUT_LOGS: &str = "workout_logs";
}
