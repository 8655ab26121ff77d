// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod exercise;
pub mod feedback;
pub mod profile;
pub mod recommendation;
pub mod workout_log;

pub use exercise::{Difficulty, Exercise};
pub use feedback::Feedback;
pub use profile::{Equipment, FitnessLevel, Goal, Profile};
pub use recommendation::{
    BaselineWorkout, Condition, PersonalisedWorkout, Recommendation, Reps, Workout,
    WorkoutExercise,
};
pub use workout_log::{WorkoutLog, WorkoutMetrics};
