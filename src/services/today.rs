// SPDX-License-Identifier: MIT

//! Today's-pick selector.
//!
//! A secondary, feedback-driven shortlist used when no recommendation
//! context exists. It is deliberately simpler than the engine and
//! independent of it: no profile, no experiment condition, just the
//! user's rating history against the name-sorted catalog.

use std::collections::HashSet;

use crate::models::{Exercise, Feedback};

/// Ratings at or above this mark an exercise as liked.
const GOOD_RATING: i64 = 4;
/// Ratings at or below this mark an exercise as disliked.
const BAD_RATING: i64 = 2;

/// Number of exercises returned.
const PICK_COUNT: usize = 5;
/// Liked results below this count are padded with neutral exercises.
const FILL_THRESHOLD: usize = 3;

/// Select today's exercises for a user.
///
/// Preference order: liked exercises first, then neutral ones (never
/// rated, or rated in the middle) in catalog order. Disliked exercises
/// are only returned when the catalog offers nothing else. With no
/// feedback history at all, the first `PICK_COUNT` catalog entries are
/// returned as-is.
///
/// `catalog` is expected in its natural name-sorted order.
pub fn todays_picks(catalog: &[Exercise], feedback: &[Feedback]) -> Vec<Exercise> {
    if feedback.is_empty() {
        return catalog.iter().take(PICK_COUNT).cloned().collect();
    }

    let good: HashSet<&str> = feedback
        .iter()
        .filter(|f| f.rating >= GOOD_RATING)
        .filter_map(|f| f.exercise_id.as_deref())
        .collect();
    let bad: HashSet<&str> = feedback
        .iter()
        .filter(|f| f.rating <= BAD_RATING)
        .filter_map(|f| f.exercise_id.as_deref())
        .collect();

    let mut picks: Vec<&Exercise> = catalog
        .iter()
        .filter(|ex| good.contains(ex.id.as_str()))
        .collect();

    if picks.len() < FILL_THRESHOLD {
        picks.extend(
            catalog
                .iter()
                .filter(|ex| !good.contains(ex.id.as_str()) && !bad.contains(ex.id.as_str())),
        );
    }

    // Everything is disliked: better to suggest something than nothing.
    if picks.is_empty() {
        picks = catalog.iter().collect();
    }

    picks.into_iter().take(PICK_COUNT).cloned().collect()
}
