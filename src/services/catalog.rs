// SPDX-License-Identifier: MIT

//! Built-in exercise catalog used for idempotent seeding.

use uuid::Uuid;

use crate::models::{Difficulty, Exercise};

/// The sample catalog written by `POST /api/exercises/seed`.
///
/// Covers every equipment tag so the personalised equipment filter has
/// real matches for each profile setting.
pub fn sample_exercises() -> Vec<Exercise> {
    let rows: [(&str, f64, &str, &str, Difficulty); 12] = [
        ("Running (moderate)", 10.0, "legs", "home", Difficulty::Beginner),
        ("Cycling (easy)", 7.0, "legs", "home", Difficulty::Beginner),
        ("Push-ups", 8.0, "chest", "calisthenics", Difficulty::Beginner),
        ("Pull-ups", 9.0, "back", "calisthenics", Difficulty::Intermediate),
        ("Squats", 6.0, "legs", "calisthenics", Difficulty::Beginner),
        ("Barbell Back Squat", 8.5, "legs", "gym", Difficulty::Intermediate),
        ("Bench Press", 7.5, "chest", "gym", Difficulty::Intermediate),
        ("Deadlift", 9.5, "back", "gym", Difficulty::Advanced),
        ("Overhead Press", 7.0, "shoulders", "gym", Difficulty::Intermediate),
        ("Lat Pulldown", 6.5, "back", "gym", Difficulty::Beginner),
        ("Dumbbell Lunges", 7.0, "legs", "home", Difficulty::Beginner),
        ("Plank", 4.0, "core", "calisthenics", Difficulty::Beginner),
    ];

    rows.into_iter()
        .map(|(name, kcal_per_minute, muscle_group, equipment, difficulty)| Exercise {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            kcal_per_minute,
            muscle_group: muscle_group.to_string(),
            equipment: equipment.to_string(),
            difficulty,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_covers_all_equipment_tags() {
        let catalog = sample_exercises();
        for tag in ["gym", "home", "calisthenics"] {
            assert!(
                catalog.iter().any(|ex| ex.equipment == tag),
                "no exercise tagged {}",
                tag
            );
        }
    }

    #[test]
    fn test_sample_catalog_ids_are_unique() {
        let catalog = sample_exercises();
        let mut ids: Vec<&str> = catalog.iter().map(|ex| ex.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
