// SPDX-License-Identifier: MIT

//! Rule-based recommendation engine.
//!
//! Turns a fitness profile and the exercise catalog into a workout
//! prescription under one of two experiment conditions:
//!
//! - `baseline`: a fixed, non-personalised template (control)
//! - `personalised`: a rule pipeline applied in strict order -
//!   fitness-level base prescription, goal adjustment, equipment
//!   filter, then random selection
//!
//! The pipeline is pure: inputs are never mutated and the random
//! source is injected so tests can assert exact selection sets.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AppError, Result};
use crate::models::recommendation::{
    BaselineWorkout, Condition, InputsUsed, PersonalisedWorkout, Prescription, Reps, Workout,
    WorkoutExercise,
};
use crate::models::{Equipment, Exercise, FitnessLevel, Goal, Profile};

/// Version stamped onto every recommendation event.
pub const ALGORITHM_VERSION: &str = "rule-based-v1";

/// Number of exercises selected for a personalised workout.
const SELECTION_SIZE: usize = 5;

/// Rule group A: fitness level -> base prescription.
///
/// Beginners get higher reps for learning tolerance; advanced users
/// lower reps at higher volume. Unrecognized stored levels fall back to
/// a safe default rather than failing generation.
pub fn base_prescription(level: FitnessLevel) -> Prescription {
    match level {
        FitnessLevel::Beginner => Prescription { sets: 3, reps: 15 },
        FitnessLevel::Intermediate => Prescription { sets: 4, reps: 10 },
        FitnessLevel::Advanced => Prescription { sets: 5, reps: 6 },
        FitnessLevel::Unknown => Prescription { sets: 3, reps: 10 },
    }
}

/// Rule group B: goal -> prescription adjustment.
///
/// Changes are kept small and interpretable so the two experiment arms
/// stay comparable.
pub fn adjust_for_goal(prescription: Prescription, goal: Goal) -> Prescription {
    let Prescription { mut sets, mut reps } = prescription;

    match goal {
        Goal::Strength => {
            reps = reps.saturating_sub(3).max(4);
            sets = (sets + 1).min(6);
        }
        Goal::Endurance => {
            reps += 5;
            sets = sets.saturating_sub(1).max(2);
        }
        Goal::Hypertrophy => {
            reps = reps.clamp(8, 12);
        }
        Goal::FatLoss | Goal::Unknown => {}
    }

    Prescription { sets, reps }
}

/// Rule group C: equipment -> filter the exercise pool.
///
/// Matching is case-insensitive on the catalog's equipment tag. If the
/// filter leaves nothing, the full pool is returned instead; the engine
/// must never end up with zero candidates while the catalog is
/// non-empty.
pub fn filter_by_equipment<'a>(pool: &'a [Exercise], equipment: Equipment) -> Vec<&'a Exercise> {
    let wanted = equipment.as_str();
    let filtered: Vec<&Exercise> = pool
        .iter()
        .filter(|ex| ex.equipment.trim().eq_ignore_ascii_case(wanted))
        .collect();

    if filtered.is_empty() {
        pool.iter().collect()
    } else {
        filtered
    }
}

fn goal_label(goal: Goal) -> &'static str {
    match goal {
        Goal::Strength => "strength",
        Goal::Hypertrophy => "hypertrophy",
        Goal::Endurance => "endurance",
        Goal::FatLoss => "fat loss",
        Goal::Unknown => "general",
    }
}

/// The fixed control-condition template. Intentionally ignores
/// everything in the profile except training frequency.
fn baseline_workout(profile: &Profile) -> Workout {
    let template = [
        ("Squat", 3, Reps::Count(10)),
        ("Bench Press", 3, Reps::Count(10)),
        ("Row", 3, Reps::Count(12)),
        ("Plank", 3, Reps::Timed("30s".to_string())),
    ];

    Workout::Baseline(BaselineWorkout {
        title: "Baseline Full Body Template".to_string(),
        frequency: profile.days_per_week,
        exercises: template
            .into_iter()
            .map(|(name, sets, reps)| WorkoutExercise {
                exercise_id: None,
                name: name.to_string(),
                sets,
                reps,
                kcal_per_minute: None,
            })
            .collect(),
        notes: "Non-personalised baseline".to_string(),
    })
}

fn personalised_workout(
    profile: &Profile,
    pool: &[Exercise],
    rng: &mut impl Rng,
) -> Workout {
    let prescription = adjust_for_goal(base_prescription(profile.fitness_level), profile.goal);
    let candidates = filter_by_equipment(pool, profile.equipment);

    // Uniform selection without replacement; the whole pool if it is
    // smaller than the target size.
    let selected: Vec<&Exercise> = candidates
        .choose_multiple(rng, SELECTION_SIZE)
        .copied()
        .collect();

    let exercises = selected
        .iter()
        .map(|ex| WorkoutExercise {
            exercise_id: Some(ex.id.clone()),
            name: ex.name.clone(),
            sets: prescription.sets,
            reps: Reps::Count(prescription.reps),
            kcal_per_minute: Some(ex.kcal_per_minute),
        })
        .collect();

    Workout::Personalised(PersonalisedWorkout {
        title: format!("Personalised {} Workout", goal_label(profile.goal)),
        frequency: profile.days_per_week,
        inputs_used: InputsUsed {
            fitness_level: profile.fitness_level,
            goal: profile.goal,
            days_per_week: profile.days_per_week,
            equipment: profile.equipment,
        },
        prescription,
        exercises,
        notes: "Rule-based algorithm v1 (fitness level + goal + equipment filter)".to_string(),
    })
}

/// Generate a workout for the given condition.
///
/// Fails only on an empty catalog; a profile with dirty enum values
/// still produces a workout via the fallback rules.
pub fn generate(
    profile: &Profile,
    pool: &[Exercise],
    condition: Condition,
    rng: &mut impl Rng,
) -> Result<Workout> {
    if pool.is_empty() {
        return Err(AppError::Validation(
            "No exercises available. Seed the catalog first.".to_string(),
        ));
    }

    let workout = match condition {
        Condition::Baseline => baseline_workout(profile),
        Condition::Personalised => personalised_workout(profile, pool, rng),
    };

    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn exercise(id: &str, name: &str, equipment: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: name.to_string(),
            kcal_per_minute: 8.0,
            muscle_group: "full_body".to_string(),
            equipment: equipment.to_string(),
            difficulty: crate::models::Difficulty::Beginner,
        }
    }

    fn profile(level: FitnessLevel, goal: Goal, equipment: Equipment) -> Profile {
        Profile {
            user_id: "alice".to_string(),
            fitness_level: level,
            goal,
            days_per_week: 4,
            equipment,
            height_cm: None,
            weight_kg: None,
            injuries_notes: None,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_base_prescription_per_level() {
        assert_eq!(
            base_prescription(FitnessLevel::Beginner),
            Prescription { sets: 3, reps: 15 }
        );
        assert_eq!(
            base_prescription(FitnessLevel::Intermediate),
            Prescription { sets: 4, reps: 10 }
        );
        assert_eq!(
            base_prescription(FitnessLevel::Advanced),
            Prescription { sets: 5, reps: 6 }
        );
    }

    #[test]
    fn test_unknown_level_falls_back() {
        assert_eq!(
            base_prescription(FitnessLevel::Unknown),
            Prescription { sets: 3, reps: 10 }
        );
    }

    #[test]
    fn test_beginner_strength_prescription() {
        // beginner base (3, 15), strength: reps = max(4, 15-3), sets = min(6, 3+1)
        let p = adjust_for_goal(base_prescription(FitnessLevel::Beginner), Goal::Strength);
        assert_eq!(p, Prescription { sets: 4, reps: 12 });
    }

    #[test]
    fn test_strength_floor_and_cap() {
        // advanced base (5, 6): reps floors at 4, sets caps at 6
        let p = adjust_for_goal(base_prescription(FitnessLevel::Advanced), Goal::Strength);
        assert_eq!(p, Prescription { sets: 6, reps: 4 });
    }

    #[test]
    fn test_endurance_adjustment() {
        let p = adjust_for_goal(base_prescription(FitnessLevel::Intermediate), Goal::Endurance);
        assert_eq!(p, Prescription { sets: 3, reps: 15 });
    }

    #[test]
    fn test_hypertrophy_clamps_reps() {
        // beginner reps 15 clamps down to 12
        let beginner = adjust_for_goal(base_prescription(FitnessLevel::Beginner), Goal::Hypertrophy);
        assert_eq!(beginner.reps, 12);

        // advanced reps 6 clamps up to 8
        let advanced = adjust_for_goal(base_prescription(FitnessLevel::Advanced), Goal::Hypertrophy);
        assert_eq!(advanced.reps, 8);
    }

    #[test]
    fn test_fat_loss_leaves_prescription_unchanged() {
        let p = adjust_for_goal(base_prescription(FitnessLevel::Intermediate), Goal::FatLoss);
        assert_eq!(p, Prescription { sets: 4, reps: 10 });
    }

    #[test]
    fn test_equipment_filter_is_case_insensitive() {
        let pool = vec![
            exercise("1", "Squats", "GYM"),
            exercise("2", "Push-ups", "calisthenics"),
        ];

        let filtered = filter_by_equipment(&pool, Equipment::Gym);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Squats");
    }

    #[test]
    fn test_equipment_filter_falls_back_to_full_pool() {
        let pool = vec![
            exercise("1", "Squats", "gym"),
            exercise("2", "Bench Press", "gym"),
        ];

        // Nothing is tagged "mixed"; the filter must not produce zero
        // candidates while the catalog is non-empty.
        let filtered = filter_by_equipment(&pool, Equipment::Mixed);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_personalised_selects_five_with_annotations() {
        let pool: Vec<Exercise> = (0..8)
            .map(|i| exercise(&i.to_string(), &format!("Exercise {}", i), "home"))
            .collect();
        let profile = profile(FitnessLevel::Beginner, Goal::Strength, Equipment::Home);
        let mut rng = StdRng::seed_from_u64(7);

        let workout = generate(&profile, &pool, Condition::Personalised, &mut rng).unwrap();

        let Workout::Personalised(w) = workout else {
            panic!("expected personalised workout");
        };
        assert_eq!(w.exercises.len(), 5);
        assert_eq!(w.prescription, Prescription { sets: 4, reps: 12 });
        assert_eq!(w.frequency, 4);
        for ex in &w.exercises {
            assert_eq!(ex.sets, 4);
            assert_eq!(ex.reps, Reps::Count(12));
            assert!(ex.exercise_id.is_some());
            assert_eq!(ex.kcal_per_minute, Some(8.0));
        }
    }

    #[test]
    fn test_small_pool_returns_everything() {
        let pool = vec![exercise("1", "Squats", "gym"), exercise("2", "Row", "gym")];
        let profile = profile(FitnessLevel::Intermediate, Goal::FatLoss, Equipment::Gym);
        let mut rng = StdRng::seed_from_u64(0);

        let workout = generate(&profile, &pool, Condition::Personalised, &mut rng).unwrap();
        assert_eq!(workout.exercises().len(), 2);
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let pool: Vec<Exercise> = (0..20)
            .map(|i| exercise(&i.to_string(), &format!("Exercise {}", i), "gym"))
            .collect();
        let profile = profile(FitnessLevel::Advanced, Goal::Endurance, Equipment::Gym);

        let names = |seed: u64| -> Vec<String> {
            let mut rng = StdRng::seed_from_u64(seed);
            generate(&profile, &pool, Condition::Personalised, &mut rng)
                .unwrap()
                .exercises()
                .iter()
                .map(|e| e.name.clone())
                .collect()
        };

        assert_eq!(names(42), names(42));
    }

    #[test]
    fn test_baseline_ignores_profile_details() {
        let profile = profile(FitnessLevel::Advanced, Goal::Strength, Equipment::Gym);
        let pool = vec![exercise("1", "Squats", "gym")];
        let mut rng = StdRng::seed_from_u64(0);

        let workout = generate(&profile, &pool, Condition::Baseline, &mut rng).unwrap();

        let Workout::Baseline(w) = workout else {
            panic!("expected baseline workout");
        };
        assert_eq!(w.title, "Baseline Full Body Template");
        assert_eq!(w.exercises.len(), 4);
        assert_eq!(w.frequency, 4);
        assert_eq!(w.exercises[3].reps, Reps::Timed("30s".to_string()));
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let profile = profile(FitnessLevel::Beginner, Goal::Strength, Equipment::Gym);
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate(&profile, &[], Condition::Personalised, &mut rng).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
