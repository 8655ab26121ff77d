// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gymrec::models::recommendation::Condition;
use gymrec::models::{Difficulty, Equipment, Exercise, Feedback, FitnessLevel, Goal, Profile};
use gymrec::services::{engine, today};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn synthetic_catalog(size: usize) -> Vec<Exercise> {
    let equipment = ["gym", "home", "calisthenics"];
    (0..size)
        .map(|i| Exercise {
            id: format!("ex-{}", i),
            name: format!("Exercise {:04}", i),
            kcal_per_minute: 5.0 + (i % 7) as f64,
            muscle_group: "full_body".to_string(),
            equipment: equipment[i % equipment.len()].to_string(),
            difficulty: Difficulty::Intermediate,
        })
        .collect()
}

fn synthetic_feedback(catalog: &[Exercise], rows: usize) -> Vec<Feedback> {
    (0..rows)
        .map(|i| Feedback {
            id: format!("fb-{}", i),
            user_id: "bench-user".to_string(),
            recommendation_id: "rec-1".to_string(),
            exercise_id: Some(catalog[i % catalog.len()].id.clone()),
            completed: i % 2 == 0,
            rating: (i % 5) as i64 + 1,
            notes: String::new(),
            condition: Condition::Personalised,
            algorithm_version: "rule-based-v1".to_string(),
            created_at: chrono::Utc::now(),
        })
        .collect()
}

fn benchmark_engine(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    let profile = Profile {
        user_id: "bench-user".to_string(),
        fitness_level: FitnessLevel::Intermediate,
        goal: Goal::Hypertrophy,
        days_per_week: 4,
        equipment: Equipment::Gym,
        height_cm: None,
        weight_kg: None,
        injuries_notes: None,
        updated_at: chrono::Utc::now().to_rfc3339(),
    };

    let mut group = c.benchmark_group("recommendation");

    group.bench_function("generate_personalised_500", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            engine::generate(
                black_box(&profile),
                black_box(&catalog),
                Condition::Personalised,
                &mut rng,
            )
        })
    });

    group.bench_function("generate_baseline", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            engine::generate(
                black_box(&profile),
                black_box(&catalog),
                Condition::Baseline,
                &mut rng,
            )
        })
    });

    let feedback = synthetic_feedback(&catalog, 200);
    group.bench_function("todays_picks_200_feedback", |b| {
        b.iter(|| today::todays_picks(black_box(&catalog), black_box(&feedback)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_engine);
criterion_main!(benches);
