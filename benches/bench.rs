// Criterion benchmarks for Wander Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wander_algo::core::{score_dimension, Matcher};
use wander_algo::models::{AdventureType, CandidateProfile, TraitDimension, TraitProfile};

fn create_profile(seed: usize) -> TraitProfile {
    TraitProfile {
        social: (seed % 101) as f64,
        adventure: ((seed * 7) % 101) as f64,
        planning: ((seed * 13) % 101) as f64,
        risk: ((seed * 31) % 101) as f64,
    }
}

fn create_candidate(id: usize) -> CandidateProfile {
    CandidateProfile {
        user_id: id.to_string(),
        traits: create_profile(id),
    }
}

fn bench_score_dimension(c: &mut Criterion) {
    c.bench_function("score_dimension_social", |b| {
        b.iter(|| {
            score_dimension(
                black_box(TraitDimension::Social),
                black_box(20.0),
                black_box(80.0),
                None,
            )
        });
    });

    c.bench_function("score_dimension_risk_weighted", |b| {
        b.iter(|| {
            score_dimension(
                black_box(TraitDimension::Risk),
                black_box(80.0),
                black_box(85.0),
                black_box(Some(AdventureType::ExtremeSports)),
            )
        });
    });
}

fn bench_compare(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let a = create_profile(3);
    let b_profile = create_profile(57);

    c.bench_function("compare_profiles", |b| {
        b.iter(|| {
            matcher.compare(
                black_box(&a),
                black_box(&b_profile),
                black_box(Some(AdventureType::BudgetBackpacking)),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile(42);

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<CandidateProfile> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_companions", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_companions(
                        black_box(&profile),
                        black_box(candidates.clone()),
                        black_box(Some(AdventureType::ExtremeSports)),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_dimension, bench_compare, bench_matching);

criterion_main!(benches);
