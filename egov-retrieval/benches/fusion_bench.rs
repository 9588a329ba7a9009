use criterion::{black_box, criterion_group, criterion_main, Criterion};

use egov_core::models::CandidateId;
use egov_retrieval::search::fusion;

fn bench_fusion(c: &mut Criterion) {
    let ids: Vec<CandidateId> = (0..250).map(CandidateId::from).collect();
    let vector_scores: Vec<f32> = (0..250).map(|i| (i as f32 * 0.37).sin().abs()).collect();
    let lexical_scores: Vec<f32> = (0..250).map(|i| (i as f32 * 0.73).cos().abs()).collect();

    c.bench_function("fuse_250_candidates", |b| {
        b.iter(|| {
            fusion::fuse(
                black_box(&ids),
                black_box(&vector_scores),
                black_box(&lexical_scores),
                0.7,
                0.3,
            )
        })
    });

    c.bench_function("min_max_normalize_250", |b| {
        b.iter(|| fusion::min_max_normalize(black_box(&vector_scores)))
    });
}

criterion_group!(benches, bench_fusion);
criterion_main!(benches);
