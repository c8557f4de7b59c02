//! Benchmark suite for tuvung-engine
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tuvung_engine::{DrillMode, DrillSession, VocabItem};

fn bench_quiz_session_start(c: &mut Criterion) {
    let items: Vec<VocabItem> = (0..50)
        .map(|i| VocabItem::new(format!("word{i}"), format!("meaning {i}")))
        .collect();

    c.bench_function("DrillSession::start quiz/50", |b| {
        b.iter(|| {
            DrillSession::start(
                items.clone(),
                DrillMode::Quiz,
                ChaCha8Rng::seed_from_u64(7),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_quiz_session_start);
criterion_main!(benches);
