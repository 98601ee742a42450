use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rebound_animation::{Easing, MomentumSolver};

const LOWER_BOUND: f32 = -4_000.0;
const WRAPPER_SIZE: f32 = 800.0;
const RELEASE_SAMPLES: &[usize] = &[64, 1024];

fn releases(count: usize) -> Vec<(f32, f32)> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let velocity = (t - 0.5) * 6.0;
            let position = LOWER_BOUND * t;
            (velocity, position)
        })
        .collect()
}

fn bench_momentum(c: &mut Criterion) {
    let solver = MomentumSolver::default();
    let mut group = c.benchmark_group("momentum_compute");
    for &count in RELEASE_SAMPLES {
        let samples = releases(count);
        group.bench_with_input(BenchmarkId::new("releases", count), &samples, |b, samples| {
            b.iter(|| {
                for &(velocity, position) in samples {
                    black_box(solver.compute(velocity, position, LOWER_BOUND, WRAPPER_SIZE));
                }
            });
        });
    }
    group.finish();
}

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing_transform");
    for easing in [Easing::Swipe, Easing::SwipeBounce, Easing::EaseInOut] {
        group.bench_function(format!("{easing:?}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for step in 0..=60 {
                    acc += easing.transform(black_box(step as f32 / 60.0));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_momentum, bench_easing);
criterion_main!(benches);
