use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use input_signals::backend::ScriptedBackend;
use input_signals::engine::{cutoff_axis, cutoff_dual_axis};
use input_signals::{ButtonSignature, CutoffPolicy, DualAxisSignature, InputSignature, Phase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_axis_values(count: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    (0..count).map(|_| rng.gen_range(-1.0f32..=1.0)).collect()
}

fn bench_cutoff(c: &mut Criterion) {
    let values = random_axis_values(4096);
    let mut group = c.benchmark_group("cutoff");

    for policy in [CutoffPolicy::HardClip, CutoffPolicy::Scaled] {
        group.bench_with_input(
            BenchmarkId::new("axis", format!("{policy:?}")),
            &policy,
            |b, &policy| {
                b.iter(|| {
                    values
                        .iter()
                        .map(|&v| cutoff_axis(black_box(v), 0.2, policy))
                        .sum::<f32>()
                })
            },
        );
    }

    group.bench_function("dual_axis", |b| {
        b.iter(|| {
            values
                .chunks_exact(2)
                .map(|pair| {
                    cutoff_dual_axis(
                        black_box(Vec2::new(pair[0], pair[1])),
                        0.1,
                        CutoffPolicy::HardClip,
                        0.2,
                        CutoffPolicy::Scaled,
                    )
                })
                .fold(Vec2::ZERO, |acc, v| acc + v)
        })
    });

    group.finish();
}

fn bench_host_frames(c: &mut Criterion) {
    let values = random_axis_values(1024);
    let mut group = c.benchmark_group("host_frames");

    for &fixed_steps in &[0usize, 1, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(fixed_steps),
            &fixed_steps,
            |b, &fixed_steps| {
                let mut fire = ButtonSignature::new("Fire", "Fire");
                let mut movement = DualAxisSignature::new("Move", "Horizontal", "Vertical");
                movement.set_axle_dead_zone(0.1);
                movement.set_radial_dead_zone(0.2);
                let mut backend = ScriptedBackend::new();

                b.iter(|| {
                    for pair in values.chunks_exact(2) {
                        backend.set_button("Fire", pair[0] > 0.0);
                        backend.set_axis_value("Horizontal", pair[0]);
                        backend.set_axis_value("Vertical", pair[1]);

                        fire.sample(&backend, Phase::Variable);
                        movement.sample(&backend, Phase::Variable);
                        for _ in 0..fixed_steps {
                            fire.sample(&backend, Phase::Fixed);
                            movement.sample(&backend, Phase::Fixed);
                        }
                    }
                    black_box(fire.current(Phase::Fixed))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cutoff, bench_host_frames);
criterion_main!(benches);
