use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use slime_core::SimulationConfig;
use slime_sim::{CreateRequest, NoopObserver, SimBuilder};
use std::time::Duration;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn bench_host_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("host_step");
    group.sample_size(env_or("SLIME_BENCH_SAMPLES", 20_usize).max(10));
    group.warm_up_time(Duration::from_secs(env_or("SLIME_BENCH_WARMUP_SECS", 2)));
    group.measurement_time(Duration::from_secs(env_or("SLIME_BENCH_MEASURE_SECS", 8)));

    let steps: u64 = env_or("SLIME_BENCH_STEPS", 16);
    let agents_list: Vec<u32> = std::env::var("SLIME_BENCH_AGENTS")
        .ok()
        .map(|s| s.split(',').filter_map(|t| t.trim().parse().ok()).collect::<Vec<_>>())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![10_000, 100_000]);

    for &agents in &agents_list {
        group.bench_function(format!("steps{steps}_agents{agents}_hd480"), |b| {
            b.iter_batched(
                || {
                    let config = SimulationConfig {
                        width: 480,
                        height: 270,
                        max_agents: agents,
                        agents_per_step: agents,
                        create_radius: 60.0,
                        seed: 0xBEEF,
                        ..SimulationConfig::default()
                    };
                    let mut sim = SimBuilder::new(config)
                        .running(true)
                        .build()
                        .expect("bench config is valid");
                    let center = sim.config().shape().center();
                    sim.create_agents(CreateRequest::scattered(center))
                        .expect("spawn within capacity");
                    sim
                },
                |mut sim| {
                    sim.run_steps(steps, &mut NoopObserver).expect("step");
                    sim
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_diffusion(c: &mut Criterion) {
    use slime_grid::{DiffuseParams, TrailMaps, diffuse_and_decay};
    use slime_core::{GridShape, Rgba};

    let mut group = c.benchmark_group("diffuse");
    for kernel in [1_u32, 3] {
        let mut maps = TrailMaps::new(GridShape::new(1920, 1080)).expect("non-empty grid");
        maps.deposit(960, 540, Rgba::WHITE);
        let params = DiffuseParams { decay_factor: 0.1, diffuse_factor: 1.0, kernel_size: kernel, delta_time: 0.02 };
        group.bench_function(format!("hd1080_k{kernel}"), |b| {
            b.iter(|| diffuse_and_decay(&mut maps, &params));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_host_steps, bench_diffusion);
criterion_main!(benches);
