use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mazebots_core::maze::MazeDimensions;
use mazebots_core::{Maze, SimConfig, Simulation};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::hint::black_box;

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_tick");
    let steps: usize = std::env::var("MAZEBOTS_BENCH_STEPS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(100);

    for population in [50_usize, 200, 1000] {
        group.bench_function(format!("steps{}_bots{}", steps, population), |b| {
            b.iter_batched(
                || {
                    let mut config = SimConfig {
                        seed: Some(0xBEEF),
                        ..Default::default()
                    };
                    config.maze.width = 640;
                    config.maze.height = 480;
                    config.evolution.population_size = population;
                    config.food.spawn_probability = 0.1;
                    Simulation::new(config).expect("valid bench config")
                },
                |mut sim| {
                    for _ in 0..steps {
                        black_box(sim.tick());
                    }
                    sim
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_maze_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_generate");
    for (width, height) in [(200_u32, 200_u32), (1080, 1080)] {
        let dimensions = MazeDimensions::new(width, height, 40, 3).expect("valid dimensions");
        group.bench_function(format!("{}x{}", width, height), |b| {
            let mut rng = Xoshiro256StarStar::seed_from_u64(1);
            b.iter(|| black_box(Maze::generate(dimensions, &mut rng)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ticks, bench_maze_generation);
criterion_main!(benches);
