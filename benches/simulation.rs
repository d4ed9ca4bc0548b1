//! Performance benchmarks for the Langton's Ant simulator

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use langton::{Config, Grid, Renderer, Simulation, Viewport};

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    for ants in [1, 4, 16, 64].iter() {
        let mut sim = Simulation::new_with_seed(Config::default(), 42);
        for _ in 0..*ants {
            sim.add_ant(0, 0);
        }

        // Warm up: materialize a realistic working set of cells.
        sim.run(10_000);

        group.bench_with_input(BenchmarkId::new("ants", ants), ants, |b, _| {
            b.iter(|| {
                sim.step();
            });
        });
    }

    group.finish();
}

fn benchmark_grid_ops(c: &mut Criterion) {
    let mut grid = Grid::new();
    for i in 0..100_000i64 {
        grid.set(i % 317, i / 317, i % 2 == 0);
    }

    c.bench_function("grid_get", |b| {
        b.iter(|| grid.get(black_box(158), black_box(157)))
    });

    c.bench_function("grid_set", |b| {
        let mut g = grid.clone();
        b.iter(|| g.set(black_box(-5), black_box(9), true));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let mut sim = Simulation::new_with_seed(Config::default(), 42);
    let viewport = Viewport::default();
    let renderer = Renderer::new();

    // A long-run grid centered on the visible window.
    let (x, y) = viewport.center_cell(1920.0, 1080.0);
    sim.add_ant(x, y);
    sim.run(50_000);

    c.bench_function("renderer_frame", |b| {
        b.iter(|| {
            renderer.draw(
                black_box(&sim.grid),
                sim.ants(),
                &viewport,
                (1920.0, 1080.0),
            )
        });
    });
}

criterion_group!(benches, benchmark_step, benchmark_grid_ops, benchmark_render);
criterion_main!(benches);
