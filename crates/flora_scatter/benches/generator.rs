mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flora_scatter::prelude::*;
use glam::IVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Square patch of `side * side` surfaces cycling through every flora surface and stone.
fn make_world(side: i32) -> MemoryWorld {
    let surfaces = [
        block_types::GRASS_BLOCK,
        block_types::SAND,
        block_types::MYCELIUM,
        block_types::SOUL_SOIL,
        block_types::WARPED_NYLIUM,
        block_types::STONE,
    ];
    let world = MemoryWorld::new();
    for x in 0..side {
        for z in 0..side {
            let surface = &surfaces[((x * 31 + z * 17) as usize) % surfaces.len()];
            world.insert(IVec3::new(x, 0, z), surface.default_state());
        }
    }
    world
}

fn positions(side: i32) -> Vec<IVec3> {
    (0..side)
        .flat_map(|x| (0..side).map(move |z| IVec3::new(x, 0, z)))
        .collect()
}

fn generator_apply_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/apply_region");

    for &side in &[16i32, 64, 128] {
        let world = make_world(side);
        let cells = positions(side);
        let version = DATA_VERSION_MC_1_16;
        let generator = FloraGenerator::new(&world, &version);
        group.throughput(common::elements_throughput(cells.len()));

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let summary = apply_region(&generator, cells.iter().copied());
                black_box(summary.ok());
            });
        });
    }

    group.finish();
}

fn generator_events_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/apply_with_events");

    let side = 64;
    let world = make_world(side);
    let cells = positions(side);
    let version = DataVersion(0);
    let generator = FloraGenerator::new(&world, &version);
    group.throughput(common::elements_throughput(cells.len()));

    group.bench_function("noop_sink", |b| {
        let mut rng = StdRng::seed_from_u64(0xBADC0DE);
        b.iter(|| {
            for p in &cells {
                let _ = black_box(generator.apply_with_events(*p, &mut rng, &mut ()));
            }
        });
    });

    group.bench_function("vec_sink", |b| {
        let mut rng = StdRng::seed_from_u64(0xBADC0DE);
        b.iter(|| {
            let mut sink = VecSink::new();
            for p in &cells {
                let _ = generator.apply_with_events(*p, &mut rng, &mut sink);
            }
            black_box(sink.len());
        });
    });

    group.finish();
}

criterion_group! {
    name = generator;
    config = common::default_criterion();
    targets = generator_apply_benches, generator_events_benches
}
criterion_main!(generator);
