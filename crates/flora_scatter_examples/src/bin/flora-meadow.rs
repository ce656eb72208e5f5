use std::collections::BTreeMap;

use flora_scatter::prelude::*;
use flora_scatter_examples::{
    banded_surface, init_tracing, render_top_down_png, surface_positions, TopDownConfig,
};
use glam::IVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One band per surface the built-in rules know, plus stone which never matches.
    let side = 96;
    let bands = [
        block_types::GRASS_BLOCK,
        block_types::SAND,
        block_types::RED_SAND,
        block_types::MYCELIUM,
        block_types::SOUL_SOIL,
        block_types::CRIMSON_NYLIUM,
        block_types::WARPED_NYLIUM,
        block_types::STONE,
    ];
    let (min, max) = (IVec3::new(0, 0, 0), IVec3::new(side - 1, 1, side - 1));
    let world = MemoryWorld::new().with_bounds(min, max);
    banded_surface(&world, side, 0, &bands);

    let version = DATA_VERSION_MC_1_16;
    let generator = FloraGenerator::new(&world, &version);

    // Seeded so repeated runs render the same meadow.
    let mut rng = StdRng::seed_from_u64(2025);
    let mut sink = VecSink::new();
    for position in surface_positions(side, 0) {
        generator.apply_with_events(position, &mut rng, &mut sink)?;
    }

    let mut per_block: BTreeMap<String, usize> = BTreeMap::new();
    for event in sink.as_slice() {
        if let FloraEvent::Placed { block, .. } = event {
            *per_block.entry(block.to_string()).or_default() += 1;
        }
    }
    info!(
        "Visited {} surfaces, placed {} blocks.",
        sink.len(),
        sink.placed()
    );
    for (block, count) in &per_block {
        info!("  {block}: {count}");
    }

    let out = "flora-meadow.png";
    render_top_down_png(
        &world,
        &TopDownConfig::new(min, max).with_scale(6),
        out,
    )?;
    info!("Wrote {out}.");

    Ok(())
}
