use flora_scatter::prelude::*;
use flora_scatter::rules::version::{DATA_VERSION_MC_1_15, DATA_VERSION_MC_1_20};
use flora_scatter_examples::{banded_surface, init_tracing, surface_positions};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The same nether patch, decorated as seen by platforms before and after the
    // version that introduced nether flora.
    let side = 32;
    let bands = [
        block_types::SOUL_SOIL,
        block_types::CRIMSON_NYLIUM,
        block_types::WARPED_NYLIUM,
        block_types::NETHERRACK,
    ];

    for version in [DATA_VERSION_MC_1_15, DATA_VERSION_MC_1_16, DATA_VERSION_MC_1_20] {
        let world = MemoryWorld::new();
        banded_surface(&world, side, 0, &bands);

        let generator = FloraGenerator::new(&world, &version);
        let summary = apply_region(&generator, surface_positions(side, 0))?;
        info!(
            "Data version {}: {} of {} surfaces decorated ({} writes).",
            version,
            summary.placed,
            summary.visited,
            world.changes()
        );
    }

    // Biome-aware placement is rejected up front.
    if let Err(e) = FloraConfig::new().with_biome_aware(true) {
        info!("Biome-aware mode: {e}");
    }

    Ok(())
}
