use std::path::Path;

use flora_scatter::prelude::*;
use glam::IVec3;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

static PALETTE: &[(BlockType, [u8; 3])] = &[
    (block_types::GRASS_BLOCK, [86, 140, 58]),
    (block_types::SAND, [219, 207, 163]),
    (block_types::RED_SAND, [190, 102, 33]),
    (block_types::MYCELIUM, [111, 99, 107]),
    (block_types::NETHERRACK, [97, 38, 38]),
    (block_types::SOUL_SOIL, [75, 57, 46]),
    (block_types::CRIMSON_NYLIUM, [130, 31, 31]),
    (block_types::WARPED_NYLIUM, [43, 114, 101]),
    (block_types::GRASS, [121, 192, 90]),
    (block_types::POPPY, [237, 48, 44]),
    (block_types::DANDELION, [255, 236, 79]),
    (block_types::DEAD_BUSH, [148, 109, 62]),
    (block_types::CACTUS, [85, 127, 43]),
    (block_types::RED_MUSHROOM, [200, 30, 30]),
    (block_types::BROWN_MUSHROOM, [153, 116, 92]),
    (block_types::CRIMSON_ROOTS, [176, 40, 70]),
    (block_types::CRIMSON_FUNGUS, [220, 60, 60]),
    (block_types::WARPED_FUNGUS, [20, 180, 133]),
    (block_types::WARPED_ROOTS, [20, 150, 140]),
    (block_types::NETHER_SPROUTS, [30, 170, 150]),
];

/// Placeholder colour for a block; unknown blocks are dark grey.
pub fn block_color(state: &BlockState) -> [u8; 3] {
    PALETTE
        .iter()
        .find(|(t, _)| t == state.block_type())
        .map(|(_, c)| *c)
        .unwrap_or([40, 40, 40])
}

/// Region and scale of a top-down render.
#[derive(Debug, Clone)]
pub struct TopDownConfig {
    /// Inclusive minimum corner; `y` is the lowest layer considered.
    pub min: IVec3,
    /// Inclusive maximum corner; `y` is the highest layer considered.
    pub max: IVec3,
    /// Pixels per block.
    pub scale: u32,
}

impl TopDownConfig {
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
            scale: 8,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }
}

/// Render the highest non-air block of every column to a PNG.
pub fn render_top_down_png(
    world: &MemoryWorld,
    config: &TopDownConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let width = (config.max.x - config.min.x + 1) as u32;
    let depth = (config.max.z - config.min.z + 1) as u32;
    let mut img = RgbImage::new(width * config.scale, depth * config.scale);

    for dx in 0..width {
        for dz in 0..depth {
            let x = config.min.x + dx as i32;
            let z = config.min.z + dz as i32;
            let top = (config.min.y..=config.max.y)
                .rev()
                .filter_map(|y| world.get(IVec3::new(x, y, z)))
                .find(|s| !s.is_air());
            let color = top.as_ref().map(block_color).unwrap_or([16, 16, 16]);
            for px in 0..config.scale {
                for pz in 0..config.scale {
                    img.put_pixel(dx * config.scale + px, dz * config.scale + pz, Rgb(color));
                }
            }
        }
    }

    img.save(path.as_ref())?;
    Ok(())
}
