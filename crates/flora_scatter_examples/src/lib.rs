#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{block_color, init_tracing, render_top_down_png, TopDownConfig};

use flora_scatter::prelude::*;
use glam::IVec3;

/// Lay a flat `side * side` surface at `y` whose material changes across bands
/// along the x axis.
pub fn banded_surface(world: &MemoryWorld, side: i32, y: i32, bands: &[BlockType]) {
    if bands.is_empty() || side <= 0 {
        return;
    }
    let band_width = (side / bands.len() as i32).max(1);
    for x in 0..side {
        let band = ((x / band_width) as usize).min(bands.len() - 1);
        let state = bands[band].default_state();
        for z in 0..side {
            world.insert(IVec3::new(x, y, z), state.clone());
        }
    }
}

/// Every surface position of a `side * side` patch at height `y`.
pub fn surface_positions(side: i32, y: i32) -> impl Iterator<Item = IVec3> {
    (0..side).flat_map(move |x| (0..side).map(move |z| IVec3::new(x, y, z)))
}
