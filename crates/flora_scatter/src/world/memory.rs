//! Sparse in-memory block storage implementing [`BlockAccess`].
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use glam::IVec3;
use parking_lot::RwLock;

use crate::error::EditError;
use crate::world::{block_types, BlockAccess, BlockState};

/// Hash-map backed world. Unset cells read as air.
///
/// Optional inclusive bounds reject reads and writes outside the region, and an
/// optional change limit caps the number of successful writes, the way an edit
/// session caps changed blocks.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    blocks: RwLock<HashMap<IVec3, BlockState>>,
    bounds: Option<(IVec3, IVec3)>,
    change_limit: Option<usize>,
    changes: AtomicUsize,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict access to the inclusive box spanned by `a` and `b`.
    pub fn with_bounds(mut self, a: IVec3, b: IVec3) -> Self {
        self.bounds = Some((a.min(b), a.max(b)));
        self
    }

    /// Fail writes once `limit` blocks have been changed.
    pub fn with_change_limit(mut self, limit: usize) -> Self {
        self.change_limit = Some(limit);
        self
    }

    /// Set a block directly, bypassing bounds and the change counter.
    pub fn insert(&self, position: IVec3, state: BlockState) {
        self.blocks.write().insert(position, state);
    }

    /// Fill the inclusive box spanned by `a` and `b` with `state`.
    pub fn fill(&self, a: IVec3, b: IVec3, state: &BlockState) {
        let (min, max) = (a.min(b), a.max(b));
        let mut blocks = self.blocks.write();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    blocks.insert(IVec3::new(x, y, z), state.clone());
                }
            }
        }
    }

    /// Stored state at `position`, ignoring bounds. `None` for unset cells.
    pub fn get(&self, position: IVec3) -> Option<BlockState> {
        self.blocks.read().get(&position).cloned()
    }

    /// Number of successful [`BlockAccess::set_block`] calls.
    pub fn changes(&self) -> usize {
        self.changes.load(Ordering::Relaxed)
    }

    /// Number of stored (non-default) cells.
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// Snapshot of every stored cell.
    pub fn snapshot(&self) -> Vec<(IVec3, BlockState)> {
        self.blocks
            .read()
            .iter()
            .map(|(p, s)| (*p, s.clone()))
            .collect()
    }

    fn check_bounds(&self, position: IVec3) -> Result<(), EditError> {
        match self.bounds {
            Some((min, max)) if position.cmplt(min).any() || position.cmpgt(max).any() => {
                Err(EditError::OutOfBounds { position })
            }
            _ => Ok(()),
        }
    }
}

impl BlockAccess for MemoryWorld {
    fn block(&self, position: IVec3) -> Result<BlockState, EditError> {
        self.check_bounds(position)?;
        Ok(self
            .get(position)
            .unwrap_or_else(|| block_types::AIR.default_state()))
    }

    fn set_block(&self, position: IVec3, state: BlockState) -> Result<(), EditError> {
        self.check_bounds(position)?;
        let mut blocks = self.blocks.write();
        if let Some(limit) = self.change_limit {
            if self.changes.load(Ordering::Relaxed) >= limit {
                return Err(EditError::ChangeLimit { limit });
            }
        }
        blocks.insert(position, state);
        self.changes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cells_read_as_air() {
        let world = MemoryWorld::new();
        let state = world.block(IVec3::new(4, 64, -2)).unwrap();
        assert!(state.is_air());
        assert!(world.is_empty());
    }

    #[test]
    fn set_block_stores_and_counts() {
        let world = MemoryWorld::new();
        let pos = IVec3::new(1, 2, 3);
        world
            .set_block(pos, block_types::POPPY.default_state())
            .unwrap();
        assert_eq!(world.block(pos).unwrap(), block_types::POPPY.default_state());
        assert_eq!(world.changes(), 1);
    }

    #[test]
    fn insert_and_fill_bypass_the_counter() {
        let world = MemoryWorld::new();
        world.insert(IVec3::ZERO, block_types::SAND.default_state());
        world.fill(
            IVec3::new(0, 0, 0),
            IVec3::new(2, 0, 1),
            &block_types::GRASS_BLOCK.default_state(),
        );
        assert_eq!(world.len(), 6);
        assert_eq!(world.changes(), 0);
        assert_eq!(
            world.get(IVec3::ZERO),
            Some(block_types::GRASS_BLOCK.default_state())
        );
    }

    #[test]
    fn bounds_reject_outside_positions() {
        let world = MemoryWorld::new().with_bounds(IVec3::new(3, 3, 3), IVec3::ZERO);
        assert!(world.block(IVec3::new(3, 3, 3)).is_ok());
        let err = world.block(IVec3::new(0, 4, 0)).unwrap_err();
        assert!(matches!(
            err,
            EditError::OutOfBounds { position } if position == IVec3::new(0, 4, 0)
        ));
        let err = world
            .set_block(IVec3::new(-1, 0, 0), block_types::DIRT.default_state())
            .unwrap_err();
        assert!(matches!(err, EditError::OutOfBounds { .. }));
        assert_eq!(world.changes(), 0);
    }

    #[test]
    fn change_limit_caps_writes() {
        let world = MemoryWorld::new().with_change_limit(2);
        let state = block_types::DIRT.default_state();
        world.set_block(IVec3::X, state.clone()).unwrap();
        world.set_block(IVec3::Y, state.clone()).unwrap();
        let err = world.set_block(IVec3::Z, state).unwrap_err();
        assert!(matches!(err, EditError::ChangeLimit { limit: 2 }));
        assert_eq!(world.changes(), 2);
        assert!(world.get(IVec3::Z).is_none());
    }
}
