//! Predicates over surface block identity.
use std::slice;

use crate::world::{BlockState, BlockType};

/// Matches a block by its type, ignoring properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceMatcher {
    Type(BlockType),
    AnyOf(Vec<BlockType>),
}

impl SurfaceMatcher {
    pub fn any_of(types: impl IntoIterator<Item = BlockType>) -> Self {
        SurfaceMatcher::AnyOf(types.into_iter().collect())
    }

    pub fn matches(&self, state: &BlockState) -> bool {
        self.types().contains(state.block_type())
    }

    pub fn types(&self) -> &[BlockType] {
        match self {
            SurfaceMatcher::Type(t) => slice::from_ref(t),
            SurfaceMatcher::AnyOf(ts) => ts,
        }
    }
}

impl From<BlockType> for SurfaceMatcher {
    fn from(value: BlockType) -> Self {
        SurfaceMatcher::Type(value)
    }
}
