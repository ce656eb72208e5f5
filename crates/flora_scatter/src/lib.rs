#![forbid(unsafe_code)]
//! flora_scatter: weighted flora placement for block-world edit sessions.
//!
//! Modules:
//! - selection: weighted random tables
//! - rules: data versions, surface matchers, built-in flora tables, classification
//! - world: block identities, edit-context traits, in-memory world
//! - generator: the flora region function, its configuration and events
pub mod error;
pub mod generator;
pub mod rules;
pub mod selection;
pub mod world;

/// Convenient re-exports for common types. Import with `use flora_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{EditError, Error, Result};
    pub use crate::generator::{
        apply_region, EventSink, FloraConfig, FloraEvent, FloraGenerator, FnSink, MultiSink,
        RegionFunction, RegionSummary, VecSink,
    };
    pub use crate::rules::version::DATA_VERSION_MC_1_16;
    pub use crate::rules::{
        is_at_least, Classification, ClassificationRule, Classifier, DataVersion, FloraCategory,
        PlacementReport, RuleSet, SurfaceMatcher, VersionGate,
    };
    pub use crate::selection::{draw01, WeightedEntry, WeightedTable};
    pub use crate::world::{
        block_types, BlockAccess, BlockState, BlockType, MemoryWorld, VersionQuery,
    };
}
