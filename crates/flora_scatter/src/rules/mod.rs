//! Classification rules that map a surface block to a flora table.
//!
//! - version: [`DataVersion`] and [`VersionGate`] thresholds
//! - matcher: [`SurfaceMatcher`] predicates over block identity
//! - tables: the built-in flora tables, one per [`FloraCategory`]
//! - ruleset: ordered [`ClassificationRule`]s plus the tables they point at
//! - classifier: first-match-wins evaluation of a [`RuleSet`]
use std::fmt;

pub mod classifier;
pub mod matcher;
pub mod ruleset;
pub mod tables;
pub mod version;

pub use classifier::{Classification, Classifier};
pub use matcher::SurfaceMatcher;
pub use ruleset::{ClassificationRule, RuleSet};
pub use version::{is_at_least, DataVersion, VersionGate};

/// Terrain category a flora table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloraCategory {
    Temperate,
    Desert,
    Mushroom,
    Nether,
    WarpedNylium,
}

impl FloraCategory {
    pub const ALL: [FloraCategory; 5] = [
        FloraCategory::Temperate,
        FloraCategory::Desert,
        FloraCategory::Mushroom,
        FloraCategory::Nether,
        FloraCategory::WarpedNylium,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FloraCategory::Temperate => "temperate",
            FloraCategory::Desert => "desert",
            FloraCategory::Mushroom => "mushroom",
            FloraCategory::Nether => "nether",
            FloraCategory::WarpedNylium => "warped_nylium",
        }
    }
}

impl fmt::Display for FloraCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a rule reports to the caller after its block has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementReport {
    /// The write counts as a placement; `apply` returns `true`.
    #[default]
    Placed,
    /// The write happens but `apply` returns `false`.
    Silent,
}

impl PlacementReport {
    #[inline]
    pub fn as_bool(self) -> bool {
        matches!(self, PlacementReport::Placed)
    }
}
