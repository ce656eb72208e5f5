//! Flora placement over an edit session.
//!
//! [`FloraGenerator`] is a [`RegionFunction`]: for each surface position it reads
//! the block, classifies it against its [`RuleSet`], samples the matching flora
//! table and writes the result directly above. Rules and tables are owned by the
//! generator and immutable; the edit session is borrowed.
use glam::IVec3;
use rand::RngCore;
use tracing::{debug, trace};

use crate::error::{EditError, Error, Result};
use crate::rules::{Classifier, DataVersion, FloraCategory, RuleSet};
use crate::selection::draw01;
use crate::world::{BlockAccess, BlockState, VersionQuery};

pub mod config;
pub mod events;

pub use config::FloraConfig;
pub use events::{EventSink, FloraEvent, FnSink, MultiSink, VecSink};

/// An operation applied to single positions of a region.
pub trait RegionFunction {
    /// Apply to `position`, returning whether anything was changed.
    fn apply(&self, position: IVec3) -> Result<bool>;
}

/// Counts gathered by [`apply_region`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionSummary {
    /// Positions the function was applied to.
    pub visited: usize,
    /// Positions for which the function returned `true`.
    pub placed: usize,
}

/// Apply `function` to each position in order, stopping at the first error.
pub fn apply_region<F, I>(function: &F, positions: I) -> Result<RegionSummary>
where
    F: RegionFunction + ?Sized,
    I: IntoIterator<Item = IVec3>,
{
    let mut summary = RegionSummary::default();
    for position in positions {
        summary.visited += 1;
        if function.apply(position)? {
            summary.placed += 1;
        }
    }
    Ok(summary)
}

/// Places flora one block above matching surfaces.
pub struct FloraGenerator<'a, B: ?Sized, V: ?Sized> {
    config: FloraConfig,
    classifier: Classifier,
    blocks: &'a B,
    versions: &'a V,
}

enum Decision {
    Skipped {
        block: BlockState,
        version: DataVersion,
    },
    Placed {
        target: IVec3,
        category: FloraCategory,
        block: BlockState,
        reported: bool,
    },
}

impl<'a, B, V> FloraGenerator<'a, B, V>
where
    B: BlockAccess + ?Sized,
    V: VersionQuery + ?Sized,
{
    /// Create a generator with the default configuration and the built-in rules.
    pub fn new(blocks: &'a B, versions: &'a V) -> Self {
        let classifier = Classifier::new(RuleSet::flora());
        debug!(
            "Flora generator created with {} built-in rules.",
            classifier.rules().len()
        );
        Self {
            config: FloraConfig::default(),
            classifier,
            blocks,
            versions,
        }
    }

    /// Create a generator with an explicit configuration and rule set.
    pub fn try_new(
        config: FloraConfig,
        rules: RuleSet,
        blocks: &'a B,
        versions: &'a V,
    ) -> Result<Self> {
        config.validate()?;
        debug!(
            "Flora generator created with {} rules (lowest version gate: {:?}).",
            rules.len(),
            rules.min_gate()
        );
        Ok(Self {
            config,
            classifier: Classifier::new(rules),
            blocks,
            versions,
        })
    }

    pub fn config(&self) -> &FloraConfig {
        &self.config
    }

    pub fn is_biome_aware(&self) -> bool {
        self.config.is_biome_aware()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn rules(&self) -> &RuleSet {
        self.classifier.rules()
    }

    /// Decide and apply flora for `position` using the thread-local RNG.
    pub fn apply(&self, position: IVec3) -> Result<bool> {
        self.apply_with_rng(position, &mut rand::rng())
    }

    /// Like [`FloraGenerator::apply`], drawing from `rng`.
    pub fn apply_with_rng(&self, position: IVec3, rng: &mut dyn RngCore) -> Result<bool> {
        Ok(match self.decide(position, rng)? {
            Decision::Skipped { .. } => false,
            Decision::Placed { reported, .. } => reported,
        })
    }

    /// Like [`FloraGenerator::apply_with_rng`], sending one [`FloraEvent`] to `sink`.
    pub fn apply_with_events(
        &self,
        position: IVec3,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<bool> {
        match self.decide(position, rng)? {
            Decision::Skipped { block, version } => {
                sink.send(FloraEvent::Skipped {
                    surface: position,
                    block,
                    version,
                });
                Ok(false)
            }
            Decision::Placed {
                target,
                category,
                block,
                reported,
            } => {
                sink.send(FloraEvent::Placed {
                    surface: position,
                    target,
                    category,
                    block,
                    reported,
                });
                Ok(reported)
            }
        }
    }

    fn decide(&self, position: IVec3, rng: &mut dyn RngCore) -> Result<Decision> {
        let version = self.versions.current_version();
        let block = self.blocks.block(position)?;

        let Some(hit) = self.classifier.classify(&block, version) else {
            trace!("No flora rule for {} at {} (version {}).", block, position, version);
            return Ok(Decision::Skipped { block, version });
        };

        let flora = hit.table.sample(draw01(rng))?.clone();
        let target = position
            .y
            .checked_add(1)
            .map(|y| IVec3::new(position.x, y, position.z))
            .ok_or(Error::Edit(EditError::OutOfBounds { position }))?;

        self.blocks.set_block(target, flora.clone())?;
        trace!(
            "Placed {} at {} on {} ({}).",
            flora,
            target,
            block,
            hit.category
        );

        Ok(Decision::Placed {
            target,
            category: hit.category,
            block: flora,
            reported: hit.report.as_bool(),
        })
    }
}

impl<B, V> RegionFunction for FloraGenerator<'_, B, V>
where
    B: BlockAccess + ?Sized,
    V: VersionQuery + ?Sized,
{
    fn apply(&self, position: IVec3) -> Result<bool> {
        self.apply_with_rng(position, &mut rand::rng())
    }
}
