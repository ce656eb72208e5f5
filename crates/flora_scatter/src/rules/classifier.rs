//! First-match-wins evaluation of a [`RuleSet`].
use crate::rules::{DataVersion, FloraCategory, PlacementReport, RuleSet};
use crate::selection::WeightedTable;
use crate::world::BlockState;

/// The rule that matched a surface and the table it resolves to.
#[derive(Debug, Clone, Copy)]
pub struct Classification<'a> {
    /// Position of the matching rule in the rule set.
    pub rule_index: usize,
    pub category: FloraCategory,
    pub table: &'a WeightedTable<BlockState>,
    pub report: PlacementReport,
}

/// Resolves surface blocks to flora tables.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate rules top to bottom and return the first one that applies.
    pub fn classify(
        &self,
        state: &BlockState,
        version: DataVersion,
    ) -> Option<Classification<'_>> {
        self.rules
            .rules()
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.applies(state, version))
            .find_map(|(rule_index, rule)| {
                self.rules
                    .table(rule.category)
                    .map(|table| Classification {
                        rule_index,
                        category: rule.category,
                        table,
                        report: rule.report,
                    })
            })
    }
}
