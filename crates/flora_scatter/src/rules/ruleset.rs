//! Ordered classification rules and the tables they resolve to.
use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{Error, Result};
use crate::rules::version::DATA_VERSION_MC_1_16;
use crate::rules::{
    tables, DataVersion, FloraCategory, PlacementReport, SurfaceMatcher, VersionGate,
};
use crate::selection::WeightedTable;
use crate::world::{block_types, BlockState};

/// Maps surfaces accepted by `matcher` to the table of `category`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    pub category: FloraCategory,
    pub matcher: SurfaceMatcher,
    /// Rule is skipped below this version when set.
    pub gate: Option<VersionGate>,
    pub report: PlacementReport,
}

impl ClassificationRule {
    /// An ungated rule that reports [`PlacementReport::Placed`].
    pub fn new(category: FloraCategory, matcher: impl Into<SurfaceMatcher>) -> Self {
        Self {
            category,
            matcher: matcher.into(),
            gate: None,
            report: PlacementReport::Placed,
        }
    }

    /// Only apply from `threshold` onwards.
    pub fn with_gate(mut self, threshold: DataVersion) -> Self {
        self.gate = Some(VersionGate::new(threshold));
        self
    }

    pub fn with_report(mut self, report: PlacementReport) -> Self {
        self.report = report;
        self
    }

    pub fn is_active(&self, version: DataVersion) -> bool {
        self.gate.is_none_or(|g| g.admits(version))
    }

    pub fn applies(&self, state: &BlockState, version: DataVersion) -> bool {
        self.is_active(version) && self.matcher.matches(state)
    }

    /// Whether `earlier` is active at least whenever this rule is.
    fn gate_covered_by(&self, earlier: &ClassificationRule) -> bool {
        match (&self.gate, &earlier.gate) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(ours), Some(theirs)) => ours.is_covered_by(theirs),
        }
    }
}

/// The default surface rules, in precedence order.
///
/// Overworld surfaces are unconditional. Nether surfaces need
/// [`DATA_VERSION_MC_1_16`], where those blocks were introduced.
pub fn flora_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new(FloraCategory::Temperate, block_types::GRASS_BLOCK),
        ClassificationRule::new(
            FloraCategory::Desert,
            SurfaceMatcher::any_of([block_types::SAND, block_types::RED_SAND]),
        ),
        ClassificationRule::new(
            FloraCategory::Mushroom,
            SurfaceMatcher::any_of([block_types::MYCELIUM, block_types::NETHERRACK]),
        ),
        ClassificationRule::new(
            FloraCategory::Nether,
            SurfaceMatcher::any_of([block_types::SOUL_SOIL, block_types::CRIMSON_NYLIUM]),
        )
        .with_gate(DATA_VERSION_MC_1_16),
        ClassificationRule::new(FloraCategory::WarpedNylium, block_types::WARPED_NYLIUM)
            .with_gate(DATA_VERSION_MC_1_16),
    ]
}

/// A fixed, ordered list of rules plus one table per referenced category.
///
/// Built once and never mutated; lookups are read-only.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
    tables: HashMap<FloraCategory, WeightedTable<BlockState>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::flora()
    }
}

impl RuleSet {
    /// Assemble a rule set, checking that every rule resolves to a non-empty table.
    pub fn new<I>(rules: Vec<ClassificationRule>, tables: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FloraCategory, WeightedTable<BlockState>)>,
    {
        let tables: HashMap<_, _> = tables.into_iter().collect();
        for rule in &rules {
            match tables.get(&rule.category) {
                None => {
                    return Err(Error::MissingTable {
                        category: rule.category,
                    })
                }
                Some(table) if table.is_empty() => return Err(Error::EmptyTable),
                Some(_) => {}
            }
        }
        warn_shadowed(&rules);
        Ok(Self { rules, tables })
    }

    /// The built-in rules with the built-in tables.
    pub fn flora() -> Self {
        let tables = FloraCategory::ALL
            .into_iter()
            .map(|c| (c, tables::for_category(c)))
            .collect();
        Self {
            rules: flora_rules(),
            tables,
        }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn table(&self, category: FloraCategory) -> Option<&WeightedTable<BlockState>> {
        self.tables.get(&category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lowest version threshold among gated rules, if any.
    pub fn min_gate(&self) -> Option<DataVersion> {
        self.rules
            .iter()
            .filter_map(|r| r.gate.map(|g| g.threshold()))
            .min()
    }
}

/// Log rules whose surfaces are all claimed by earlier rules that are active at
/// least as often; such rules can never match.
fn warn_shadowed(rules: &[ClassificationRule]) {
    for (i, rule) in rules.iter().enumerate() {
        let claimed: HashSet<_> = rules[..i]
            .iter()
            .filter(|earlier| rule.gate_covered_by(earlier))
            .flat_map(|earlier| earlier.matcher.types())
            .collect();
        let types = rule.matcher.types();
        if !types.is_empty() && types.iter().all(|t| claimed.contains(t)) {
            warn!(
                "Rule {} ({}) is shadowed by earlier rules and will never match.",
                i, rule.category
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::version::{DATA_VERSION_MC_1_15, DATA_VERSION_MC_1_17};

    #[test]
    fn flora_rule_set_has_every_table() {
        let set = RuleSet::flora();
        assert_eq!(set.len(), 5);
        for rule in set.rules() {
            assert!(set.table(rule.category).is_some());
        }
        assert_eq!(set.min_gate(), Some(DATA_VERSION_MC_1_16));
    }

    #[test]
    fn only_nether_rules_are_gated() {
        let gated: Vec<_> = flora_rules()
            .into_iter()
            .filter(|r| r.gate.is_some())
            .map(|r| r.category)
            .collect();
        assert_eq!(
            gated,
            vec![FloraCategory::Nether, FloraCategory::WarpedNylium]
        );
        assert!(flora_rules()
            .iter()
            .all(|r| r.report == PlacementReport::Placed));
    }

    #[test]
    fn new_rejects_rules_without_tables() {
        let rules = vec![ClassificationRule::new(
            FloraCategory::Desert,
            block_types::SAND,
        )];
        let err = RuleSet::new(rules, [(FloraCategory::Temperate, tables::temperate())])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingTable {
                category: FloraCategory::Desert
            }
        ));
    }

    #[test]
    fn new_rejects_empty_tables() {
        let rules = vec![ClassificationRule::new(
            FloraCategory::Desert,
            block_types::SAND,
        )];
        let err = RuleSet::new(rules, [(FloraCategory::Desert, WeightedTable::new())])
            .unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }

    #[test]
    fn unreferenced_empty_tables_are_tolerated() {
        let set = RuleSet::new(Vec::new(), [(FloraCategory::Nether, WeightedTable::new())])
            .expect("no rule points at the empty table");
        assert!(set.is_empty());
        assert_eq!(set.min_gate(), None);
    }

    #[test]
    fn rule_activity_follows_gate() {
        let rule = ClassificationRule::new(FloraCategory::Nether, block_types::SOUL_SOIL)
            .with_gate(DATA_VERSION_MC_1_16);
        let soil = block_types::SOUL_SOIL.default_state();
        assert!(!rule.applies(&soil, DATA_VERSION_MC_1_15));
        assert!(rule.applies(&soil, DATA_VERSION_MC_1_16));
        assert!(!rule.applies(&block_types::SAND.default_state(), DATA_VERSION_MC_1_17));
    }

    #[test]
    fn gate_coverage() {
        let ungated = ClassificationRule::new(FloraCategory::Desert, block_types::SAND);
        let old = ungated.clone().with_gate(DATA_VERSION_MC_1_15);
        let new = ungated.clone().with_gate(DATA_VERSION_MC_1_17);
        assert!(new.gate_covered_by(&ungated));
        assert!(new.gate_covered_by(&old));
        assert!(!old.gate_covered_by(&new));
        assert!(!ungated.gate_covered_by(&old));
    }
}
