//! Built-in flora tables.
//!
//! Weights are relative within each table. `desert` is dominated by air so most
//! desert surfaces stay bare.
use crate::rules::FloraCategory;
use crate::selection::WeightedTable;
use crate::world::{block_types, BlockState, BlockType};

fn table(entries: &[(BlockType, f64)]) -> WeightedTable<BlockState> {
    let mut table = WeightedTable::new();
    for (block_type, weight) in entries {
        table.push_positive(block_type.default_state(), *weight);
    }
    table
}

/// Plants for temperate surfaces: mostly grass with the occasional flower.
pub fn temperate() -> WeightedTable<BlockState> {
    table(&[
        (block_types::GRASS, 300.0),
        (block_types::POPPY, 5.0),
        (block_types::DANDELION, 5.0),
    ])
}

pub fn desert() -> WeightedTable<BlockState> {
    table(&[
        (block_types::DEAD_BUSH, 30.0),
        (block_types::CACTUS, 20.0),
        (block_types::AIR, 300.0),
    ])
}

pub fn mushroom() -> WeightedTable<BlockState> {
    table(&[
        (block_types::RED_MUSHROOM, 10.0),
        (block_types::BROWN_MUSHROOM, 10.0),
    ])
}

/// Crimson-leaning nether flora for soul soil and crimson nylium.
pub fn nether() -> WeightedTable<BlockState> {
    table(&[
        (block_types::CRIMSON_ROOTS, 10.0),
        (block_types::CRIMSON_FUNGUS, 20.0),
        (block_types::WARPED_FUNGUS, 5.0),
    ])
}

pub fn warped_nylium() -> WeightedTable<BlockState> {
    table(&[
        (block_types::WARPED_ROOTS, 15.0),
        (block_types::NETHER_SPROUTS, 20.0),
        (block_types::WARPED_FUNGUS, 7.0),
        (block_types::CRIMSON_ROOTS, 10.0),
    ])
}

/// The built-in table for `category`.
pub fn for_category(category: FloraCategory) -> WeightedTable<BlockState> {
    match category {
        FloraCategory::Temperate => temperate(),
        FloraCategory::Desert => desert(),
        FloraCategory::Mushroom => mushroom(),
        FloraCategory::Nether => nether(),
        FloraCategory::WarpedNylium => warped_nylium(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(table: &WeightedTable<BlockState>) -> Vec<(&str, f64)> {
        table
            .entries()
            .iter()
            .map(|e| (e.outcome.block_type().id(), e.weight))
            .collect()
    }

    #[test]
    fn temperate_weights() {
        assert_eq!(
            weights(&temperate()),
            vec![
                ("minecraft:grass", 300.0),
                ("minecraft:poppy", 5.0),
                ("minecraft:dandelion", 5.0),
            ]
        );
    }

    #[test]
    fn desert_is_mostly_air() {
        let desert = desert();
        assert_eq!(desert.total_weight(), 350.0);
        assert!(desert.outcomes().any(BlockState::is_air));
        assert!((desert.probability(2).unwrap() - 300.0 / 350.0).abs() < 1e-12);
    }

    #[test]
    fn nether_tables_match_expected_weights() {
        assert_eq!(
            weights(&nether()),
            vec![
                ("minecraft:crimson_roots", 10.0),
                ("minecraft:crimson_fungus", 20.0),
                ("minecraft:warped_fungus", 5.0),
            ]
        );
        assert_eq!(
            weights(&warped_nylium()),
            vec![
                ("minecraft:warped_roots", 15.0),
                ("minecraft:nether_sprouts", 20.0),
                ("minecraft:warped_fungus", 7.0),
                ("minecraft:crimson_roots", 10.0),
            ]
        );
    }

    #[test]
    fn every_category_has_a_non_empty_table() {
        for category in FloraCategory::ALL {
            let table = for_category(category);
            assert!(!table.is_empty(), "{category} table is empty");
            assert!(table.outcomes().all(BlockState::is_default));
        }
        assert_eq!(mushroom().len(), 2);
    }
}
