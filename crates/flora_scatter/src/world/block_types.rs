//! Block types referenced by the flora rules.
use crate::world::BlockType;

pub const AIR: BlockType = BlockType::from_static("minecraft:air");
pub const STONE: BlockType = BlockType::from_static("minecraft:stone");
pub const DIRT: BlockType = BlockType::from_static("minecraft:dirt");
pub const WATER: BlockType = BlockType::from_static("minecraft:water");

// Surfaces
pub const GRASS_BLOCK: BlockType = BlockType::from_static("minecraft:grass_block");
pub const SAND: BlockType = BlockType::from_static("minecraft:sand");
pub const RED_SAND: BlockType = BlockType::from_static("minecraft:red_sand");
pub const MYCELIUM: BlockType = BlockType::from_static("minecraft:mycelium");
pub const NETHERRACK: BlockType = BlockType::from_static("minecraft:netherrack");
pub const SOUL_SOIL: BlockType = BlockType::from_static("minecraft:soul_soil");
pub const CRIMSON_NYLIUM: BlockType = BlockType::from_static("minecraft:crimson_nylium");
pub const WARPED_NYLIUM: BlockType = BlockType::from_static("minecraft:warped_nylium");

// Flora
pub const GRASS: BlockType = BlockType::from_static("minecraft:grass");
pub const POPPY: BlockType = BlockType::from_static("minecraft:poppy");
pub const DANDELION: BlockType = BlockType::from_static("minecraft:dandelion");
pub const DEAD_BUSH: BlockType = BlockType::from_static("minecraft:dead_bush");
pub const CACTUS: BlockType = BlockType::from_static("minecraft:cactus");
pub const RED_MUSHROOM: BlockType = BlockType::from_static("minecraft:red_mushroom");
pub const BROWN_MUSHROOM: BlockType = BlockType::from_static("minecraft:brown_mushroom");
pub const CRIMSON_ROOTS: BlockType = BlockType::from_static("minecraft:crimson_roots");
pub const CRIMSON_FUNGUS: BlockType = BlockType::from_static("minecraft:crimson_fungus");
pub const WARPED_FUNGUS: BlockType = BlockType::from_static("minecraft:warped_fungus");
pub const WARPED_ROOTS: BlockType = BlockType::from_static("minecraft:warped_roots");
pub const NETHER_SPROUTS: BlockType = BlockType::from_static("minecraft:nether_sprouts");
