//! Block identities and the edit-context interfaces the generator talks to.
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

pub mod access;
pub mod block_types;
pub mod memory;

pub use access::{BlockAccess, VersionQuery};
pub use memory::MemoryWorld;

/// Namespaced block type identifier, e.g. `minecraft:grass_block`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockType(Cow<'static, str>);

impl BlockType {
    /// Create a block type from a static identifier. Usable in `const` items.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// The state of this type with no properties set.
    pub fn default_state(&self) -> BlockState {
        BlockState::new(self.clone())
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A block type together with its property values.
///
/// Two states are equal only when both the type and every property match; the
/// flora rules only ever inspect [`BlockState::block_type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockState {
    block_type: BlockType,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    properties: BTreeMap<String, String>,
}

impl BlockState {
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            properties: BTreeMap::new(),
        }
    }

    /// Return a copy with `key` set to `value`.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn is_default(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn is_air(&self) -> bool {
        self.block_type == block_types::AIR
    }
}

impl From<BlockType> for BlockState {
    fn from(value: BlockType) -> Self {
        BlockState::new(value)
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block_type)?;
        if !self.properties.is_empty() {
            f.write_str("[")?;
            for (i, (k, v)) in self.properties.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{k}={v}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
