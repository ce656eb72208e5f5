//! Generator configuration.
use crate::error::{Error, Result};

/// Configuration for a [`crate::generator::FloraGenerator`].
///
/// Biome-aware placement is not implemented; the only valid setting is the default.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloraConfig {
    biome_aware: bool,
}

impl FloraConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_biome_aware(&self) -> bool {
        self.biome_aware
    }

    /// Request biome-aware placement. Fails for `true`.
    pub fn with_biome_aware(self, biome_aware: bool) -> Result<Self> {
        if biome_aware {
            return Err(Error::UnsupportedConfiguration(
                "biome-aware flora placement is not implemented".into(),
            ));
        }
        Ok(self)
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Only reachable with a non-default value through deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.biome_aware {
            return Err(Error::UnsupportedConfiguration(
                "biome_aware must be false".into(),
            ));
        }
        Ok(())
    }
}
