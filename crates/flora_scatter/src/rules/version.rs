//! Platform data versions and threshold gates.
use std::fmt;

/// Monotonic data version of the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DataVersion(pub u32);

pub const DATA_VERSION_MC_1_13: DataVersion = DataVersion(1519);
pub const DATA_VERSION_MC_1_14: DataVersion = DataVersion(1952);
pub const DATA_VERSION_MC_1_15: DataVersion = DataVersion(2225);
/// First version with nether soils, nylium and their flora.
pub const DATA_VERSION_MC_1_16: DataVersion = DataVersion(2566);
pub const DATA_VERSION_MC_1_17: DataVersion = DataVersion(2724);
pub const DATA_VERSION_MC_1_18: DataVersion = DataVersion(2860);
pub const DATA_VERSION_MC_1_19: DataVersion = DataVersion(3105);
pub const DATA_VERSION_MC_1_20: DataVersion = DataVersion(3463);

impl fmt::Display for DataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DataVersion {
    fn from(value: u32) -> Self {
        DataVersion(value)
    }
}

#[inline]
pub fn is_at_least(current: DataVersion, threshold: DataVersion) -> bool {
    current >= threshold
}

/// Enables a rule only from a given data version onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionGate {
    threshold: DataVersion,
}

impl VersionGate {
    pub const fn new(threshold: DataVersion) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> DataVersion {
        self.threshold
    }

    #[inline]
    pub fn admits(&self, current: DataVersion) -> bool {
        is_at_least(current, self.threshold)
    }

    /// Whether every version this gate admits is also admitted by `other`.
    pub fn is_covered_by(&self, other: &VersionGate) -> bool {
        other.threshold <= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let gate = VersionGate::new(DATA_VERSION_MC_1_16);
        assert!(!gate.admits(DataVersion(2565)));
        assert!(gate.admits(DATA_VERSION_MC_1_16));
        assert!(gate.admits(DATA_VERSION_MC_1_20));
    }

    #[test]
    fn named_versions_are_ordered() {
        let versions = [
            DATA_VERSION_MC_1_13,
            DATA_VERSION_MC_1_14,
            DATA_VERSION_MC_1_15,
            DATA_VERSION_MC_1_16,
            DATA_VERSION_MC_1_17,
            DATA_VERSION_MC_1_18,
            DATA_VERSION_MC_1_19,
            DATA_VERSION_MC_1_20,
        ];
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lower_gates_cover_higher_ones() {
        let old = VersionGate::new(DATA_VERSION_MC_1_13);
        let new = VersionGate::new(DATA_VERSION_MC_1_16);
        assert!(new.is_covered_by(&old));
        assert!(!old.is_covered_by(&new));
        assert!(is_at_least(DataVersion(10), DataVersion(10)));
    }
}
