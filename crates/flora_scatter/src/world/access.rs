//! Traits for the edit context the generator reads from and writes to.
use glam::IVec3;

use crate::error::EditError;
use crate::rules::DataVersion;
use crate::world::BlockState;

/// Single-block read/write access to an edit session.
///
/// Methods take `&self`; implementors own whatever synchronization they need so
/// that a generator can be shared across worker threads.
pub trait BlockAccess: Send + Sync {
    fn block(&self, position: IVec3) -> Result<BlockState, EditError>;
    fn set_block(&self, position: IVec3, state: BlockState) -> Result<(), EditError>;
}

impl<T: BlockAccess + ?Sized> BlockAccess for &T {
    fn block(&self, position: IVec3) -> Result<BlockState, EditError> {
        (**self).block(position)
    }

    fn set_block(&self, position: IVec3, state: BlockState) -> Result<(), EditError> {
        (**self).set_block(position, state)
    }
}

/// Source of the platform data version currently in effect.
pub trait VersionQuery: Send + Sync {
    fn current_version(&self) -> DataVersion;
}

/// A fixed version.
impl VersionQuery for DataVersion {
    #[inline]
    fn current_version(&self) -> DataVersion {
        *self
    }
}

impl<F> VersionQuery for F
where
    F: Fn() -> DataVersion + Send + Sync,
{
    #[inline]
    fn current_version(&self) -> DataVersion {
        self()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::rules::version::DATA_VERSION_MC_1_16;

    #[test]
    fn fixed_version_reports_itself() {
        assert_eq!(DATA_VERSION_MC_1_16.current_version(), DATA_VERSION_MC_1_16);
    }

    #[test]
    fn closure_is_queried_every_time() {
        let raw = AtomicU32::new(100);
        let query = || DataVersion(raw.load(Ordering::Relaxed));
        assert_eq!(query.current_version(), DataVersion(100));
        raw.store(3000, Ordering::Relaxed);
        assert_eq!(query.current_version(), DataVersion(3000));
    }
}
