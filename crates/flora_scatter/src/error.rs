//! Error types and result alias for the crate.
//!
//! [`enum@crate::error::Error`] covers table construction, rule set assembly,
//! configuration misuse and failures reported by the surrounding edit context.
//! [`EditError`] is the error type [`crate::world::BlockAccess`] implementors return;
//! it passes through [`Error::Edit`] unchanged.
use glam::IVec3;
use thiserror::Error;

use crate::rules::FloraCategory;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid weight {weight}: weights must be finite and > 0")]
    InvalidWeight { weight: f64 },

    #[error("cannot sample from an empty table")]
    EmptyTable,

    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("no table registered for category '{category}'")]
    MissingTable { category: FloraCategory },

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Failure reported by a [`crate::world::BlockAccess`] read or write.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EditError {
    #[error("position {position} is outside the editable region")]
    OutOfBounds { position: IVec3 },

    #[error("change limit of {limit} blocks reached")]
    ChangeLimit { limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for EditError {
    fn from(value: String) -> Self {
        EditError::Other(value)
    }
}

impl From<&str> for EditError {
    fn from(value: &str) -> Self {
        EditError::Other(value.to_owned())
    }
}
