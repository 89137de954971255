//! Error types for the durable store and catalog loading.
//!
//! Gameplay itself never fails: blank input and unknown users are no-ops.
//! Only the I/O edges (writing the store, reading a catalog file) can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing to a durable key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("failed to write store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("failed to encode store value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised while loading a word catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid TOML for a catalog.
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The catalog has no words; index arithmetic needs at least one.
    #[error("catalog {0} contains no words")]
    Empty(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
