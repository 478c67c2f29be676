//! Repository trait for record stores.
//!
//! The domain layer defines the trait; the infrastructure layer provides the
//! file-backed implementation (dependency inversion).

use indexmap::IndexMap;
use std::{io, path::PathBuf};
use thiserror::Error;

use super::{error::RecordError, record::Record};

/// Errors raised by a record repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file is not valid JSON
    #[error("Invalid JSON format in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an object keyed by id
    #[error(
        "Invalid JSON format in {}: expected an object keyed by record id",
        path.display()
    )]
    NotAnObject { path: PathBuf },

    /// A stored record failed validation
    #[error("Invalid record '{id}' in {}: {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        id: String,
        #[source]
        source: RecordError,
    },

    /// The records could not be encoded
    #[error("Failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    /// The store file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whole-collection access to one record store.
///
/// Every mutation is a full `load` followed by a full `save`; there is no
/// partial write and no locking.
#[cfg_attr(test, mockall::automock)]
pub trait RecordRepository<R: Record> {
    /// Load every record, keyed by id, in file order.
    fn load(&self) -> Result<IndexMap<String, R>, RepositoryError>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &IndexMap<String, R>) -> Result<(), RepositoryError>;
}
