//! Domain layer error definitions.

use thiserror::Error;

use super::record::RecordKind;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Record identifier validation error
    #[error("{kind} ID cannot be empty")]
    IdEmpty { kind: RecordKind },

    /// Record identifier too long error
    #[error("{kind} ID cannot exceed {max} characters (got {actual})")]
    IdTooLong {
        kind: RecordKind,
        max: usize,
        actual: usize,
    },

    /// RoomNumber validation error
    #[error("Room number cannot be empty")]
    RoomNumberEmpty,

    /// Price is not a finite, non-negative number
    #[error("Price must be a non-negative number (got: {0})")]
    PriceInvalid(String),
}

/// Errors raised while building a record from raw JSON fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record value is not a JSON object
    #[error("{kind} record must be a JSON object")]
    NotAnObject { kind: RecordKind },

    /// A required key is absent
    #[error("{kind} record is missing required field '{field}'")]
    MissingField {
        kind: RecordKind,
        field: &'static str,
    },

    /// A key is present but its value has the wrong shape
    #[error("{kind} record has an invalid '{field}': {reason}")]
    InvalidField {
        kind: RecordKind,
        field: &'static str,
        reason: String,
    },
}
