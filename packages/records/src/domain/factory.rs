//! Domain factories for creating domain entities and value objects.

use super::error::ValueObjectError;

/// Factory for generating record identifiers.
///
/// Used when a record is created without an explicit id, separating the
/// generation concern from the validation logic in the id value objects.
pub struct RecordIdFactory;

impl RecordIdFactory {
    /// Generate a new identifier from a random UUID v4.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate<I>() -> Result<I, ValueObjectError>
    where
        I: TryFrom<String, Error = ValueObjectError>,
    {
        let uuid = uuid::Uuid::new_v4();
        I::try_from(uuid.to_string())
    }
}
