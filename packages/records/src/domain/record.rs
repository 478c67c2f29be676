//! Common behaviour shared by every stored record type.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::error::{RecordError, ValueObjectError};

/// The three record collections managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Hotel,
    Customer,
    Reservation,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Hotel => "Hotel",
            RecordKind::Customer => "Customer",
            RecordKind::Reservation => "Reservation",
        };
        write!(f, "{name}")
    }
}

/// A record that lives in a store file, keyed by its identifier.
///
/// `Display` renders every field for the `display` operation.
pub trait Record: Clone + fmt::Debug + fmt::Display + Serialize + 'static {
    /// Partial update accepted by [`Record::apply`].
    type Patch: fmt::Debug;

    /// Which collection this record belongs to.
    const KIND: RecordKind;

    /// Primary key of the record.
    fn id(&self) -> &str;

    /// Build the record from a raw JSON field object.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` when a required key is missing or holds a value of
    /// the wrong type.
    fn from_fields(fields: &Map<String, Value>) -> Result<Self, RecordError>;

    /// Merge the supplied fields into the record, leaving the others untouched.
    fn apply(&mut self, patch: Self::Patch);

    /// Build the record from any JSON value, rejecting non-objects.
    fn from_value(value: &Value) -> Result<Self, RecordError> {
        let fields = value
            .as_object()
            .ok_or(RecordError::NotAnObject { kind: Self::KIND })?;
        Self::from_fields(fields)
    }
}

/// Typed accessor over a raw field object, used by the `from_fields` constructors.
pub(crate) struct Fields<'a> {
    kind: RecordKind,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(kind: RecordKind, map: &'a Map<String, Value>) -> Self {
        Self { kind, map }
    }

    pub(crate) fn required(&self, field: &'static str) -> Result<&'a Value, RecordError> {
        self.map.get(field).ok_or(RecordError::MissingField {
            kind: self.kind,
            field,
        })
    }

    /// A textual field. Numbers are accepted and kept as their JSON text.
    pub(crate) fn text(&self, field: &'static str) -> Result<String, RecordError> {
        match self.required(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(self.invalid(field, format!("expected a string, got {other}"))),
        }
    }

    pub(crate) fn object(&self, field: &'static str) -> Result<&'a Map<String, Value>, RecordError> {
        match self.required(field)? {
            Value::Object(map) => Ok(map),
            other => Err(self.invalid(field, format!("expected an object, got {other}"))),
        }
    }

    pub(crate) fn invalid(&self, field: &'static str, reason: impl Into<String>) -> RecordError {
        RecordError::InvalidField {
            kind: self.kind,
            field,
            reason: reason.into(),
        }
    }

    /// Wrap a value object validation failure as an invalid field.
    pub(crate) fn check<T>(
        &self,
        field: &'static str,
        result: Result<T, ValueObjectError>,
    ) -> Result<T, RecordError> {
        result.map_err(|e| self.invalid(field, e.to_string()))
    }
}
