//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::Serialize;
use std::{fmt, str::FromStr};

use super::{error::ValueObjectError, record::RecordKind};

/// Maximum length of any record identifier.
pub const MAX_ID_LENGTH: usize = 100;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            ///
            /// # Errors
            ///
            /// Returns an error if the identifier is empty or longer than
            /// [`MAX_ID_LENGTH`].
            pub fn new(id: String) -> Result<Self, ValueObjectError> {
                if id.is_empty() {
                    return Err(ValueObjectError::IdEmpty { kind: $kind });
                }
                let len = id.len();
                if len > MAX_ID_LENGTH {
                    return Err(ValueObjectError::IdTooLong {
                        kind: $kind,
                        max: MAX_ID_LENGTH,
                        actual: len,
                    });
                }
                Ok(Self(id))
            }

            /// Get the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

        }

        impl TryFrom<String> for $name {
            type Error = ValueObjectError;

            fn try_from(id: String) -> Result<Self, Self::Error> {
                Self::new(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Hotel identifier value object.
    HotelId,
    RecordKind::Hotel
);

record_id!(
    /// Customer identifier value object.
    CustomerId,
    RecordKind::Customer
);

record_id!(
    /// Reservation identifier value object.
    ReservationId,
    RecordKind::Reservation
);

/// Room number inside a hotel.
///
/// Room numbers are labels ("101", "B2"), not arithmetic values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Create a new RoomNumber.
    pub fn new(number: String) -> Result<Self, ValueObjectError> {
        if number.trim().is_empty() {
            return Err(ValueObjectError::RoomNumberEmpty);
        }
        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomNumber {
    type Error = ValueObjectError;

    fn try_from(number: String) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<RoomNumber> for String {
    fn from(number: RoomNumber) -> Self {
        number.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nightly room price.
///
/// Keeps the JSON number as written (`100` stays `100`, `99.5` stays `99.5`)
/// so store files round-trip without reformatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "serde_json::Number")]
pub struct Price(serde_json::Number);

impl Price {
    /// Create a new Price.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PriceInvalid` for negative or non-finite numbers.
    pub fn new(value: serde_json::Number) -> Result<Self, ValueObjectError> {
        match value.as_f64() {
            Some(amount) if amount.is_finite() && amount >= 0.0 => Ok(Self(value)),
            _ => Err(ValueObjectError::PriceInvalid(value.to_string())),
        }
    }
}

impl From<Price> for serde_json::Number {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<serde_json::Number>()
            .map_err(|_| ValueObjectError::PriceInvalid(s.to_string()))?;
        Self::new(number)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
