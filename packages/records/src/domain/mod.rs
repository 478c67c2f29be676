//! Domain layer for the record store.
//!
//! This module contains business logic that is independent of
//! file formats and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod record;
pub mod repository;
pub mod value_object;

pub use entity::{
    Customer, CustomerPatch, Hotel, HotelPatch, Reservation, ReservationPatch, Rooms,
};
pub use error::{RecordError, ValueObjectError};
pub use factory::RecordIdFactory;
pub use record::{Record, RecordKind};
pub use repository::{RecordRepository, RepositoryError};
pub use value_object::{CustomerId, HotelId, Price, ReservationId, RoomNumber};

#[cfg(test)]
pub use repository::MockRecordRepository;
