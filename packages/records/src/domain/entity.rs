//! Core domain models for the record store.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::{
    error::RecordError,
    record::{Fields, Record, RecordKind},
    value_object::{CustomerId, HotelId, Price, ReservationId, RoomNumber},
};

/// Date format used for check-in / check-out in store files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rooms of a hotel with their nightly price, in insertion order
pub type Rooms = IndexMap<RoomNumber, Price>;

/// Represents a hotel with its priced rooms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    /// Hotel identifier
    pub hotel_id: HotelId,
    pub name: String,
    pub address: String,
    /// Room number → nightly price
    pub rooms: Rooms,
}

impl Hotel {
    /// Create a new hotel
    pub fn new(hotel_id: HotelId, name: String, address: String, rooms: Rooms) -> Self {
        Self {
            hotel_id,
            name,
            address,
            rooms,
        }
    }

    /// Check whether the hotel has the given room
    pub fn has_room(&self, room_number: &RoomNumber) -> bool {
        self.rooms.contains_key(room_number)
    }
}

/// Fields that can be changed on an existing hotel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Replaces the whole room table when present
    pub rooms: Option<Rooms>,
}

impl Record for Hotel {
    type Patch = HotelPatch;
    const KIND: RecordKind = RecordKind::Hotel;

    fn id(&self) -> &str {
        self.hotel_id.as_str()
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, RecordError> {
        let fields = Fields::new(Self::KIND, fields);
        let hotel_id = fields.check("hotel_id", HotelId::new(fields.text("hotel_id")?))?;
        let name = fields.text("name")?;
        let address = fields.text("address")?;

        let mut rooms = Rooms::new();
        for (number, price) in fields.object("rooms")? {
            let number = fields.check("rooms", RoomNumber::new(number.clone()))?;
            let price = match price {
                Value::Number(n) => fields.check("rooms", Price::new(n.clone()))?,
                other => {
                    return Err(fields.invalid(
                        "rooms",
                        format!("price of room {number} must be a number, got {other}"),
                    ));
                }
            };
            rooms.insert(number, price);
        }

        Ok(Self::new(hotel_id, name, address, rooms))
    }

    fn apply(&mut self, patch: HotelPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel ID: {}", self.hotel_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        write!(f, "Rooms:")?;
        for (number, price) in &self.rooms {
            write!(f, "\n  Room {number}: ${price}")?;
        }
        Ok(())
    }
}

/// Represents a hotel customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Customer identifier
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(customer_id: CustomerId, name: String, email: String, phone: String) -> Self {
        Self {
            customer_id,
            name,
            email,
            phone,
        }
    }
}

/// Fields that can be changed on an existing customer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Record for Customer {
    type Patch = CustomerPatch;
    const KIND: RecordKind = RecordKind::Customer;

    fn id(&self) -> &str {
        self.customer_id.as_str()
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, RecordError> {
        let fields = Fields::new(Self::KIND, fields);
        let customer_id =
            fields.check("customer_id", CustomerId::new(fields.text("customer_id")?))?;

        Ok(Self::new(
            customer_id,
            fields.text("name")?,
            fields.text("email")?,
            fields.text("phone")?,
        ))
    }

    fn apply(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Phone: {}", self.phone)
    }
}

/// Represents a room reservation.
///
/// Customer and hotel ids are not checked against their stores; dangling
/// references are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    /// Reservation identifier
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub room_number: RoomNumber,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl Reservation {
    /// Create a new reservation
    pub fn new(
        reservation_id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
        room_number: RoomNumber,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            reservation_id,
            customer_id,
            hotel_id,
            room_number,
            check_in_date,
            check_out_date,
        }
    }
}

/// Fields that can be changed on an existing reservation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationPatch {
    pub customer_id: Option<CustomerId>,
    pub hotel_id: Option<HotelId>,
    pub room_number: Option<RoomNumber>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

fn parse_date(fields: &Fields<'_>, field: &'static str) -> Result<NaiveDate, RecordError> {
    let raw = fields.text(field)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| fields.invalid(field, format!("'{raw}' is not a YYYY-MM-DD date ({e})")))
}

impl Record for Reservation {
    type Patch = ReservationPatch;
    const KIND: RecordKind = RecordKind::Reservation;

    fn id(&self) -> &str {
        self.reservation_id.as_str()
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, RecordError> {
        let fields = Fields::new(Self::KIND, fields);
        let reservation_id = fields.check(
            "reservation_id",
            ReservationId::new(fields.text("reservation_id")?),
        )?;
        let customer_id =
            fields.check("customer_id", CustomerId::new(fields.text("customer_id")?))?;
        let hotel_id = fields.check("hotel_id", HotelId::new(fields.text("hotel_id")?))?;
        let room_number =
            fields.check("room_number", RoomNumber::new(fields.text("room_number")?))?;

        Ok(Self::new(
            reservation_id,
            customer_id,
            hotel_id,
            room_number,
            parse_date(&fields, "check_in_date")?,
            parse_date(&fields, "check_out_date")?,
        ))
    }

    fn apply(&mut self, patch: ReservationPatch) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(hotel_id) = patch.hotel_id {
            self.hotel_id = hotel_id;
        }
        if let Some(room_number) = patch.room_number {
            self.room_number = room_number;
        }
        if let Some(check_in_date) = patch.check_in_date {
            self.check_in_date = check_in_date;
        }
        if let Some(check_out_date) = patch.check_out_date {
            self.check_out_date = check_out_date;
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation ID: {}", self.reservation_id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Hotel ID: {}", self.hotel_id)?;
        writeln!(f, "Room Number: {}", self.room_number)?;
        writeln!(f, "Check-in: {}", self.check_in_date.format(DATE_FORMAT))?;
        write!(f, "Check-out: {}", self.check_out_date.format(DATE_FORMAT))
    }
}
