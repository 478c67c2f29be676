//! Command line interface of the `hotel-records` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    config::{DEFAULT_CUSTOMERS_FILE, DEFAULT_HOTELS_FILE, DEFAULT_RESERVATIONS_FILE, StorePaths},
    domain::{CustomerId, HotelId, Price, ReservationId, RoomNumber, ValueObjectError},
};

/// Top-level CLI parser for the `hotel-records` binary.
#[derive(Debug, Parser)]
#[command(name = "hotel-records", version, about = "Hotel Reservation System")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the hotels JSON file
    #[arg(long, global = true, env = "FLATFILE_HOTELS", default_value = DEFAULT_HOTELS_FILE)]
    pub hotels: PathBuf,

    /// Path to the customers JSON file
    #[arg(long, global = true, env = "FLATFILE_CUSTOMERS", default_value = DEFAULT_CUSTOMERS_FILE)]
    pub customers: PathBuf,

    /// Path to the reservations JSON file
    #[arg(
        long,
        global = true,
        env = "FLATFILE_RESERVATIONS",
        default_value = DEFAULT_RESERVATIONS_FILE
    )]
    pub reservations: PathBuf,
}

impl Cli {
    /// Store locations selected on the command line.
    #[must_use]
    pub fn store_paths(&self) -> StorePaths {
        StorePaths {
            hotels: self.hotels.clone(),
            customers: self.customers.clone(),
            reservations: self.reservations.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage hotels.
    Hotel {
        #[command(subcommand)]
        action: HotelCommands,
    },
    /// Manage customers.
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Manage reservations.
    Reservation {
        #[command(subcommand)]
        action: ReservationCommands,
    },
    /// Run the built-in store checks in a scratch directory.
    SelfTest,
}

/// Hotel commands.
#[derive(Debug, Subcommand)]
pub enum HotelCommands {
    /// Create a hotel.
    Create {
        /// Hotel ID (generated when omitted)
        #[arg(long, value_parser = parse_value::<HotelId>)]
        id: Option<HotelId>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        /// Room and nightly price, repeatable
        #[arg(long = "room", value_name = "NUMBER=PRICE", value_parser = parse_room)]
        rooms: Vec<(RoomNumber, Price)>,
    },
    /// Delete a hotel.
    Delete { id: String },
    /// Display a hotel.
    Show { id: String },
    /// Update some fields of a hotel.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// Replaces the whole room table when given
        #[arg(long = "room", value_name = "NUMBER=PRICE", value_parser = parse_room)]
        rooms: Vec<(RoomNumber, Price)>,
    },
    /// Check that a room can be reserved.
    ReserveRoom {
        hotel_id: String,
        #[arg(value_parser = parse_value::<RoomNumber>)]
        room_number: RoomNumber,
    },
    /// Check that a room reservation can be cancelled.
    CancelRoom {
        hotel_id: String,
        #[arg(value_parser = parse_value::<RoomNumber>)]
        room_number: RoomNumber,
    },
}

/// Customer commands.
#[derive(Debug, Subcommand)]
pub enum CustomerCommands {
    /// Create a customer.
    Create {
        /// Customer ID (generated when omitted)
        #[arg(long, value_parser = parse_value::<CustomerId>)]
        id: Option<CustomerId>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Delete a customer.
    Delete { id: String },
    /// Display a customer.
    Show { id: String },
    /// Update some fields of a customer.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

/// Reservation commands.
#[derive(Debug, Subcommand)]
pub enum ReservationCommands {
    /// Create a reservation.
    Create {
        /// Reservation ID (generated when omitted)
        #[arg(long, value_parser = parse_value::<ReservationId>)]
        id: Option<ReservationId>,
        #[arg(long, value_parser = parse_value::<CustomerId>)]
        customer: CustomerId,
        #[arg(long, value_parser = parse_value::<HotelId>)]
        hotel: HotelId,
        #[arg(long, value_parser = parse_value::<RoomNumber>)]
        room: RoomNumber,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: NaiveDate,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: NaiveDate,
    },
    /// Cancel (delete) a reservation.
    Cancel { id: String },
    /// Display a reservation.
    Show { id: String },
    /// Update some fields of a reservation.
    Update {
        id: String,
        #[arg(long, value_parser = parse_value::<CustomerId>)]
        customer: Option<CustomerId>,
        #[arg(long, value_parser = parse_value::<HotelId>)]
        hotel: Option<HotelId>,
        #[arg(long, value_parser = parse_value::<RoomNumber>)]
        room: Option<RoomNumber>,
        #[arg(long)]
        check_in: Option<NaiveDate>,
        #[arg(long)]
        check_out: Option<NaiveDate>,
    },
}

/// Parse a validated value object from an argument.
fn parse_value<T>(s: &str) -> Result<T, String>
where
    T: TryFrom<String, Error = ValueObjectError>,
{
    T::try_from(s.to_string()).map_err(|e| e.to_string())
}

/// Parse `NUMBER=PRICE`, e.g. `101=120.5`.
fn parse_room(s: &str) -> Result<(RoomNumber, Price), String> {
    let (number, price) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NUMBER=PRICE, got '{s}'"))?;
    let number = RoomNumber::new(number.trim().to_string()).map_err(|e| e.to_string())?;
    let price = price.parse::<Price>().map_err(|e| e.to_string())?;
    Ok((number, price))
}
