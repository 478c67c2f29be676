//! Command dispatcher.
//!
//! Every failure is printed and turned into a no-op; the process still exits
//! successfully. Only `self-test` reports failure through the exit status.

use std::{fmt, path::Path, process::ExitCode, sync::Arc};

use crate::{
    config::StorePaths,
    domain::{
        Customer, CustomerPatch, Hotel, HotelPatch, Price, Record, RecordIdFactory,
        RecordRepository, Reservation, ReservationPatch, RoomNumber, Rooms,
    },
    infrastructure::JsonFileRepository,
    usecase::{
        CreateRecordUseCase, DeleteRecordUseCase, FindRecordUseCase, RoomBookingUseCase,
        UpdateRecordUseCase,
    },
};

use super::{
    cli::{Cli, Commands, CustomerCommands, HotelCommands, ReservationCommands},
    self_test,
};

/// Run the parsed command line.
pub fn run(cli: Cli) -> ExitCode {
    let paths = cli.store_paths();
    tracing::debug!("Using stores {:?}", paths);

    match cli.command {
        Commands::Hotel { action } => handle_hotel(action, &paths),
        Commands::Customer { action } => handle_customer(action, &paths),
        Commands::Reservation { action } => handle_reservation(action, &paths),
        Commands::SelfTest => return self_test::run_self_test(),
    }

    ExitCode::SUCCESS
}

fn repository<R: Record>(path: &Path) -> Arc<dyn RecordRepository<R>> {
    Arc::new(JsonFileRepository::<R>::new(path))
}

fn report(error: impl fmt::Display) {
    println!("Error: {error}");
}

fn rooms_from(rooms: Vec<(RoomNumber, Price)>) -> Rooms {
    rooms.into_iter().collect()
}

fn handle_hotel(action: HotelCommands, paths: &StorePaths) {
    let hotels = repository::<Hotel>(&paths.hotels);

    match action {
        HotelCommands::Create {
            id,
            name,
            address,
            rooms,
        } => {
            let id = match id.map_or_else(RecordIdFactory::generate, Ok) {
                Ok(id) => id,
                Err(e) => return report(e),
            };
            create(hotels, Hotel::new(id, name, address, rooms_from(rooms)));
        }
        HotelCommands::Delete { id } => delete(hotels, &id, "deleted"),
        HotelCommands::Show { id } => show(hotels, &id),
        HotelCommands::Update {
            id,
            name,
            address,
            rooms,
        } => {
            let patch = HotelPatch {
                name,
                address,
                rooms: (!rooms.is_empty()).then(|| rooms_from(rooms)),
            };
            update(hotels, &id, patch);
        }
        HotelCommands::ReserveRoom {
            hotel_id,
            room_number,
        } => match RoomBookingUseCase::new(hotels).reserve_room(&hotel_id, &room_number) {
            Ok(_) => println!("Room {room_number} reserved in Hotel {hotel_id}"),
            Err(e) => report(e),
        },
        HotelCommands::CancelRoom {
            hotel_id,
            room_number,
        } => match RoomBookingUseCase::new(hotels).cancel_room_reservation(&hotel_id, &room_number)
        {
            Ok(_) => println!("Reservation for Room {room_number} in Hotel {hotel_id} cancelled"),
            Err(e) => report(e),
        },
    }
}

fn handle_customer(action: CustomerCommands, paths: &StorePaths) {
    let customers = repository::<Customer>(&paths.customers);

    match action {
        CustomerCommands::Create {
            id,
            name,
            email,
            phone,
        } => {
            let id = match id.map_or_else(RecordIdFactory::generate, Ok) {
                Ok(id) => id,
                Err(e) => return report(e),
            };
            create(customers, Customer::new(id, name, email, phone));
        }
        CustomerCommands::Delete { id } => delete(customers, &id, "deleted"),
        CustomerCommands::Show { id } => show(customers, &id),
        CustomerCommands::Update {
            id,
            name,
            email,
            phone,
        } => update(customers, &id, CustomerPatch { name, email, phone }),
    }
}

fn handle_reservation(action: ReservationCommands, paths: &StorePaths) {
    let reservations = repository::<Reservation>(&paths.reservations);

    match action {
        ReservationCommands::Create {
            id,
            customer,
            hotel,
            room,
            check_in,
            check_out,
        } => {
            let id = match id.map_or_else(RecordIdFactory::generate, Ok) {
                Ok(id) => id,
                Err(e) => return report(e),
            };
            let reservation = Reservation::new(id, customer, hotel, room, check_in, check_out);
            create(reservations, reservation);
        }
        ReservationCommands::Cancel { id } => delete(reservations, &id, "cancelled"),
        ReservationCommands::Show { id } => show(reservations, &id),
        ReservationCommands::Update {
            id,
            customer,
            hotel,
            room,
            check_in,
            check_out,
        } => {
            let patch = ReservationPatch {
                customer_id: customer,
                hotel_id: hotel,
                room_number: room,
                check_in_date: check_in,
                check_out_date: check_out,
            };
            update(reservations, &id, patch);
        }
    }
}

fn create<R: Record>(repository: Arc<dyn RecordRepository<R>>, record: R) {
    let id = record.id().to_string();
    match CreateRecordUseCase::new(repository).execute(record) {
        Ok(()) => println!("{} {} created.", R::KIND, id),
        Err(e) => report(e),
    }
}

fn delete<R: Record>(repository: Arc<dyn RecordRepository<R>>, id: &str, verb: &str) {
    match DeleteRecordUseCase::new(repository).execute(id) {
        Ok(_) => println!("{} {} {}.", R::KIND, id, verb),
        Err(e) => report(e),
    }
}

fn show<R: Record>(repository: Arc<dyn RecordRepository<R>>, id: &str) {
    match FindRecordUseCase::new(repository).execute(id) {
        Ok(record) => println!("{record}"),
        Err(e) => report(e),
    }
}

fn update<R: Record>(repository: Arc<dyn RecordRepository<R>>, id: &str, patch: R::Patch) {
    match UpdateRecordUseCase::new(repository).execute(id, patch) {
        Ok(_) => println!("{} {} updated.", R::KIND, id),
        Err(e) => report(e),
    }
}
