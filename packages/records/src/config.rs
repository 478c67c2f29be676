//! Store file locations.

use std::path::PathBuf;

/// Default hotels store file
pub const DEFAULT_HOTELS_FILE: &str = "hotels.json";

/// Default customers store file
pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.json";

/// Default reservations store file
pub const DEFAULT_RESERVATIONS_FILE: &str = "reservations.json";

/// Paths of the three store files, passed explicitly to every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub hotels: PathBuf,
    pub customers: PathBuf,
    pub reservations: PathBuf,
}

impl StorePaths {
    /// All three stores under `dir`, using the default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            hotels: dir.join(DEFAULT_HOTELS_FILE),
            customers: dir.join(DEFAULT_CUSTOMERS_FILE),
            reservations: dir.join(DEFAULT_RESERVATIONS_FILE),
        }
    }
}

impl Default for StorePaths {
    fn default() -> Self {
        Self {
            hotels: PathBuf::from(DEFAULT_HOTELS_FILE),
            customers: PathBuf::from(DEFAULT_CUSTOMERS_FILE),
            reservations: PathBuf::from(DEFAULT_RESERVATIONS_FILE),
        }
    }
}
