//! JSON-backed hotel, customer and reservation record store.
//!
//! Each store is a single JSON file mapping record id to record fields. Every
//! operation loads the whole file, mutates it in memory and writes it back.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::StorePaths;
pub use ui::{Cli, run};
