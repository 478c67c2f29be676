//! Shared utilities for the flatfile binaries.

pub mod logger;

pub use logger::setup_logger;
