//! Infrastructure layer: file-backed implementations of domain traits.

pub mod repository;

pub use repository::JsonFileRepository;
