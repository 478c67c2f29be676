//! UI layer: command line parsing and dispatch.

pub mod cli;
mod runner;

pub use cli::Cli;
pub use runner::run;
