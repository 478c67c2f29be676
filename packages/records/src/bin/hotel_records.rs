//! Hotel / customer / reservation record manager.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hotel-records -- hotel show 1
//! cargo run --bin hotel-records -- --hotels data/hotels.json self-test
//! ```

use std::process::ExitCode;

use clap::Parser;
use flatfile_records::Cli;
use flatfile_shared::logger::setup_logger;

fn main() -> ExitCode {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    flatfile_records::run(Cli::parse())
}
