//! Mean, median, mode, variance and standard deviation of a file of numbers.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin compute-statistics -- TC1.txt
//! ```

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use flatfile_shared::logger::setup_logger;
use flatfile_tools::{
    ToolError,
    input::{read_text, resolve_input_path},
    report::{STATISTICS_RESULTS_FILE, write_results},
    statistics::{Statistics, parse_numbers},
};

#[derive(Debug, Parser)]
#[command(name = "compute-statistics", version, about = "Compute descriptive statistics")]
struct Args {
    /// One number per line (prompted when omitted)
    input: Option<PathBuf>,
    /// Results file
    #[arg(long, short, default_value = STATISTICS_RESULTS_FILE)]
    output: PathBuf,
}

fn run(args: Args) -> Result<(), ToolError> {
    let input = resolve_input_path(args.input)?;

    let start = Instant::now();
    let text = match read_text(&input) {
        Ok(text) => text,
        Err(e) => {
            println!("Error: {e}");
            String::new()
        }
    };
    let parsed = parse_numbers(&text);
    for skipped in &parsed.skipped {
        println!("{skipped}");
    }
    if !parsed.values.is_empty() {
        println!("Numbers extracted from the file");
    }
    let stats = Statistics::compute(&parsed.values);
    let rendered = stats.render(start.elapsed());

    println!("\n{rendered}");
    write_results(&args.output, &rendered)
}

fn main() -> ExitCode {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    if let Err(e) = run(Args::parse()) {
        println!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
