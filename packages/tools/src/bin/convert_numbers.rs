//! Binary and hexadecimal forms of the decimal numbers in a file.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin convert-numbers -- TC1.txt
//! ```

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use flatfile_shared::logger::setup_logger;
use flatfile_tools::{
    ToolError,
    convert::convert_all,
    input::{read_text, resolve_input_path},
    report::{CONVERSION_RESULTS_FILE, elapsed_line, write_results},
};

#[derive(Debug, Parser)]
#[command(
    name = "convert-numbers",
    version,
    about = "Convert numbers to binary and hexadecimal"
)]
struct Args {
    /// One decimal number per line (prompted when omitted)
    input: Option<PathBuf>,
    /// Results file
    #[arg(long, short, default_value = CONVERSION_RESULTS_FILE)]
    output: PathBuf,
}

fn run(args: Args) -> Result<(), ToolError> {
    let input = resolve_input_path(args.input)?;

    let start = Instant::now();
    let conversions = convert_all(&read_text(&input)?);
    println!("{}", elapsed_line(start.elapsed()));

    let mut rendered = String::new();
    for conversion in &conversions {
        println!("{conversion}");
        rendered.push_str(&format!("{conversion}\n"));
    }
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
