//! Frequency of every distinct word in a text file.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin word-count -- TC1.txt
//! ```

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use flatfile_shared::logger::setup_logger;
use flatfile_tools::{
    input::resolve_input_path,
    report::{WORD_COUNT_RESULTS_FILE, elapsed_line, write_results},
    word_count::{WordFrequencies, count_words_in_file, render},
};

#[derive(Debug, Parser)]
#[command(name = "word-count", version, about = "Count word frequencies")]
struct Args {
    /// Any UTF-8 text file (prompted when omitted)
    input: Option<PathBuf>,
    /// Results file
    #[arg(long, short, default_value = WORD_COUNT_RESULTS_FILE)]
    output: PathBuf,
}

fn main() -> ExitCode {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let input = match resolve_input_path(args.input) {
        Ok(input) => input,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let frequencies = count_words_in_file(&input).unwrap_or_else(|e| {
        println!("Error: {e}");
        WordFrequencies::new()
    });

    if !frequencies.is_empty() {
        let rendered = render(&frequencies);
        print!("{rendered}");
        match write_results(&args.output, &rendered) {
            Ok(()) => println!("Results saved to {}", args.output.display()),
            Err(e) => println!("Error writing to file: {e}"),
        }
    }
    println!("{}", elapsed_line(start.elapsed()));

    ExitCode::SUCCESS
}
