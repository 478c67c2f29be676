//! Total revenue from a product price list and a sales record.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin compute-sales -- TC1.ProductList.json TC1.Sales.json
//! ```

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use flatfile_shared::logger::setup_logger;
use flatfile_tools::{
    ToolError,
    input::resolve_input_path,
    report::{SALES_RESULTS_FILE, elapsed_line, write_results},
    sales::calculate_total_sales,
};

#[derive(Debug, Parser)]
#[command(name = "compute-sales", version, about = "Compute total sales")]
struct Args {
    /// Product price list (prompted when omitted)
    products: Option<PathBuf>,
    /// Sales record (prompted when omitted)
    sales: Option<PathBuf>,
    /// Results file
    #[arg(long, short, default_value = SALES_RESULTS_FILE)]
    output: PathBuf,
}

fn run(args: Args) -> Result<(), ToolError> {
    let products = resolve_input_path(args.products)?;
    let sales = resolve_input_path(args.sales)?;

    let start = Instant::now();
    let report = match calculate_total_sales(&products, &sales) {
        Ok(report) => report,
        Err(e) => {
            if let ToolError::NotANumber { warnings, .. } = &e {
                for warning in warnings {
                    println!("{warning}");
                }
            }
            return Err(e);
        }
    };
    let elapsed = start.elapsed();

    for warning in &report.warnings {
        println!("{warning}");
    }
    let rendered = report.render();
    print!("{rendered}");
    println!("{}", elapsed_line(elapsed));

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
