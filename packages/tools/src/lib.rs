//! Text and JSON file tools: sales totals, descriptive statistics, number
//! base conversion and word frequencies.

pub mod convert;
pub mod error;
pub mod input;
pub mod report;
pub mod sales;
pub mod statistics;
pub mod word_count;

pub use error::ToolError;
