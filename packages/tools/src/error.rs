//! Error definitions for the text and JSON tools.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::sales::SalesWarning;

/// Errors raised by the tools
#[derive(Debug, Error)]
pub enum ToolError {
    /// The input file does not exist
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    /// The input file exists but could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The results file could not be written
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is not valid JSON
    #[error("Invalid JSON format in '{}': {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON input does not have one of the accepted shapes
    #[error("Invalid {what} data format: {reason}")]
    InvalidFormat { what: &'static str, reason: String },

    /// A price or quantity is not numeric; carries the warnings raised before it
    #[error("Price or quantity for {product} is not a number.")]
    NotANumber {
        product: String,
        warnings: Vec<SalesWarning>,
    },

    /// Reading the input path from the terminal failed
    #[error("Failed to read the file path: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    /// No input path was given at the prompt
    #[error("No input file given.")]
    NoInput,
}
