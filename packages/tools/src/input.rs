//! Input file resolution and reading.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustyline::DefaultEditor;

use crate::error::ToolError;

/// Prompt shown when no input path is passed on the command line
pub const PATH_PROMPT: &str = "Enter the file path: ";

/// Use the path given on the command line, or ask for one interactively.
pub fn resolve_input_path(arg: Option<PathBuf>) -> Result<PathBuf, ToolError> {
    if let Some(path) = arg {
        return Ok(path);
    }

    let mut editor = DefaultEditor::new()?;
    let line = editor.readline(PATH_PROMPT)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ToolError::NoInput);
    }
    Ok(PathBuf::from(trimmed))
}

/// Read a whole UTF-8 text file.
///
/// A missing file is reported as `ToolError::FileNotFound`; every other
/// failure, invalid UTF-8 included, as `ToolError::Read`.
pub fn read_text(path: &Path) -> Result<String, ToolError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ToolError::FileNotFound(path.to_path_buf()),
        _ => ToolError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
