//! Results files written next to the console output.

use std::{fs, path::Path, time::Duration};

use crate::error::ToolError;

pub const SALES_RESULTS_FILE: &str = "SalesResults.txt";
pub const STATISTICS_RESULTS_FILE: &str = "StatisticsResults.txt";
pub const CONVERSION_RESULTS_FILE: &str = "ConvertionResults.txt";
pub const WORD_COUNT_RESULTS_FILE: &str = "WordCountResults.txt";

/// Overwrite `path` with `content`.
pub fn write_results(path: &Path, content: &str) -> Result<(), ToolError> {
    fs::write(path, content).map_err(|source| ToolError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Results written to {}", path.display());
    Ok(())
}

/// `Time elapsed: 0.0012 seconds`
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Time elapsed: {:.4} seconds", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_results_overwrites() {
        // テスト項目: 結果ファイルは毎回上書きされる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATISTICS_RESULTS_FILE);
        write_results(&path, "old\nlonger content\n").unwrap();

        // when (操作):
        write_results(&path, "new\n").unwrap();

        // then (期待する結果):
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_results_missing_directory() {
        // テスト項目: 書き込めない場所は Write エラーになる
        // given (前提条件):
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(SALES_RESULTS_FILE);

        // when (操作):
        let result = write_results(&path, "x");

        // then (期待する結果):
        assert!(matches!(result, Err(ToolError::Write { .. })));
    }

    #[test]
    fn test_elapsed_line() {
        assert_eq!(
            elapsed_line(Duration::from_millis(1500)),
            "Time elapsed: 1.5000 seconds"
        );
    }
}
