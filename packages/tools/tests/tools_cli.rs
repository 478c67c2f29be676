//! End-to-end runs of the tool binaries against files in a scratch directory.

use std::{fs, path::Path, process::Command};

use pretty_assertions::assert_eq;

fn run_tool(bin: &str, dir: &Path, args: &[&str]) -> (bool, String) {
    let output = Command::new(bin)
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("tool should start");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn test_compute_sales_writes_results() {
    // テスト項目: 集計結果が表示され、結果ファイルに書き込まれる
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("products.json"), r#"{"A": 10, "B": 5}"#).unwrap();
    fs::write(dir.path().join("sales.json"), r#"[{"Product": "A", "Quantity": 3}]"#).unwrap();

    // when (操作):
    let (ok, stdout) = run_tool(
        env!("CARGO_BIN_EXE_compute-sales"),
        dir.path(),
        &["products.json", "sales.json"],
    );

    // then (期待する結果):
    assert!(ok);
    assert!(stdout.contains("Warning: Product 'B' found in product file but not in sales file."));
    assert_eq!(
        fs::read_to_string(dir.path().join("SalesResults.txt")).unwrap(),
        "A: 30\nTotal sales cost: 30\n"
    );
}

#[test]
fn test_compute_sales_type_mismatch_writes_nothing() {
    // テスト項目: 数値でない価格ではエラー終了し、結果ファイルは作られない
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("products.json"), r#"{"C": 1, "A": "ten"}"#).unwrap();
    fs::write(dir.path().join("sales.json"), r#"{"A": 3}"#).unwrap();

    // when (操作):
    let (ok, stdout) = run_tool(
        env!("CARGO_BIN_EXE_compute-sales"),
        dir.path(),
        &["products.json", "sales.json"],
    );

    // then (期待する結果):
    assert!(!ok);
    let warning = stdout
        .find("Warning: Product 'C' found in product file but not in sales file.")
        .expect("warning for C should be printed");
    let error = stdout
        .find("Error: Price or quantity for A is not a number.")
        .expect("error should be printed");
    assert!(warning < error);
    assert!(!dir.path().join("SalesResults.txt").exists());
}

#[test]
fn test_compute_statistics_with_output_override() {
    // テスト項目: --output で結果ファイルの場所を変更できる
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("numbers.txt"), "2\n4\n4\n4\nfive\n5\n5\n7\n9\n").unwrap();

    // when (操作):
    let (ok, stdout) = run_tool(
        env!("CARGO_BIN_EXE_compute-statistics"),
        dir.path(),
        &["numbers.txt", "--output", "stats.txt"],
    );

    // then (期待する結果):
    assert!(ok);
    assert!(stdout.contains("Error: Invalid data on line 5: 'five'"));
    let results = fs::read_to_string(dir.path().join("stats.txt")).unwrap();
    assert!(results.contains("Mean: 5.0\n"));
    assert!(results.contains("Mode: 4.0\n"));
    assert!(results.contains("Standard Deviation: 2.0\n"));
    assert!(!dir.path().join("StatisticsResults.txt").exists());
}

#[test]
fn test_compute_statistics_missing_file_reports_zeros() {
    // テスト項目: 入力ファイルがない場合は空データとして 0 を報告する
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();

    // when (操作):
    let (ok, stdout) = run_tool(
        env!("CARGO_BIN_EXE_compute-statistics"),
        dir.path(),
        &["missing.txt"],
    );

    // then (期待する結果):
    assert!(ok);
    assert!(stdout.contains("Error: File 'missing.txt' not found."));
    let results = fs::read_to_string(dir.path().join("StatisticsResults.txt")).unwrap();
    assert!(results.contains("Mean: 0.0\n"));
}

#[test]
fn test_convert_numbers() {
    // テスト項目: 各数値が 2 進数と 16 進数に変換される
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("numbers.txt"), "10\n-3\n255\nabc\n0\n").unwrap();

    // when (操作):
    let (ok, _) = run_tool(
        env!("CARGO_BIN_EXE_convert-numbers"),
        dir.path(),
        &["numbers.txt"],
    );

    // then (期待する結果):
    assert!(ok);
    assert_eq!(
        fs::read_to_string(dir.path().join("ConvertionResults.txt")).unwrap(),
        "Decimal: 10, Binary: 1010, Hexadecimal: A\n\
         Decimal: 255, Binary: 11111111, Hexadecimal: FF\n\
         Decimal: 0, Binary: 0, Hexadecimal: 0\n"
    );
}

#[test]
fn test_convert_numbers_missing_file_fails() {
    // テスト項目: 入力ファイルがない場合は失敗し、結果ファイルは作られない
    let dir = tempfile::tempdir().unwrap();
    let (ok, _) = run_tool(
        env!("CARGO_BIN_EXE_convert-numbers"),
        dir.path(),
        &["missing.txt"],
    );
    assert!(!ok);
    assert!(!dir.path().join("ConvertionResults.txt").exists());
}

#[test]
fn test_word_count() {
    // テスト項目: 単語の出現回数が出現順に書き込まれる
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "The cat sat.\nTHE CAT ran.\n").unwrap();

    // when (操作):
    let (ok, stdout) = run_tool(
        env!("CARGO_BIN_EXE_word-count"),
        dir.path(),
        &["text.txt"],
    );

    // then (期待する結果):
    assert!(ok);
    assert!(stdout.contains("Results saved to WordCountResults.txt"));
    assert_eq!(
        fs::read_to_string(dir.path().join("WordCountResults.txt")).unwrap(),
        "Word Frequencies:\nthe: 2\ncat: 2\nsat: 1\nran: 1\n"
    );
}

#[test]
fn test_word_count_missing_file_continues() {
    // テスト項目: 読み込みエラーでも正常終了し、結果ファイルは作られない
    let dir = tempfile::tempdir().unwrap();
    let (ok, stdout) = run_tool(
        env!("CARGO_BIN_EXE_word-count"),
        dir.path(),
        &["missing.txt"],
    );
    assert!(ok);
    assert!(stdout.contains("Error: File 'missing.txt' not found."));
    assert!(!dir.path().join("WordCountResults.txt").exists());
}
