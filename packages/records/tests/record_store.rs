//! Record store integration tests.
//!
//! Drives the `hotel-records` command line against store files in a scratch
//! directory and inspects the files it leaves behind.

use std::{fs, path::Path, process::ExitCode};

use clap::Parser;
use flatfile_records::{
    Cli,
    domain::{Customer, Hotel, RecordRepository, Reservation},
    infrastructure::JsonFileRepository,
    run,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run_cli(dir: &TempDir, args: &[&str]) -> ExitCode {
    let hotels = dir.path().join("hotels.json");
    let customers = dir.path().join("customers.json");
    let reservations = dir.path().join("reservations.json");
    let mut argv = vec![
        "hotel-records".to_string(),
        "--hotels".to_string(),
        hotels.display().to_string(),
        "--customers".to_string(),
        customers.display().to_string(),
        "--reservations".to_string(),
        reservations.display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    run(Cli::try_parse_from(argv).expect("cli should parse"))
}

fn hotels(dir: &TempDir) -> JsonFileRepository<Hotel> {
    JsonFileRepository::new(dir.path().join("hotels.json"))
}

fn seed_test_hotel(dir: &TempDir) {
    fs::write(
        dir.path().join("hotels.json"),
        r#"{"1": {"hotel_id": "1", "name": "Test Hotel", "address": "Test Address",
                 "rooms": {"101": 100, "102": 150}}}"#,
    )
    .unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_create_hotel_then_load() {
    // テスト項目: 新しいホテルを作成すると、読み込んだマッピングに含まれる
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    seed_test_hotel(&dir);

    // when (操作):
    run_cli(
        &dir,
        &[
            "hotel", "create", "--id", "2", "--name", "New Hotel", "--address", "New Address",
            "--room", "201=200",
        ],
    );

    // then (期待する結果):
    let loaded = hotels(&dir).load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded["2"].name, "New Hotel");
    assert_eq!(loaded["2"].rooms.len(), 1);
    assert_eq!(
        read_json(&dir.path().join("hotels.json"))["2"]["rooms"]["201"],
        serde_json::json!(200)
    );
}

#[test]
fn test_create_duplicate_hotel_is_noop() {
    // テスト項目: 既存 ID でのホテル作成は何も変更しない
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    seed_test_hotel(&dir);
    let before = fs::read_to_string(dir.path().join("hotels.json")).unwrap();

    // when (操作):
    let status = run_cli(
        &dir,
        &["hotel", "create", "--id", "1", "--name", "Other", "--address", "Elsewhere"],
    );

    // then (期待する結果):
    assert_eq!(status, ExitCode::SUCCESS);
    let after = fs::read_to_string(dir.path().join("hotels.json")).unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_delete_hotel() {
    // テスト項目: 既存ホテルを削除すると読み込み結果から消える
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    seed_test_hotel(&dir);

    // when (操作):
    run_cli(&dir, &["hotel", "delete", "1"]);

    // then (期待する結果):
    assert!(hotels(&dir).load().unwrap().is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("hotels.json")).unwrap(),
        "{}\n"
    );
}

#[test]
fn test_update_hotel_merges_only_given_fields() {
    // テスト項目: 更新は指定したフィールドだけをマージする
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    seed_test_hotel(&dir);

    // when (操作):
    run_cli(&dir, &["hotel", "update", "1", "--address", "Updated Address"]);

    // then (期待する結果):
    let loaded = hotels(&dir).load().unwrap();
    assert_eq!(loaded["1"].name, "Test Hotel");
    assert_eq!(loaded["1"].address, "Updated Address");
    assert_eq!(loaded["1"].rooms.len(), 2);
}

#[test]
fn test_customer_and_reservation_lifecycle() {
    // テスト項目: 顧客と予約を作成・更新・キャンセルできる
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    let customers = JsonFileRepository::<Customer>::new(dir.path().join("customers.json"));
    let reservations =
        JsonFileRepository::<Reservation>::new(dir.path().join("reservations.json"));

    // when (操作):
    run_cli(
        &dir,
        &[
            "customer", "create", "--id", "c1", "--name", "Ana", "--email", "ana@example.com",
            "--phone", "555-0100",
        ],
    );
    // 存在しないホテルへの予約も許可される（外部キー検証なし）
    run_cli(
        &dir,
        &[
            "reservation", "create", "--id", "r1", "--customer", "c1", "--hotel", "99",
            "--room", "101", "--check-in", "2024-03-01", "--check-out", "2024-03-04",
        ],
    );
    run_cli(&dir, &["reservation", "update", "r1", "--check-out", "2024-03-05"]);

    // then (期待する結果):
    assert_eq!(customers.load().unwrap()["c1"].email, "ana@example.com");
    let stored = read_json(&dir.path().join("reservations.json"));
    assert_eq!(stored["r1"]["hotel_id"], "99");
    assert_eq!(stored["r1"]["check_in_date"], "2024-03-01");
    assert_eq!(stored["r1"]["check_out_date"], "2024-03-05");

    // when (操作): 予約をキャンセル
    run_cli(&dir, &["reservation", "cancel", "r1"]);

    // then (期待する結果):
    assert!(reservations.load().unwrap().is_empty());
}

#[test]
fn test_create_without_id_generates_one() {
    // テスト項目: --id を省略すると ID が生成される
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();

    // when (操作):
    run_cli(
        &dir,
        &["customer", "create", "--name", "Bo", "--email", "bo@example.com", "--phone", "1"],
    );

    // then (期待する結果):
    let loaded = JsonFileRepository::<Customer>::new(dir.path().join("customers.json"))
        .load()
        .unwrap();
    assert_eq!(loaded.len(), 1);
    let (id, customer) = loaded.first().unwrap();
    assert_eq!(id.len(), 36);
    assert_eq!(customer.customer_id.as_str(), id);
}

#[test]
fn test_self_test_exits_successfully() {
    // テスト項目: self-test はすべてのチェックが成功すると 0 で終了する
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();

    // when (操作):
    let status = run_cli(&dir, &["self-test"]);

    // then (期待する結果):
    assert_eq!(status, ExitCode::SUCCESS);
    // self-test は指定されたストアファイルに触れない
    assert!(!dir.path().join("hotels.json").exists());
}

#[test]
fn test_create_keeps_valid_hotels_when_store_has_invalid_record() {
    // テスト項目: 不正なレコードを含むストアへの作成は失敗し、既存のホテルは失われない
    // given (前提条件): ホテル 2 の価格が文字列になっている
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotels.json");
    fs::write(
        &path,
        r#"{"1": {"hotel_id": "1", "name": "Test Hotel", "address": "Test Address",
                 "rooms": {"101": 100}},
            "2": {"hotel_id": "2", "name": "Legacy Hotel", "address": "Old Address",
                 "rooms": {"201": "120"}}}"#,
    )
    .unwrap();
    let before = fs::read_to_string(&path).unwrap();

    // when (操作):
    let status = run_cli(
        &dir,
        &["hotel", "create", "--id", "3", "--name", "New Hotel", "--address", "New Address"],
    );

    // then (期待する結果):
    assert_eq!(status, ExitCode::SUCCESS);
    let after = fs::read_to_string(&path).unwrap();
    assert_eq!(after, before);
    let stored = read_json(&path);
    assert_eq!(stored["1"]["name"], "Test Hotel");
    assert!(stored.get("3").is_none());
}
