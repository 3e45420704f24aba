use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn bankfeed() -> Command {
    Command::cargo_bin("bankfeed").unwrap()
}

#[test]
fn import_then_status() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        dir.path(),
        "transactions.csv",
        "ref_number,bank_name,date\nR1,First National,2024-01-02\nR2,First National,2024-01-03\n",
    );
    let db = dir.path().join("ledger.db");

    bankfeed()
        .args(["import", csv.to_str().unwrap(), "--db", db.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 inserted, 0 rejected"))
        .stdout(predicate::str::contains("Total transactions in store: 2"));

    bankfeed()
        .args(["status", "--db", db.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions:  2"))
        .stdout(predicate::str::contains("Import runs:   1"));
}

#[test]
fn rejected_rows_are_reported_individually() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        dir.path(),
        "transactions.csv",
        "ref_number,bank_name,date\nR1,First National,2024-01-02\nR2,First National,\n",
    );
    let db = dir.path().join("ledger.db");

    bankfeed()
        .args(["import", csv.to_str().unwrap(), "--db", db.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing required field 'date'"))
        .stdout(predicate::str::contains("1 inserted, 1 rejected"));
}

#[test]
fn missing_source_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("ledger.db");

    bankfeed()
        .args([
            "import",
            dir.path().join("nope.csv").to_str().unwrap(),
            "--db",
            db.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    assert!(!db.exists());
}

#[test]
fn missing_required_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(dir.path(), "transactions.csv", "ref_number,date\nR1,2024-01-02\n");
    let db = dir.path().join("ledger.db");

    bankfeed()
        .args(["import", csv.to_str().unwrap(), "--db", db.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bank_name"));
    assert!(!db.exists());
}

#[test]
fn reimport_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(
        dir.path(),
        "transactions.csv",
        "ref_number,bank_name,date\nR1,First National,2024-01-02\n",
    );
    let db = dir.path().join("ledger.db");

    bankfeed()
        .args(["import", csv.to_str().unwrap(), "--db", db.to_str().unwrap()])
        .assert()
        .success();
    bankfeed()
        .args(["import", csv.to_str().unwrap(), "--db", db.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("already been imported"));
}
