use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, smartcal};

#[test]
fn test_add_then_list_and_history() {
    let db_path = setup_test_db("cli_add_list");
    init_db(&db_path);

    smartcal()
        .args([
            "--db",
            &db_path,
            "add",
            "Standup",
            "--date",
            "2099-01-01",
            "--time",
            "09:00",
            "--priority",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("Event #1 'Standup' added"));

    smartcal()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Standup").and(contains("2099-01-01")).and(contains("pending")));

    smartcal()
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("Event Added").and(contains("Standup")));
}

#[test]
fn test_list_orders_by_priority() {
    let db_path = setup_test_db("cli_priority");
    init_db(&db_path);

    for (name, pri) in [("Laundry", "3"), ("Interview", "1")] {
        smartcal()
            .args([
                "--db", &db_path, "add", name, "-d", "2099-04-01", "-t", "10:00", "-p", pri,
            ])
            .assert()
            .success();
    }

    let out = smartcal()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("failed to run list");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let interview = stdout.find("Interview").expect("Interview listed");
    let laundry = stdout.find("Laundry").expect("Laundry listed");
    assert!(interview < laundry, "priority 1 should be listed first:\n{stdout}");
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_invalid");
    init_db(&db_path);

    smartcal()
        .args(["--db", &db_path, "add", "   ", "-d", "2099-01-01", "-t", "09:00"])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));

    smartcal()
        .args(["--db", &db_path, "add", "Bad date", "-d", "01/02/2099", "-t", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    smartcal()
        .args(["--db", &db_path, "add", "Bad time", "-d", "2099-01-01", "-t", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    smartcal()
        .args(["--db", &db_path, "add", "Bad pri", "-d", "2099-01-01", "-t", "09:00", "-p", "9"])
        .assert()
        .failure()
        .stderr(contains("Invalid priority"));

    smartcal()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No events stored"));
}

#[test]
fn test_add_past_event_warns_about_missing_reminder() {
    let db_path = setup_test_db("cli_past");
    init_db(&db_path);

    smartcal()
        .args(["--db", &db_path, "add", "Old news", "-d", "2001-01-01", "-t", "09:00"])
        .assert()
        .success()
        .stdout(contains("no reminder will be sent"));
}

#[test]
fn test_delete_event() {
    let db_path = setup_test_db("cli_delete");
    init_db(&db_path);

    smartcal()
        .args(["--db", &db_path, "add", "Dentist", "-d", "2099-02-02", "-t", "16:00"])
        .assert()
        .success();

    smartcal()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("deleted successfully"));

    smartcal()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("not found"));

    smartcal()
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("Dentist").not());
}

#[test]
fn test_delete_cancelled_keeps_event() {
    let db_path = setup_test_db("cli_delete_cancel");
    init_db(&db_path);

    smartcal()
        .args(["--db", &db_path, "add", "Keep me", "-d", "2099-02-02", "-t", "16:00"])
        .assert()
        .success();

    smartcal()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    smartcal()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Keep me").and(contains("Event Added")));
}

#[test]
fn test_delete_nonexistent_succeeds() {
    let db_path = setup_test_db("cli_delete_missing");
    init_db(&db_path);

    smartcal()
        .args(["--db", &db_path, "del", "9999", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}
