mod common;
use common::{COLAB, HEADER, ITCD, XCOLAB, XITCD, rbk_in, sample_sources, write_sources};
use roombook::core::parser::parse_bookings;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in output"))
}

#[test]
fn test_list_all_bookings() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Room A"))
        .stdout(contains("03 Nov 2022"))
        .stdout(contains("09:00 - 10:00"))
        .stdout(contains("Lab 3"))
        .stdout(contains("Cancelled"))
        .stdout(contains("Showing 6 bookings"))
        .stdout(contains("Board").not());
}

#[test]
fn test_list_hide_brand() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["list", "--hide-brand", "itcd"])
        .assert()
        .success()
        .stdout(contains("Room A"))
        .stdout(contains("Lab 1").not())
        .stdout(contains("Showing 3 bookings"))
        .stdout(contains("hidden: ITCD"));
}

#[test]
fn test_list_hide_status_and_type() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args([
            "list",
            "--hide-status",
            "cancelled",
            "--hide-type",
            "meeting-room",
        ])
        .assert()
        .success()
        .stdout(contains("Room B"))
        .stdout(contains("Lab 2"))
        .stdout(contains("Room A").not())
        .stdout(contains("Room C").not())
        .stdout(contains("Showing 2 bookings"));
}

#[test]
fn test_list_sorted_by_name_descending() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    let output = rbk_in(home.path(), dir.path())
        .args(["list", "--sort", "name", "--desc"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("Room ↓"));
    assert!(position(&out, "Room C") < position(&out, "Room B"));
    assert!(position(&out, "Room B") < position(&out, "Room A"));
    assert!(position(&out, "Room A") < position(&out, "Lab 3"));
    assert!(position(&out, "Lab 2") < position(&out, "Lab 1"));
}

#[test]
fn test_list_default_sort_is_date() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    let output = rbk_in(home.path(), dir.path())
        .arg("list")
        .output()
        .expect("run list");
    let out = String::from_utf8_lossy(&output.stdout);

    assert!(out.contains("Date ↑"));
    assert!(position(&out, "02 Nov 2022") < position(&out, "03 Nov 2022"));
    assert!(position(&out, "05 Nov 2022") < position(&out, "01 Dec 2022"));
}

#[test]
fn test_missing_source_fails_whole_load() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    fs::remove_file(dir.path().join("xitcd.csv")).expect("remove xitcd.csv");

    rbk_in(home.path(), dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Failed to load bookings"))
        .stderr(contains("xitcd.csv"))
        .stdout(contains("Room A").not())
        .stdout(contains("Showing").not());
}

#[test]
fn test_stats_text() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("CoLab"))
        .stdout(contains("ITCD"))
        .stdout(contains("Total"));
}

#[test]
fn test_stats_json() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    let output = rbk_in(home.path(), dir.path())
        .args(["stats", "--json"])
        .output()
        .expect("run stats");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["total"], 6);
    assert_eq!(json["confirmed"], 4);
    assert_eq!(json["cancelled"], 2);
    assert_eq!(json["brands"]["colab"]["total"], 3);
    assert_eq!(json["brands"]["colab"]["confirmed"], 2);
    assert_eq!(json["brands"]["itcd"]["cancelled"], 1);
}

#[test]
fn test_stats_json_filtered() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    let output = rbk_in(home.path(), dir.path())
        .args(["stats", "--json", "--hide-status", "confirmed"])
        .output()
        .expect("run stats");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["total"], 2);
    assert_eq!(json["brands"]["colab"]["confirmed"], 0);
    assert_eq!(json["brands"]["colab"]["cancelled"], 1);
}

#[test]
fn test_calendar_month() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["calendar", "--month", "2022-11"])
        .assert()
        .success()
        .stdout(contains("November 2022"))
        .stdout(contains("Thu 03"))
        .stdout(contains("Room A"))
        .stdout(contains("Cancelled"))
        .stdout(contains("Lab 2").not())
        .stdout(contains("Showing 5 bookings"));
}

#[test]
fn test_calendar_uses_configured_month() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .arg("calendar")
        .assert()
        .success()
        .stdout(contains("November 2022"));
}

#[test]
fn test_calendar_invalid_month() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["calendar", "--month", "november"])
        .assert()
        .failure()
        .stderr(contains("Invalid"));
}

#[test]
fn test_calendar_json_events() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    let output = rbk_in(home.path(), dir.path())
        .args(["calendar", "--json"])
        .output()
        .expect("run calendar");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let events = json.as_array().expect("array");
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["id"], "A1");
    assert_eq!(events[0]["start"], "2022-11-03T09:00");
    assert_eq!(events[0]["classNames"][0], "room-type-meeting-room");
    assert_eq!(events[0]["booking"]["type"], "MEETING ROOM");
}

#[test]
fn test_show_booking() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["show", "X1"])
        .assert()
        .success()
        .stdout(contains("Room: Room C"))
        .stdout(contains("Type: DISCUSSION ROOM"))
        .stdout(contains("Status: CANCELLED"))
        .stdout(contains("Time: 13:00 - 14:00"))
        .stdout(contains("Brand: COLAB"));
}

#[test]
fn test_show_unknown_booking() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["show", "NOPE"])
        .assert()
        .failure()
        .stderr(contains("No booking with uuid NOPE"));
}

#[test]
fn test_export_csv_round_trips_as_source() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    let out_dir = TempDir::new().expect("out");
    let out = out_dir.path().join("bookings.csv");

    rbk_in(home.path(), dir.path())
        .args(["export", "--format", "csv", "--file", &out.to_string_lossy()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with(HEADER));
    assert!(content.contains("A1,CONFIRMED,2022-11-03,09:00,10:00,U1,Room A,COLAB-01,MEETING ROOM"));
    assert!(!content.contains("BOARDROOM"));
    assert_eq!(content.lines().count(), 7);
}

#[test]
fn test_export_json_events() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    let out_dir = TempDir::new().expect("out");
    let out = out_dir.path().join("events.json");

    rbk_in(home.path(), dir.path())
        .args([
            "export",
            "--format",
            "json",
            "--events",
            "--hide-brand",
            "colab",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let events = json.as_array().expect("array");
    assert_eq!(events.len(), 3);
    assert!(content.contains("classNames"));
    assert!(content.contains("backgroundColor"));
}

#[test]
fn test_export_events_requires_json() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    let out_dir = TempDir::new().expect("out");
    let out = out_dir.path().join("events.csv");

    rbk_in(home.path(), dir.path())
        .args(["export", "--events", "--file", &out.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("only be exported as JSON"));
}

#[test]
fn test_export_requires_absolute_path() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    let out_dir = TempDir::new().expect("out");
    let out = out_dir.path().join("bookings.csv");
    fs::write(&out, "keep me").expect("seed file");

    rbk_in(home.path(), dir.path())
        .args(["export", "--file", &out.to_string_lossy()])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rbk_in(home.path(), dir.path())
        .args(["export", "--force", "--file", &out.to_string_lossy()])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with(HEADER));
}

#[test]
fn test_init_and_config() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file"));

    assert!(home.path().join("roombook.conf").exists());

    rbk_in(home.path(), dir.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    rbk_in(home.path(), dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("csv_dir"))
        .stdout(contains("xitcd.csv"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();

    rbk_in(home.path(), dir.path())
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!home.path().join("roombook.conf").exists());
}

#[test]
fn test_config_reads_csv_dir_from_file() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    fs::write(
        home.path().join("roombook.conf"),
        format!("csv_dir: {}\n", dir.path().display()),
    )
    .expect("write config");

    // no --dir: the configured directory is used, missing keys get defaults
    common::rbk()
        .env("ROOMBOOK_HOME", home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Showing 6 bookings"));

    common::rbk()
        .env("ROOMBOOK_HOME", home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("initial_month"));
}

#[test]
fn test_export_csv_keeps_quotes_readable_as_source() {
    let home = TempDir::new().expect("home");
    let dir = TempDir::new().expect("sources");
    let colab = COLAB.replace("Room A", "Room \"A\"");
    write_sources(dir.path(), &colab, XCOLAB, ITCD, XITCD);

    let out_dir = TempDir::new().expect("out");
    let out = out_dir.path().join("bookings.csv");

    rbk_in(home.path(), dir.path())
        .args(["export", "--file", &out.to_string_lossy()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains(",Room \"A\",COLAB-01,"));

    let reread = parse_bookings(&content, "bookings.csv").expect("parse export");
    let a1 = reread.iter().find(|b| b.uuid == "A1").expect("A1 exported");
    assert_eq!(a1.name, "Room \"A\"");
    assert_eq!(a1.room_type, "MEETING ROOM");
    assert_eq!(reread.len(), 6);
}

#[test]
fn test_export_nothing_to_write_leaves_existing_file() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    let out_dir = TempDir::new().expect("out");
    let out = out_dir.path().join("bookings.csv");
    fs::write(&out, "keep me").expect("seed file");

    // no rows survive the filter, so no overwrite question is asked
    rbk_in(home.path(), dir.path())
        .args([
            "export",
            "--hide-brand",
            "colab",
            "--hide-brand",
            "itcd",
            "--file",
            &out.to_string_lossy(),
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("nothing exported"))
        .stdout(contains("already exists").not());

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_config_without_csv_dir_uses_default() {
    let home = TempDir::new().expect("home");
    let dir = sample_sources();
    fs::write(home.path().join("roombook.conf"), "initial_month: \"2022-12\"\n")
        .expect("write config");

    rbk_in(home.path(), dir.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("csv_dir"));

    common::rbk()
        .env("ROOMBOOK_HOME", home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(home.path().join("csv_files").to_string_lossy().to_string()))
        .stdout(contains("2022-12"));
}
