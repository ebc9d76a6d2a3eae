use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{STORE_SETTINGS, rdl, temp_home, temp_out, write_json};

#[test]
fn test_slots_text_for_a_weekday() {
    let home = temp_home("slots_text");
    let settings = write_json("slots_text", STORE_SETTINGS);

    rdl()
        .env("HOME", &home)
        .args([
            "--settings",
            &settings,
            "slots",
            "2025-09-02",
            "--now",
            "2025-09-01 08:00",
        ])
        .assert()
        .success()
        .stdout(contains("Delivery slots for 2025-09-02 (tuesday)"))
        .stdout(contains("10:00 - 12:00"))
        .stdout(contains("20:00 - 22:00"))
        .stdout(contains("6 window(s) available"));
}

#[test]
fn test_slots_same_day_lead_time() {
    let home = temp_home("slots_lead");
    let settings = write_json("slots_lead", STORE_SETTINGS);

    rdl()
        .env("HOME", &home)
        .args([
            "--settings",
            &settings,
            "slots",
            "2025-09-01",
            "--now",
            "2025-09-01T15:00:00Z",
        ])
        .assert()
        .success()
        .stdout(contains("18:00 - 20:00"))
        .stdout(contains("16:00 - 18:00").not());
}

#[test]
fn test_slots_closed_day_json() {
    let home = temp_home("slots_closed");
    let settings = write_json("slots_closed", STORE_SETTINGS);

    let output = rdl()
        .env("HOME", &home)
        .args([
            "--settings",
            &settings,
            "slots",
            "2025-09-06",
            "--now",
            "2025-09-01 08:00",
            "--format",
            "json",
        ])
        .output()
        .expect("run rdelivery");

    assert!(output.status.success());
    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(rows[0]["value"], "closed");
    assert_eq!(rows[0]["selectable"], false);
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_slots_without_date_asks_for_one() {
    let home = temp_home("slots_nodate");
    let settings = write_json("slots_nodate", STORE_SETTINGS);

    rdl()
        .env("HOME", &home)
        .args(["--settings", &settings, "slots", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("date,value,label,selectable,reason"))
        .stdout(contains(",select-date,Select a date first,false,"));
}

#[test]
fn test_slots_missing_settings_use_default_hours() {
    let home = temp_home("slots_default");

    rdl()
        .env("HOME", &home)
        .args(["slots", "2025-09-06", "--now", "2025-09-01 08:00"])
        .assert()
        .success()
        .stderr(contains("using default hours"))
        .stdout(contains("10:00 - 12:00"))
        .stdout(contains("20:00 - 22:00"));
}

#[test]
fn test_slots_export_to_file() {
    let home = temp_home("slots_export");
    let settings = write_json("slots_export", STORE_SETTINGS);
    let out = temp_out("slots_export", "csv");

    rdl()
        .env("HOME", &home)
        .args([
            "--settings",
            &settings,
            "slots",
            "2025-09-05",
            "--now",
            "2025-09-01 08:00",
            "--format",
            "csv",
            "-o",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export written");
    assert!(content.contains("2025-09-05,16:00-18:00,16:00 - 18:00,true,"));
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_slots_rejects_bad_input() {
    let home = temp_home("slots_bad");
    let settings = write_json("slots_bad", STORE_SETTINGS);

    rdl()
        .env("HOME", &home)
        .args(["--settings", &settings, "slots", "05/09/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rdl()
        .env("HOME", &home)
        .args(["--settings", &settings, "--tz", "Nowhere/City", "slots", "today"])
        .assert()
        .failure()
        .stderr(contains("Unknown timezone"));
}

#[test]
fn test_dates_table_and_csv() {
    let home = temp_home("dates");
    let settings = write_json("dates", STORE_SETTINGS);

    rdl()
        .env("HOME", &home)
        .args(["--settings", &settings, "dates", "--now", "2025-09-04 08:00"])
        .assert()
        .success()
        .stdout(contains("2025-09-06"))
        .stdout(contains("Closed"))
        .stdout(contains("3 of 5 date(s) can be booked"));

    rdl()
        .env("HOME", &home)
        .args([
            "--settings",
            &settings,
            "dates",
            "--now",
            "2025-09-04 08:00",
            "--days",
            "1",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(contains("date,weekday,selectable,slots,reason"))
        .stdout(contains("2025-09-04,thursday,true,6,"))
        .stdout(contains("2025-09-05,friday,true,4,"));
}

#[test]
fn test_hours_summary_and_schema() {
    let home = temp_home("hours");
    let settings = write_json("hours", STORE_SETTINGS);

    rdl()
        .env("HOME", &home)
        .args(["--settings", &settings, "hours"])
        .assert()
        .success()
        .stdout(contains("Corner Bakery"))
        .stdout(contains("Mon - Thu"))
        .stdout(contains("10:00-14:00,16:00-20:00"))
        .stdout(contains("Delivery fee: 15.00"))
        .stdout(contains("Free delivery from: 50"));

    rdl()
        .env("HOME", &home)
        .args(["--settings", &settings, "hours", "--schema"])
        .assert()
        .success()
        .stdout(contains("Mo 10:00-22:00"))
        .stdout(contains("Fr 16:00-20:00"))
        .stdout(contains("Sa").not());
}

#[test]
fn test_color_conversions() {
    rdl()
        .args(["color", "#ff0000"])
        .assert()
        .success()
        .stdout(contains("hsl(0, 100%, 50%)"))
        .stdout(contains("0 100% 50%"));

    rdl()
        .args(["color", "hsl(240, 100%, 50%)"])
        .assert()
        .success()
        .stdout(contains("#0000ff"))
        .stdout(contains("rgb(0, 0, 255)"));

    rdl()
        .args(["color", "#12"])
        .assert()
        .failure()
        .stderr(contains("Invalid color"));
}

#[test]
fn test_theme_to_css() {
    let theme = write_json(
        "theme_css",
        r##"{"primaryColor": "#ff0000", "fontFamilyPrimary": "Poppins", "name": "Default"}"##,
    );

    rdl()
        .args(["theme", "--file", &theme])
        .assert()
        .success()
        .stdout(contains(":root {"))
        .stdout(contains("--color-primary: hsl(0, 100%, 50%);"))
        .stdout(contains("--font-family-primary: Poppins;"));

    rdl()
        .args(["theme", "--file", &theme, "--style", "bare"])
        .assert()
        .success()
        .stdout(contains("--primary: 0 100% 50%;"));
}

#[test]
fn test_init_creates_sample_settings() {
    let home = temp_home("init");

    rdl()
        .env("HOME", &home)
        .args(["init"])
        .assert()
        .success();

    let dir = home.join(".rdelivery");
    assert!(dir.join("rdelivery.conf").exists());
    let sample = fs::read_to_string(dir.join("settings.json")).expect("sample written");
    assert!(sample.contains("workingHours"));

    rdl()
        .env("HOME", &home)
        .args(["slots", "2025-09-06", "--now", "2025-09-01 08:00"])
        .assert()
        .success()
        .stdout(contains("Closed"));

    rdl()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("slot_duration_minutes: 120"));
}

#[test]
fn test_dates_caps_oversized_booking_window() {
    let home = temp_home("dates_cap");
    let settings = write_json(
        "dates_cap",
        r#"{"maxDeliveryTimeDays": 50000000, "minDeliveryTimeHours": 100000000,
            "workingHours": {"monday": "10:00-22:00"}}"#,
    );

    rdl()
        .env("HOME", &home)
        .args([
            "--settings",
            &settings,
            "dates",
            "--now",
            "2025-09-01 08:00",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stderr(contains("maxDeliveryTimeDays 50000000 is too large, using 366"));
}
