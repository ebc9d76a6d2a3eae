#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono::Weekday;
use rdelivery::models::working_hours::WorkingHours;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdelivery")
}

/// Fresh, empty directory inside the system temp dir, used as HOME so the
/// binary never touches a real configuration.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdelivery_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a JSON document to a temp file and return its path.
pub fn write_json(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdelivery.json", name));
    fs::write(&path, json).expect("write temp json");
    path.to_string_lossy().to_string()
}

/// Settings payload of a store open Mon-Thu 10-22, split hours on Friday,
/// closed on Saturday and with no Sunday hours.
pub const STORE_SETTINGS: &str = r#"{
    "storeName": "Corner Bakery",
    "weekStartDay": "monday",
    "minDeliveryTimeHours": 2,
    "maxDeliveryTimeDays": 4,
    "timezone": "UTC",
    "deliveryFee": "15.00",
    "freeDeliveryFrom": 50,
    "workingHours": {
        "monday": "10:00-22:00",
        "tuesday": "10:00-22:00",
        "wednesday": "10:00-22:00",
        "thursday": "10:00-22:00",
        "friday": "10:00-14:00,16:00-20:00",
        "saturday": "closed",
        "sunday": ""
    }
}"#;

/// Same week as [`STORE_SETTINGS`], as a library value.
pub fn store_week() -> WorkingHours {
    WorkingHours::new()
        .with_day(Weekday::Mon, "10:00-22:00")
        .with_day(Weekday::Tue, "10:00-22:00")
        .with_day(Weekday::Wed, "10:00-22:00")
        .with_day(Weekday::Thu, "10:00-22:00")
        .with_day(Weekday::Fri, "10:00-14:00,16:00-20:00")
        .with_day(Weekday::Sat, "closed")
        .with_day(Weekday::Sun, "")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// UTC instant from `YYYY-MM-DD HH:MM`.
pub fn at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .expect("valid test timestamp")
        .and_utc()
}
