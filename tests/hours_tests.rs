use chrono::Weekday;
use rdelivery::core::hours::{HoursGroup, group_working_hours, opening_hours_spec};
use rdelivery::models::weekday::WeekStart;
use rdelivery::models::working_hours::{DaySchedule, WorkingHours, default_closed_markers};

mod common;
use common::store_week;

#[test]
fn test_consecutive_days_with_same_hours_are_grouped() {
    let groups = group_working_hours(&store_week(), WeekStart::Monday);

    let summary: Vec<(String, String)> = groups
        .iter()
        .map(|g| (g.label(), g.hours.clone()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Mon - Thu".to_string(), "10:00-22:00".to_string()),
            ("Fri".to_string(), "10:00-14:00,16:00-20:00".to_string()),
            ("Sat".to_string(), "closed".to_string()),
        ]
    );
}

#[test]
fn test_week_start_changes_grouping_order() {
    let hours = WorkingHours::new()
        .with_day(Weekday::Sun, "10:00-20:00")
        .with_day(Weekday::Mon, "10:00-20:00")
        .with_day(Weekday::Tue, "10:00-20:00")
        .with_day(Weekday::Fri, "09:00-13:00");

    let sunday_first = group_working_hours(&hours, WeekStart::Sunday);
    assert_eq!(sunday_first[0].label(), "Sun - Tue");
    assert_eq!(sunday_first[1].label(), "Fri");

    let monday_first = group_working_hours(&hours, WeekStart::Monday);
    let labels: Vec<String> = monday_first.iter().map(HoursGroup::label).collect();
    assert_eq!(labels, vec!["Mon, Tue", "Fri", "Sun"]);
}

#[test]
fn test_schema_entries_cover_every_open_range() {
    let entries = opening_hours_spec(&store_week(), &default_closed_markers());

    assert_eq!(
        entries,
        vec![
            "Mo 10:00-22:00",
            "Tu 10:00-22:00",
            "We 10:00-22:00",
            "Th 10:00-22:00",
            "Fr 10:00-14:00",
            "Fr 16:00-20:00",
        ]
    );
}

#[test]
fn test_schema_skips_invalid_days() {
    let hours = WorkingHours::new()
        .with_day(Weekday::Mon, "10-22")
        .with_day(Weekday::Tue, "11:00-19:00");

    let entries = opening_hours_spec(&hours, &default_closed_markers());
    assert_eq!(entries, vec!["Tu 11:00-19:00"]);
}

#[test]
fn test_day_schedule_parsing() {
    let markers = default_closed_markers();

    let open = DaySchedule::parse(" 10:00 - 14:00 , 16:00-20:00 ", &markers).expect("valid");
    match open {
        DaySchedule::Open(ranges) => {
            assert_eq!(ranges.len(), 2);
            assert_eq!(ranges[1].to_string(), "16:00-20:00");
        }
        DaySchedule::Closed => panic!("expected open day"),
    }

    assert!(DaySchedule::parse("  ", &markers).expect("valid").is_closed());
    assert!(DaySchedule::parse("9:00-10:00", &markers).is_ok());
    assert!(DaySchedule::parse("10:00-10:00", &markers).is_err());
}

#[test]
fn test_day_without_hours_breaks_group() {
    let hours = WorkingHours::new()
        .with_day(Weekday::Mon, "10:00-20:00")
        .with_day(Weekday::Wed, "10:00-20:00");

    let labels: Vec<String> = group_working_hours(&hours, WeekStart::Monday)
        .iter()
        .map(HoursGroup::label)
        .collect();
    assert_eq!(labels, vec!["Mon", "Wed"]);
}
