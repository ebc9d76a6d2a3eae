use rdelivery::core::dates::{MAX_DELIVERY_DAYS, available_dates, is_date_selectable};
use rdelivery::core::slots::SlotPolicy;

mod common;
use common::{at, date, store_week};

#[test]
fn test_dates_run_from_today_to_max_days() {
    let hours = store_week();
    let policy = SlotPolicy::default();

    let dates = available_dates(Some(&hours), &policy, 4, at("2025-09-04 08:00"));
    let days: Vec<String> = dates.iter().map(|d| d.date.to_string()).collect();

    assert_eq!(
        days,
        vec![
            "2025-09-04",
            "2025-09-05",
            "2025-09-06",
            "2025-09-07",
            "2025-09-08"
        ]
    );
    assert_eq!(dates[0].weekday, "thursday");
}

#[test]
fn test_closed_days_are_listed_but_not_selectable() {
    let hours = store_week();
    let policy = SlotPolicy::default();

    let dates = available_dates(Some(&hours), &policy, 4, at("2025-09-04 08:00"));

    let saturday = dates
        .iter()
        .find(|d| d.date == date("2025-09-06"))
        .expect("saturday listed");
    assert!(!saturday.selectable);
    assert_eq!(saturday.slots, 0);
    assert_eq!(saturday.reason.as_deref(), Some("Closed"));

    let friday = dates
        .iter()
        .find(|d| d.date == date("2025-09-05"))
        .expect("friday listed");
    assert!(friday.selectable);
    assert_eq!(friday.slots, 4);
    assert!(friday.reason.is_none());
}

#[test]
fn test_today_without_windows_left_is_disabled() {
    let hours = store_week();
    let policy = SlotPolicy::default();

    let dates = available_dates(Some(&hours), &policy, 2, at("2025-09-01 21:00"));

    assert_eq!(dates[0].date, date("2025-09-01"));
    assert!(!dates[0].selectable);
    assert_eq!(dates[0].reason.as_deref(), Some("No delivery windows left"));
    assert!(dates[1].selectable);
}

#[test]
fn test_lead_time_past_midnight_skips_today() {
    let hours = store_week();
    let policy = SlotPolicy::default();

    // 23:00 + 2h lead lands on Tuesday
    let dates = available_dates(Some(&hours), &policy, 4, at("2025-09-01 23:00"));

    assert_eq!(dates.first().map(|d| d.date), Some(date("2025-09-02")));
    assert_eq!(dates.last().map(|d| d.date), Some(date("2025-09-05")));
    assert_eq!(dates.len(), 4);
}

#[test]
fn test_is_date_selectable_matches_slot_availability() {
    let hours = store_week();
    let policy = SlotPolicy::default();
    let now = at("2025-09-01 08:00");

    assert!(is_date_selectable(Some(&hours), date("2025-09-02"), &policy, now));
    assert!(!is_date_selectable(Some(&hours), date("2025-09-06"), &policy, now));
    assert!(!is_date_selectable(Some(&hours), date("2025-08-31"), &policy, now));
}

#[test]
fn test_lead_time_beyond_calendar_gives_no_dates() {
    let hours = store_week();
    let policy = SlotPolicy {
        min_lead_hours: 4_000_000_000,
        ..SlotPolicy::default()
    };

    let dates = available_dates(Some(&hours), &policy, 4, at("2025-09-01 08:00"));
    assert!(dates.is_empty());
}

#[test]
fn test_max_days_is_capped() {
    let hours = store_week();
    let policy = SlotPolicy::default();

    let dates = available_dates(Some(&hours), &policy, 50_000_000, at("2025-09-01 08:00"));

    assert_eq!(dates.len(), MAX_DELIVERY_DAYS as usize + 1);
    assert_eq!(dates.first().map(|d| d.date), Some(date("2025-09-01")));
    assert_eq!(dates.last().map(|d| d.date), Some(date("2026-09-02")));
}
