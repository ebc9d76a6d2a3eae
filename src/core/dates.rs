//! Delivery date availability: which calendar days can be picked.

use crate::core::slots::{SlotPolicy, compute_slots};
use crate::models::weekday::weekday_name;
use crate::models::working_hours::WorkingHours;
use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

/// Upper bound on how far ahead dates are listed.
pub const MAX_DELIVERY_DAYS: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryDate {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub selectable: bool,
    /// Number of selectable slots on that day
    pub slots: usize,
    /// Why the day cannot be picked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Dates from the day the lead time ends up to `today + max_days`, in the
/// store timezone. `max_days` is capped at [`MAX_DELIVERY_DAYS`]; a lead
/// time past the representable calendar yields no dates.
pub fn available_dates(
    working_hours: Option<&WorkingHours>,
    policy: &SlotPolicy,
    max_days: u32,
    now: DateTime<Utc>,
) -> Vec<DeliveryDate> {
    let local_now = now.with_timezone(&policy.timezone);
    let today = local_now.date_naive();

    let Some(earliest) = TimeDelta::try_hours(policy.min_lead_hours as i64)
        .and_then(|lead| local_now.checked_add_signed(lead))
        .map(|dt| dt.date_naive())
    else {
        return Vec::new();
    };
    let max_days = max_days.min(MAX_DELIVERY_DAYS);
    let Some(last) = today.checked_add_days(Days::new(max_days as u64)) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut day = earliest;
    while day <= last {
        out.push(describe_date(working_hours, day, policy, now));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    out
}

/// Disabled-date predicate for a date picker.
pub fn is_date_selectable(
    working_hours: Option<&WorkingHours>,
    date: NaiveDate,
    policy: &SlotPolicy,
    now: DateTime<Utc>,
) -> bool {
    compute_slots(working_hours, Some(date), policy, now)
        .iter()
        .any(|o| o.is_selectable())
}

fn describe_date(
    working_hours: Option<&WorkingHours>,
    date: NaiveDate,
    policy: &SlotPolicy,
    now: DateTime<Utc>,
) -> DeliveryDate {
    let outcomes = compute_slots(working_hours, Some(date), policy, now);
    let slots = outcomes.iter().filter(|o| o.is_selectable()).count();

    DeliveryDate {
        date,
        weekday: weekday_name(policy.week_start.weekday_of(date)),
        selectable: slots > 0,
        slots,
        reason: if slots > 0 {
            None
        } else {
            outcomes.first().map(|o| o.label())
        },
    }
}
