//! Delivery slot calculator.
//!
//! Turns a store's weekly working hours into the delivery windows a
//! customer may pick for one calendar date. The computation is pure: the
//! same hours, date, policy and `now` always give the same result.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::slot::{LeadTimePrecision, SlotOutcome, TimeWindow};
use crate::models::store_settings::StoreSettings;
use crate::models::weekday::{WeekStart, weekday_name};
use crate::models::working_hours::{DaySchedule, TimeRange, WorkingHours, default_closed_markers};
use crate::utils::time::minute_of_day;
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Hours assumed when a store has not configured any: six two-hour
/// windows from 10:00 to 22:00.
pub const DEFAULT_RANGE: TimeRange = TimeRange {
    start: 10 * 60,
    end: 22 * 60,
};

/// Parameters of a slot computation, resolved from store settings and
/// configuration.
#[derive(Debug, Clone)]
pub struct SlotPolicy {
    pub week_start: WeekStart,
    pub min_lead_hours: u32,
    pub lead_precision: LeadTimePrecision,
    /// Window width. `resolve` rejects zero; a policy built by hand with
    /// zero is computed with one-minute windows.
    pub slot_minutes: u32,
    pub offer_asap: bool,
    pub fallback_to_default_hours: bool,
    pub closed_markers: Vec<String>,
    pub timezone: Tz,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            min_lead_hours: 2,
            lead_precision: LeadTimePrecision::Hour,
            slot_minutes: 120,
            offer_asap: false,
            fallback_to_default_hours: true,
            closed_markers: default_closed_markers(),
            timezone: Tz::UTC,
        }
    }
}

impl SlotPolicy {
    /// Store settings win over config defaults; `tz_override` wins over both.
    pub fn resolve(
        cfg: &Config,
        settings: &StoreSettings,
        tz_override: Option<&str>,
    ) -> AppResult<Self> {
        if cfg.slot_duration_minutes == 0 {
            return Err(AppError::Config(
                "slot_duration_minutes must be greater than zero".into(),
            ));
        }

        let tz_name = tz_override
            .or(settings.timezone.as_deref())
            .unwrap_or(&cfg.timezone);

        Ok(Self {
            week_start: settings.week_start_day.unwrap_or_default(),
            min_lead_hours: settings
                .min_delivery_time_hours
                .unwrap_or(cfg.min_delivery_time_hours),
            lead_precision: cfg.lead_time_precision,
            slot_minutes: cfg.slot_duration_minutes,
            offer_asap: cfg.offer_asap,
            fallback_to_default_hours: cfg.fallback_to_default_hours,
            closed_markers: cfg.closed_markers.clone(),
            timezone: parse_timezone(tz_name)?,
        })
    }
}

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

/// Compute the delivery slots for `date`.
///
/// Never fails: a missing date, closed day or malformed schedule comes back
/// as a single non-selectable outcome.
pub fn compute_slots(
    working_hours: Option<&WorkingHours>,
    date: Option<NaiveDate>,
    policy: &SlotPolicy,
    now: DateTime<Utc>,
) -> Vec<SlotOutcome> {
    let Some(date) = date else {
        return vec![SlotOutcome::DateNotSelected];
    };

    let ranges = match day_ranges(working_hours, date, policy) {
        Ok(ranges) => ranges,
        Err(outcome) => return vec![outcome],
    };

    let local_now = now.with_timezone(&policy.timezone);
    let today = local_now.date_naive();
    if date < today {
        return vec![SlotOutcome::NoWindowsLeft];
    }

    let width = policy.slot_minutes.max(1);
    let mut windows: Vec<TimeWindow> = ranges
        .iter()
        .flat_map(|range| windows_for_range(range, width))
        .collect();

    let is_today = date == today;
    if is_today {
        let threshold = lead_threshold(local_now.time(), policy);
        windows.retain(|w| w.start >= threshold);
        debug!(%date, threshold, remaining = windows.len(), "same-day lead time applied");
    }

    if windows.is_empty() {
        return vec![SlotOutcome::NoWindowsLeft];
    }

    let mut out = Vec::with_capacity(windows.len() + 1);
    if policy.offer_asap && is_today {
        out.push(SlotOutcome::Asap);
    }
    out.extend(windows.into_iter().map(SlotOutcome::Available));
    out
}

/// Opening ranges of the weekday `date` falls on, or the outcome that
/// replaces the whole slot list.
fn day_ranges(
    working_hours: Option<&WorkingHours>,
    date: NaiveDate,
    policy: &SlotPolicy,
) -> Result<Vec<TimeRange>, SlotOutcome> {
    let hours = match working_hours {
        Some(h) if !h.is_empty() => h,
        _ if policy.fallback_to_default_hours => {
            debug!(%date, "no working hours configured, using default hours");
            return Ok(vec![DEFAULT_RANGE]);
        }
        _ => return Err(SlotOutcome::NoScheduleConfigured),
    };

    let day = policy.week_start.weekday_of(date);

    match hours.schedule_for(day, &policy.closed_markers) {
        Ok(DaySchedule::Closed) => Err(SlotOutcome::Closed),
        Ok(DaySchedule::Open(ranges)) => Ok(ranges),
        Err(err) => {
            let reason = match err {
                AppError::InvalidSchedule(reason) => reason,
                other => other.to_string(),
            };
            debug!(day = weekday_name(day), %reason, "unusable working hours");
            Err(SlotOutcome::InvalidSchedule { reason })
        }
    }
}

/// Split a range into `width`-minute windows ending exactly at the range
/// end. A leading remainder shorter than `width` is dropped; a range no
/// longer than `width` is a single window.
pub fn windows_for_range(range: &TimeRange, width: u32) -> Vec<TimeWindow> {
    if range.duration_minutes() <= width {
        return vec![TimeWindow::new(range.start, range.end)];
    }

    let mut out = Vec::new();
    let mut end = range.end;
    while end >= range.start + width {
        out.push(TimeWindow::new(end - width, end));
        end -= width;
    }
    out.reverse();
    out
}

/// Earliest window start (minutes since midnight) orderable today.
/// Saturates, so a lead time longer than the day leaves nothing today.
fn lead_threshold(now: NaiveTime, policy: &SlotPolicy) -> u32 {
    let lead = policy.min_lead_hours.saturating_mul(60);
    let base = match policy.lead_precision {
        LeadTimePrecision::Hour => now.hour() * 60,
        LeadTimePrecision::Minute => minute_of_day(now),
    };
    base.saturating_add(lead)
}
