//! Date parsing helpers for CLI arguments.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, or `today` / `tomorrow` relative to `now` in the store zone.
pub fn parse_date_arg(s: &str, tz: Tz, now: DateTime<Utc>) -> AppResult<NaiveDate> {
    let today = now.with_timezone(&tz).date_naive();
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        _ => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Reference instant for a computation.
///
/// RFC 3339 values carry their own offset; `YYYY-MM-DD HH:MM` (or with `T`)
/// is read as wall-clock time in the store zone. `None` means the real
/// current time.
pub fn parse_now(s: Option<&str>, tz: Tz) -> AppResult<DateTime<Utc>> {
    let Some(raw) = s else {
        return Ok(Utc::now());
    };
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidDate(raw.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(format!("{raw} does not exist in {tz}")))
}
