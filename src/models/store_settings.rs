//! Store settings as served by the storefront's settings endpoint.
//!
//! Only the fields used by the delivery planner are modelled; everything
//! else in the payload is ignored. Loading is lenient: a malformed field
//! degrades to "absent" with a warning instead of rejecting the file.

use crate::errors::{AppError, AppResult};
use crate::models::weekday::WeekStart;
use crate::models::working_hours::{DayEntry, WorkingHours};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(default)]
    pub store_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_hours")]
    pub working_hours: Option<WorkingHours>,

    #[serde(default, deserialize_with = "lenient_week_start")]
    pub week_start_day: Option<WeekStart>,

    #[serde(default, deserialize_with = "lenient_u32")]
    pub min_delivery_time_hours: Option<u32>,

    #[serde(default, deserialize_with = "lenient_u32")]
    pub max_delivery_time_days: Option<u32>,

    /// IANA zone the store operates in (e.g. `Asia/Jerusalem`).
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub delivery_fee: Option<Value>,

    #[serde(default)]
    pub free_delivery_from: Option<Value>,
}

impl StoreSettings {
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::SettingsNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        debug!(path = %path.display(), "store settings loaded");
        Ok(settings)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Render a money field that may arrive as `"15.00"` or `15`.
pub fn display_amount(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_hours<'de, D>(deserializer: D) -> Result<Option<WorkingHours>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let map = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(map)) => map,
        Some(other) => {
            warn!(value = %other, "workingHours is not an object, treating as not configured");
            return Ok(None);
        }
    };

    let mut entries = BTreeMap::new();
    for (key, raw) in map {
        let entry = match raw {
            Value::Null => None,
            Value::String(s) => Some(DayEntry::Text(s)),
            other => match serde_json::from_value::<DayEntry>(other.clone()) {
                Ok(entry) => Some(entry),
                // kept as text so the day reports invalid hours instead of vanishing
                Err(_) => Some(DayEntry::Text(other.to_string())),
            },
        };
        entries.insert(key, entry);
    }

    let hours = WorkingHours::from_entries(entries);
    for key in hours.unknown_keys() {
        warn!(key, "ignoring unknown day in workingHours");
    }
    Ok(Some(hours))
}

fn lenient_week_start<'de, D>(deserializer: D) -> Result<Option<WeekStart>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let parsed = WeekStart::from_code(&s);
            if parsed.is_none() {
                warn!(value = %s, "unknown weekStartDay, using default");
            }
            parsed
        }
        _ => None,
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}
