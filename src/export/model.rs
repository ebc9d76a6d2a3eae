// src/export/model.rs

use crate::core::dates::DeliveryDate;
use crate::models::slot::SlotOutcome;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat slot row for JSON/CSV exports.
#[derive(Serialize, Clone, Debug)]
pub struct SlotRow {
    pub date: String,
    pub value: String,
    pub label: String,
    pub selectable: bool,
    pub reason: String,
}

impl SlotRow {
    pub fn from_outcome(date: Option<NaiveDate>, outcome: &SlotOutcome) -> Self {
        let slot = outcome.to_delivery_slot();
        Self {
            date: date.map(|d| d.to_string()).unwrap_or_default(),
            value: slot.value,
            label: slot.label,
            selectable: slot.selectable,
            reason: slot.reason.unwrap_or_default(),
        }
    }
}

/// Flat delivery-date row for JSON/CSV exports.
#[derive(Serialize, Clone, Debug)]
pub struct DateRow {
    pub date: String,
    pub weekday: String,
    pub selectable: bool,
    pub slots: usize,
    pub reason: String,
}

impl From<&DeliveryDate> for DateRow {
    fn from(d: &DeliveryDate) -> Self {
        Self {
            date: d.date.to_string(),
            weekday: d.weekday.to_string(),
            selectable: d.selectable,
            slots: d.slots,
            reason: d.reason.clone().unwrap_or_default(),
        }
    }
}
