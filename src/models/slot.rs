use crate::utils::time::format_clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A deliverable window on a given day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Machine identifier, `HH:MM-HH:MM`.
    pub fn value(&self) -> String {
        format!("{}-{}", format_clock(self.start), format_clock(self.end))
    }

    /// Human label, `HH:MM - HH:MM`.
    pub fn label(&self) -> String {
        format!("{} - {}", format_clock(self.start), format_clock(self.end))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

/// Result entry of a slot computation.
///
/// Only `Asap` and `Available` may be offered for selection; every other
/// variant explains why nothing can be chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    Asap,
    Available(TimeWindow),
    Closed,
    NoScheduleConfigured,
    InvalidSchedule { reason: String },
    DateNotSelected,
    NoWindowsLeft,
}

impl SlotOutcome {
    pub fn is_selectable(&self) -> bool {
        matches!(self, SlotOutcome::Asap | SlotOutcome::Available(_))
    }

    pub fn window(&self) -> Option<&TimeWindow> {
        match self {
            SlotOutcome::Available(w) => Some(w),
            _ => None,
        }
    }

    /// Identifier used by form controls and stored on orders.
    pub fn value(&self) -> String {
        match self {
            SlotOutcome::Asap => "asap".into(),
            SlotOutcome::Available(w) => w.value(),
            SlotOutcome::Closed => "closed".into(),
            SlotOutcome::NoScheduleConfigured => "no-schedule".into(),
            SlotOutcome::InvalidSchedule { .. } => "invalid-hours".into(),
            SlotOutcome::DateNotSelected => "select-date".into(),
            SlotOutcome::NoWindowsLeft => "no-slots".into(),
        }
    }

    /// Default English label; translations are applied by the caller.
    pub fn label(&self) -> String {
        match self {
            SlotOutcome::Asap => "As soon as possible".into(),
            SlotOutcome::Available(w) => w.label(),
            SlotOutcome::Closed => "Closed".into(),
            SlotOutcome::NoScheduleConfigured => "Working hours not configured".into(),
            SlotOutcome::InvalidSchedule { .. } => "Invalid working hours".into(),
            SlotOutcome::DateNotSelected => "Select a date first".into(),
            SlotOutcome::NoWindowsLeft => "No delivery windows left".into(),
        }
    }

    pub fn to_delivery_slot(&self) -> DeliverySlot {
        DeliverySlot {
            value: self.value(),
            label: self.label(),
            selectable: self.is_selectable(),
            reason: match self {
                SlotOutcome::InvalidSchedule { reason } => Some(reason.clone()),
                _ => None,
            },
        }
    }
}

/// Flat form of a [`SlotOutcome`] for option lists and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliverySlot {
    pub value: String,
    pub label: String,
    pub selectable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Granularity of the same-day lead-time cut-off.
///
/// `Hour` uses the current clock hour (`15:40` counts as `15:00`), `Minute`
/// uses the exact minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTimePrecision {
    #[default]
    Hour,
    Minute,
}
