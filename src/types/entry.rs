use crate::types::habit::{finite, HabitKind};
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: f64 = 1440.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSession {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<String>,
}

impl LogSession {
    pub fn duration_minutes(&self) -> Option<f64> {
        duration(self.start_minutes, self.end_minutes)
    }
}

/// One habit's record for one day key. Identity is `(habit_id, date)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub habit_id: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<LogSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_at_entry: Option<HabitKind>,
}

/// Summed log sessions for one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogTotals {
    pub quantity: Option<f64>,
    pub minutes: Option<f64>,
}

impl DailyEntry {
    pub fn new(habit_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            habit_id: habit_id.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }

    pub fn logged_quantity(&self) -> Option<f64> {
        finite(self.quantity)
    }

    pub fn duration_minutes(&self) -> Option<f64> {
        duration(self.start_minutes, self.end_minutes)
    }

    pub fn legacy_value(&self) -> Option<f64> {
        finite(self.value)
    }

    pub fn has_flat_detail(&self) -> bool {
        self.logged_quantity().is_some() || self.duration_minutes().is_some()
    }

    pub fn log_totals(&self) -> LogTotals {
        let sum = |values: Vec<f64>| (!values.is_empty()).then(|| values.iter().sum());
        LogTotals {
            quantity: sum(self
                .logs
                .iter()
                .filter_map(|log| finite(log.quantity))
                .collect()),
            minutes: sum(self
                .logs
                .iter()
                .filter_map(LogSession::duration_minutes)
                .collect()),
        }
    }
}

fn minute_of_day(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|minute| (0.0..MINUTES_PER_DAY).contains(minute))
}

fn duration(start: Option<f64>, end: Option<f64>) -> Option<f64> {
    let start = minute_of_day(start)?;
    let end = minute_of_day(end)?;
    Some((end - start).max(0.0))
}
