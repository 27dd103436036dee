use crate::daykey::parse_day_key;
use crate::error::{HabitError, Result};
use crate::types::entry::DailyEntry;
use crate::types::export::DataExport;
use crate::types::habit::Habit;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum DataWarning {
    DuplicateEntry { habit_id: String, date: String },
    UnknownHabit { habit_id: String, date: String },
    InvalidDate { habit_id: String, date: String },
}

impl std::fmt::Display for DataWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntry { habit_id, date } => {
                write!(f, "duplicate entry for {habit_id} on {date}; last one kept")
            }
            Self::UnknownHabit { habit_id, date } => {
                write!(f, "entry on {date} references unknown habit {habit_id}")
            }
            Self::InvalidDate { habit_id, date } => {
                write!(f, "entry for {habit_id} has invalid day key {date}; skipped")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HabitStore {
    pub habits: Vec<Habit>,
    pub day_start: String,
    entries: BTreeMap<(String, String), DailyEntry>,
    pub warnings: Vec<DataWarning>,
}

impl HabitStore {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HabitError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let export: DataExport = serde_json::from_str(&content)
            .map_err(|e| HabitError::DataParse(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_export(export))
    }

    /// Later duplicates replace earlier ones; entries with a bad day key are skipped.
    pub fn from_export(export: DataExport) -> Self {
        let habits: Vec<Habit> = export.habits.iter().map(Habit::from_record).collect();
        let known: HashSet<&str> = habits.iter().map(|habit| habit.id.as_str()).collect();

        let mut warnings = Vec::new();
        let mut entries = BTreeMap::new();
        for entry in export.entries {
            if parse_day_key(&entry.date).is_err() {
                tracing::warn!(
                    habit = %entry.habit_id,
                    date = %entry.date,
                    "entry with invalid day key skipped"
                );
                warnings.push(DataWarning::InvalidDate {
                    habit_id: entry.habit_id,
                    date: entry.date,
                });
                continue;
            }
            let habit_id = entry.habit_id.clone();
            let date = entry.date.clone();
            if !known.contains(habit_id.as_str()) {
                tracing::warn!(habit = %habit_id, date = %date, "entry for unknown habit");
                warnings.push(DataWarning::UnknownHabit {
                    habit_id: habit_id.clone(),
                    date: date.clone(),
                });
            }
            if entries
                .insert((habit_id.clone(), date.clone()), entry)
                .is_some()
            {
                tracing::warn!(habit = %habit_id, date = %date, "duplicate entry replaced");
                warnings.push(DataWarning::DuplicateEntry { habit_id, date });
            }
        }

        tracing::debug!(
            habits = habits.len(),
            entries = entries.len(),
            "data export loaded"
        );
        Self {
            habits,
            day_start: export.settings.day_start,
            entries,
            warnings,
        }
    }

    pub fn entries_for_day(&self, date: &str) -> Vec<DailyEntry> {
        self.entries
            .values()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect()
    }

    pub fn entries_in_range(&self, from: &str, to: &str) -> Vec<DailyEntry> {
        self.entries
            .values()
            .filter(|entry| entry.date.as_str() >= from && entry.date.as_str() <= to)
            .cloned()
            .collect()
    }

    pub fn entry(&self, habit_id: &str, date: &str) -> Option<&DailyEntry> {
        self.entries.get(&(habit_id.to_string(), date.to_string()))
    }
}
