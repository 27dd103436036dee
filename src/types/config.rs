use crate::daykey::{format_day_start, parse_day_start};
use crate::error::HabitError;
use crate::types::streak::DoneTest;
use serde::Deserialize;

pub const DEFAULT_WINDOW_DAYS: u32 = 366;
pub const MAX_WINDOW_DAYS: u32 = 3660;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HabitConfig {
    pub day: Option<DayConfig>,
    pub streaks: Option<StreakConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayConfig {
    pub start: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreakConfig {
    pub window_days: Option<u32>,
    pub done_test: Option<DoneTest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakSettings {
    pub window_days: u32,
    pub done_test: DoneTest,
}

impl Default for StreakSettings {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            done_test: DoneTest::default(),
        }
    }
}

impl HabitConfig {
    pub fn day_start(&self) -> Option<&str> {
        self.day
            .as_ref()
            .and_then(|day| day.start.as_deref())
    }

    pub fn streak_settings(&self) -> StreakSettings {
        let defaults = StreakSettings::default();
        match &self.streaks {
            Some(streaks) => StreakSettings {
                window_days: streaks.window_days.unwrap_or(defaults.window_days),
                done_test: streaks.done_test.unwrap_or(defaults.done_test),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), HabitError> {
        if let Some(start) = self.day_start() {
            let normalized = format_day_start(parse_day_start(start));
            if normalized != start.trim() {
                tracing::warn!(
                    configured = start,
                    effective = %normalized,
                    "day.start is not a valid HH:mm value"
                );
            }
        }

        if let Some(window_days) = self
            .streaks
            .as_ref()
            .and_then(|streaks| streaks.window_days)
        {
            if window_days == 0 {
                return Err(HabitError::ConfigParse(
                    "streaks.window_days must be greater than 0".to_string(),
                ));
            }
            if window_days > MAX_WINDOW_DAYS {
                return Err(HabitError::ConfigParse(format!(
                    "streaks.window_days must be at most {MAX_WINDOW_DAYS} (found {window_days})"
                )));
            }
        }

        Ok(())
    }
}
