pub mod json;
pub mod md;

use habitscore::error::HabitError;
use habitscore::types::streak::HabitStreak;
use habitscore::types::summary::DaySummary;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Day(&'a DaySummary),
    Trend(&'a [DaySummary]),
    Streaks {
        anchor: &'a str,
        streaks: &'a BTreeMap<String, HabitStreak>,
    },
}

pub fn render(report: Report<'_>, format: OutputFormat) -> Result<String, HabitError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(HabitError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
