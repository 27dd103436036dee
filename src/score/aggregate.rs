use crate::daykey::day_keys_between;
use crate::error::Result;
use crate::score::contribution::{contribution_raw, Measured};
use crate::types::entry::DailyEntry;
use crate::types::habit::Habit;
use crate::types::summary::{DaySummary, HabitContribution};
use std::collections::HashMap;

/// Weighted day score over active habits. `entries` may hold other days;
/// only those keyed to `date` are read, and a later duplicate wins.
pub fn compute_day_summary(date: &str, habits: &[Habit], entries: &[DailyEntry]) -> DaySummary {
    let by_habit_id: HashMap<&str, &DailyEntry> = entries
        .iter()
        .filter(|entry| entry.date == date)
        .map(|entry| (entry.habit_id.as_str(), entry))
        .collect();
    summarize(date, habits, &by_habit_id)
}

/// One summary per day key in `[from, to]`, ascending.
pub fn compute_range_summaries(
    from: &str,
    to: &str,
    habits: &[Habit],
    entries: &[DailyEntry],
) -> Result<Vec<DaySummary>> {
    let mut by_day: HashMap<&str, HashMap<&str, &DailyEntry>> = HashMap::new();
    for entry in entries {
        by_day
            .entry(entry.date.as_str())
            .or_default()
            .insert(entry.habit_id.as_str(), entry);
    }

    let empty = HashMap::new();
    Ok(day_keys_between(from, to)?
        .iter()
        .map(|date| {
            let day = by_day.get(date.as_str()).unwrap_or(&empty);
            summarize(date, habits, day)
        })
        .collect())
}

fn summarize(date: &str, habits: &[Habit], entries: &HashMap<&str, &DailyEntry>) -> DaySummary {
    let mut sum_weighted = 0.0;
    let mut sum_max = 0.0;
    let mut by_habit = Vec::with_capacity(habits.len());

    for habit in habits {
        if habit.is_archived() {
            tracing::trace!(habit = %habit.id, date, "skipping archived habit");
            continue;
        }

        let entry = entries.get(habit.id.as_str()).copied();
        let raw = contribution_raw(entry, habit);
        sum_weighted += raw * habit.weight;
        sum_max += habit.weight;

        by_habit.push(HabitContribution {
            habit_id: habit.id.clone(),
            contribution: to_percent(raw),
            completed: entry.is_some_and(DailyEntry::is_completed),
            value: entry.and_then(|entry| display_value(entry, habit)),
        });
    }

    let total_score = if sum_max > 0.0 {
        to_percent(sum_weighted / sum_max)
    } else {
        0
    };
    tracing::debug!(date, total_score, habits = by_habit.len(), "day summary computed");

    DaySummary {
        date: date.to_string(),
        total_score,
        by_habit,
    }
}

fn display_value(entry: &DailyEntry, habit: &Habit) -> Option<f64> {
    Measured::of(entry, habit)
        .representative()
        .or_else(|| entry.legacy_value())
}

fn to_percent(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}
