use crate::daykey::{format_day_key, parse_day_key};
use crate::error::Result;
use crate::score::contribution::contribution_raw;
use crate::types::config::StreakSettings;
use crate::types::entry::DailyEntry;
use crate::types::habit::Habit;
use crate::types::streak::{DoneTest, HabitStreak};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

impl DoneTest {
    pub fn is_done(self, entry: Option<&DailyEntry>, habit: &Habit) -> bool {
        match self {
            Self::Completed => entry.is_some_and(DailyEntry::is_completed),
            Self::FullScore => contribution_raw(entry, habit) >= 1.0,
        }
    }
}

pub fn compute_streak(
    habit: &Habit,
    entries: &[DailyEntry],
    anchor: &str,
    window_days: u32,
    done_test: DoneTest,
) -> Result<HabitStreak> {
    compute_streak_with(habit, entries, anchor, window_days, |entry, habit| {
        done_test.is_done(entry, habit)
    })
}

/// Streak with a caller-supplied done predicate. Entries of other habits are ignored.
pub fn compute_streak_with<F>(
    habit: &Habit,
    entries: &[DailyEntry],
    anchor: &str,
    window_days: u32,
    is_done: F,
) -> Result<HabitStreak>
where
    F: Fn(Option<&DailyEntry>, &Habit) -> bool,
{
    let anchor = parse_day_key(anchor)?;
    let by_date: HashMap<&str, &DailyEntry> = entries
        .iter()
        .filter(|entry| entry.habit_id == habit.id)
        .map(|entry| (entry.date.as_str(), entry))
        .collect();
    Ok(walk(habit, &by_date, anchor, window_days, &is_done))
}

pub fn compute_streaks(
    habits: &[Habit],
    entries: &[DailyEntry],
    anchor: &str,
    settings: StreakSettings,
) -> Result<BTreeMap<String, HabitStreak>> {
    let anchor = parse_day_key(anchor)?;
    let mut by_habit: HashMap<&str, HashMap<&str, &DailyEntry>> = HashMap::new();
    for entry in entries {
        by_habit
            .entry(entry.habit_id.as_str())
            .or_default()
            .insert(entry.date.as_str(), entry);
    }

    let empty = HashMap::new();
    let is_done = |entry: Option<&DailyEntry>, habit: &Habit| settings.done_test.is_done(entry, habit);
    Ok(habits
        .iter()
        .map(|habit| {
            let days = by_habit.get(habit.id.as_str()).unwrap_or(&empty);
            let streak = walk(habit, days, anchor, settings.window_days, &is_done);
            (habit.id.clone(), streak)
        })
        .collect())
}

fn walk<F>(
    habit: &Habit,
    by_date: &HashMap<&str, &DailyEntry>,
    anchor: NaiveDate,
    window_days: u32,
    is_done: &F,
) -> HabitStreak
where
    F: Fn(Option<&DailyEntry>, &Habit) -> bool,
{
    // index 0 is the anchor, walking backward
    let done: Vec<bool> = std::iter::successors(Some(anchor), |date| date.pred_opt())
        .take(window_days.max(1) as usize)
        .map(|date| is_done(by_date.get(format_day_key(date).as_str()).copied(), habit))
        .collect();

    let start = usize::from(!done[0]);
    let streak = done.iter().skip(start).take_while(|d| **d).count();
    let unbroken_gap = done.iter().take_while(|d| !**d).count();

    let mut longest = 0;
    let mut run = 0;
    for day in &done {
        run = if *day { run + 1 } else { 0 };
        longest = longest.max(run);
    }

    HabitStreak {
        streak: streak as u32,
        cold_streak: unbroken_gap.saturating_sub(1) as u32,
        is_new: !done.contains(&true),
        longest: longest as u32,
    }
}
