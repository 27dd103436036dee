pub mod config;
pub mod daykey;
pub mod error;
pub mod score;
pub mod store;
pub mod streak;
pub mod types;

pub use daykey::{is_future, parse_day_start, to_day_key, to_day_key_at};
pub use error::{HabitError, Result};
pub use score::{
    compute_day_summary, compute_next_entry_on_set_value, contribution_raw,
    meets_completion_thresholds, requires_value_for_completion, CompletionCandidate,
};
pub use streak::{compute_streak, compute_streak_with, compute_streaks};
pub use types::entry::DailyEntry;
pub use types::habit::{Habit, HabitRecord};
pub use types::streak::{DoneTest, HabitStreak};
pub use types::summary::DaySummary;
