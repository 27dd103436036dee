pub mod aggregate;
pub mod completion;
pub mod contribution;

pub use aggregate::{compute_day_summary, compute_range_summaries};
pub use completion::{
    compute_next_entry_on_log, compute_next_entry_on_set_value, meets_completion_thresholds,
    requires_value_for_completion, CompletionCandidate, NextEntry,
};
pub use contribution::{contribution_raw, Measured, OVERACHIEVEMENT_CAP};
