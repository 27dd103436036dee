use crate::report::Report;
use serde_json::json;

pub fn to_json(report: Report<'_>) -> Result<String, serde_json::Error> {
    match report {
        Report::Day(summary) => serde_json::to_string_pretty(summary),
        Report::Trend(summaries) => serde_json::to_string_pretty(summaries),
        Report::Streaks { anchor, streaks } => serde_json::to_string_pretty(&json!({
            "anchor": anchor,
            "streaks": streaks,
        })),
    }
}
