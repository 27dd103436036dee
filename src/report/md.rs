use crate::report::Report;
use habitscore::types::summary::DaySummary;

pub fn to_markdown(report: Report<'_>) -> String {
    match report {
        Report::Day(summary) => day_markdown(summary),
        Report::Trend(summaries) => trend_markdown(summaries),
        Report::Streaks { anchor, streaks } => {
            let mut output = String::new();
            output.push_str(&format!("# Streaks as of {anchor}\n\n"));
            if streaks.is_empty() {
                output.push_str("- none\n");
                return output;
            }
            output.push_str("| habit | streak | cold | longest | status |\n");
            output.push_str("|---|---|---|---|---|\n");
            for (habit_id, streak) in streaks {
                let status = if streak.is_new {
                    "new"
                } else if streak.streak > 0 {
                    "active"
                } else {
                    "lapsed"
                };
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    habit_id, streak.streak, streak.cold_streak, streak.longest, status
                ));
            }
            output
        }
    }
}

fn day_markdown(summary: &DaySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Day {}\n\n", summary.date));
    output.push_str(&format!("Total score: {}\n\n", summary.total_score));
    output.push_str("## Habits\n\n");
    if summary.by_habit.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for habit in &summary.by_habit {
        let value = habit
            .value
            .map(|value| format!(", value {value}"))
            .unwrap_or_default();
        output.push_str(&format!(
            "- [{}] {}: {}%{}\n",
            if habit.completed { "x" } else { " " },
            habit.habit_id,
            habit.contribution,
            value
        ));
    }
    output
}

fn trend_markdown(summaries: &[DaySummary]) -> String {
    let mut output = String::new();
    output.push_str("# Trend\n\n");
    if summaries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for summary in summaries {
        output.push_str(&format!("- {}: {}\n", summary.date, summary.total_score));
    }
    output
}
