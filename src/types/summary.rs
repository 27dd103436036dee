use serde::Serialize;

/// Derived per-day result. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: String,
    pub total_score: u8,
    pub by_habit: Vec<HabitContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitContribution {
    pub habit_id: String,
    pub contribution: u8,
    pub completed: bool,
    pub value: Option<f64>,
}
