use serde::{Deserialize, Serialize};

/// What counts as a "done" day when walking a streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoneTest {
    /// The manual `completed` toggle.
    #[default]
    Completed,
    /// Raw contribution of at least 1.
    FullScore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreak {
    pub streak: u32,
    pub cold_streak: u32,
    /// No done day anywhere in the window.
    pub is_new: bool,
    pub longest: u32,
}
