use crate::types::entry::DailyEntry;
use crate::types::habit::HabitRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAY_START: &str = "00:00";

/// On-disk export consumed by the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataExport {
    #[serde(default)]
    pub habits: Vec<HabitRecord>,
    #[serde(default)]
    pub entries: Vec<DailyEntry>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_day_start")]
    pub day_start: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
        }
    }
}

fn default_day_start() -> String {
    DEFAULT_DAY_START.to_string()
}
