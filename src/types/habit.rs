use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    Boolean,
    Quantified,
    Time,
}

impl HabitKind {
    pub fn value_dimension(self) -> ValueDimension {
        match self {
            Self::Boolean => ValueDimension::Ignored,
            Self::Quantified => ValueDimension::Quantity,
            Self::Time => ValueDimension::Time,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    Quantity,
    Time,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDimension {
    Quantity,
    Time,
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecord {
    pub id: String,
    pub title: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_mode: Option<ScoreMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<HabitKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_time_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, alias = "unit", skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl HabitRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            weight: DEFAULT_WEIGHT,
            score_mode: None,
            kind: None,
            min_quantity: None,
            max_quantity: None,
            min_time_minutes: None,
            max_time_minutes: None,
            target: None,
            min: None,
            max: None,
            quantity_unit: None,
            tags: BTreeSet::new(),
            created_at: Utc::now(),
            archived_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreRule {
    /// `(value - min) / (max - min)`; an unset `max` means the value is its own ceiling.
    Range { min: f64, max: Option<f64> },
    /// `value / target`.
    Target(f64),
}

impl Default for ScoreRule {
    fn default() -> Self {
        Self::Range { min: 0.0, max: None }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub target: Option<f64>,
}

impl Bounds {
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            target: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.target.is_some()
    }

    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    pub fn admits(&self, value: f64) -> bool {
        if self.is_inverted() {
            return false;
        }
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        if self.target.is_some_and(|target| value < target) {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub weight: f64,
    pub score_mode: ScoreMode,
    pub quantity_rule: ScoreRule,
    pub time_rule: ScoreRule,
    /// Dimension for a bare `value` on entries that carry no `kindAtEntry`.
    pub value_dimension: ValueDimension,
    /// Single-value gate over legacy `min`/`max`/`target`; `None` for boolean-kind habits.
    pub value_gate: Option<Bounds>,
    pub quantity_gate: Bounds,
    pub time_gate: Bounds,
    pub unit: Option<String>,
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Habit {
    pub fn from_record(record: &HabitRecord) -> Self {
        let legacy = Bounds {
            min: finite(record.min),
            max: finite(record.max),
            target: finite(record.target),
        };
        let quantity_gate = Bounds::range(finite(record.min_quantity), finite(record.max_quantity));
        let time_gate = Bounds::range(
            finite(record.min_time_minutes),
            finite(record.max_time_minutes),
        );

        let quantity_rule = if quantity_gate.min.is_some() || quantity_gate.max.is_some() {
            range_rule(&quantity_gate)
        } else if record.kind == Some(HabitKind::Quantified) {
            legacy_rule(&legacy)
        } else {
            ScoreRule::default()
        };
        let time_rule = if time_gate.min.is_some() || time_gate.max.is_some() {
            range_rule(&time_gate)
        } else if record.kind == Some(HabitKind::Time) {
            legacy_rule(&legacy)
        } else {
            ScoreRule::default()
        };

        let value_dimension = match record.kind {
            Some(HabitKind::Time) => ValueDimension::Time,
            _ => ValueDimension::Quantity,
        };
        let value_gate = match record.kind {
            Some(HabitKind::Boolean) => None,
            _ => Some(legacy),
        };

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            weight: normalize_weight(record.weight),
            score_mode: record.score_mode.unwrap_or_default(),
            quantity_rule,
            time_rule,
            value_dimension,
            value_gate,
            quantity_gate,
            time_gate,
            unit: record.quantity_unit.clone(),
            tags: record.tags.clone(),
            created_at: record.created_at,
            archived_at: record.archived_at,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    pub fn has_value_thresholds(&self) -> bool {
        self.value_gate.is_some_and(|gate| gate.is_configured())
    }

    pub fn has_unified_thresholds(&self) -> bool {
        self.quantity_gate.is_configured() || self.time_gate.is_configured()
    }
}

impl From<&HabitRecord> for Habit {
    fn from(record: &HabitRecord) -> Self {
        Self::from_record(record)
    }
}

fn range_rule(bounds: &Bounds) -> ScoreRule {
    ScoreRule::Range {
        min: bounds.min.unwrap_or(0.0),
        max: bounds.max,
    }
}

fn legacy_rule(legacy: &Bounds) -> ScoreRule {
    match legacy.target {
        Some(target) => ScoreRule::Target(target),
        None => range_rule(legacy),
    }
}

fn normalize_weight(weight: f64) -> f64 {
    if weight.is_finite() {
        weight.max(0.0)
    } else {
        DEFAULT_WEIGHT
    }
}

pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unified_thresholds_take_precedence_over_legacy_kind() {
        let mut record = HabitRecord::new("run", "Run");
        record.kind = Some(HabitKind::Quantified);
        record.target = Some(10.0);
        record.min_quantity = Some(2.0);

        let habit = Habit::from_record(&record);
        assert_eq!(
            habit.quantity_rule,
            ScoreRule::Range {
                min: 2.0,
                max: None
            }
        );
    }

    #[test]
    fn legacy_quantified_prefers_target_then_min_max() {
        let mut record = HabitRecord::new("water", "Water");
        record.kind = Some(HabitKind::Quantified);
        record.target = Some(8.0);
        assert_eq!(Habit::from_record(&record).quantity_rule, ScoreRule::Target(8.0));

        record.target = None;
        record.min = Some(1.0);
        record.max = Some(4.0);
        assert_eq!(
            Habit::from_record(&record).quantity_rule,
            ScoreRule::Range {
                min: 1.0,
                max: Some(4.0)
            }
        );
    }

    #[test]
    fn legacy_time_thresholds_feed_time_rule_only() {
        let mut record = HabitRecord::new("read", "Read");
        record.kind = Some(HabitKind::Time);
        record.target = Some(30.0);

        let habit = Habit::from_record(&record);
        assert_eq!(habit.time_rule, ScoreRule::Target(30.0));
        assert_eq!(habit.quantity_rule, ScoreRule::default());
        assert_eq!(habit.value_dimension, ValueDimension::Time);
    }

    #[test]
    fn boolean_kind_has_no_value_gate() {
        let mut record = HabitRecord::new("floss", "Floss");
        record.kind = Some(HabitKind::Boolean);
        record.min = Some(1.0);

        let habit = Habit::from_record(&record);
        assert!(habit.value_gate.is_none());
        assert!(!habit.has_value_thresholds());
    }

    #[test]
    fn weight_is_clamped_and_defaulted() {
        let mut record = HabitRecord::new("a", "A");
        record.weight = -2.0;
        assert_eq!(Habit::from_record(&record).weight, 0.0);
        record.weight = f64::NAN;
        assert_eq!(Habit::from_record(&record).weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn record_parses_camel_case_with_unit_alias() {
        let json = r#"{
            "id": "h1",
            "title": "Pushups",
            "kind": "quantified",
            "target": 50,
            "unit": "reps",
            "tags": ["fitness", "fitness", "morning"],
            "createdAt": "2024-01-01T08:00:00Z"
        }"#;
        let record: HabitRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(record.weight, DEFAULT_WEIGHT);
        assert_eq!(record.quantity_unit.as_deref(), Some("reps"));
        assert_eq!(record.tags.len(), 2);
        assert!(record.archived_at.is_none());
    }

    #[test]
    fn bounds_reject_inverted_range() {
        let bounds = Bounds::range(Some(10.0), Some(5.0));
        assert!(bounds.is_inverted());
        assert!(!bounds.admits(7.0));
    }
}
