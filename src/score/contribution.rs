use crate::types::entry::DailyEntry;
use crate::types::habit::{Habit, HabitKind, ScoreMode, ScoreRule, ValueDimension};

/// Upper bound of a raw contribution. The headroom above 1.0 keeps
/// overachievement visible until aggregation caps it.
pub const OVERACHIEVEMENT_CAP: f64 = 1.1;

/// Logged amounts of one entry, resolved per dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measured {
    pub quantity: Option<f64>,
    pub minutes: Option<f64>,
}

impl Measured {
    pub fn of(entry: &DailyEntry, habit: &Habit) -> Self {
        let dimension = entry
            .kind_at_entry
            .map(HabitKind::value_dimension)
            .unwrap_or(habit.value_dimension);

        let (quantity, minutes) = if entry.has_flat_detail() {
            (entry.logged_quantity(), entry.duration_minutes())
        } else {
            let totals = entry.log_totals();
            (totals.quantity, totals.minutes)
        };

        let legacy = entry.legacy_value();
        Self {
            quantity: quantity.or(legacy.filter(|_| dimension == ValueDimension::Quantity)),
            minutes: minutes.or(legacy.filter(|_| dimension == ValueDimension::Time)),
        }
    }

    /// Display representative: quantity, then minutes.
    pub fn representative(&self) -> Option<f64> {
        self.quantity.or(self.minutes)
    }
}

/// Raw score of one habit for one day, in `[0, OVERACHIEVEMENT_CAP]`.
pub fn contribution_raw(entry: Option<&DailyEntry>, habit: &Habit) -> f64 {
    let Some(entry) = entry else {
        return 0.0;
    };

    let measured = Measured::of(entry, habit);
    let quantity = measured
        .quantity
        .map(|value| normalize(value, habit.quantity_rule));
    let time = measured
        .minutes
        .map(|value| normalize(value, habit.time_rule));

    combine(habit.score_mode, quantity, time).unwrap_or(if entry.is_completed() {
        1.0
    } else {
        0.0
    })
}

pub fn normalize(value: f64, rule: ScoreRule) -> f64 {
    let ratio = match rule {
        ScoreRule::Range { min, max } => {
            let max = max.unwrap_or_else(|| min.max(value));
            (value - min) / positive_or_one(max - min)
        }
        ScoreRule::Target(target) => value / positive_or_one(target),
    };
    ratio.clamp(0.0, OVERACHIEVEMENT_CAP)
}

fn positive_or_one(span: f64) -> f64 {
    if span > 0.0 {
        span
    } else {
        1.0
    }
}

fn combine(mode: ScoreMode, quantity: Option<f64>, time: Option<f64>) -> Option<f64> {
    match mode {
        ScoreMode::Quantity => quantity,
        ScoreMode::Time => time,
        ScoreMode::Both => match (quantity, time) {
            (Some(quantity), Some(time)) => Some((quantity + time) / 2.0),
            (quantity, time) => quantity.or(time),
        },
    }
}
