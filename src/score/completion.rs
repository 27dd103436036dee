use crate::types::habit::Habit;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompletionCandidate {
    /// A single value checked against legacy `min`/`max`/`target`.
    Value(Option<f64>),
    /// Separate quantity and minutes checked against unified thresholds.
    Entry {
        quantity: Option<f64>,
        minutes: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextEntry {
    pub completed: bool,
    pub value: Option<f64>,
}

pub fn meets_completion_thresholds(habit: &Habit, candidate: CompletionCandidate) -> bool {
    match candidate {
        CompletionCandidate::Value(value) => meets_value_thresholds(habit, value),
        CompletionCandidate::Entry { quantity, minutes } => {
            meets_entry_thresholds(habit, quantity, minutes)
        }
    }
}

fn meets_value_thresholds(habit: &Habit, value: Option<f64>) -> bool {
    let Some(gate) = habit.value_gate else {
        return false;
    };
    match value.filter(|v| v.is_finite()) {
        Some(value) => gate.admits(value),
        None => false,
    }
}

fn meets_entry_thresholds(habit: &Habit, quantity: Option<f64>, minutes: Option<f64>) -> bool {
    let quantity = quantity.filter(|v| v.is_finite());
    let minutes = minutes.filter(|v| v.is_finite());

    if !habit.has_unified_thresholds() {
        if habit.has_value_thresholds() {
            return meets_value_thresholds(habit, quantity.or(minutes));
        }
        return quantity.is_some() || minutes.is_some();
    }

    for (gate, value) in [(habit.quantity_gate, quantity), (habit.time_gate, minutes)] {
        if !gate.is_configured() {
            continue;
        }
        match value {
            Some(value) if gate.admits(value) => {}
            _ => return false,
        }
    }
    true
}

pub fn requires_value_for_completion(habit: &Habit) -> bool {
    habit.has_value_thresholds()
}

/// Thresholded habits derive `completed`; others keep the manual flag.
pub fn compute_next_entry_on_set_value(
    habit: &Habit,
    completed: bool,
    value: Option<f64>,
) -> NextEntry {
    let completed = if requires_value_for_completion(habit) {
        meets_completion_thresholds(habit, CompletionCandidate::Value(value))
    } else {
        completed
    };
    NextEntry { completed, value }
}

pub fn compute_next_entry_on_log(
    habit: &Habit,
    completed: bool,
    quantity: Option<f64>,
    minutes: Option<f64>,
) -> NextEntry {
    let completed = if habit.has_unified_thresholds() || requires_value_for_completion(habit) {
        meets_completion_thresholds(habit, CompletionCandidate::Entry { quantity, minutes })
    } else {
        completed
    };
    NextEntry {
        completed,
        value: quantity.or(minutes),
    }
}
