use crate::models::{NutrientTotals, ProgressEntry, ProgressReport};
use serde::Serialize;

/// Fixed per-nutrient daily targets. Process-wide configuration, validated
/// once at startup; not user-editable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyLimits {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for DailyLimits {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 50.0,
            carbs: 250.0,
            fat: 65.0,
        }
    }
}

impl DailyLimits {
    /// Limits must be strictly positive so progress_percent never divides by
    /// zero. Called once before the server starts.
    pub fn validate(&self) -> Result<(), String> {
        for (name, limit) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if !(limit > 0.0) {
                return Err(format!("daily limit for {name} must be positive, got {limit}"));
            }
        }
        Ok(())
    }
}

/// `round(value / limit * 100)` clamped to 100. Values are non-negative by
/// construction; a non-positive limit (a configuration error that validate()
/// rejects) reads as 100 whenever anything was consumed.
pub fn progress_percent(value: f64, limit: f64) -> u8 {
    if limit <= 0.0 {
        return if value > 0.0 { 100 } else { 0 };
    }
    (value / limit * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Pure evaluation of the day's totals against the limits, one entry per
/// tracked nutrient.
pub fn evaluate(totals: &NutrientTotals, limits: &DailyLimits) -> ProgressReport {
    ProgressReport {
        calories: progress_entry(totals.calories, limits.calories),
        protein: progress_entry(totals.protein, limits.protein),
        carbs: progress_entry(totals.carbs, limits.carbs),
        fat: progress_entry(totals.fat, limits.fat),
    }
}

fn progress_entry(value: f64, limit: f64) -> ProgressEntry {
    ProgressEntry {
        value,
        rounded: value.round() as i64,
        percent: progress_percent(value, limit),
    }
}
