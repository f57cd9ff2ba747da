use crate::models::{DaySummary, FoodLogEntry, NutrientTotals};
use chrono::{Duration, Local, NaiveDate};

/// Sums the four tracked nutrients over all entries logged on `date`.
/// Dates compare by local calendar day; entries carry the day they were
/// stamped with at creation, so no time-zone conversion happens here.
pub fn daily_totals(entries: &[FoodLogEntry], date: NaiveDate) -> NutrientTotals {
    let key = date_key(date);
    let mut totals = NutrientTotals::default();
    for entry in entries.iter().filter(|entry| entry.date == key) {
        totals.calories += entry.calories;
        totals.protein += entry.protein;
        totals.carbs += entry.carbs;
        totals.fat += entry.fat;
    }
    totals
}

/// One summary per day for the 7-day window ending at `reference` inclusive,
/// oldest first. Days with nothing logged report zero calories and zero items.
pub fn weekly_breakdown(entries: &[FoodLogEntry], reference: NaiveDate) -> Vec<DaySummary> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = reference - Duration::days(offset);
            let key = date_key(date);
            let mut calories = 0.0;
            let mut items = 0;
            for entry in entries.iter().filter(|entry| entry.date == key) {
                calories += entry.calories;
                items += 1;
            }
            DaySummary {
                date: key,
                weekday: date.format("%a").to_string(),
                calories,
                items,
            }
        })
        .collect()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
