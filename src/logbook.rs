use crate::models::{FoodLogEntry, NewFoodEntry};
use chrono::{DateTime, Local};

/// Builds a full entry from a partial item and appends it to the log.
///
/// `date` is stamped to the local calendar day of `now` and is immutable
/// afterwards; entries cannot be back-dated. A missing id falls back to the
/// epoch-millisecond timestamp of `now` — two adds within the same
/// millisecond can collide, which the log accepts silently, the same way a
/// caller-supplied duplicate barcode is accepted.
pub fn append_entry(
    log: &mut Vec<FoodLogEntry>,
    item: NewFoodEntry,
    now: DateTime<Local>,
) -> FoodLogEntry {
    let entry = FoodLogEntry {
        id: item
            .id
            .unwrap_or_else(|| now.timestamp_millis().to_string()),
        name: item.name,
        brand: item.brand,
        calories: item.calories,
        protein: item.protein,
        carbs: item.carbs,
        fat: item.fat,
        fiber: item.fiber,
        sugar: item.sugar,
        kind: item.kind,
        date: now.date_naive().format("%Y-%m-%d").to_string(),
        time: now.format("%H:%M").to_string(),
    };
    log.push(entry.clone());
    entry
}

/// Drops every entry whose id matches. Returns whether anything was removed;
/// a miss is a no-op, not an error. Surviving entries keep their order.
pub fn remove_entry(log: &mut Vec<FoodLogEntry>, id: &str) -> bool {
    let before = log.len();
    log.retain(|entry| entry.id != id);
    log.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use chrono::TimeZone;

    fn item(name: &str, id: Option<&str>) -> NewFoodEntry {
        NewFoodEntry {
            name: name.into(),
            id: id.map(String::from),
            brand: None,
            calories: 105.0,
            protein: 1.3,
            carbs: 27.0,
            fat: 0.4,
            fiber: 0.0,
            sugar: 0.0,
            kind: EntryKind::Product,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn append_stamps_date_time_and_generates_numeric_id() {
        let mut log = Vec::new();
        let now = at(2026, 8, 27, 9, 15);
        let entry = append_entry(&mut log, item("Banana", None), now);

        assert_eq!(log.len(), 1);
        assert_eq!(log[0], entry);
        assert_eq!(entry.date, "2026-08-27");
        assert_eq!(entry.time, "09:15");
        assert_eq!(entry.name, "Banana");
        assert_eq!(entry.calories, 105.0);
        entry.id.parse::<i64>().expect("generated id is numeric");
    }

    #[test]
    fn append_keeps_caller_supplied_id() {
        let mut log = Vec::new();
        let entry = append_entry(
            &mut log,
            item("Muesli", Some("4001234567890")),
            at(2026, 8, 27, 12, 0),
        );
        assert_eq!(entry.id, "4001234567890");
    }

    #[test]
    fn remove_filters_by_id_preserving_order() {
        let mut log = Vec::new();
        let now = at(2026, 8, 27, 8, 0);
        append_entry(&mut log, item("a", Some("1")), now);
        append_entry(&mut log, item("b", Some("2")), now);
        append_entry(&mut log, item("c", Some("3")), now);

        assert!(remove_entry(&mut log, "2"));
        let ids: Vec<&str> = log.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut log = Vec::new();
        append_entry(&mut log, item("a", Some("1")), at(2026, 8, 27, 8, 0));
        assert!(!remove_entry(&mut log, "nope"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_drops_all_duplicates_of_an_id() {
        let mut log = Vec::new();
        let now = at(2026, 8, 27, 8, 0);
        append_entry(&mut log, item("a", Some("dup")), now);
        append_entry(&mut log, item("b", Some("keep")), now);
        append_entry(&mut log, item("c", Some("dup")), now);

        assert!(remove_entry(&mut log, "dup"));
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].id, "keep");
    }
}
