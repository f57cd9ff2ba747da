use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Where a logged item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum EntryKind {
    Meal,
    #[default]
    Product,
}

impl From<String> for EntryKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Meal" => EntryKind::Meal,
            _ => EntryKind::Product,
        }
    }
}

/// One logged consumption event. The serialized field names are the persisted
/// wire format; do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: f64,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    /// Local calendar date (`YYYY-MM-DD`) at the moment of logging.
    pub date: String,
    /// Display-only time of day; never used in computation.
    #[serde(default)]
    pub time: String,
}

/// Partial item supplied by callers of the add operation. `date` and `time`
/// are stamped by the logbook; `id` only when the caller did not supply one.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFoodEntry {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: f64,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

/// Sum of the four tracked nutrients over some slice of the log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One calendar day in the weekly overview. Days without entries are
/// reported with zeros, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub weekday: String,
    pub calories: f64,
    pub items: usize,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub count: usize,
    pub entries: Vec<FoodLogEntry>,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
    pub count: usize,
}

/// A nutrient's aggregated value alongside its progress toward the daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressEntry {
    pub value: f64,
    pub rounded: i64,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressReport {
    pub calories: ProgressEntry,
    pub protein: ProgressEntry,
    pub carbs: ProgressEntry,
    pub fat: ProgressEntry,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub date: String,
    pub totals: NutrientTotals,
    pub progress: ProgressReport,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub days: Vec<DaySummary>,
}

/// Ids were historically persisted as JSON numbers (epoch milliseconds) when
/// generated, and as strings when they came from a barcode. Accept both.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {other}"
        ))),
    }
}

/// Nutrient fields tolerate anything: missing, null, or non-numeric values
/// all read as 0 so they never leak into arithmetic.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accepts_numeric_id() {
        let entry: FoodLogEntry = serde_json::from_str(
            r#"{"id": 1766000000000, "name": "Banana", "date": "2026-08-27"}"#,
        )
        .unwrap();
        assert_eq!(entry.id, "1766000000000");
        assert_eq!(entry.kind, EntryKind::Product);
        assert_eq!(entry.calories, 0.0);
    }

    #[test]
    fn entry_zero_defaults_bad_nutrients() {
        let entry: FoodLogEntry = serde_json::from_str(
            r#"{
                "id": "123",
                "name": "Mystery",
                "calories": "not a number",
                "protein": null,
                "carbs": -5,
                "fat": "1.5",
                "type": "Meal",
                "date": "2026-08-27",
                "time": "12:30"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.calories, 0.0);
        assert_eq!(entry.protein, 0.0);
        assert_eq!(entry.carbs, 0.0);
        assert_eq!(entry.fat, 1.5);
        assert_eq!(entry.kind, EntryKind::Meal);
    }

    #[test]
    fn unknown_type_tag_reads_as_product() {
        let entry: FoodLogEntry = serde_json::from_str(
            r#"{"id": "1", "name": "x", "type": "Snack", "date": "2026-08-27"}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, EntryKind::Product);
    }

    #[test]
    fn wire_format_field_names() {
        let entry = FoodLogEntry {
            id: "42".into(),
            name: "Oats".into(),
            brand: Some("Acme".into()),
            calories: 389.0,
            protein: 16.9,
            carbs: 66.3,
            fat: 6.9,
            fiber: 10.6,
            sugar: 0.0,
            kind: EntryKind::Product,
            date: "2026-08-27".into(),
            time: "08:05".into(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        for field in [
            "id", "name", "brand", "calories", "protein", "carbs", "fat", "fiber", "sugar",
            "type", "date", "time",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["type"], "Product");
    }
}
