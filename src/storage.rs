use crate::errors::AppError;
use crate::models::FoodLogEntry;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("FOOD_LOG_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/food_log.json"))
}

/// Total read: a missing file, an unreadable file, and content that is not a
/// JSON array of entries all come back as an empty log.
pub async fn load_log(path: &Path) -> Vec<FoodLogEntry> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse food log file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read food log file: {err}");
            Vec::new()
        }
    }
}

/// Overwrites the whole persisted log. Mutations always rewrite in full; there
/// is no incremental persistence.
pub async fn persist_log(path: &Path, entries: &[FoodLogEntry]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(entries).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Deletes the persisted log so subsequent loads observe an empty sequence.
/// Already-absent files are fine.
pub async fn clear_log_file(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn temp_log_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("nutriplan_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    fn sample_entry(id: &str) -> FoodLogEntry {
        FoodLogEntry {
            id: id.into(),
            name: "Banana".into(),
            brand: None,
            calories: 105.0,
            protein: 1.3,
            carbs: 27.0,
            fat: 0.4,
            fiber: 3.1,
            sugar: 14.4,
            kind: EntryKind::Product,
            date: "2026-08-27".into(),
            time: "09:15".into(),
        }
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let path = temp_log_path("missing");
        assert!(load_log(&path).await.is_empty());
    }

    #[tokio::test]
    async fn load_malformed_file_is_empty() {
        let path = temp_log_path("malformed");
        fs::write(&path, b"\"not an array\"").await.unwrap();
        assert!(load_log(&path).await.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let path = temp_log_path("roundtrip");
        let entries = vec![sample_entry("1"), sample_entry("2")];
        persist_log(&path, &entries).await.unwrap();

        let loaded = load_log(&path).await;
        assert_eq!(loaded, entries);
        // load is idempotent without an intervening mutation
        assert_eq!(load_log(&path).await, loaded);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn clear_removes_file_and_tolerates_absence() {
        let path = temp_log_path("clear");
        persist_log(&path, &[sample_entry("1")]).await.unwrap();

        clear_log_file(&path).await.unwrap();
        assert!(load_log(&path).await.is_empty());
        // second clear is a no-op
        clear_log_file(&path).await.unwrap();
    }
}
