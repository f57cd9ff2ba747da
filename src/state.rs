use crate::mealdb::MealDbClient;
use crate::models::FoodLogEntry;
use crate::progress::DailyLimits;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle passed to every handler. The log lives behind one lock and
/// every mutation completes its load-mutate-save cycle while holding it, so
/// the last finished mutation wins and read-modify-write races cannot occur.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub log: Arc<Mutex<Vec<FoodLogEntry>>>,
    pub limits: DailyLimits,
    pub meals: MealDbClient,
}

impl AppState {
    pub fn new(
        data_path: PathBuf,
        entries: Vec<FoodLogEntry>,
        limits: DailyLimits,
        meals: MealDbClient,
    ) -> Self {
        Self {
            data_path,
            log: Arc::new(Mutex::new(entries)),
            limits,
            meals,
        }
    }
}
