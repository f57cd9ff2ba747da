pub mod aggregate;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod logbook;
pub mod mealdb;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_log, resolve_data_path};
