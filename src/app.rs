use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/log",
            get(handlers::get_log)
                .post(handlers::add_entry)
                .delete(handlers::clear_log),
        )
        .route("/api/log/:id", delete(handlers::delete_entry))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/week", get(handlers::get_week))
        .route("/api/meals", get(handlers::search_meals))
        .route("/api/meals/:id", get(handlers::meal_detail))
        .with_state(state)
}
