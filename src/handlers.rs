use crate::aggregate::{daily_totals, date_key, today, weekly_breakdown};
use crate::errors::AppError;
use crate::logbook::{append_entry, remove_entry};
use crate::models::{
    FoodLogEntry, LogResponse, NewFoodEntry, ProgressResponse, RemoveResponse, WeekResponse,
};
use crate::progress::evaluate;
use crate::state::AppState;
use crate::storage::{clear_log_file, persist_log};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let log = state.log.lock().await;
    let date = today();
    let totals = daily_totals(&log, date);
    Html(render_index(&date_key(date), totals.calories, log.len()))
}

pub async fn get_log(State(state): State<AppState>) -> Json<LogResponse> {
    let log = state.log.lock().await;
    Json(LogResponse {
        count: log.len(),
        entries: log.clone(),
    })
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(item): Json<NewFoodEntry>,
) -> Result<Json<FoodLogEntry>, AppError> {
    if item.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let mut log = state.log.lock().await;
    let entry = append_entry(&mut log, item, Local::now());
    persist_log(&state.data_path, &log).await?;

    info!("logged {} ({} kcal)", entry.name, entry.calories);
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let mut log = state.log.lock().await;
    let removed = remove_entry(&mut log, &id);
    persist_log(&state.data_path, &log).await?;

    Ok(Json(RemoveResponse {
        removed,
        count: log.len(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ClearParams {
    #[serde(default)]
    confirm: Option<String>,
}

pub async fn clear_log(
    State(state): State<AppState>,
    Query(params): Query<ClearParams>,
) -> Result<Json<RemoveResponse>, AppError> {
    if params.confirm.as_deref() != Some("true") {
        return Err(AppError::bad_request(
            "pass confirm=true to clear the food log",
        ));
    }

    let mut log = state.log.lock().await;
    let removed = !log.is_empty();
    log.clear();
    clear_log_file(&state.data_path).await?;

    info!("food log cleared");
    Ok(Json(RemoveResponse { removed, count: 0 }))
}

pub async fn get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let log = state.log.lock().await;
    let date = today();
    let totals = daily_totals(&log, date);
    Json(ProgressResponse {
        date: date_key(date),
        totals,
        progress: evaluate(&totals, &state.limits),
    })
}

pub async fn get_week(State(state): State<AppState>) -> Json<WeekResponse> {
    let log = state.log.lock().await;
    Json(WeekResponse {
        days: weekly_breakdown(&log, today()),
    })
}

#[derive(Debug, Deserialize)]
pub struct MealQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    area: Option<String>,
}

/// Search wins over area, area over category; with nothing set the upstream
/// default listing (empty search) is returned.
pub async fn search_meals(
    State(state): State<AppState>,
    Query(query): Query<MealQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let q = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let area = filter_value(query.area.as_deref());
    let category = filter_value(query.category.as_deref());

    let meals = if let Some(q) = q {
        state.meals.search(q).await
    } else if let Some(area) = area {
        state.meals.filter_by_area(area).await
    } else if let Some(category) = category {
        state.meals.filter_by_category(category).await
    } else {
        state.meals.search("").await
    }
    .map_err(AppError::bad_gateway)?;

    Ok(Json(serde_json::json!({ "meals": meals })))
}

pub async fn meal_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<crate::mealdb::MealDetail>, AppError> {
    let meal = state
        .meals
        .lookup(&id)
        .await
        .map_err(AppError::bad_gateway)?
        .ok_or_else(|| AppError::not_found("meal not found"))?;
    Ok(Json(meal))
}

fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}
