//! Client for the public meal database the recipe browser is backed by.
//!
//! The upstream API returns rows with twenty numbered
//! `strIngredientN`/`strMeasureN` column pairs and newline-separated
//! instruction text; this module reshapes that into something the rest of the
//! app can render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;

const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const INGREDIENT_SLOTS: usize = 20;

#[derive(Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumb: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub measure: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumb: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<Map<String, Value>>>,
}

impl MealDbClient {
    pub fn from_env() -> Self {
        let base_url =
            env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<MealSummary>, reqwest::Error> {
        self.fetch_summaries("search.php", ("s", query)).await
    }

    pub async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, reqwest::Error> {
        self.fetch_summaries("filter.php", ("c", category)).await
    }

    pub async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, reqwest::Error> {
        self.fetch_summaries("filter.php", ("a", area)).await
    }

    pub async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, reqwest::Error> {
        let envelope = self.fetch("lookup.php", ("i", id)).await?;
        Ok(envelope
            .meals
            .unwrap_or_default()
            .first()
            .map(shape_detail))
    }

    async fn fetch_summaries(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<Vec<MealSummary>, reqwest::Error> {
        let envelope = self.fetch(endpoint, param).await?;
        // a miss comes back as `{"meals": null}`, not an empty array
        Ok(envelope
            .meals
            .unwrap_or_default()
            .iter()
            .map(shape_summary)
            .collect())
    }

    async fn fetch(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<MealsEnvelope, reqwest::Error> {
        self.http
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&[param])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

fn shape_summary(raw: &Map<String, Value>) -> MealSummary {
    MealSummary {
        id: text(raw, "idMeal").unwrap_or_default(),
        name: text(raw, "strMeal").unwrap_or_default(),
        thumb: text(raw, "strMealThumb"),
        category: text(raw, "strCategory"),
        area: text(raw, "strArea"),
    }
}

fn shape_detail(raw: &Map<String, Value>) -> MealDetail {
    let summary = shape_summary(raw);
    MealDetail {
        id: summary.id,
        name: summary.name,
        thumb: summary.thumb,
        category: summary.category,
        area: summary.area,
        tags: text(raw, "strTags")
            .map(|tags| tags.split(',').map(|tag| tag.trim().to_string()).collect())
            .unwrap_or_default(),
        ingredients: ingredients(raw),
        steps: steps(raw),
        youtube: text(raw, "strYoutube"),
    }
}

fn ingredients(raw: &Map<String, Value>) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = text(raw, &format!("strIngredient{slot}"))?;
            // upstream occasionally leaves the measure blank
            let measure = text(raw, &format!("strMeasure{slot}"))
                .unwrap_or_else(|| "100g".to_string());
            Some(Ingredient { measure, name })
        })
        .collect()
}

fn steps(raw: &Map<String, Value>) -> Vec<String> {
    text(raw, "strInstructions")
        .map(|instructions| {
            instructions
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn text(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
