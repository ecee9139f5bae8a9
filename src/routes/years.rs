use axum::{extract::Query, response::Json};
use serde::Deserialize;

// Query parameters for the year range
#[derive(Deserialize)]
pub struct YearsQuery {
    #[serde(default = "default_start_year")]
    start_year: i32,
    #[serde(default = "default_end_year")]
    end_year: i32,
}

fn default_start_year() -> i32 {
    2022
}

fn default_end_year() -> i32 {
    2025
}

// GET /api/years - Years for the dropdown, newest first
//
// An inverted range yields an empty array.
pub async fn get_years(Query(params): Query<YearsQuery>) -> Json<Vec<i32>> {
    let years: Vec<i32> = (params.start_year..=params.end_year).rev().collect();

    Json(years)
}
