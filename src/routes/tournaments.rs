use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::info;

use crate::cargo_client::{CargoClient, CargoQuery};
use crate::error::ApiError;
use crate::models::Tournament;
use crate::regions;

/// Fixed row cap for the serving path.
const TOURNAMENT_LIMIT: u32 = 50;

/// Query parameters for filtering tournaments
#[derive(Deserialize)]
pub struct TournamentsQuery {
    region_code: String,
    year: String,
}

/// Builds the conjunctive Cargo filter from the present parameters. Empty
/// strings mean the filter is absent; no filters at all yields `None`.
fn build_where_clause(region_code: &str, year: &str) -> Option<String> {
    let mut clauses = Vec::new();

    if !year.is_empty() {
        clauses.push(format!("DateStart LIKE '{year}%'"));
    }

    if !region_code.is_empty() {
        clauses.push(regions::region_filter(region_code));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" AND "))
    }
}

/// GET /api/tournaments?region_code=LCK&year=2024 - Tournaments for a region and year
pub async fn get_tournaments(
    State(client): State<CargoClient>,
    Query(params): Query<TournamentsQuery>,
) -> Result<Json<Vec<Tournament>>, ApiError> {
    let query = CargoQuery::new("Tournaments", "Name, League, Region, DateStart, Date")
        .filter_opt(build_where_clause(&params.region_code, &params.year))
        .limit(TOURNAMENT_LIMIT)
        .order_by("DateStart DESC");

    let records = client.query(&query).await?;

    info!(
        "Retrieved {} tournaments matching filters: year={}, region_code={}",
        records.len(),
        params.year,
        params.region_code
    );

    let tournaments = records.iter().map(Tournament::from_record).collect();

    Ok(Json(tournaments))
}
