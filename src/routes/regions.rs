use axum::response::Json;

use crate::models::Region;
use crate::regions::MAJOR_LEAGUES;

// GET /api/regions - List the major competitive regions
//
// Served from the hardcoded league table; the wiki is not consulted on
// this path.
pub async fn get_regions() -> Json<Vec<Region>> {
    let regions = MAJOR_LEAGUES
        .iter()
        .map(|league| Region {
            code: league.code.to_string(),
            name: league.name.to_string(),
            region: league.region.to_string(),
        })
        .collect();

    Json(regions)
}
