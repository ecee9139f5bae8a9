//! Manual harness for poking the live Leaguepedia API during development.
//!
//! Runs a fixed set of queries against the real wiki and pretty-prints the
//! results. Not part of the server; run with `cargo run --bin explore`.

use std::collections::BTreeSet;

use tracing::{error, info, warn};

use lol_esports_api::cargo_client::{CargoClient, CargoQuery, CargoRecord, DEFAULT_API_URL};
use lol_esports_api::pretty;
use lol_esports_api::regions;

/// Major regions as the Leagues table names them.
async fn fetch_regions(client: &CargoClient) -> Vec<CargoRecord> {
    let query = CargoQuery::new("Leagues", "League, League_Short, Region")
        .filter("League_Short IN ('LCS', 'LTA', 'LEC', 'LCK', 'LPL')")
        .order_by("League");

    match client.query(&query).await {
        Ok(records) => {
            info!("Retrieved {} regions", records.len());
            pretty::format_regions(&records);
            records
        }
        Err(e) => {
            error!("Error fetching regions: {e}");
            Vec::new()
        }
    }
}

/// Years that actually have tournament data, derived from DateStart over
/// the four long-standing major regions.
async fn fetch_available_years(client: &CargoClient) -> Vec<i32> {
    let query = CargoQuery::new("Tournaments", "DateStart").filter(
        "DateStart IS NOT NULL AND Region IN ('North America', 'Korea', 'Europe', 'China')",
    );

    let records = match client.query(&query).await {
        Ok(records) => records,
        Err(e) => {
            error!("Error fetching years: {e}");
            return Vec::new();
        }
    };

    let mut years = BTreeSet::new();
    for record in &records {
        let date = record.get_str("DateStart");
        match date.get(..4).and_then(|prefix| prefix.parse::<i32>().ok()) {
            Some(year) if year > 0 => {
                years.insert(year);
            }
            _ => warn!("Could not parse year from date '{date}'"),
        }
    }

    let years: Vec<i32> = years.into_iter().rev().collect();
    info!("Retrieved {} years with tournament data", years.len());

    pretty::format_years(&years);
    years
}

/// Tournaments for one league and year, filtered by the League field.
async fn fetch_tournaments_by_region_year(client: &CargoClient, region: &str, year: i32) {
    let query = CargoQuery::new("Tournaments", "Name, DateStart, Date, Split, League")
        .filter(format!("League = '{region}' AND YEAR(DateStart) = {year}"))
        .order_by("DateStart");

    match client.query(&query).await {
        Ok(records) => {
            info!(
                "Retrieved {} tournaments for {} in {}",
                records.len(),
                region,
                year
            );
            pretty::format_tournaments(&records, region, year);
        }
        Err(e) => error!("Error fetching tournaments for {region} in {year}: {e}"),
    }
}

/// The most basic query possible: a small unfiltered sample.
async fn fetch_sample_tournaments(client: &CargoClient) {
    let query = CargoQuery::new("Tournaments", "Name").limit(10);

    match client.query(&query).await {
        Ok(records) => {
            println!("Retrieved {} tournaments", records.len());
            println!("\n=== Sample Tournaments ===");
            for tournament in &records {
                println!("- {}", tournament.get_str("Name"));
            }
            pretty::print_summary(&records, "Sample Query");
        }
        Err(e) => error!("Error fetching tournaments: {e}"),
    }
}

/// Results from the TournamentResults table, filtered by year and/or the
/// league code embedded in the overview page name.
async fn fetch_tournament_results(
    client: &CargoClient,
    year: Option<i32>,
    region_code: Option<&str>,
) {
    let mut clauses = Vec::new();
    if let Some(year) = year {
        clauses.push(format!("Date_Year = {year}"));
    }
    if let Some(code) = region_code {
        clauses.push(format!("OverviewPage LIKE '%{code}%'"));
    }
    let where_clause = (!clauses.is_empty()).then(|| clauses.join(" AND "));

    let query = CargoQuery::new("TournamentResults", "Event, Date, OverviewPage")
        .filter_opt(where_clause)
        .limit(30)
        .order_by("Date DESC");

    match client.query(&query).await {
        Ok(records) => {
            println!(
                "\n=== Tournament Results for {} {} ===",
                region_code.unwrap_or("All Regions"),
                year.map(|y| y.to_string())
                    .unwrap_or_else(|| "All Years".to_string())
            );
            println!("Retrieved {} results", records.len());

            for result in &records {
                println!(
                    "- {} ({})",
                    result.get_str("Event"),
                    result.get_str("Date")
                );
                println!("  Overview: {}", result.get_str("OverviewPage"));
                println!();
            }
        }
        Err(e) => error!("Error fetching tournament results: {e}"),
    }
}

/// Distinct tournament names as the ScoreboardGames table records them.
async fn fetch_tournaments_from_games(client: &CargoClient) {
    let query = CargoQuery::new("ScoreboardGames", "DISTINCT Tournament")
        .limit(50)
        .order_by("Tournament");

    match client.query(&query).await {
        Ok(records) => {
            println!("\n=== Tournaments from ScoreboardGames ===");
            println!("Retrieved {} distinct tournaments", records.len());

            for tournament in &records {
                println!("- {}", tournament.get_str("Tournament"));
            }
        }
        Err(e) => error!("Error fetching tournaments from games: {e}"),
    }
}

/// The serving path's query: region filter via the Region field, year as a
/// DateStart prefix.
async fn fetch_tournaments_by_filter(
    client: &CargoClient,
    year: Option<&str>,
    region_code: Option<&str>,
) {
    let mut clauses = Vec::new();
    if let Some(year) = year {
        clauses.push(format!("DateStart LIKE '{year}%'"));
    }
    if let Some(code) = region_code {
        clauses.push(regions::region_filter(code));
    }
    let where_clause = (!clauses.is_empty()).then(|| clauses.join(" AND "));

    let query = CargoQuery::new("Tournaments", "Name, League, Region, DateStart, Date")
        .filter_opt(where_clause)
        .limit(50)
        .order_by("DateStart DESC");

    match client.query(&query).await {
        Ok(records) => {
            info!(
                "Retrieved {} tournaments matching filters: year={:?}, region_code={:?}",
                records.len(),
                year,
                region_code
            );
            pretty::format_filtered_tournaments(&records, year, region_code);
        }
        Err(e) => error!("Error fetching tournaments with filters: {e}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let api_url =
        std::env::var("LEAGUEPEDIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = CargoClient::new(api_url).expect("Failed to build Leaguepedia client");

    println!("Testing tournament queries against {}", client.api_url());

    fetch_regions(&client).await;
    fetch_available_years(&client).await;
    fetch_sample_tournaments(&client).await;
    fetch_tournaments_from_games(&client).await;

    fetch_tournaments_by_region_year(&client, "LCK", 2024).await;
    fetch_tournament_results(&client, Some(2024), Some("LCK")).await;

    println!("\nTEST 1: All tournaments (limited to 50)");
    fetch_tournaments_by_filter(&client, None, None).await;

    println!("\nTEST 2: Tournaments in 2023");
    fetch_tournaments_by_filter(&client, Some("2023"), None).await;

    println!("\nTEST 3: LCS tournaments (North America region)");
    fetch_tournaments_by_filter(&client, None, Some("LCS")).await;

    println!("\nTEST 4: LCK tournaments in 2024 (Korea region)");
    fetch_tournaments_by_filter(&client, Some("2024"), Some("LCK")).await;

    println!("\nTEST 5: LEC tournaments (EMEA region)");
    fetch_tournaments_by_filter(&client, None, Some("LEC")).await;

    println!("\nTEST 6: LPL tournaments (China region)");
    fetch_tournaments_by_filter(&client, None, Some("LPL")).await;
}
