//! Client for the Leaguepedia Cargo query API.
//!
//! Leaguepedia publishes its esports data through MediaWiki's Cargo
//! extension: a single `api.php` endpoint that takes a SQL-like
//! table/field/where description as query-string parameters and returns
//! matching rows as JSON.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

/// Production endpoint for the League of Legends wiki.
pub const DEFAULT_API_URL: &str = "https://lol.fandom.com/api.php";

const HTTP_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Error)]
pub enum CargoError {
    #[error("Failed to reach the Cargo API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Cargo API returned status {status} (URL: {url})")]
    Status { status: u16, url: String },

    #[error("Failed to parse Cargo API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Cargo API error ({code}): {info}")]
    Api { code: String, info: String },
}

/// Parameters for one `action=cargoquery` call.
#[derive(Debug, Clone, Default)]
pub struct CargoQuery {
    tables: String,
    fields: String,
    where_clause: Option<String>,
    limit: Option<u32>,
    order_by: Option<String>,
}

impl CargoQuery {
    pub fn new(tables: &str, fields: &str) -> Self {
        CargoQuery {
            tables: tables.to_string(),
            fields: fields.to_string(),
            ..Default::default()
        }
    }

    pub fn filter(mut self, where_clause: impl Into<String>) -> Self {
        self.where_clause = Some(where_clause.into());
        self
    }

    /// Like [`filter`](Self::filter), but `None` leaves the query unfiltered.
    pub fn filter_opt(mut self, where_clause: Option<String>) -> Self {
        self.where_clause = where_clause;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }
}

/// One row from a Cargo query: the requested fields keyed by name, values
/// string or null. Cargo returns aliased field names with underscores
/// replaced by spaces ("League_Short" comes back as "League Short"), so
/// lookups try both spellings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CargoRecord(serde_json::Map<String, Value>);

impl CargoRecord {
    /// Field value, or `""` when the field is absent or null.
    pub fn get_str(&self, key: &str) -> &str {
        self.value(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Field value, or `default` when the field is absent, null, or empty.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get_str(key) {
            "" => default,
            value => value,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    fn value(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.0.get(key) {
            return Some(value);
        }
        if key.contains('_') {
            return self.0.get(&key.replace('_', " "));
        }
        None
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    cargoquery: Vec<TitleRow>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct TitleRow {
    title: CargoRecord,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    info: String,
}

/// Handle on the Cargo endpoint. Cheap to clone; the underlying reqwest
/// client pools connections.
#[derive(Debug, Clone)]
pub struct CargoClient {
    http: Client,
    api_url: String,
}

impl CargoClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self, CargoError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECONDS))
            .build()?;

        Ok(CargoClient {
            http,
            api_url: api_url.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Runs one query against the wiki and returns the matching rows.
    pub async fn query(&self, query: &CargoQuery) -> Result<Vec<CargoRecord>, CargoError> {
        let mut params: Vec<(&str, String)> = vec![
            ("action", "cargoquery".to_string()),
            ("format", "json".to_string()),
            ("tables", query.tables.clone()),
            ("fields", query.fields.clone()),
        ];

        if let Some(where_clause) = &query.where_clause {
            params.push(("where", where_clause.clone()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(order_by) = &query.order_by {
            params.push(("order_by", order_by.clone()));
        }

        debug!("Cargo query parameters: {:?}", params);

        let response = self.http.get(&self.api_url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            error!("Cargo API returned {} for {}", status, self.api_url);
            return Err(CargoError::Status {
                status: status.as_u16(),
                url: self.api_url.clone(),
            });
        }

        let body = response.text().await?;
        debug!("Cargo API response length: {} bytes", body.len());

        let parsed: QueryResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse Cargo API response: {} (first 200 chars: {})",
                e,
                body.chars().take(200).collect::<String>()
            );
            e
        })?;

        if let Some(api_error) = parsed.error {
            error!(
                "Cargo API error {}: {}",
                api_error.code, api_error.info
            );
            return Err(CargoError::Api {
                code: api_error.code,
                info: api_error.info,
            });
        }

        Ok(parsed.cargoquery.into_iter().map(|row| row.title).collect())
    }
}
