use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lol_esports_api::cargo_client::CargoClient;
use lol_esports_api::routes;

fn test_app(api_url: &str) -> Router {
    let client = CargoClient::new(api_url).expect("Failed to create test client");
    routes::app(client)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_banner() {
    let response = get(test_app("http://unused.invalid"), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"LoL Match Visualizer API");
}

#[tokio::test]
async fn health_reports_ok() {
    let response = get(test_app("http://unused.invalid"), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn regions_returns_the_six_major_leagues() {
    let response = get(test_app("http://unused.invalid"), "/api/regions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let regions = body.as_array().unwrap();
    assert_eq!(regions.len(), 6);
    assert_eq!(regions[0]["code"], "LCS");
    assert_eq!(regions[0]["region"], "North America");
    assert_eq!(regions[2]["code"], "LEC");
    assert_eq!(regions[2]["name"], "LoL EMEA Championship");
}

#[tokio::test]
async fn years_default_to_2022_through_2025_descending() {
    let response = get(test_app("http://unused.invalid"), "/api/years").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([2025, 2024, 2023, 2022]));
}

#[tokio::test]
async fn years_honor_a_custom_range() {
    let response = get(
        test_app("http://unused.invalid"),
        "/api/years?start_year=2019&end_year=2021",
    )
    .await;

    assert_eq!(body_json(response).await, json!([2021, 2020, 2019]));
}

#[tokio::test]
async fn years_inverted_range_is_empty() {
    let response = get(
        test_app("http://unused.invalid"),
        "/api/years?start_year=2025&end_year=2022",
    )
    .await;

    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn tournaments_map_rows_to_the_frontend_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("action", "cargoquery"))
        .and(query_param("tables", "Tournaments"))
        .and(query_param(
            "fields",
            "Name, League, Region, DateStart, Date",
        ))
        .and(query_param(
            "where",
            "DateStart LIKE '2024%' AND Region = 'Korea'",
        ))
        .and(query_param("limit", "50"))
        .and(query_param("order_by", "DateStart DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cargoquery": [
                {"title": {
                    "Name": "LCK 2024 Spring",
                    "League": "LCK",
                    "Region": "Korea",
                    "DateStart": "2024-01-17",
                    "Date": "2024-04-14"
                }},
                {"title": {
                    "Name": "LCK 2024 Summer",
                    "League": "LCK",
                    "Region": "Korea",
                    "DateStart": "2024-06-12",
                    "Date": null
                }}
            ]
        })))
        .mount(&server)
        .await;

    let response = get(
        test_app(&server.uri()),
        "/api/tournaments?region_code=LCK&year=2024",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {
                "id": "LCK 2024 Spring",
                "name": "LCK 2024 Spring",
                "startDate": "2024-01-17",
                "endDate": "2024-04-14"
            },
            {
                "id": "LCK 2024 Summer",
                "name": "LCK 2024 Summer",
                "startDate": "2024-06-12",
                "endDate": ""
            }
        ])
    );
}

#[tokio::test]
async fn tournaments_for_lec_match_both_region_spellings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param(
            "where",
            "DateStart LIKE '2022%' AND (Region = 'Europe' OR Region = 'EMEA')",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cargoquery": [
                {"title": {"Name": "LEC 2022 Spring", "DateStart": "2022-01-14", "Date": "2022-04-10"}}
            ]
        })))
        .mount(&server)
        .await;

    let response = get(
        test_app(&server.uri()),
        "/api/tournaments?region_code=LEC&year=2022",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "LEC 2022 Spring");
}

#[tokio::test]
async fn tournaments_upstream_failure_returns_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = get(
        test_app(&server.uri()),
        "/api/tournaments?region_code=LCK&year=2024",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["message"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn tournaments_surface_wiki_error_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": "invalid_query", "info": "The SQL is invalid."}
        })))
        .mount(&server)
        .await;

    let response = get(
        test_app(&server.uri()),
        "/api/tournaments?region_code=LCK&year=2024",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("The SQL is invalid.")
    );
}

#[tokio::test]
async fn tournaments_require_both_parameters() {
    let response = get(test_app("http://unused.invalid"), "/api/tournaments").await;

    assert!(response.status().is_client_error());
}
