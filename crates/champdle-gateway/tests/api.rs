//! HTTP API tests against an in-process router.

use std::io::Write;

use axum::http::StatusCode;
use axum_test::TestServer;
use champdle_core::{import_csv_path, Catalog, ImportOptions, ValidationSummary};
use champdle_gateway::{create_router, AppState, GatewayConfig};
use serde_json::{json, Value};

const ROSTER: &str = "\
name,region,role,subclass,specie,release_year,resources,range,gender,champion_type
Ahri,Ionia,\"Mage, Assassin\",Burst,Vastaya,2011,Mana,Ranged,Female,Mage
Bard,Runeterra,Support,Catcher,Celestial,2015,Mana,Ranged,Male,Controller
Miss Fortune,Bilgewater,Bot,Marksman,Human,2010,Mana,Ranged,Female,Marksman
Garen,Demacia,Top,Juggernaut,Human,2010,Manaless,Melee,Male,Fighter
";

fn server_with(config: GatewayConfig) -> TestServer {
    let mut seed = tempfile::NamedTempFile::new().unwrap();
    seed.write_all(ROSTER.as_bytes()).unwrap();

    let catalog = Catalog::temporary().unwrap();
    import_csv_path(&catalog, seed.path(), &ImportOptions::new()).unwrap();

    TestServer::new(create_router(AppState::new(catalog, config))).unwrap()
}

fn server() -> TestServer {
    server_with(GatewayConfig::default())
}

// ============== Health / attributes ==============

#[tokio::test]
async fn test_health() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["champions"], 4);
}

#[tokio::test]
async fn test_attributes_listing() {
    let server = server();
    let body: Value = server.get("/attributes").await.json();

    assert_eq!(body["wildcard_region"], "Runeterra");
    assert_eq!(body["kinds"].as_array().unwrap().len(), 9);
    assert_eq!(
        body["tags"]["role"],
        json!(["Assassin", "Bot", "Mage", "Support", "Top"])
    );
}

// ============== Search ==============

#[tokio::test]
async fn test_search() {
    let server = server();
    let names: Vec<String> = server
        .get("/search")
        .add_query_param("query", "AR")
        .await
        .json();
    assert_eq!(names, vec!["Bard", "Garen"]);
}

#[tokio::test]
async fn test_search_empty_query() {
    let server = server();

    let names: Vec<String> = server.get("/search").add_query_param("query", "").await.json();
    assert!(names.is_empty());

    let names: Vec<String> = server.get("/search").await.json();
    assert!(names.is_empty());
}

#[tokio::test]
async fn test_search_prefix_and_limit() {
    let server = server();
    let names: Vec<String> = server
        .get("/search")
        .add_query_param("query", "m")
        .add_query_param("mode", "prefix")
        .await
        .json();
    assert_eq!(names, vec!["Miss Fortune"]);

    let names: Vec<String> = server
        .get("/search")
        .add_query_param("query", "a")
        .add_query_param("limit", "2")
        .await
        .json();
    assert_eq!(names, vec!["Ahri", "Bard"]);
}

#[tokio::test]
async fn test_search_bad_parameters_are_json_errors() {
    let server = server();
    for (key, value) in [("mode", "fuzzy"), ("limit", "-1")] {
        let response = server
            .get("/search")
            .add_query_param("query", "a")
            .add_query_param(key, value)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn test_search_query_not_trimmed() {
    let server = server();
    let names: Vec<String> = server
        .get("/search")
        .add_query_param("query", "s f")
        .await
        .json();
    assert_eq!(names, vec!["Miss Fortune"]);

    let names: Vec<String> = server
        .get("/search")
        .add_query_param("query", "a ")
        .await
        .json();
    assert!(names.is_empty());
}

// ============== Champion ==============

#[tokio::test]
async fn test_champion_lookup() {
    let server = server();
    for path in ["/champion", "/getChampData"] {
        let response = server.get(path).add_query_param("name", "miss fortune").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["name"], "Miss Fortune");
        assert_eq!(body["region"], json!(["Bilgewater"]));
        assert_eq!(body["release_year"], "2010");
    }
}

#[tokio::test]
async fn test_champion_not_found() {
    let server = server();
    let response = server.get("/champion").add_query_param("name", "Teemo").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_champion_missing_name() {
    let server = server();
    let response = server.get("/champion").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "BAD_REQUEST");
}

// ============== Validate ==============

#[tokio::test]
async fn test_validate_role_mismatch() {
    let server = server();
    let response = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Ahri",
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": "Ionia",
            "expected_value_col": "Support"
        }))
        .await;
    response.assert_status_ok();

    let summary: ValidationSummary = response.json();
    assert!(!summary.valid);
    assert_eq!(
        summary.errors,
        vec!["Invalid role. Expected: Support, Found: [Mage, Assassin]"]
    );
}

#[tokio::test]
async fn test_validate_wildcard_region() {
    let server = server();
    let summary: ValidationSummary = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Bard",
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": "Runeterra",
            "expected_value_col": "Support"
        }))
        .await
        .json();
    assert!(summary.valid);
    assert!(summary.errors.is_empty());
}

#[tokio::test]
async fn test_validate_numeric_release_year() {
    let server = server();
    let summary: ValidationSummary = server
        .post("/validate")
        .json(&json!({
            "champion_name": "garen",
            "row_attr": "release_year",
            "col_attr": "resource_type",
            "expected_value_row": 2010,
            "expected_value_col": "Manaless"
        }))
        .await
        .json();
    assert!(summary.valid);
}

#[tokio::test]
async fn test_validate_legacy_kind_fields() {
    let server = server();
    let summary: ValidationSummary = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Ahri",
            "row_attr": ["Ionia"],
            "col_attr": ["Mage", "Assassin"],
            "row_a": "region",
            "col_a": "role",
            "expected_value_row": "Ionia",
            "expected_value_col": "Assassin"
        }))
        .await
        .json();
    assert!(summary.valid);
}

#[tokio::test]
async fn test_validate_missing_fields() {
    let server = server();
    let response = server
        .post("/validate")
        .json(&json!({
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": "Ionia",
            "expected_value_col": "Mage"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["valid"], false);
    assert_eq!(body["error"], "Missing required fields: champion_name");
}

#[tokio::test]
async fn test_validate_unknown_champion() {
    let server = server();
    let response = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Teemo",
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": "Bandle City",
            "expected_value_col": "Top"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "valid": false, "error": "Champion not found" })
    );
}

#[tokio::test]
async fn test_validate_malformed_body() {
    let server = server();
    let response = server
        .post("/validate")
        .text("{not json")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["valid"], false);
}

#[tokio::test]
async fn test_validate_non_scalar_expected_value() {
    let server = server();
    let response = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Ahri",
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": ["Ionia"],
            "expected_value_col": "Mage"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("expected_value_row"));
}

#[tokio::test]
async fn test_validate_missing_expected_value() {
    let server = server();
    let summary: ValidationSummary = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Ahri",
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": "Ionia"
        }))
        .await
        .json();
    assert!(!summary.valid);
    assert_eq!(summary.errors, vec!["Missing expected value for role"]);
}

#[tokio::test]
async fn test_wildcard_disabled() {
    let config = GatewayConfig {
        wildcard_region: None,
        ..GatewayConfig::default()
    };
    let server = server_with(config);

    let summary: ValidationSummary = server
        .post("/validate")
        .json(&json!({
            "champion_name": "Ahri",
            "row_attr": "region",
            "col_attr": "role",
            "expected_value_row": "Runeterra",
            "expected_value_col": "Mage"
        }))
        .await
        .json();
    assert!(!summary.valid);
    assert_eq!(
        summary.errors,
        vec!["Invalid region. Expected: Runeterra, Found: [Ionia]"]
    );

    let body: Value = server.get("/attributes").await.json();
    assert!(body["wildcard_region"].is_null());
}
