use std::path::{Path, PathBuf};

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};
use showreel_server::{
    AppState,
    infra::config::{Config, CorsConfig, StorageConfig},
    routes::{self, SAVE_DATA, SAVE_DATA_ALIAS},
};
use tempfile::TempDir;

fn server_for(data_file: PathBuf) -> TestServer {
    let config = Config {
        storage: StorageConfig { data_file },
        ..Config::default()
    };
    TestServer::new(routes::create_router(AppState::new(config))).unwrap()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[tokio::test]
async fn valid_object_is_saved() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data.json");
    let server = server_for(data_file.clone());
    let document = json!({
        "movies": [{"id": 1, "title": "Dune", "image": "dune.jpg"}],
        "series": [],
        "featured": [1]
    });

    let response = server.post(SAVE_DATA).json(&document).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"success": true, "message": "Data saved successfully"})
    );
    assert_eq!(read_json(&data_file), document);

    let text = std::fs::read_to_string(&data_file).unwrap();
    assert!(text.starts_with("{\n    \"movies\""));
}

#[tokio::test]
async fn alias_route_saves_too() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data.json");
    let server = server_for(data_file.clone());

    server
        .post(SAVE_DATA_ALIAS)
        .json(&json!({"featured": []}))
        .await
        .assert_status_ok();

    assert_eq!(read_json(&data_file), json!({"featured": []}));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data.json");
    let server = server_for(data_file.clone());

    let response = server.post(SAVE_DATA).text("{\"movies\": [").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|msg| msg.starts_with("Invalid JSON data"))
    );
    assert!(!data_file.exists());
}

#[tokio::test]
async fn non_object_and_empty_bodies_are_rejected() {
    let dir = TempDir::new().unwrap();
    let server = server_for(dir.path().join("data.json"));

    server
        .post(SAVE_DATA)
        .json(&json!([1, 2, 3]))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post(SAVE_DATA)
        .text("")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let dir = TempDir::new().unwrap();
    let server = server_for(dir.path().join("data.json"));

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = server.method(method.clone(), SAVE_DATA).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "Method not allowed"}),
            "{method}"
        );
    }
}

#[tokio::test]
async fn form_encoded_data_field_is_accepted() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data.json");
    let server = server_for(data_file.clone());
    let payload = r#"{"movies":[],"series":[{"id":"s1","seasons":3}]}"#;

    server
        .post(SAVE_DATA)
        .form(&[("data", payload)])
        .await
        .assert_status_ok();

    assert_eq!(
        read_json(&data_file),
        json!({"movies": [], "series": [{"id": "s1", "seasons": 3}]})
    );
}

#[tokio::test]
async fn form_without_data_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let server = server_for(dir.path().join("data.json"));

    server
        .post(SAVE_DATA)
        .form(&[("payload", "{}")])
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unwritable_location_reports_failure() {
    let dir = TempDir::new().unwrap();
    let server = server_for(dir.path().join("missing").join("data.json"));

    let response = server.post(SAVE_DATA).json(&json!({})).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Failed to save data"})
    );
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let dir = TempDir::new().unwrap();
    let server = server_for(dir.path().join("data.json"));

    let preflight = server
        .method(Method::OPTIONS, SAVE_DATA)
        .add_header("Origin", "https://catalog.example")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type")
        .await;
    preflight.assert_status_ok();
    assert_eq!(preflight.header("access-control-allow-origin"), "*");

    let response = server
        .post(SAVE_DATA)
        .add_header("Origin", "https://catalog.example")
        .json(&json!({}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn origin_allow_list_is_enforced() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        storage: StorageConfig {
            data_file: dir.path().join("data.json"),
        },
        cors: CorsConfig {
            allowed_origins: vec!["https://catalog.example".to_string()],
        },
        ..Config::default()
    };
    let server =
        TestServer::new(routes::create_router(AppState::new(config))).unwrap();

    let allowed = server
        .post(SAVE_DATA)
        .add_header("Origin", "https://catalog.example")
        .json(&json!({}))
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin"),
        "https://catalog.example"
    );

    let other = server
        .post(SAVE_DATA)
        .add_header("Origin", "https://elsewhere.example")
        .json(&json!({}))
        .await;
    assert!(
        other
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
