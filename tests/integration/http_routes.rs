//! Integration tests for the HTTP routes.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};

use sharedrop_database::MemoryShareRepository;

const ORIGIN: &str = "203.0.113.5";

async fn create_text(app: &helpers::TestApp, content: &str, origin: &str) -> Value {
    let response = app
        .request(
            "POST",
            "/share",
            Some(json!({ "contentType": "TEXT", "content": content })),
            Some(origin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    response.body["response"].clone()
}

#[tokio::test]
async fn test_create_text_then_fetch_by_code() {
    let app = helpers::TestApp::new().await;

    let created = create_text(&app, "hello there", ORIGIN).await;
    assert_eq!(created["docs"]["content"], "hello there");
    assert_eq!(created["docs"]["contentType"], "TEXT");
    assert_eq!(created["docs"]["originAddress"], ORIGIN);
    assert!(created.get("signedUrl").is_none());
    let code = created["code"].as_str().expect("code should be a string");

    let response = app
        .request("GET", &format!("/share/code?code={code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["response"]["id"], created["docs"]["id"]);
    assert_eq!(response.body["response"]["content"], "hello there");
}

#[tokio::test]
async fn test_unknown_code_is_bad_request_with_null() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/share/code?code=zeppelin", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "success": false, "response": null }));
}

#[tokio::test]
async fn test_missing_code_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/share/code", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_create_file_then_fetch_download_url() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/share",
            Some(json!({ "contentType": "FILE", "fileName": "report.pdf" })),
            Some(ORIGIN),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let created = &response.body["response"];
    let key = created["docs"]["content"].as_str().unwrap();
    assert!(key.ends_with(".pdf"));
    assert_eq!(created["docs"]["contentType"], "FILE");
    let upload = created["signedUrl"].as_str().unwrap();
    assert!(upload.contains(key));

    let id = created["docs"]["id"].as_str().unwrap();
    let response = app
        .request("GET", &format!("/share/id/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let download = response.body["response"]["url"].as_str().unwrap();
    assert!(download.contains(key));
    assert_ne!(download, upload);
}

#[tokio::test]
async fn test_text_by_id_returns_content() {
    let app = helpers::TestApp::new().await;
    let created = create_text(&app, "by id", ORIGIN).await;
    let id = created["docs"]["id"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/share/id/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["response"], json!({ "content": "by id" }));
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/share/id/not-a-uuid", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert!(response.body["response"].is_string());
}

#[tokio::test]
async fn test_unknown_id_is_bad_request() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", &format!("/share/id/{}", uuid::Uuid::new_v4()), None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["response"], Value::Null);
}

#[tokio::test]
async fn test_invalid_body_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/share", Some(json!({ "content": "no type" })), Some(ORIGIN))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);

    let response = app
        .request(
            "POST",
            "/share",
            Some(json!({ "contentType": "FILE" })),
            Some(ORIGIN),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_recall_follows_forwarded_address() {
    let app = helpers::TestApp::new().await;
    create_text(&app, "mine", ORIGIN).await;
    create_text(&app, "theirs", "198.51.100.8").await;

    let response = app.request("GET", "/share/ip", None, Some(ORIGIN)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["response"]["content"], "mine");

    let response = app
        .request("GET", "/share/ip", None, Some("192.0.2.200"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["response"], Value::Null);
}

#[tokio::test]
async fn test_purge_reports_count() {
    let app = helpers::TestApp::new().await;
    create_text(&app, "a", ORIGIN).await;
    create_text(&app, "b", ORIGIN).await;
    create_text(&app, "c", "198.51.100.8").await;

    let response = app.request("DELETE", "/share", None, Some(ORIGIN)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true, "response": { "count": 2 } }));

    let response = app.request("DELETE", "/share", None, Some(ORIGIN)).await;
    assert_eq!(response.body["response"]["count"], 0);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_store_outage_answers_generic_500() {
    let router = helpers::router_with(Arc::new(helpers::DownStore), helpers::memory_cache()).await;
    let redacted = json!({
        "success": false,
        "response": "The request could not be completed",
    });

    let response = helpers::send(
        &router,
        "POST",
        "/share",
        Some(json!({ "contentType": "TEXT", "content": "hello" })),
        Some(ORIGIN),
    )
    .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, redacted);

    let response = helpers::send(&router, "GET", "/share/ip", None, Some(ORIGIN)).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, redacted);

    let response = helpers::send(&router, "DELETE", "/share", None, Some(ORIGIN)).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.body.to_string().contains("10.0.0.3"));
}

#[tokio::test]
async fn test_cache_outage_creates_share_without_code() {
    let store = Arc::new(MemoryShareRepository::new());
    let router = helpers::router_with(store.clone(), Arc::new(helpers::DownCache)).await;

    let response = helpers::send(
        &router,
        "POST",
        "/share",
        Some(json!({ "contentType": "TEXT", "content": "still here" })),
        Some(ORIGIN),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["response"]["code"], Value::Null);
    assert_eq!(response.body["response"]["docs"]["content"], "still here");
    assert_eq!(store.len().await, 1);

    let response = helpers::send(&router, "GET", "/share/code?code=amber", None, None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["response"],
        "The request could not be completed"
    );

    let response = helpers::send(&router, "GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["response"]["status"], "degraded");
    assert_eq!(response.body["response"]["cache"], false);
}

#[tokio::test]
async fn test_health_reports_backends() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["response"]["status"], "ok");
    assert_eq!(response.body["response"]["store"], true);
    assert_eq!(response.body["response"]["cache"], true);
}
