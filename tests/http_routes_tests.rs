//! Integration tests for the HTTP surface: health probes and /graphql

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use catalog::config::Config;
use catalog::db::Database;
use catalog::{AppState, build_app, graphql};

async fn app() -> axum::Router {
    let db = Database::in_memory().await.unwrap();
    db.ensure_schema().await.unwrap();
    let config = Config::from_lookup(|_| None).unwrap();

    build_app(AppState {
        config: Arc::new(config),
        schema: graphql::build_schema(Arc::new(db.clone())),
        db,
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let response = app()
        .await
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
}

#[tokio::test]
async fn test_readyz_reports_database() {
    let response = app()
        .await
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["ready"], json!(true));
    assert_eq!(body["database"], json!(true));
    // The in-memory store keeps exactly one connection open
    assert_eq!(body["pool"]["size"], json!(1));
    assert!(body["pool"]["idle"].as_u64().unwrap() <= 1);
}

#[tokio::test]
async fn test_post_graphql_executes_query() {
    let request = Request::post("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": "{ bookCount authorCount }" }).to_string(),
        ))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "bookCount": 0, "authorCount": 0 } })
    );
}

#[tokio::test]
async fn test_get_graphql_without_html_is_rejected() {
    let response = app()
        .await
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_get_graphql_serves_playground_to_browsers() {
    let request = Request::get("/graphql")
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
