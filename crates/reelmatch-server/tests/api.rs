//! HTTP-level integration tests for the recommendation API.
//!
//! These drive the real router in-process, covering the JSON contract,
//! status codes, CORS, and dataset-file startup.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use reelmatch::{ContentItem, Dataset, Recommender, UserProfile};
use reelmatch_server::config::load_dataset;
use reelmatch_server::http::{router, ApiState};

// ── Helpers ────────────────────────────────────────────────────

fn app_for(dataset: Dataset) -> axum::Router {
    let recommender = Recommender::new(dataset).unwrap();
    router(Arc::new(ApiState { recommender }))
}

fn builtin_app() -> axum::Router {
    app_for(Dataset::builtin())
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }))
}

fn recommend_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ── Success path ───────────────────────────────────────────────

#[tokio::test]
async fn test_recommend_known_user() {
    let resp = builtin_app()
        .oneshot(recommend_request(json!({ "user_id": 1 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body["recommendations"],
        json!(["Action Adventure", "Fantasy Tale", "Sci-Fi Epic"])
    );
}

#[tokio::test]
async fn test_recommend_second_user() {
    let resp = builtin_app()
        .oneshot(recommend_request(json!({ "user_id": 2 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0], "Comedy Special");
    assert_eq!(recs[1], "Drama Series");
}

#[tokio::test]
async fn test_recommend_is_deterministic() {
    let first = {
        let resp = builtin_app()
            .oneshot(recommend_request(json!({ "user_id": 1 })))
            .await
            .unwrap();
        body_json(resp).await
    };
    for _ in 0..3 {
        let resp = builtin_app()
            .oneshot(recommend_request(json!({ "user_id": 1 })))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await, first);
    }
}

#[tokio::test]
async fn test_small_catalog_bounds_output() {
    let dataset = Dataset {
        users: vec![UserProfile {
            id: 1,
            preferences: vec![1.0, 1.0],
        }],
        catalog: vec![
            ContentItem {
                id: 1,
                title: "Only One".to_string(),
                features: vec![1.0, 0.0],
            },
            ContentItem {
                id: 2,
                title: "Only Two".to_string(),
                features: vec![0.0, 1.0],
            },
        ],
    };
    let resp = app_for(dataset)
        .oneshot(recommend_request(json!({ "user_id": 1 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

// ── Client errors ──────────────────────────────────────────────

#[tokio::test]
async fn test_recommend_unknown_user() {
    let resp = builtin_app()
        .oneshot(recommend_request(json!({ "user_id": 99 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_recommend_missing_user_id() {
    let resp = builtin_app()
        .oneshot(recommend_request(json!({ "user": 1 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("user_id"));
}

#[tokio::test]
async fn test_recommend_ill_typed_user_id() {
    let resp = builtin_app()
        .oneshot(recommend_request(json!({ "user_id": "one" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_negative_user_id() {
    let resp = builtin_app()
        .oneshot(recommend_request(json!({ "user_id": -5 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_malformed_json() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_missing_content_type() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .body(Body::from(json!({ "user_id": 1 }).to_string()))
        .unwrap();
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_recommend_wrong_method() {
    let req = Request::builder()
        .uri("/api/recommend")
        .body(Body::empty())
        .unwrap();
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let req = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Health and CORS ────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog"], 5);
    assert_eq!(body["users"], 2);
}

#[tokio::test]
async fn test_cors_preflight() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/recommend")
        .header("origin", "http://localhost:8080")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_on_response() {
    let mut req = recommend_request(json!({ "user_id": 1 }));
    req.headers_mut()
        .insert("origin", "http://localhost:8080".parse().unwrap());
    let resp = builtin_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}

// ── Dataset-file startup ───────────────────────────────────────

#[tokio::test]
async fn test_serves_dataset_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&serde_json::to_vec(&Dataset::builtin()).unwrap())
        .unwrap();

    let dataset = load_dataset(path.to_str()).unwrap();
    let resp = app_for(dataset)
        .oneshot(recommend_request(json!({ "user_id": 2 })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["recommendations"][0], "Comedy Special");
}
