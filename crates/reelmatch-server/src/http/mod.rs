//! Axum router, request handlers, and server startup.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use reelmatch::Recommender;

use crate::error::{ApiError, ApiResult};

/// Shared server state passed to all handlers via axum State.
///
/// The recommender is immutable after startup, so concurrent requests
/// read it without locking.
pub struct ApiState {
    pub recommender: Recommender,
}

/// Request body for `POST /api/recommend`.
#[derive(Debug, Deserialize)]
struct RecommendRequest {
    user_id: u64,
}

/// Build the axum Router with all endpoints.
///
/// Cross-origin requests are permitted for any origin; the API carries no
/// credentials.
pub fn router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/recommend", post(handle_recommend))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the given address.
pub async fn start(addr: &str, state: Arc<ApiState>) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// `POST /api/recommend` with `{ "user_id": <integer> }`.
///
/// Returns 200 with `{ "recommendations": [<titles>] }`, 404 for an
/// unknown user, 400 for a malformed body.
async fn handle_recommend(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let req: RecommendRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?;

    let titles = state.recommender.recommend(req.user_id)?;

    Ok(Json(json!({ "recommendations": titles })))
}

/// Health check endpoint.
async fn handle_health(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let dataset = state.recommender.dataset();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "users": dataset.user_count(),
        "catalog": dataset.catalog_len(),
    }))
}
