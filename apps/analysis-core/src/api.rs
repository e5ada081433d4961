use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analysis::pipeline;
use crate::app::SharedState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

#[derive(Deserialize)]
pub struct AnalyzeTopicRequest {
    pub topic: String,
    /// Retained for client compatibility; the result budget is decided
    /// internally from the topic.
    #[serde(default = "default_max_papers")]
    pub max_papers: usize,
}

fn default_max_papers() -> usize {
    3
}

pub fn build_router(state: SharedState) -> Router {
    // Wide-open CORS for the frontend: mirror whichever origin calls.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .route("/api/analyze-topic", post(analyze_topic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    crate::telemetry::inc_api_request("/health");
    Json(Health { status: "ok", version: state.version })
}

async fn ready() -> impl IntoResponse {
    crate::telemetry::inc_api_request("/ready");
    StatusCode::OK
}

async fn metrics() -> impl IntoResponse {
    crate::telemetry::inc_api_request("/metrics");
    let body = crate::telemetry::gather_prometheus();
    ([("Content-Type", "text/plain; version=0.0.4")], body)
}

async fn analyze_topic(
    State(state): State<SharedState>,
    Json(req): Json<AnalyzeTopicRequest>,
) -> impl IntoResponse {
    crate::telemetry::inc_api_request("/api/analyze-topic");
    tracing::debug!(max_papers = req.max_papers, "client budget hint ignored");
    let report = pipeline::analyze(&state.handles, &req.topic).await;
    Json(report)
}
