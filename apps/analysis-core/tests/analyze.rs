use analysis_core::{api, app, config};
use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::util::ServiceExt;

/// State wired so both collaborators fail deterministically offline: the
/// search client points at a local port nothing listens on, and the
/// generative key env var is one that is never set.
fn offline_state() -> app::SharedState {
    let mut cfg = config::Config::default();
    cfg.arxiv.base_url = "http://127.0.0.1:9".into();
    cfg.arxiv.timeout_secs = 2;
    cfg.gemini.api_key_env = "ANALYSIS_TEST_KEY_THAT_IS_NEVER_SET".into();
    app::AppState::new(cfg)
}

async fn analyze(router: axum::Router, body: serde_json::Value) -> serde_json::Value {
    let resp = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-topic")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn degraded_analysis_falls_back_to_templated_text() {
    let router = api::build_router(offline_state());
    let v = analyze(router, serde_json::json!({"topic": "dark energy"})).await;

    assert_eq!(v["topic"], "dark energy");
    assert_eq!(v["papers"].as_array().unwrap().len(), 0);
    assert_eq!(v["calculations"].as_array().unwrap().len(), 0);

    let overview = v["overview"].as_str().unwrap();
    assert!(overview.contains("0 arXiv result(s)"), "overview was: {overview}");
    assert!(overview.contains("'dark energy'"));

    let future_work = v["future_work"].as_str().unwrap();
    assert!(future_work.contains("Future work"));
}

#[tokio::test]
async fn black_hole_topic_still_carries_horizon_calculations() {
    let router = api::build_router(offline_state());
    // max_papers is accepted for compatibility and ignored.
    let v = analyze(
        router,
        serde_json::json!({"topic": "stellar black hole mergers", "max_papers": 1}),
    )
    .await;

    let calcs = v["calculations"].as_array().unwrap();
    assert_eq!(calcs.len(), 2);
    assert_eq!(calcs[0]["label"], "Schwarzschild radius (stellar-mass black hole)");
    assert_eq!(calcs[1]["label"], "Schwarzschild radius (supermassive black hole)");
    assert_eq!(calcs[0]["value"], "29.53 km");
}

#[tokio::test]
async fn orbital_topic_carries_period_calculations() {
    let router = api::build_router(offline_state());
    let v = analyze(router, serde_json::json!({"topic": "exoplanet transit surveys"})).await;

    let calcs = v["calculations"].as_array().unwrap();
    assert_eq!(calcs.len(), 2);
    assert_eq!(calcs[0]["label"], "Orbital period at 1 AU");
    assert_eq!(calcs[1]["label"], "Orbital period at 5 AU");
    assert_eq!(calcs[0]["value"], "365.2 days");
}

#[tokio::test]
async fn unmatched_topic_carries_no_calculations() {
    let router = api::build_router(offline_state());
    let v = analyze(router, serde_json::json!({"topic": "a specific pulsar timing result"})).await;
    assert_eq!(v["calculations"].as_array().unwrap().len(), 0);
}
