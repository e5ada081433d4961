use once_cell::sync::Lazy;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};
use tracing_subscriber::{fmt, EnvFilter};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);
static API_REQUESTS: Lazy<CounterVec> = Lazy::new(|| {
    let cv = CounterVec::new(Opts::new("analysis_api_requests_total", "API requests total"), &["path"]).unwrap();
    REGISTRY.register(Box::new(cv.clone())).ok();
    cv
});
static ANALYSES: Lazy<CounterVec> = Lazy::new(|| {
    let cv = CounterVec::new(
        Opts::new("analysis_pipeline_runs_total", "Topic analyses by narrative source"),
        &["narrative"],
    )
    .unwrap();
    REGISTRY.register(Box::new(cv.clone())).ok();
    cv
});
static PROVIDER_FAILURES: Lazy<CounterVec> = Lazy::new(|| {
    let cv = CounterVec::new(
        Opts::new("analysis_provider_failures_total", "External provider failures"),
        &["provider"],
    )
    .unwrap();
    REGISTRY.register(Box::new(cv.clone())).ok();
    cv
});

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = fmt().with_env_filter(filter).with_target(false);
    // Enable JSON logs if ANALYSIS_LOG_JSON=1
    if std::env::var("ANALYSIS_LOG_JSON").ok().as_deref() == Some("1") {
        fmt.json().init();
    } else {
        fmt.init();
    }
}

pub fn inc_api_request(path: &str) {
    API_REQUESTS.with_label_values(&[path]).inc();
}

pub fn inc_analysis(narrative: &str) {
    ANALYSES.with_label_values(&[narrative]).inc();
}

pub fn inc_provider_failure(provider: &str) {
    PROVIDER_FAILURES.with_label_values(&[provider]).inc();
}

pub fn gather_prometheus() -> String {
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    encoder.encode(&metric_families, &mut buffer).ok();
    String::from_utf8(buffer).unwrap_or_default()
}
