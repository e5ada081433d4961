use crate::config::Config;
use crate::llm::GeminiClient;
use arxiv_feed::ArxivClient;
use std::sync::Arc;
use std::time::Duration;

/// Provider clients, built once from config at startup and never mutated.
#[derive(Clone)]
pub struct AppHandles {
    pub arxiv: ArxivClient,
    pub llm: GeminiClient,
}

#[derive(Clone)]
pub struct AppState {
    pub version: &'static str,
    pub config: Arc<Config>,
    pub handles: AppHandles,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config) -> SharedState {
        let arxiv = ArxivClient::new(
            config.arxiv.base_url.clone(),
            Duration::from_secs(config.arxiv.timeout_secs),
        );
        let llm = GeminiClient::new(&config.gemini, config.gemini_api_key());
        Arc::new(AppState {
            version: env!("CARGO_PKG_VERSION"),
            config: Arc::new(config),
            handles: AppHandles { arxiv, llm },
        })
    }
}
