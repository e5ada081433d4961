use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArxivConfig {
    #[serde(default = "default_arxiv_base")]
    pub base_url: String,
    #[serde(default = "default_arxiv_timeout")]
    pub timeout_secs: u64,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self { base_url: default_arxiv_base(), timeout_secs: default_arxiv_timeout() }
    }
}

fn default_arxiv_base() -> String {
    "https://export.arxiv.org/api/query".into()
}

fn default_arxiv_timeout() -> u64 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_base")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Env var name holding the API key (default GEMINI_API_KEY). The key
    /// itself never lives in the config file.
    #[serde(default = "default_gemini_key_env")]
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base(),
            model: default_gemini_model(),
            api_key_env: default_gemini_key_env(),
        }
    }
}

fn default_gemini_base() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_gemini_key_env() -> String {
    "GEMINI_API_KEY".into()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub arxiv: ArxivConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Config {
    /// Load from `config/analysis.toml` (or `ANALYSIS_CONFIG`). A missing
    /// file is fine and yields defaults; a malformed file is an error.
    pub fn load() -> anyhow::Result<(Self, PathBuf)> {
        let cfg_path = env::var("ANALYSIS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config/analysis.toml"));
        let mut cfg: Config = match fs::read_to_string(&cfg_path) {
            Ok(text) => toml::from_str(&text)?,
            Err(_) => Config::default(),
        };

        // Env overrides (minimal): ARXIV_BASE_URL, GEMINI_MODEL
        if let Ok(base) = env::var("ARXIV_BASE_URL") {
            cfg.arxiv.base_url = base;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            cfg.gemini.model = model;
        }

        Ok((cfg, cfg_path))
    }

    /// Resolve the Gemini API key from the configured env var. `None` means
    /// the generative backend is unconfigured, which is an expected state.
    pub fn gemini_api_key(&self) -> Option<String> {
        env::var(&self.gemini.api_key_env).ok().filter(|k| !k.is_empty())
    }
}
