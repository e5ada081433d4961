use crate::config::GeminiConfig;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::time::Duration;

/// Client for the Gemini `generateContent` REST endpoint.
///
/// A missing API key is an expected condition, not an error: `generate`
/// resolves to an empty string and the caller falls back to templated text.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(cfg: &GeminiConfig, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("reqwest client");
        Self { http, base: cfg.base_url.clone(), model: cfg.model.clone(), api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let Some(key) = self.api_key.as_deref() else {
            tracing::debug!("no Gemini API key configured; skipping generation");
            return Ok(String::new());
        };
        let url = format!("{}/v1beta/models/{}:generateContent", self.base, self.model);
        let body = json!({"contents": [{"parts": [{"text": prompt}]}]});
        let resp = self
            .http
            .post(&url)
            .query(&[("key", key)])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let snip: String = resp.text().await.unwrap_or_default().chars().take(200).collect();
            return Err(anyhow!("gemini http {}: {}", status, snip));
        }
        let v: serde_json::Value = resp.json().await?;
        Ok(extract_text(&v))
    }
}

/// Concatenate the text parts of the first candidate; anything else in the
/// response payload is ignored.
fn extract_text(v: &serde_json::Value) -> String {
    v.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}
