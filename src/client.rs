//! HTTP client for the codex backend.
//!
//! [`CodexApi`] is the seam between the core flow and the wire: the load
//! coordinator and the telemetry sink work against the trait, so tests can
//! substitute an in-process fake. [`CodexClient`] is the reqwest-backed
//! implementation. Non-2xx responses are failures; retry policy is owned by
//! the caller (the load paths never retry).

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use glyph_codex_core::models::{GlyphRecord, IdealRecord};

use crate::config::ApiConfig;
use crate::telemetry::InteractionEvent;

/// The three backend operations the client consumes.
#[async_trait]
pub trait CodexApi: Send + Sync {
    /// `GET /api/glyphs` — the full glyph collection.
    async fn fetch_glyphs(&self) -> Result<Vec<GlyphRecord>>;

    /// `GET /api/ideals` — the thematic principle list.
    async fn fetch_ideals(&self) -> Result<Vec<IdealRecord>>;

    /// `POST /api/log_interaction` — audit event; the response body is
    /// ignored even on success.
    async fn log_interaction(&self, event: &InteractionEvent) -> Result<()>;
}

/// reqwest-backed [`CodexApi`] implementation.
pub struct CodexClient {
    http: reqwest::Client,
    base_url: String,
}

impl CodexClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CodexApi for CodexClient {
    async fn fetch_glyphs(&self) -> Result<Vec<GlyphRecord>> {
        let response = self
            .http
            .get(self.url("/api/glyphs"))
            .send()
            .await
            .context("Glyph request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Glyph endpoint returned {}", status);
        }

        response
            .json()
            .await
            .context("Glyph payload was not a valid record array")
    }

    async fn fetch_ideals(&self) -> Result<Vec<IdealRecord>> {
        let response = self
            .http
            .get(self.url("/api/ideals"))
            .send()
            .await
            .context("Ideals request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Ideals endpoint returned {}", status);
        }

        response
            .json()
            .await
            .context("Ideals payload was not a valid principle array")
    }

    async fn log_interaction(&self, event: &InteractionEvent) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/log_interaction"))
            .json(event)
            .send()
            .await
            .context("Interaction post failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Interaction endpoint returned {}", status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = CodexClient::new(&ApiConfig {
            base_url: "http://localhost:5000/".into(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.url("/api/glyphs"), "http://localhost:5000/api/glyphs");
    }
}
