//! Network-backed collaborators: hanzi-writer stroke data and catalog fonts.

use std::{sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    foundation::error::{AutographError, AutographResult},
    glyph::strokes::{StrokeData, StrokeSource, is_cjk},
};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default location of the hanzi-writer-data package.
pub const HANZI_WRITER_DATA_URL: &str = "https://cdn.jsdelivr.net/npm/hanzi-writer-data@2.0/data";

fn client(timeout: Duration) -> AutographResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .context("build http client")
        .map_err(AutographError::from)
}

/// Fetches `{base_url}/{char}.json` from a hanzi-writer-data mirror.
///
/// Wrap in a [`crate::StrokeCache`] so each character is requested once.
#[derive(Debug, Clone)]
pub struct HanziWriterSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HanziWriterSource {
    /// Source using [`HANZI_WRITER_DATA_URL`] and a 10 second timeout.
    pub fn new() -> AutographResult<Self> {
        Self::with_base_url(HANZI_WRITER_DATA_URL, Duration::from_secs(10))
    }

    /// Source reading from a custom mirror.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> AutographResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: client(timeout)?,
        })
    }

    /// URL requested for `ch`.
    pub fn url_for(&self, ch: char) -> String {
        format!("{}/{ch}.json", self.base_url)
    }
}

impl StrokeSource for HanziWriterSource {
    fn strokes(&self, ch: char) -> AutographResult<Option<Arc<StrokeData>>> {
        if !is_cjk(ch) {
            return Ok(None);
        }
        let url = self.url_for(ch);
        tracing::debug!(%url, "fetching stroke data");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AutographError::stroke_data(format!("GET {url}: {e}")))?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(AutographError::stroke_data(format!(
                "GET {url}: status {}",
                resp.status()
            )));
        }
        let body = resp
            .bytes()
            .map_err(|e| AutographError::stroke_data(format!("GET {url}: {e}")))?;
        let data: StrokeData = serde_json::from_slice(&body)
            .map_err(|e| AutographError::stroke_data(format!("decode {url}: {e}")))?;
        Ok(Some(Arc::new(data)))
    }
}

/// Download font bytes, e.g. from a [`crate::FontEntry`] URL.
pub fn fetch_font_bytes(url: &str) -> AutographResult<Vec<u8>> {
    let resp = client(Duration::from_secs(30))?
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?;
    if !resp.status().is_success() {
        return Err(AutographError::font(format!(
            "failed to load font from {url}: status {}",
            resp.status()
        )));
    }
    let bytes = resp.bytes().with_context(|| format!("read body of {url}"))?;
    Ok(bytes.to_vec())
}
