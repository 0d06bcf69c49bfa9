// src/net.rs
//! HTTP boundary: one GET per fetch, whole collection in one response.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::{
    config::consts::USER_AGENT,
    error::FetchError,
    record::{self, Record},
    source::Source,
};

/// Anything that can turn a source into its record collection.
/// The GUI and CLI use [`HttpFetcher`]; tests plug in canned data.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, source: Source) -> Result<Vec<Record>, FetchError>;
}

/// Blocking reqwest client. Meant to run on a worker thread.
///
/// No timeout and no retry: a request either completes or fails once.
pub struct HttpFetcher {
    client: Client,
    base_override: Option<String>,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::Http { url: s!("<client>"), source: e })?;
        Ok(Self { client, base_override: None })
    }

    /// Send every request to `base` + the source's path instead of the real
    /// host (mock servers, mirrors).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_override = Some(base.into());
        self
    }

    pub fn url_for(&self, source: Source) -> String {
        match &self.base_override {
            Some(base) => {
                let path = source.url().rsplit('/').next().unwrap_or_default();
                format!("{}/{}", base.trim_end_matches('/'), path)
            }
            None => s!(source.url()),
        }
    }

    pub fn get(&self, url: &str) -> Result<Vec<Record>, FetchError> {
        let started = Instant::now();
        let http = |source: reqwest::Error| FetchError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp.text().map_err(http)?;
        debug!(url, bytes = body.len(), "net: body received");

        let records = record::parse_records(&body)
            .map_err(|source| FetchError::Decode { url: s!(url), source })?;

        info!(url, rows = records.len(), elapsed_ms = started.elapsed().as_millis() as u64, "net: GET ok");
        Ok(records)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, source: Source) -> Result<Vec<Record>, FetchError> {
        self.get(&self.url_for(source))
    }
}
