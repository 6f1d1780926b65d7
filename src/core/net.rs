// src/core/net.rs

// Blocking HTTP GET for the corpus pages.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Source of page markup. `Ok(None)` means the page does not exist (HTTP 404);
/// the archive builder skips those instead of failing.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Option<String>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Http { url: s!("<client>"), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Option<String>> {
        let http = |source| Error::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        if resp.status() == StatusCode::NOT_FOUND {
            logd!("{url}: 404");
            return Ok(None);
        }
        let body = resp.error_for_status().map_err(http)?.text().map_err(http)?;
        logd!("{url}: {} bytes", body.len());
        Ok(Some(body))
    }
}
