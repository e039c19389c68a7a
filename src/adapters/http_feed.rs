//! HTTP alert source.
//!
//! Implements [`AlertSource`] with a blocking `reqwest` client. One GET per
//! cycle; the body is handed to [`parse_response`] untouched.

use std::time::Duration;

use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;

use crate::app::ports::AlertSource;
use crate::config::QueryConfig;
use crate::error::{Error, Result};
use crate::feed::{FeedSnapshot, alerts_url, parse_response};

/// Adapter that fetches the alert feed over HTTP.
pub struct HttpAlertSource {
    client: Client,
    url: Url,
    /// Same URL with the key masked, for log lines.
    display_url: Url,
}

impl HttpAlertSource {
    pub fn new(config: &QueryConfig) -> Result<Self> {
        let url = alerts_url(&config.api_base, &config.api_key, &config.state, &config.city)?;
        let display_url = alerts_url(&config.api_base, "***", &config.state, &config.city)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_secs)))
            .user_agent(concat!("pufflux/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Fetch(format!("http client: {e}")))?;
        info!("HTTP feed: {display_url}");
        Ok(Self {
            client,
            url,
            display_url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl AlertSource for HttpAlertSource {
    fn fetch(&mut self) -> Result<FeedSnapshot> {
        debug!("GET {}", self.display_url);
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| Error::Fetch(error_chain(&e.without_url())))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("feed returned HTTP {status}")));
        }

        let body = resp
            .text()
            .map_err(|e| {
                Error::Fetch(format!("reading body: {}", error_chain(&e.without_url())))
            })?;
        debug!("feed body: {} bytes", body.len());
        parse_response(&body)
    }
}

/// Render an error with its whole `source()` chain: `outer: cause: root`.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
