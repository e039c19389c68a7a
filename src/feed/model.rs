//! Serde model of the alert feed.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vtec::{Phenomenon, Significance};

// ───────────────────────────────────────────────────────────────
// Alert
// ───────────────────────────────────────────────────────────────

/// One alert record as delivered by the feed.
///
/// The codes are kept raw and resolved on demand; a code that does not
/// resolve simply reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// VTEC `pp` field.
    #[serde(rename = "phenomena", default)]
    pub phenomenon_code: Option<String>,
    /// VTEC `s` field.
    #[serde(rename = "significance", default)]
    pub significance_code: Option<String>,
    /// Human headline, e.g. "Winter Weather Advisory". Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Alert {
    pub fn new(phenomenon_code: &str, significance_code: &str) -> Self {
        Self {
            phenomenon_code: Some(phenomenon_code.to_owned()),
            significance_code: Some(significance_code.to_owned()),
            description: None,
        }
    }

    pub fn phenomenon(&self) -> Option<Phenomenon> {
        self.phenomenon_code.as_deref().and_then(Phenomenon::from_vtec)
    }

    pub fn significance(&self) -> Option<Significance> {
        self.significance_code
            .as_deref()
            .and_then(Significance::from_vtec)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pp = self.phenomenon_code.as_deref().unwrap_or("--");
        let s = self.significance_code.as_deref().unwrap_or("-");
        match self.phenomenon() {
            Some(p) => write!(f, "{p}")?,
            None => f.write_str("unknown phenomenon")?,
        }
        match self.significance() {
            Some(sig) => write!(f, " {sig}")?,
            None => f.write_str(" (unknown significance)")?,
        }
        write!(f, " [{pp}.{s}]")
    }
}

// ───────────────────────────────────────────────────────────────
// Upstream error payload
// ───────────────────────────────────────────────────────────────

/// Error block reported by the feed itself (bad key, unknown location, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl UpstreamError {
    pub fn new(kind: &str, description: &str) -> Self {
        Self {
            kind: kind.to_owned(),
            description: description.to_owned(),
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.kind, self.description)
    }
}

// ───────────────────────────────────────────────────────────────
// Response envelope
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub error: Option<UpstreamError>,
}

/// Top-level feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
    #[serde(default)]
    pub response: Option<ResponseMeta>,
}

/// What one fetch produced: the alert list plus any upstream error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub alerts: Vec<Alert>,
    pub error: Option<UpstreamError>,
}

impl FeedSnapshot {
    pub fn with_alerts(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            error: None,
        }
    }

    pub fn with_error(error: UpstreamError) -> Self {
        Self {
            alerts: Vec::new(),
            error: Some(error),
        }
    }
}

impl From<AlertResponse> for FeedSnapshot {
    fn from(r: AlertResponse) -> Self {
        Self {
            alerts: r.alerts.unwrap_or_default(),
            error: r.response.and_then(|meta| meta.error),
        }
    }
}

/// Parse a feed body.
pub fn parse_response(body: &str) -> Result<FeedSnapshot> {
    let response: AlertResponse = serde_json::from_str(body)?;
    Ok(response.into())
}
