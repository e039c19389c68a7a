//! Query configuration parameters
//!
//! All tunable parameters for one alert query. Populated from the command
//! line in `main.rs`; every field has a serde default so a partial JSON
//! document is also a valid config.

use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::feed::alerts_url;
use crate::protocol::{Classification, Palette, Profile};

pub const DEFAULT_API_BASE: &str = "http://api.wunderground.com";

/// Core query configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    // --- Location ---
    /// Feed API key
    pub api_key: String,
    /// State path segment (e.g. "MI")
    pub state: String,
    /// City path segment (e.g. "Ann_Arbor")
    pub city: String,

    // --- Feed ---
    /// Feed base URL
    pub api_base: String,
    /// HTTP request timeout (seconds)
    pub request_timeout_secs: u32,

    // --- Timing ---
    /// Seconds between cycles; 0 runs a single cycle
    pub poll_interval_secs: u32,
    /// Delay before the next cycle after a failure (seconds)
    pub retry_secs: u32,
    /// Give up after this many failed cycles in a row; 0 never gives up
    pub max_consecutive_failures: u32,

    // --- Output ---
    /// Where the command bytes go
    pub sink: SinkSpec,
    /// Colour id table
    pub palette: Palette,
    /// Phenomenon → category assignment
    pub classification: Classification,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            // Location
            api_key: String::new(),
            state: String::new(),
            city: String::new(),

            // Feed
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout_secs: 30,

            // Timing
            poll_interval_secs: 0,       // run once
            retry_secs: 10,
            max_consecutive_failures: 0, // never give up

            // Output
            sink: SinkSpec::Stdout,
            palette: Palette::Extended,
            classification: Classification::Standard,
        }
    }
}

impl QueryConfig {
    /// Reject configurations the run loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("api_key", &self.api_key),
            ("state", &self.state),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{name} must not be empty")));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be > 0".into()));
        }
        if self.is_periodic() && self.retry_secs == 0 {
            return Err(Error::Config(
                "retry_secs must be > 0 when polling".into(),
            ));
        }
        alerts_url(&self.api_base, &self.api_key, &self.state, &self.city).map(|_| ())
    }

    /// `true` when the query polls instead of running once.
    pub fn is_periodic(&self) -> bool {
        self.poll_interval_secs > 0
    }

    /// Failed cycles in a row after which the run stops (0 = never).
    ///
    /// Run-once mode has a single cycle, so one failure ends the run.
    pub fn failure_limit(&self) -> u32 {
        if self.is_periodic() {
            self.max_consecutive_failures
        } else {
            1
        }
    }

    pub fn profile(&self) -> Profile {
        Profile {
            palette: self.palette,
            classification: self.classification,
        }
    }

    /// Copy safe to log: the API key is masked.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: if self.api_key.is_empty() {
                String::new()
            } else {
                "***".to_owned()
            },
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Sink selection
// ---------------------------------------------------------------------------

/// Where the two command bytes are written.
///
/// Written as a string in config and on the command line:
/// `stdout`, `null`, `device:<path>`, `tcp:<host:port>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SinkSpec {
    #[default]
    Stdout,
    Null,
    /// Serial device node or plain file.
    Device(PathBuf),
    /// `host:port` of a TCP listener.
    Tcp(String),
}

impl FromStr for SinkSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdout" | "-" => return Ok(Self::Stdout),
            "null" => return Ok(Self::Null),
            _ => {}
        }
        if let Some(path) = s.strip_prefix("device:") {
            if path.is_empty() {
                return Err(Error::Config("device sink needs a path".into()));
            }
            return Ok(Self::Device(PathBuf::from(path)));
        }
        if let Some(addr) = s.strip_prefix("tcp:") {
            match addr.rsplit_once(':') {
                Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                    return Ok(Self::Tcp(addr.to_owned()));
                }
                _ => {
                    return Err(Error::Config(format!(
                        "tcp sink needs host:port, got '{addr}'"
                    )));
                }
            }
        }
        Err(Error::Config(format!(
            "unknown sink '{s}' (expected stdout, null, device:<path> or tcp:<host:port>)"
        )))
    }
}

impl fmt::Display for SinkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Null => f.write_str("null"),
            Self::Device(path) => write!(f, "device:{}", path.display()),
            Self::Tcp(addr) => write!(f, "tcp:{addr}"),
        }
    }
}

impl TryFrom<String> for SinkSpec {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SinkSpec> for String {
    fn from(spec: SinkSpec) -> Self {
        spec.to_string()
    }
}
