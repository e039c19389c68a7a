//! Unified error type for the alert query.
//!
//! A single `Error` enum that every stage of a decision cycle converts
//! into, so the run loop handles all failures the same way: log, count,
//! wait for the next tick. Lookups in the core never fail; they answer
//! `None` instead.

use core::fmt;

use crate::feed::UpstreamError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The feed request could not be completed (network, HTTP status).
    Fetch(String),
    /// The feed body was not the JSON we expect.
    Parse(String),
    /// The feed answered with an error payload of its own.
    Upstream(UpstreamError),
    /// Writing or flushing the command bytes failed.
    Transport(String),
    /// Configuration is invalid.
    Config(String),
}

impl Error {
    /// Short tag for log lines and exit reporting.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Parse(_) => "parse",
            Self::Upstream(_) => "upstream",
            Self::Transport(_) => "transport",
            Self::Config(_) => "config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "fetch: {msg}"),
            Self::Parse(msg) => write!(f, "parse: {msg}"),
            Self::Upstream(e) => write!(f, "upstream: {e}"),
            Self::Transport(msg) => write!(f, "transport: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<UpstreamError> for Error {
    fn from(e: UpstreamError) -> Self {
        Self::Upstream(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
