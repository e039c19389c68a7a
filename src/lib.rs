//! Pufflux weather-alert query library.
//!
//! Turns the active alert list for one location into the 2-byte command
//! the Pufflux cloud understands. The decision core (`vtec`, `protocol`,
//! `app::selector`, `app::pipeline`) is pure; everything that touches
//! the network or a device sits behind the port traits in `app::ports`.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod protocol;
pub mod scheduler;
pub mod transport;
pub mod vtec;

pub use error::{Error, Result};
