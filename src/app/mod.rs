//! Application core: pure decision logic plus the cycle orchestration.
//!
//! The selector and pipeline perform no I/O at all. The service and runner
//! talk to the outside world only through the **port traits** defined in
//! [`ports`], so every path through a cycle is testable with mocks.

pub mod events;
pub mod pipeline;
pub mod ports;
pub mod runner;
pub mod selector;
pub mod service;
