//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. Nothing here touches the network.

mod cycle_tests;
mod feed_tests;
mod mock_io;
mod runner_tests;
