//! Port traits: the hexagonal boundary between the decision core and the
//! outside world.
//!
//! ```text
//!   AlertSource ──▶ QueryService ──▶ Transport (2 bytes, MSB first)
//!                        │
//!                        └──────────▶ EventSink
//! ```
//!
//! Driven adapters (HTTP feed, byte sinks, log output) implement these
//! traits; the [`QueryService`](super::service::QueryService) consumes them
//! via generics.

use crate::error::Result;
use crate::feed::FeedSnapshot;
use crate::transport::Transport;

// ───────────────────────────────────────────────────────────────
// Alert source (driven adapter: feed → domain)
// ───────────────────────────────────────────────────────────────

/// Produces the current alert list for the configured location.
pub trait AlertSource {
    /// Fetch and parse one snapshot. An error payload reported by the feed
    /// is *not* an `Err` here; it comes back in [`FeedSnapshot::error`].
    fn fetch(&mut self) -> Result<FeedSnapshot>;
}

// ───────────────────────────────────────────────────────────────
// Transport factory (driven adapter: domain → byte sink)
// ───────────────────────────────────────────────────────────────

/// Opens the byte sink for a single cycle. The transport is dropped (and
/// the sink released) when the cycle ends.
pub trait TransportFactory {
    type Transport: Transport;

    fn open(&mut self) -> Result<Self::Transport>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s through
/// this port; adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate
// ───────────────────────────────────────────────────────────────

/// Callback the [`Scheduler`](crate::scheduler::Scheduler) invokes when a
/// cycle is due. The scheduler uses the returned outcome to pick the next
/// delay.
pub trait SchedulerDelegate {
    fn on_schedule_fired(&mut self, label: &str, kind: ScheduleFiredKind) -> CycleOutcome;
}

/// Discriminant passed to [`SchedulerDelegate::on_schedule_fired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFiredKind {
    /// A regular periodic poll.
    Periodic,
    /// A periodic poll brought forward after a failed cycle.
    Retry,
    /// The single cycle of run-once mode.
    OneShot,
}

/// How a fired cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed,
    Failed,
}
