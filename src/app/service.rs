//! Application service: the hexagonal core.
//!
//! [`QueryService`] owns the decision pipeline and the cycle counters.
//! All I/O flows through port traits injected at call sites, making every
//! cycle testable with mock adapters.
//!
//! ```text
//!  AlertSource ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                  │      QueryService      │
//!    Transport ◀── │  Selector · Pipeline   │
//!                  └────────────────────────┘
//! ```

use log::{debug, error, warn};

use crate::error::{Error, Result};
use crate::protocol::{Command, Profile};
use crate::transport::{Transport, send_command};

use super::events::AppEvent;
use super::pipeline::{Decision, DecisionPipeline};
use super::ports::{AlertSource, EventSink, TransportFactory};

// ───────────────────────────────────────────────────────────────
// QueryService
// ───────────────────────────────────────────────────────────────

/// Runs one decision cycle at a time: fetch, decide, write.
pub struct QueryService {
    pipeline: DecisionPipeline,
    cycles: u64,
    consecutive_failures: u32,
    last_command: Option<Command>,
}

impl QueryService {
    pub fn new(profile: Profile) -> Self {
        Self {
            pipeline: DecisionPipeline::new(profile),
            cycles: 0,
            consecutive_failures: 0,
            last_command: None,
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle against an already-open transport:
    /// fetch → decide → write 2 bytes → flush.
    ///
    /// Any failure ends the cycle before a single byte is written, except a
    /// transport failure, which by definition happens during the write.
    pub fn run_cycle(
        &mut self,
        source: &mut impl AlertSource,
        transport: &mut impl Transport,
        sink: &mut impl EventSink,
    ) -> Result<Decision> {
        self.cycle(source, sink, |command| send_command(transport, command))
    }

    /// Like [`run_cycle`](Self::run_cycle), but the sink is only opened once
    /// there is a command to send, and released right after the flush.
    /// Failed fetches and upstream errors never touch the device; a sink that
    /// will not open fails the cycle like any other error.
    pub fn run_cycle_opening<F: TransportFactory>(
        &mut self,
        source: &mut impl AlertSource,
        transports: &mut F,
        sink: &mut impl EventSink,
    ) -> Result<Decision> {
        self.cycle(source, sink, |command| {
            let mut transport = transports
                .open()
                .inspect_err(|e| error!("could not open sink: {e}"))?;
            send_command(&mut transport, command)
        })
    }

    fn cycle(
        &mut self,
        source: &mut impl AlertSource,
        sink: &mut impl EventSink,
        write: impl FnOnce(Command) -> Result<()>,
    ) -> Result<Decision> {
        self.cycles += 1;
        let cycle = self.cycles;
        sink.emit(&AppEvent::CycleStarted { cycle });

        match self.decide_and_write(source, sink, write) {
            Ok(decision) => {
                self.consecutive_failures = 0;
                self.last_command = Some(decision.command);
                Ok(decision)
            }
            Err(error) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                warn!(
                    "cycle {cycle} failed ({} in a row): {error}",
                    self.consecutive_failures
                );
                sink.emit(&AppEvent::CycleFailed {
                    cycle,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    fn decide_and_write(
        &self,
        source: &mut impl AlertSource,
        sink: &mut impl EventSink,
        write: impl FnOnce(Command) -> Result<()>,
    ) -> Result<Decision> {
        // 1. Fetch
        let snapshot = source.fetch()?;
        debug!("fetched {} alert(s)", snapshot.alerts.len());

        // 2. Decide; an upstream error payload aborts before any write
        let decision = match self.pipeline.decide_snapshot(&snapshot) {
            Ok(d) => d,
            Err(upstream) => {
                sink.emit(&AppEvent::UpstreamError(upstream.clone()));
                return Err(Error::Upstream(upstream));
            }
        };
        sink.emit(&AppEvent::from(&decision.outcome));

        // 3. Write
        write(decision.command)?;
        sink.emit(&AppEvent::CommandWritten(decision.command));

        Ok(decision)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn profile(&self) -> Profile {
        self.pipeline.profile()
    }

    /// Cycles started since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Failed cycles since the last successful one.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// The most recent command that reached the device.
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }
}
