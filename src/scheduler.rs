//! Poll scheduler.
//!
//! Drives decision cycles one at a time. The scheduler notifies a
//! [`SchedulerDelegate`] when a cycle is due; the delegate runs it and
//! reports back whether it completed, which decides the next delay.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Scheduler                           │
//! │                                                              │
//! │   ┌───────────┐   due    ┌─────────────────────┐             │
//! │   │ countdown ├─────────▶│  SchedulerDelegate  │             │
//! │   └─────▲─────┘          │  (runs one cycle)   │             │
//! │         │                └──────────┬──────────┘             │
//! │         │   Completed → interval    │                        │
//! │         └───── Failed → retry ──────┘                        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use log::info;

use crate::app::ports::{CycleOutcome, ScheduleFiredKind, SchedulerDelegate};
use crate::config::QueryConfig;

// ═══════════════════════════════════════════════════════════════
//  Schedule types
// ═══════════════════════════════════════════════════════════════

/// The single schedule the scheduler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Human-readable label for log lines (e.g., "alerts MI/Ann_Arbor").
    pub label: String,
    /// Type of schedule.
    pub kind: ScheduleKind,
}

/// The type of schedule determines how and when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    /// Fire every `interval_secs` seconds; after a failed cycle, fire
    /// again after `retry_secs` instead.
    Periodic { interval_secs: u32, retry_secs: u32 },
    /// Fire once, then disable.
    OneShot,
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// The scheduler engine.
///
/// Decoupled from the service: when the schedule fires it invokes the
/// [`SchedulerDelegate`] callback, so the scheduler is testable on its own
/// with a recording delegate.
pub struct Scheduler {
    schedule: Schedule,
    /// Seconds left before the next fire.
    remaining_secs: u64,
    /// Whether the last fired cycle failed (next fire is a retry).
    retrying: bool,
    /// Set once a one-shot schedule has fired.
    finished: bool,
}

impl Scheduler {
    /// The first cycle is due immediately.
    pub fn new(schedule: Schedule) -> Self {
        info!("Scheduler: '{}' {:?}", schedule.label, schedule.kind);
        Self {
            schedule,
            remaining_secs: 0,
            retrying: false,
            finished: false,
        }
    }

    /// Periodic when the config polls, one-shot otherwise.
    pub fn from_config(config: &QueryConfig) -> Self {
        let kind = if config.is_periodic() {
            ScheduleKind::Periodic {
                interval_secs: config.poll_interval_secs,
                retry_secs: config.retry_secs,
            }
        } else {
            ScheduleKind::OneShot
        };
        Self::new(Schedule {
            label: format!("alerts {}/{}", config.state, config.city),
            kind,
        })
    }

    /// Advance the clock by `elapsed_secs` and fire if due.
    ///
    /// At most one cycle runs per call. Returns the outcome of the cycle
    /// when one ran.
    pub fn tick(
        &mut self,
        elapsed_secs: u64,
        delegate: &mut dyn SchedulerDelegate,
    ) -> Option<CycleOutcome> {
        if self.finished {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
        if self.remaining_secs > 0 {
            return None;
        }

        let outcome = match self.schedule.kind {
            ScheduleKind::OneShot => {
                let outcome =
                    delegate.on_schedule_fired(&self.schedule.label, ScheduleFiredKind::OneShot);
                self.finished = true;
                outcome
            }
            ScheduleKind::Periodic {
                interval_secs,
                retry_secs,
            } => {
                let kind = if self.retrying {
                    ScheduleFiredKind::Retry
                } else {
                    ScheduleFiredKind::Periodic
                };
                let outcome = delegate.on_schedule_fired(&self.schedule.label, kind);
                self.retrying = outcome == CycleOutcome::Failed;
                let delay = if self.retrying {
                    info!(
                        "Scheduler: '{}' failed, retrying in {}s",
                        self.schedule.label, retry_secs
                    );
                    retry_secs
                } else {
                    interval_secs
                };
                self.remaining_secs = u64::from(delay);
                outcome
            }
        };
        Some(outcome)
    }

    /// `true` once a one-shot schedule has fired. Periodic schedules never
    /// finish.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Seconds until the next fire (0 = due on the next tick).
    pub fn secs_until_due(&self) -> u64 {
        self.remaining_secs
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
