//! Glue between the [`Scheduler`](crate::scheduler::Scheduler) and the
//! [`QueryService`]: each fired schedule becomes one cycle.

use log::info;

use crate::error::{Error, Result};

use super::pipeline::Decision;
use super::ports::{
    AlertSource, CycleOutcome, EventSink, ScheduleFiredKind, SchedulerDelegate, TransportFactory,
};
use super::service::QueryService;

/// Owns the service and its adapters for the lifetime of the run loop.
///
/// The byte sink is opened only when a cycle has a command to send and is
/// released after the flush, so a device that disappears between polls is
/// picked up again on the next one.
pub struct CycleRunner<S, F, E> {
    service: QueryService,
    source: S,
    transports: F,
    events: E,
    last_error: Option<Error>,
    failure_limit: u32,
}

impl<S, F, E> CycleRunner<S, F, E>
where
    S: AlertSource,
    F: TransportFactory,
    E: EventSink,
{
    pub fn new(service: QueryService, source: S, transports: F, events: E) -> Self {
        Self {
            service,
            source,
            transports,
            events,
            last_error: None,
            failure_limit: 0,
        }
    }

    /// Give up once this many cycles in a row have failed (0 = never).
    #[must_use]
    pub fn with_failure_limit(mut self, limit: u32) -> Self {
        self.failure_limit = limit;
        self
    }

    /// Run one cycle, opening the sink only if there is a command to send.
    pub fn run_once(&mut self) -> Result<Decision> {
        let result = self.service.run_cycle_opening(
            &mut self.source,
            &mut self.transports,
            &mut self.events,
        );
        self.last_error = result.as_ref().err().cloned();
        result
    }

    /// The error to stop the run loop with, once the failure limit is hit.
    pub fn give_up(&self) -> Option<&Error> {
        if self.failure_limit == 0 || self.service.consecutive_failures() < self.failure_limit {
            return None;
        }
        self.last_error.as_ref()
    }

    pub fn service(&self) -> &QueryService {
        &self.service
    }

    /// Error of the most recent cycle, if it failed.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn transports(&self) -> &F {
        &self.transports
    }
}

impl<S, F, E> SchedulerDelegate for CycleRunner<S, F, E>
where
    S: AlertSource,
    F: TransportFactory,
    E: EventSink,
{
    fn on_schedule_fired(&mut self, label: &str, kind: ScheduleFiredKind) -> CycleOutcome {
        info!("'{label}' fired ({kind:?})");
        match self.run_once() {
            Ok(_) => CycleOutcome::Completed,
            Err(_) => CycleOutcome::Failed,
        }
    }
}
