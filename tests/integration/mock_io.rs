//! Mock adapters for integration tests.
//!
//! Records every byte written and every event emitted so tests can assert
//! on the full history of a run.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use pufflux::app::events::AppEvent;
use pufflux::app::ports::{AlertSource, EventSink, TransportFactory};
use pufflux::feed::{FeedSnapshot, parse_response};
use pufflux::transport::Transport;
use pufflux::{Error, Result};

// ── ScriptedSource ────────────────────────────────────────────

/// Replays a queue of fetch results; repeats the last one when drained.
pub struct ScriptedSource {
    script: VecDeque<Result<FeedSnapshot>>,
    last: Result<FeedSnapshot>,
    pub fetches: usize,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new(script: Vec<Result<FeedSnapshot>>) -> Self {
        Self {
            script: script.into(),
            last: Ok(FeedSnapshot::default()),
            fetches: 0,
        }
    }

    /// Script made of raw feed bodies, parsed like the HTTP adapter would.
    pub fn from_bodies(bodies: &[&str]) -> Self {
        Self::new(bodies.iter().map(|b| parse_response(b)).collect())
    }
}

impl AlertSource for ScriptedSource {
    fn fetch(&mut self) -> Result<FeedSnapshot> {
        self.fetches += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last.clone()
    }
}

// ── RecordingTransport ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    None,
    ShortWrite,
    WriteError,
    FlushError,
}

/// Byte sink that keeps everything written and flushed.
pub struct RecordingTransport {
    pub written: Vec<u8>,
    pub flushes: usize,
    pub fault: Fault,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::with_fault(Fault::None)
    }

    pub fn with_fault(fault: Fault) -> Self {
        Self {
            written: Vec::new(),
            flushes: 0,
            fault,
        }
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for RecordingTransport {
    type Error = &'static str;

    fn write(&mut self, data: &[u8]) -> core::result::Result<usize, Self::Error> {
        match self.fault {
            Fault::WriteError => Err("write refused"),
            Fault::ShortWrite => {
                self.written.extend_from_slice(&data[..1]);
                Ok(1)
            }
            Fault::None | Fault::FlushError => {
                self.written.extend_from_slice(data);
                Ok(data.len())
            }
        }
    }

    fn flush(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fault == Fault::FlushError {
            return Err("flush refused");
        }
        self.flushes += 1;
        Ok(())
    }
}

// ── SharedSink (TransportFactory) ─────────────────────────────

/// Factory whose transports all append into one shared byte log, so a
/// test can see what every cycle wrote.
#[derive(Default)]
pub struct SharedSink {
    pub log: Rc<RefCell<Vec<u8>>>,
    pub opens: usize,
    pub fail_open: bool,
}

pub struct SharedTransport(Rc<RefCell<Vec<u8>>>);

impl Transport for SharedTransport {
    type Error = &'static str;

    fn write(&mut self, data: &[u8]) -> core::result::Result<usize, Self::Error> {
        self.0.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

impl TransportFactory for SharedSink {
    type Transport = SharedTransport;

    fn open(&mut self) -> Result<SharedTransport> {
        self.opens += 1;
        if self.fail_open {
            return Err(Error::Transport("device unplugged".into()));
        }
        Ok(SharedTransport(self.log.clone()))
    }
}

// ── RecordingEvents ───────────────────────────────────────────

#[derive(Default)]
pub struct RecordingEvents {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingEvents {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
