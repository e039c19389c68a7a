//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (stderr via env_logger in the binary). Stdout stays
//! free for the command bytes.

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::protocol::Command;

/// Adapter that logs every [`AppEvent`] as one line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// `[0x21,0x0c] (0b00100001,0b00001100)`, high byte first.
pub fn wire_text(command: Command) -> String {
    let [hi, lo] = command.to_bytes();
    format!("[{hi:#04x},{lo:#04x}] ({hi:#010b},{lo:#010b})")
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::CycleStarted { cycle } => {
                info!("CYCLE | #{cycle} started");
            }
            AppEvent::UpstreamError(e) => {
                error!("FEED  | {e}");
            }
            AppEvent::AlertSelected {
                phenomenon,
                significance,
                category,
            } => {
                info!("ALERT | {phenomenon}/{significance} -> {category}");
            }
            AppEvent::NoActiveAlert => {
                info!("ALERT | none active");
            }
            AppEvent::UnrenderableAlert { alert, reason } => {
                warn!("ALERT | {alert}: {reason}; sending default");
            }
            AppEvent::CommandWritten(cmd) => {
                info!("WRITE | Writing {}", wire_text(*cmd));
            }
            AppEvent::CycleFailed { cycle, error } => {
                error!("CYCLE | #{cycle} failed ({}): {error}", error.kind());
            }
        }
    }
}
