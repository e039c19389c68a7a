//! Outbound application events.
//!
//! The [`QueryService`](super::service::QueryService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.

use crate::error::Error;
use crate::feed::{Alert, UpstreamError};
use crate::protocol::Command;
use crate::vtec::{Category, Phenomenon, Significance};

use super::pipeline::{Outcome, Unrenderable};

/// Structured events emitted during a decision cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A cycle began (1-based count).
    CycleStarted { cycle: u64 },

    /// The feed reported an error payload; nothing is written this cycle.
    UpstreamError(UpstreamError),

    /// An alert won selection and was styled.
    AlertSelected {
        phenomenon: Phenomenon,
        significance: Significance,
        category: Category,
    },

    /// No alert at Advisory level or above.
    NoActiveAlert,

    /// The winning alert cannot be drawn; the default command goes out.
    UnrenderableAlert { alert: Alert, reason: Unrenderable },

    /// The command bytes were written and flushed.
    CommandWritten(Command),

    /// The cycle ended without writing a command.
    CycleFailed { cycle: u64, error: Error },
}

impl From<&Outcome> for AppEvent {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Selected {
                phenomenon,
                significance,
                category,
                ..
            } => Self::AlertSelected {
                phenomenon: *phenomenon,
                significance: *significance,
                category: *category,
            },
            Outcome::NoActiveAlert => Self::NoActiveAlert,
            Outcome::Unrenderable { alert, reason } => Self::UnrenderableAlert {
                alert: alert.clone(),
                reason: *reason,
            },
        }
    }
}
