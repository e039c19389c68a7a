//! Decision pipeline: alert list → command word.
//!
//! ```text
//!  alerts ──▶ selector ──▶ Phenomenon ──▶ Category ──▶ Style ──▶ Command
//!                │ none                      │ unresolvable / colour missing
//!                └──────────────┬────────────┘
//!                               ▼
//!                        Command::DEFAULT
//! ```
//!
//! Stateless and idempotent: the same alert list always yields the same
//! command.

use core::fmt;

use crate::feed::{Alert, FeedSnapshot, UpstreamError};
use crate::protocol::{Command, CommandFields, PaletteColor, Profile, Style};
use crate::vtec::{Category, Phenomenon, Significance};

use super::selector::select_highest_priority;

/// Why a selected alert could not be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unrenderable {
    /// The phenomenon code is not in the VTEC table.
    UnknownPhenomenon,
    /// The style needs a colour the active palette does not have.
    MissingColor(PaletteColor),
}

impl fmt::Display for Unrenderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPhenomenon => write!(f, "unknown phenomenon"),
            Self::MissingColor(c) => write!(f, "colour {c} not in palette"),
        }
    }
}

/// How the pipeline arrived at its command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An alert was selected and styled.
    Selected {
        alert: Alert,
        phenomenon: Phenomenon,
        significance: Significance,
        category: Category,
        style: Style,
    },
    /// Nothing at Advisory level or above; default animation.
    NoActiveAlert,
    /// An alert won selection but cannot be drawn; default animation.
    Unrenderable { alert: Alert, reason: Unrenderable },
}

/// The command to send plus the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub command: Command,
    pub outcome: Outcome,
}

impl Decision {
    fn fallback(outcome: Outcome) -> Self {
        Self {
            command: Command::DEFAULT,
            outcome,
        }
    }
}

/// Composes the VTEC tables, style table and codec under one [`Profile`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionPipeline {
    profile: Profile,
}

impl DecisionPipeline {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Decide what the cloud should show.
    ///
    /// An upstream error aborts the decision and is handed back unchanged;
    /// no command is produced for that cycle.
    pub fn decide(
        &self,
        alerts: &[Alert],
        upstream_error: Option<&UpstreamError>,
    ) -> Result<Decision, UpstreamError> {
        if let Some(e) = upstream_error {
            return Err(e.clone());
        }

        let Some(alert) = select_highest_priority(alerts) else {
            return Ok(Decision::fallback(Outcome::NoActiveAlert));
        };
        // The selector only returns alerts with a selectable significance.
        let Some(significance) = alert.significance() else {
            return Ok(Decision::fallback(Outcome::NoActiveAlert));
        };

        let Some(phenomenon) = alert.phenomenon() else {
            return Ok(Decision::fallback(Outcome::Unrenderable {
                alert: alert.clone(),
                reason: Unrenderable::UnknownPhenomenon,
            }));
        };

        let category = self.profile.classification.categorize(phenomenon);
        let style = Style::of(category);
        match self.encode(style, significance) {
            Ok(command) => Ok(Decision {
                command,
                outcome: Outcome::Selected {
                    alert: alert.clone(),
                    phenomenon,
                    significance,
                    category,
                    style,
                },
            }),
            Err(reason) => Ok(Decision::fallback(Outcome::Unrenderable {
                alert: alert.clone(),
                reason,
            })),
        }
    }

    /// [`decide`](Self::decide) over a fetched snapshot.
    pub fn decide_snapshot(&self, snapshot: &FeedSnapshot) -> Result<Decision, UpstreamError> {
        self.decide(&snapshot.alerts, snapshot.error.as_ref())
    }

    /// Only warnings animate fast.
    fn encode(&self, style: Style, significance: Significance) -> Result<Command, Unrenderable> {
        let palette = self.profile.palette;
        let base_color = palette
            .id(style.base)
            .ok_or(Unrenderable::MissingColor(style.base))?;
        let highlight_color = palette
            .id(style.highlight)
            .ok_or(Unrenderable::MissingColor(style.highlight))?;

        Ok(Command::encode(CommandFields {
            animation: style.animation.id(),
            fast: significance == Significance::Warning,
            base_color,
            highlight_color,
        }))
    }
}
