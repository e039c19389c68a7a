//! Alert selection.

use crate::feed::Alert;
use crate::vtec::Significance;

/// Pick the alert that should drive the cloud.
///
/// Tiers are tried strictly in the order Warning, Watch, Advisory; within a
/// tier the first alert in input order wins. Alerts of any other
/// significance, or whose significance does not resolve, are never picked.
/// `None` is the ordinary "no active alert" answer.
pub fn select_highest_priority(alerts: &[Alert]) -> Option<&Alert> {
    Significance::SELECTION_ORDER
        .iter()
        .find_map(|tier| alerts.iter().find(|a| a.significance() == Some(*tier)))
}
