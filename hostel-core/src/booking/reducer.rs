//! Snapshot rebuild from an event log

use super::appliers::apply_event;
use shared::booking::{WizardEvent, WizardSnapshot};

/// Rebuild a wizard snapshot by folding events in order
///
/// Replaying the full log of a live wizard yields a snapshot equal to the
/// live one.
pub fn replay<'a>(events: impl IntoIterator<Item = &'a WizardEvent>) -> WizardSnapshot {
    let mut snapshot = WizardSnapshot::new();
    for event in events {
        apply_event(&mut snapshot, event);
    }
    snapshot
}
