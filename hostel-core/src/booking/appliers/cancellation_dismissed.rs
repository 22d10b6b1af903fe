//! CancellationDismissed event applier
//!
//! Restores the step the prompt was opened from. The reason buffer stays.

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot};

/// CancellationDismissed applier
pub struct CancellationDismissedApplier;

impl EventApplier for CancellationDismissedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::CancellationDismissed { to } = &event.payload {
            snapshot.state = *to;
            snapshot.resume_state = None;

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
