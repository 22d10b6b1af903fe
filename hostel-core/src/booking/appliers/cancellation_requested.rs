//! CancellationRequested event applier

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot, WizardState};

/// CancellationRequested applier
pub struct CancellationRequestedApplier;

impl EventApplier for CancellationRequestedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::CancellationRequested { from } = &event.payload {
            snapshot.resume_state = Some(*from);
            snapshot.state = WizardState::Cancelling;

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
