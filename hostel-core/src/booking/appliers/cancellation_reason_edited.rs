//! CancellationReasonEdited event applier

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot};

/// CancellationReasonEdited applier
pub struct CancellationReasonEditedApplier;

impl EventApplier for CancellationReasonEditedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::CancellationReasonEdited { reason } = &event.payload {
            snapshot.cancellation_reason = reason.clone();

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
