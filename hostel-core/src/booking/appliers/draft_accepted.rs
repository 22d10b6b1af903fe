//! DraftAccepted event applier

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot, WizardState};
use shared::types::FieldErrors;

/// DraftAccepted applier
pub struct DraftAcceptedApplier;

impl EventApplier for DraftAcceptedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::DraftAccepted { input, draft } = &event.payload {
            snapshot.form = input.clone();
            snapshot.draft = Some(draft.clone());
            snapshot.field_errors = FieldErrors::new();
            snapshot.state = WizardState::Summary;

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
