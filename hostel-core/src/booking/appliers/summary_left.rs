//! SummaryLeft event applier
//!
//! Back to the form. The buffer already holds the accepted values.

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot, WizardState};

/// SummaryLeft applier
pub struct SummaryLeftApplier;

impl EventApplier for SummaryLeftApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::SummaryLeft {} = &event.payload {
            if let Some(draft) = snapshot.draft.take() {
                snapshot.form = draft.to_input();
            }
            snapshot.state = WizardState::Editing;

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
