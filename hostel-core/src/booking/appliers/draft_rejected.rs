//! DraftRejected event applier
//!
//! Keeps the submitted buffer and its field messages; stays in Editing.

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot};

/// DraftRejected applier
pub struct DraftRejectedApplier;

impl EventApplier for DraftRejectedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::DraftRejected { input, errors } = &event.payload {
            snapshot.form = input.clone();
            snapshot.field_errors = errors.clone();
            snapshot.draft = None;

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{event, snapshot_in, valid_input};
    use shared::booking::{WizardEventType, WizardState};
    use shared::types::FieldErrors;

    #[test]
    fn test_rejection_keeps_input_and_messages() {
        let mut snapshot = snapshot_in(WizardState::Editing);
        let mut input = valid_input();
        input.cnic = "12345".to_string();
        let mut errors = FieldErrors::new();
        errors.insert("cnic", "CNIC must be 13 digits");

        let event = event(
            4,
            WizardEventType::DraftRejected,
            EventPayload::DraftRejected {
                input: input.clone(),
                errors: errors.clone(),
            },
        );
        DraftRejectedApplier.apply(&mut snapshot, &event);

        assert_eq!(snapshot.state, WizardState::Editing);
        assert_eq!(snapshot.form, input);
        assert_eq!(snapshot.field_errors, errors);
        assert_eq!(snapshot.last_sequence, 4);
    }
}
