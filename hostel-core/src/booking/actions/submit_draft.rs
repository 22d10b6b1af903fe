//! SubmitDraft command handler
//!
//! "Continue to Summary". Runs the field rules over the form buffer.
//! A failed validation is not a command error: it is recorded as
//! `DraftRejected` so the messages can be shown inline.

use crate::booking::traits::{
    CommandContext, CommandHandler, CommandMetadata, WizardError, WizardResult,
};
use shared::booking::{BookingInput, EventPayload, WizardEvent, WizardEventType, WizardState};

/// SubmitDraft action
#[derive(Debug, Clone)]
pub struct SubmitDraftAction {
    pub input: BookingInput,
}

impl CommandHandler for SubmitDraftAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state("submit_draft", &[WizardState::Editing])?;
        if ctx.snapshot().room.is_none() {
            return Err(WizardError::NoRoomSelected);
        }

        let (event_type, payload) = match self.input.to_draft() {
            Ok(draft) => (
                WizardEventType::DraftAccepted,
                EventPayload::DraftAccepted {
                    input: self.input.clone(),
                    draft,
                },
            ),
            Err(errors) => (
                WizardEventType::DraftRejected,
                EventPayload::DraftRejected {
                    input: self.input.clone(),
                    errors,
                },
            ),
        };

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            event_type,
            payload,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{metadata, snapshot_in, valid_input};

    fn submit(input: BookingInput) -> WizardResult<Vec<WizardEvent>> {
        let snapshot = snapshot_in(WizardState::Editing);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        SubmitDraftAction { input }.execute(&mut ctx, &metadata())
    }

    #[test]
    fn test_valid_input_accepted() {
        let events = submit(valid_input()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, WizardEventType::DraftAccepted);
        if let EventPayload::DraftAccepted { draft, .. } = &events[0].payload {
            assert_eq!(draft.cnic, "3520212345671");
        } else {
            panic!("Expected DraftAccepted payload");
        }
    }

    #[test]
    fn test_short_name_rejected_with_message() {
        let mut input = valid_input();
        input.name = "J".to_string();

        let events = submit(input).unwrap();
        assert_eq!(events[0].event_type, WizardEventType::DraftRejected);
        if let EventPayload::DraftRejected { errors, input } = &events[0].payload {
            assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
            assert_eq!(errors.len(), 1);
            assert_eq!(input.name, "J");
        } else {
            panic!("Expected DraftRejected payload");
        }
    }

    #[test]
    fn test_two_char_name_accepted() {
        let mut input = valid_input();
        input.name = "Jo".to_string();
        let events = submit(input).unwrap();
        assert_eq!(events[0].event_type, WizardEventType::DraftAccepted);
    }

    #[test]
    fn test_submit_outside_editing_fails() {
        for state in [WizardState::Idle, WizardState::Summary, WizardState::Cancelling] {
            let snapshot = snapshot_in(state);
            let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
            let result = SubmitDraftAction {
                input: valid_input(),
            }
            .execute(&mut ctx, &metadata());
            assert!(matches!(result, Err(WizardError::InvalidTransition { .. })));
        }
    }

    #[test]
    fn test_submit_without_room_fails() {
        let mut snapshot = snapshot_in(WizardState::Editing);
        snapshot.room = None;
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        let result = SubmitDraftAction {
            input: valid_input(),
        }
        .execute(&mut ctx, &metadata());
        assert_eq!(result, Err(WizardError::NoRoomSelected));
    }
}
