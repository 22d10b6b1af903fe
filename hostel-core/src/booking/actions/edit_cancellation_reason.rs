//! EditCancellationReason command handler
//!
//! Replaces the reason buffer with the prompt's current text.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{EventPayload, WizardEvent, WizardEventType, WizardState};

/// EditCancellationReason action
#[derive(Debug, Clone)]
pub struct EditCancellationReasonAction {
    pub reason: String,
}

impl CommandHandler for EditCancellationReasonAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state("edit_cancellation_reason", &[WizardState::Cancelling])?;

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::CancellationReasonEdited,
            EventPayload::CancellationReasonEdited {
                reason: self.reason.clone(),
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{metadata, snapshot_in};
    use crate::booking::traits::WizardError;

    #[test]
    fn test_edit_reason() {
        let snapshot = snapshot_in(WizardState::Cancelling);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        let action = EditCancellationReasonAction {
            reason: "Found a closer place".to_string(),
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();
        assert_eq!(events[0].event_type, WizardEventType::CancellationReasonEdited);
    }

    #[test]
    fn test_edit_long_reason_accepted() {
        let snapshot = snapshot_in(WizardState::Cancelling);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        let action = EditCancellationReasonAction {
            reason: "x".repeat(5_000),
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();
        match &events[0].payload {
            EventPayload::CancellationReasonEdited { reason } => assert_eq!(reason.len(), 5_000),
            other => panic!("Expected CancellationReasonEdited, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_reason_outside_prompt_fails() {
        let snapshot = snapshot_in(WizardState::Editing);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        let action = EditCancellationReasonAction {
            reason: "Too far".to_string(),
        };
        assert!(matches!(
            action.execute(&mut ctx, &metadata()),
            Err(WizardError::InvalidTransition { .. })
        ));
    }
}
