//! RequestCancellation command handler
//!
//! "Cancel Booking" opens the reason prompt over the form or the summary.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{EventPayload, WizardEvent, WizardEventType, WizardState};

/// RequestCancellation action
#[derive(Debug, Clone)]
pub struct RequestCancellationAction;

impl CommandHandler for RequestCancellationAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state(
            "request_cancellation",
            &[WizardState::Editing, WizardState::Summary],
        )?;
        let from = ctx.snapshot().state;

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::CancellationRequested,
            EventPayload::CancellationRequested { from },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{metadata, snapshot_in};
    use crate::booking::traits::WizardError;

    #[test]
    fn test_request_records_origin() {
        for state in [WizardState::Editing, WizardState::Summary] {
            let snapshot = snapshot_in(state);
            let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
            let events = RequestCancellationAction
                .execute(&mut ctx, &metadata())
                .unwrap();
            assert_eq!(
                events[0].payload,
                EventPayload::CancellationRequested { from: state }
            );
        }
    }

    #[test]
    fn test_request_from_idle_fails() {
        let snapshot = snapshot_in(WizardState::Idle);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        let result = RequestCancellationAction.execute(&mut ctx, &metadata());
        assert!(matches!(result, Err(WizardError::InvalidTransition { .. })));
    }

    #[test]
    fn test_request_twice_fails() {
        let snapshot = snapshot_in(WizardState::Cancelling);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        assert!(RequestCancellationAction.execute(&mut ctx, &metadata()).is_err());
    }
}
