//! KeepBooking command handler
//!
//! "Keep Booking" closes the reason prompt and returns to the step it was
//! opened from. The reason buffer is left as typed.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{EventPayload, WizardEvent, WizardEventType, WizardState};

/// KeepBooking action
#[derive(Debug, Clone)]
pub struct KeepBookingAction;

impl CommandHandler for KeepBookingAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state("keep_booking", &[WizardState::Cancelling])?;
        let to = ctx.snapshot().resume_state.unwrap_or(WizardState::Editing);

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::CancellationDismissed,
            EventPayload::CancellationDismissed { to },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{metadata, snapshot_in};

    #[test]
    fn test_keep_returns_to_origin() {
        let mut snapshot = snapshot_in(WizardState::Cancelling);
        snapshot.resume_state = Some(WizardState::Summary);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);

        let events = KeepBookingAction.execute(&mut ctx, &metadata()).unwrap();
        assert_eq!(
            events[0].payload,
            EventPayload::CancellationDismissed {
                to: WizardState::Summary
            }
        );
    }

    #[test]
    fn test_keep_defaults_to_editing() {
        let mut snapshot = snapshot_in(WizardState::Cancelling);
        snapshot.resume_state = None;
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);

        let events = KeepBookingAction.execute(&mut ctx, &metadata()).unwrap();
        assert_eq!(
            events[0].payload,
            EventPayload::CancellationDismissed {
                to: WizardState::Editing
            }
        );
    }

    #[test]
    fn test_keep_outside_prompt_fails() {
        let snapshot = snapshot_in(WizardState::Summary);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);
        assert!(KeepBookingAction.execute(&mut ctx, &metadata()).is_err());
    }
}
