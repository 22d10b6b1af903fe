//! ConfirmCancellation command handler
//!
//! "Confirm Cancellation" records the reason exactly as given, whatever its
//! length. An empty reason is accepted.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{
    CancellationRecord, EventPayload, WizardEvent, WizardEventType, WizardState,
};

/// ConfirmCancellation action
#[derive(Debug, Clone)]
pub struct ConfirmCancellationAction {
    pub reason: String,
}

impl CommandHandler for ConfirmCancellationAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state("confirm_cancellation", &[WizardState::Cancelling])?;

        let room_name = ctx.snapshot().room.as_ref().map(|r| r.name.clone());
        let record = CancellationRecord::new(room_name, self.reason.clone(), metadata.timestamp);

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::BookingCancelled,
            EventPayload::BookingCancelled { record },
        )])
    }
}
