//! ConfirmBooking command handler
//!
//! "Request Booking" on the summary. Produces the booking request that is
//! handed to the hostel owner. Room availability is not re-checked here.

use crate::booking::traits::{
    CommandContext, CommandHandler, CommandMetadata, WizardError, WizardResult,
};
use shared::booking::{BookingRequest, EventPayload, WizardEvent, WizardEventType, WizardState};

/// ConfirmBooking action
#[derive(Debug, Clone)]
pub struct ConfirmBookingAction;

impl CommandHandler for ConfirmBookingAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state("confirm_booking", &[WizardState::Summary])?;

        let snapshot = ctx.snapshot();
        let room = snapshot.room.clone().ok_or(WizardError::NoRoomSelected)?;
        let draft = snapshot
            .draft
            .clone()
            .ok_or(WizardError::InvalidTransition {
                command: "confirm_booking",
                state: snapshot.state,
            })?;

        let request = BookingRequest::new(room, draft, metadata.timestamp);

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::BookingRequested,
            EventPayload::BookingRequested { request },
        )])
    }
}
