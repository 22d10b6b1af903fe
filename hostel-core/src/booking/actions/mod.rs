//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{WizardCommand, WizardCommandPayload, WizardEvent};

mod back;
mod confirm_booking;
mod confirm_cancellation;
mod edit_cancellation_reason;
mod keep_booking;
mod request_cancellation;
mod select_room;
mod submit_draft;

pub use back::BackAction;
pub use confirm_booking::ConfirmBookingAction;
pub use confirm_cancellation::ConfirmCancellationAction;
pub use edit_cancellation_reason::EditCancellationReasonAction;
pub use keep_booking::KeepBookingAction;
pub use request_cancellation::RequestCancellationAction;
pub use select_room::SelectRoomAction;
pub use submit_draft::SubmitDraftAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    SelectRoom(SelectRoomAction),
    SubmitDraft(SubmitDraftAction),
    Back(BackAction),
    ConfirmBooking(ConfirmBookingAction),
    RequestCancellation(RequestCancellationAction),
    EditCancellationReason(EditCancellationReasonAction),
    KeepBooking(KeepBookingAction),
    ConfirmCancellation(ConfirmCancellationAction),
}

/// Manual implementation of CommandHandler for CommandAction
impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        match self {
            CommandAction::SelectRoom(action) => action.execute(ctx, metadata),
            CommandAction::SubmitDraft(action) => action.execute(ctx, metadata),
            CommandAction::Back(action) => action.execute(ctx, metadata),
            CommandAction::ConfirmBooking(action) => action.execute(ctx, metadata),
            CommandAction::RequestCancellation(action) => action.execute(ctx, metadata),
            CommandAction::EditCancellationReason(action) => action.execute(ctx, metadata),
            CommandAction::KeepBooking(action) => action.execute(ctx, metadata),
            CommandAction::ConfirmCancellation(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert WizardCommand to CommandAction
///
/// This is the ONLY place with a match on WizardCommandPayload.
impl From<&WizardCommand> for CommandAction {
    fn from(cmd: &WizardCommand) -> Self {
        match &cmd.payload {
            WizardCommandPayload::SelectRoom { room } => {
                CommandAction::SelectRoom(SelectRoomAction { room: room.clone() })
            }
            WizardCommandPayload::SubmitDraft { input } => {
                CommandAction::SubmitDraft(SubmitDraftAction {
                    input: input.clone(),
                })
            }
            WizardCommandPayload::Back => CommandAction::Back(BackAction),
            WizardCommandPayload::ConfirmBooking => {
                CommandAction::ConfirmBooking(ConfirmBookingAction)
            }
            WizardCommandPayload::RequestCancellation => {
                CommandAction::RequestCancellation(RequestCancellationAction)
            }
            WizardCommandPayload::EditCancellationReason { reason } => {
                CommandAction::EditCancellationReason(EditCancellationReasonAction {
                    reason: reason.clone(),
                })
            }
            WizardCommandPayload::KeepBooking => CommandAction::KeepBooking(KeepBookingAction),
            WizardCommandPayload::ConfirmCancellation { reason } => {
                CommandAction::ConfirmCancellation(ConfirmCancellationAction {
                    reason: reason.clone(),
                })
            }
        }
    }
}
