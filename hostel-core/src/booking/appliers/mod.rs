//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot};

mod booking_cancelled;
mod booking_requested;
mod cancellation_dismissed;
mod cancellation_reason_edited;
mod cancellation_requested;
mod draft_accepted;
mod draft_rejected;
mod room_selected;
mod summary_left;

pub use booking_cancelled::BookingCancelledApplier;
pub use booking_requested::BookingRequestedApplier;
pub use cancellation_dismissed::CancellationDismissedApplier;
pub use cancellation_reason_edited::CancellationReasonEditedApplier;
pub use cancellation_requested::CancellationRequestedApplier;
pub use draft_accepted::DraftAcceptedApplier;
pub use draft_rejected::DraftRejectedApplier;
pub use room_selected::RoomSelectedApplier;
pub use summary_left::SummaryLeftApplier;

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    RoomSelected(RoomSelectedApplier),
    DraftRejected(DraftRejectedApplier),
    DraftAccepted(DraftAcceptedApplier),
    SummaryLeft(SummaryLeftApplier),
    BookingRequested(BookingRequestedApplier),
    CancellationRequested(CancellationRequestedApplier),
    CancellationReasonEdited(CancellationReasonEditedApplier),
    CancellationDismissed(CancellationDismissedApplier),
    BookingCancelled(BookingCancelledApplier),
}

/// Convert WizardEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&WizardEvent> for EventAction {
    fn from(event: &WizardEvent) -> Self {
        match &event.payload {
            EventPayload::RoomSelected { .. } => EventAction::RoomSelected(RoomSelectedApplier),
            EventPayload::DraftRejected { .. } => EventAction::DraftRejected(DraftRejectedApplier),
            EventPayload::DraftAccepted { .. } => EventAction::DraftAccepted(DraftAcceptedApplier),
            EventPayload::SummaryLeft {} => EventAction::SummaryLeft(SummaryLeftApplier),
            EventPayload::BookingRequested { .. } => {
                EventAction::BookingRequested(BookingRequestedApplier)
            }
            EventPayload::CancellationRequested { .. } => {
                EventAction::CancellationRequested(CancellationRequestedApplier)
            }
            EventPayload::CancellationReasonEdited { .. } => {
                EventAction::CancellationReasonEdited(CancellationReasonEditedApplier)
            }
            EventPayload::CancellationDismissed { .. } => {
                EventAction::CancellationDismissed(CancellationDismissedApplier)
            }
            EventPayload::BookingCancelled { .. } => {
                EventAction::BookingCancelled(BookingCancelledApplier)
            }
        }
    }
}

/// Apply one event to a snapshot
pub fn apply_event(snapshot: &mut WizardSnapshot, event: &WizardEvent) {
    let applier: EventAction = event.into();
    applier.apply(snapshot, event);
}
