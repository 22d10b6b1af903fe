//! BookingRequested event applier
//!
//! The request has been handed off; the wizard closes.

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot};

/// BookingRequested applier
pub struct BookingRequestedApplier;

impl EventApplier for BookingRequestedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::BookingRequested { .. } = &event.payload {
            snapshot.reset();

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
