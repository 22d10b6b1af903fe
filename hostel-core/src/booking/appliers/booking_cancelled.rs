//! BookingCancelled event applier
//!
//! Closes the wizard and clears the reason buffer.

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot};

/// BookingCancelled applier
pub struct BookingCancelledApplier;

impl EventApplier for BookingCancelledApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::BookingCancelled { .. } = &event.payload {
            snapshot.reset();

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
