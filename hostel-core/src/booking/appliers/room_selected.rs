//! RoomSelected event applier
//!
//! Opens the form for the selected room with an empty buffer.

use crate::booking::traits::EventApplier;
use shared::booking::{EventPayload, WizardEvent, WizardSnapshot, WizardState};

/// RoomSelected applier
pub struct RoomSelectedApplier;

impl EventApplier for RoomSelectedApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent) {
        if let EventPayload::RoomSelected { room } = &event.payload {
            snapshot.reset();
            snapshot.room = Some(room.clone());
            snapshot.state = WizardState::Editing;

            snapshot.last_sequence = event.sequence;
            snapshot.updated_at = event.timestamp;
        }
    }
}
