//! Wizard events - immutable facts recorded after command processing

use super::snapshot::WizardState;
use super::types::{BookingDraft, BookingInput, BookingRequest, CancellationRecord, Notice};
use crate::models::Room;
use crate::types::FieldErrors;
use serde::{Deserialize, Serialize};

/// Wizard event - replayable record of one state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardEvent {
    /// Event unique ID
    pub event_id: String,
    /// Sequence number within the wizard session (ordering and replay)
    pub sequence: u64,
    /// Timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command that triggered this event
    pub command_id: String,
    pub event_type: WizardEventType,
    pub payload: EventPayload,
}

impl WizardEvent {
    pub fn new(
        sequence: u64,
        command_id: String,
        event_type: WizardEventType,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: chrono::Utc::now().timestamp_millis(),
            command_id,
            event_type,
            payload,
        }
    }

    /// Acknowledgment to show the guest for this event, if any
    pub fn notice(&self) -> Option<Notice> {
        match &self.payload {
            EventPayload::BookingRequested { .. } => Some(Notice::booking_requested()),
            EventPayload::BookingCancelled { .. } => Some(Notice::booking_cancelled()),
            _ => None,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardEventType {
    RoomSelected,
    DraftRejected,
    DraftAccepted,
    SummaryLeft,
    BookingRequested,
    CancellationRequested,
    CancellationReasonEdited,
    CancellationDismissed,
    BookingCancelled,
}

impl std::fmt::Display for WizardEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardEventType::RoomSelected => write!(f, "ROOM_SELECTED"),
            WizardEventType::DraftRejected => write!(f, "DRAFT_REJECTED"),
            WizardEventType::DraftAccepted => write!(f, "DRAFT_ACCEPTED"),
            WizardEventType::SummaryLeft => write!(f, "SUMMARY_LEFT"),
            WizardEventType::BookingRequested => write!(f, "BOOKING_REQUESTED"),
            WizardEventType::CancellationRequested => write!(f, "CANCELLATION_REQUESTED"),
            WizardEventType::CancellationReasonEdited => write!(f, "CANCELLATION_REASON_EDITED"),
            WizardEventType::CancellationDismissed => write!(f, "CANCELLATION_DISMISSED"),
            WizardEventType::BookingCancelled => write!(f, "BOOKING_CANCELLED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Room ==========
    RoomSelected {
        room: Room,
    },

    // ========== Form ==========
    DraftRejected {
        /// Buffer as submitted (kept for inline re-presentation)
        input: BookingInput,
        errors: FieldErrors,
    },
    DraftAccepted {
        input: BookingInput,
        draft: BookingDraft,
    },
    SummaryLeft {},

    // ========== Outcomes ==========
    BookingRequested {
        request: BookingRequest,
    },

    // ========== Cancellation ==========
    CancellationRequested {
        /// Step the prompt was opened from ("Keep Booking" returns here)
        from: WizardState,
    },
    CancellationReasonEdited {
        reason: String,
    },
    CancellationDismissed {
        /// Step restored
        to: WizardState,
    },
    BookingCancelled {
        record: CancellationRecord,
    },
}
