//! Wizard commands - requests from the booking page to change wizard state

use super::types::BookingInput;
use crate::models::Room;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// Wizard command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardCommand {
    /// Command unique ID (for tracing events back to the input that caused them)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: WizardCommandPayload,
}

impl WizardCommand {
    pub fn new(payload: WizardCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: now_millis(),
            payload,
        }
    }

    pub fn name(&self) -> &'static str {
        self.payload.name()
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardCommandPayload {
    /// "Book Now" on a room card
    SelectRoom { room: Room },
    /// "Continue to Summary"
    SubmitDraft { input: BookingInput },
    /// "Back" on the summary step
    Back,
    /// "Request Booking"
    ConfirmBooking,
    /// "Cancel Booking" (opens the reason prompt)
    RequestCancellation,
    /// Typing into the reason prompt
    EditCancellationReason { reason: String },
    /// "Keep Booking" (dismisses the reason prompt)
    KeepBooking,
    /// "Confirm Cancellation"
    ConfirmCancellation { reason: String },
}

impl WizardCommandPayload {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectRoom { .. } => "select_room",
            Self::SubmitDraft { .. } => "submit_draft",
            Self::Back => "back",
            Self::ConfirmBooking => "confirm_booking",
            Self::RequestCancellation => "request_cancellation",
            Self::EditCancellationReason { .. } => "edit_cancellation_reason",
            Self::KeepBooking => "keep_booking",
            Self::ConfirmCancellation { .. } => "confirm_cancellation",
        }
    }
}
