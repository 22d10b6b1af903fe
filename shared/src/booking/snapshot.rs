//! Wizard snapshot - computed state from the event stream

use super::types::{BookingDraft, BookingInput, SummaryLine};
use crate::models::Room;
use crate::types::FieldErrors;
use serde::{Deserialize, Serialize};

/// Wizard step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardState {
    /// No room selected, no form shown
    #[default]
    Idle,
    /// Booking form shown
    Editing,
    /// Validated details shown for confirmation
    Summary,
    /// Cancellation reason being collected
    Cancelling,
}

impl std::fmt::Display for WizardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardState::Idle => write!(f, "IDLE"),
            WizardState::Editing => write!(f, "EDITING"),
            WizardState::Summary => write!(f, "SUMMARY"),
            WizardState::Cancelling => write!(f, "CANCELLING"),
        }
    }
}

/// Wizard snapshot - computed from the event stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub state: WizardState,
    /// Room being booked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    /// Raw form buffer
    #[serde(default)]
    pub form: BookingInput,
    /// Validated details (present from Summary until the wizard resets)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<BookingDraft>,
    /// Messages from the last rejected submission
    #[serde(default)]
    pub field_errors: FieldErrors,
    /// Cancellation reason buffer
    #[serde(default)]
    pub cancellation_reason: String,
    /// Step to return to when the cancellation prompt is dismissed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_state: Option<WizardState>,
    /// Sequence of the last applied event
    pub last_sequence: u64,
    /// Timestamp of the last applied event
    pub updated_at: i64,
}

impl WizardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.state == WizardState::Idle
    }

    /// Whether the booking form (or summary) panel is visible
    pub fn shows_booking_panel(&self) -> bool {
        self.room.is_some() && !self.is_idle()
    }

    /// Rows of the summary step, when there is something to summarise
    pub fn summary(&self) -> Option<Vec<SummaryLine>> {
        match (&self.draft, &self.room) {
            (Some(draft), Some(room)) => Some(draft.summary(room)),
            _ => None,
        }
    }

    /// Return to Idle, dropping the room, the form and any reason text
    pub fn reset(&mut self) {
        self.state = WizardState::Idle;
        self.room = None;
        self.form = BookingInput::default();
        self.draft = None;
        self.field_errors = FieldErrors::default();
        self.cancellation_reason.clear();
        self.resume_state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_is_idle() {
        let snapshot = WizardSnapshot::new();
        assert!(snapshot.is_idle());
        assert!(!snapshot.shows_booking_panel());
        assert!(snapshot.summary().is_none());
        assert_eq!(snapshot.last_sequence, 0);
    }

    #[test]
    fn test_reset_keeps_sequence() {
        let mut snapshot = WizardSnapshot::new();
        snapshot.state = WizardState::Cancelling;
        snapshot.cancellation_reason = "Too far".to_string();
        snapshot.resume_state = Some(WizardState::Summary);
        snapshot.last_sequence = 9;

        snapshot.reset();

        assert!(snapshot.is_idle());
        assert!(snapshot.cancellation_reason.is_empty());
        assert!(snapshot.resume_state.is_none());
        assert_eq!(snapshot.last_sequence, 9);
    }

    #[test]
    fn test_state_serde() {
        let json = serde_json::to_string(&WizardState::Cancelling).unwrap();
        assert_eq!(json, "\"CANCELLING\"");
        assert_eq!(WizardState::Summary.to_string(), "SUMMARY");
    }
}
