//! BookingWizard - command processing for one booking page session
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Create CommandContext over the current snapshot
//!     ├─ 2. Convert command to action and execute
//!     ├─ 3. Apply events to the snapshot via EventApplier
//!     ├─ 4. Append events to the log, queue notices, log side effects
//!     ├─ 5. Broadcast event(s)
//!     └─ 6. Return events
//! ```
//!
//! A rejected command leaves the snapshot and the log untouched.

use super::actions::CommandAction;
use super::appliers::apply_event;
use super::reducer;
use super::traits::{CommandContext, CommandHandler, CommandMetadata, WizardError, WizardResult};
use shared::booking::{
    BookingDraft, BookingInput, BookingRequest, CancellationRecord, EventPayload, Notice,
    WizardCommand, WizardCommandPayload, WizardEvent, WizardSnapshot, WizardState,
};
use shared::models::Room;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Booking wizard for one page session
pub struct BookingWizard {
    snapshot: WizardSnapshot,
    events: Vec<WizardEvent>,
    event_tx: broadcast::Sender<WizardEvent>,
    notices: Vec<Notice>,
}

impl std::fmt::Debug for BookingWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingWizard")
            .field("snapshot", &self.snapshot)
            .field("events", &self.events.len())
            .field("event_tx", &"<broadcast::Sender>")
            .field("notices", &self.notices)
            .finish()
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            snapshot: WizardSnapshot::new(),
            events: Vec::new(),
            event_tx,
            notices: Vec::new(),
        }
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.event_tx.subscribe()
    }

    pub fn snapshot(&self) -> &WizardSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> WizardState {
        self.snapshot.state
    }

    /// Every event applied so far, in sequence order
    pub fn events(&self) -> &[WizardEvent] {
        &self.events
    }

    /// Drain acknowledgments queued since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Rebuild the snapshot from the event log
    pub fn rebuild_snapshot(&self) -> WizardSnapshot {
        reducer::replay(&self.events)
    }

    /// Execute a command and apply the resulting events
    pub fn execute_command(&mut self, cmd: WizardCommand) -> WizardResult<Vec<WizardEvent>> {
        tracing::debug!(command_id = %cmd.command_id, command = cmd.name(), state = %self.snapshot.state, "Processing command");

        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            timestamp: cmd.timestamp,
        };
        let action: CommandAction = (&cmd).into();
        let mut ctx = CommandContext::new(&self.snapshot, self.snapshot.last_sequence);

        let events = match action.execute(&mut ctx, &metadata) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(command_id = %cmd.command_id, command = cmd.name(), error = %e, "Command rejected");
                return Err(e);
            }
        };

        for event in &events {
            apply_event(&mut self.snapshot, event);
            self.record_side_effects(event);
            self.events.push(event.clone());
            // No receivers is fine
            let _ = self.event_tx.send(event.clone());
        }

        tracing::debug!(
            command_id = %cmd.command_id,
            event_count = events.len(),
            state = %self.snapshot.state,
            "Command processed"
        );
        Ok(events)
    }

    fn record_side_effects(&mut self, event: &WizardEvent) {
        match &event.payload {
            EventPayload::BookingRequested { request } => {
                tracing::info!(
                    request_id = request.request_id,
                    room = %request.room.name,
                    guest = %request.draft.name,
                    check_in = %request.draft.check_in_date,
                    check_out = %request.draft.check_out_date,
                    "Booking request sent to hostel owner"
                );
            }
            EventPayload::BookingCancelled { record } => {
                tracing::info!(
                    record_id = record.record_id,
                    room = ?record.room_name,
                    reason = %record.reason,
                    "Booking cancelled"
                );
            }
            EventPayload::DraftRejected { errors, .. } => {
                tracing::debug!(fields = %errors, "Booking details rejected");
            }
            _ => {}
        }

        if let Some(notice) = event.notice() {
            self.notices.push(notice);
        }
    }

    // ========== Page operations ==========

    /// "Book Now" on a room card
    ///
    /// Returns `false` when the room is unavailable and nothing changed.
    pub fn select_room(&mut self, room: &Room) -> WizardResult<bool> {
        let events = self.execute_command(WizardCommand::new(WizardCommandPayload::SelectRoom {
            room: room.clone(),
        }))?;
        Ok(!events.is_empty())
    }

    /// "Continue to Summary"
    ///
    /// Field messages are returned as [`WizardError::Validation`] and also
    /// kept on the snapshot.
    pub fn submit_draft(&mut self, input: BookingInput) -> WizardResult<BookingDraft> {
        let events =
            self.execute_command(WizardCommand::new(WizardCommandPayload::SubmitDraft { input }))?;
        events
            .into_iter()
            .find_map(|event| match event.payload {
                EventPayload::DraftAccepted { draft, .. } => Some(Ok(draft)),
                EventPayload::DraftRejected { errors, .. } => {
                    Some(Err(WizardError::Validation(errors)))
                }
                _ => None,
            })
            .unwrap_or(Err(WizardError::MissingEvent("DRAFT_ACCEPTED")))
    }

    /// "Back" on the summary
    pub fn back(&mut self) -> WizardResult<()> {
        self.execute_command(WizardCommand::new(WizardCommandPayload::Back))?;
        Ok(())
    }

    /// "Request Booking" on the summary
    pub fn confirm_booking(&mut self) -> WizardResult<BookingRequest> {
        let events =
            self.execute_command(WizardCommand::new(WizardCommandPayload::ConfirmBooking))?;
        events
            .into_iter()
            .find_map(|event| match event.payload {
                EventPayload::BookingRequested { request } => Some(request),
                _ => None,
            })
            .ok_or(WizardError::MissingEvent("BOOKING_REQUESTED"))
    }

    /// "Cancel Booking"
    pub fn request_cancellation(&mut self) -> WizardResult<()> {
        self.execute_command(WizardCommand::new(WizardCommandPayload::RequestCancellation))?;
        Ok(())
    }

    /// Typing into the reason prompt
    pub fn edit_cancellation_reason(&mut self, reason: impl Into<String>) -> WizardResult<()> {
        self.execute_command(WizardCommand::new(
            WizardCommandPayload::EditCancellationReason {
                reason: reason.into(),
            },
        ))?;
        Ok(())
    }

    /// "Keep Booking"
    pub fn keep_booking(&mut self) -> WizardResult<()> {
        self.execute_command(WizardCommand::new(WizardCommandPayload::KeepBooking))?;
        Ok(())
    }

    /// "Confirm Cancellation"
    pub fn confirm_cancellation(
        &mut self,
        reason: impl Into<String>,
    ) -> WizardResult<CancellationRecord> {
        let events = self.execute_command(WizardCommand::new(
            WizardCommandPayload::ConfirmCancellation {
                reason: reason.into(),
            },
        ))?;
        events
            .into_iter()
            .find_map(|event| match event.payload {
                EventPayload::BookingCancelled { record } => Some(record),
                _ => None,
            })
            .ok_or(WizardError::MissingEvent("BOOKING_CANCELLED"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{room, valid_input};
    use shared::booking::{NoticeVariant, WizardEventType};

    fn wizard_in_summary() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        assert!(wizard.select_room(&room("Deluxe Double", true)).unwrap());
        wizard.submit_draft(valid_input()).unwrap();
        wizard
    }

    #[test]
    fn test_unavailable_room_stays_idle() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.select_room(&room("Dorm", false)).unwrap());
        assert!(wizard.snapshot().is_idle());
        assert!(wizard.events().is_empty());
    }

    #[test]
    fn test_booking_happy_path() {
        let mut wizard = wizard_in_summary();
        assert_eq!(wizard.state(), WizardState::Summary);

        let request = wizard.confirm_booking().unwrap();
        assert_eq!(request.room.name, "Deluxe Double");
        assert!(wizard.snapshot().is_idle());

        let notices = wizard.take_notices();
        assert_eq!(notices, vec![Notice::booking_requested()]);
        assert!(wizard.take_notices().is_empty());
    }

    #[test]
    fn test_rejected_submission_stays_editing() {
        let mut wizard = BookingWizard::new();
        wizard.select_room(&room("Deluxe Double", true)).unwrap();

        let mut input = valid_input();
        input.name = "J".to_string();
        let err = wizard.submit_draft(input.clone()).unwrap_err();

        match err {
            WizardError::Validation(errors) => {
                assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(wizard.state(), WizardState::Editing);
        assert_eq!(wizard.snapshot().form, input);
        assert!(wizard.snapshot().field_errors.contains("name"));
    }

    #[test]
    fn test_back_keeps_values() {
        let mut wizard = wizard_in_summary();
        wizard.back().unwrap();
        assert_eq!(wizard.state(), WizardState::Editing);
        assert_eq!(wizard.snapshot().form, valid_input());
    }

    #[test]
    fn test_cancellation_flow() {
        let mut wizard = wizard_in_summary();
        wizard.request_cancellation().unwrap();
        wizard.edit_cancellation_reason("Changed plans").unwrap();
        assert_eq!(wizard.snapshot().cancellation_reason, "Changed plans");

        let record = wizard.confirm_cancellation("Changed plans").unwrap();

        assert_eq!(record.reason, "Changed plans");
        assert!(wizard.snapshot().is_idle());
        assert!(wizard.snapshot().cancellation_reason.is_empty());
        let notices = wizard.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].variant, NoticeVariant::Destructive);
    }

    #[test]
    fn test_cancel_with_long_reason() {
        let mut wizard = wizard_in_summary();
        wizard.request_cancellation().unwrap();
        let reason = "x".repeat(5_000);
        wizard.edit_cancellation_reason(reason.clone()).unwrap();

        let record = wizard.confirm_cancellation(reason.clone()).unwrap();

        assert_eq!(record.reason, reason);
        assert_eq!(wizard.state(), WizardState::Idle);
    }

    #[test]
    fn test_keep_booking_returns_to_summary() {
        let mut wizard = wizard_in_summary();
        wizard.request_cancellation().unwrap();
        wizard.edit_cancellation_reason("Not sure").unwrap();
        wizard.keep_booking().unwrap();

        assert_eq!(wizard.state(), WizardState::Summary);
        assert_eq!(wizard.snapshot().cancellation_reason, "Not sure");
        assert!(wizard.snapshot().summary().is_some());
    }

    #[test]
    fn test_rejected_command_leaves_state() {
        let mut wizard = BookingWizard::new();
        let before = wizard.snapshot().clone();

        assert!(matches!(
            wizard.confirm_booking(),
            Err(WizardError::InvalidTransition { .. })
        ));
        assert_eq!(wizard.snapshot(), &before);
        assert!(wizard.events().is_empty());
    }

    #[test]
    fn test_sequences_are_contiguous() {
        let mut wizard = wizard_in_summary();
        wizard.confirm_booking().unwrap();
        let sequences: Vec<u64> = wizard.events().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_replay_matches_live_snapshot() {
        let mut wizard = wizard_in_summary();
        wizard.request_cancellation().unwrap();
        wizard.edit_cancellation_reason("Too far").unwrap();
        wizard.keep_booking().unwrap();
        wizard.back().unwrap();

        assert_eq!(&wizard.rebuild_snapshot(), wizard.snapshot());
    }

    #[test]
    fn test_event_broadcast() {
        let mut wizard = BookingWizard::new();
        let mut rx = wizard.subscribe();

        wizard.select_room(&room("Deluxe Double", true)).unwrap();

        let event = rx.try_recv().unwrap();
        assert_eq!(event.event_type, WizardEventType::RoomSelected);
    }
}
