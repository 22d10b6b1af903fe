//! Command and event traits for the booking wizard
//!
//! - `CommandHandler`: turns a command into events against a read-only snapshot
//! - `EventApplier`: folds one event into the snapshot (pure, no I/O)

use enum_dispatch::enum_dispatch;
use shared::booking::{WizardEvent, WizardSnapshot, WizardState};
use shared::error::{AppError, ErrorCode};
use shared::types::FieldErrors;
use thiserror::Error;

/// Wizard errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("Cannot {command} while {state}")]
    InvalidTransition {
        command: &'static str,
        state: WizardState,
    },

    #[error("No room selected")]
    NoRoomSelected,

    #[error("Booking details are invalid: {0}")]
    Validation(FieldErrors),

    #[error("Command produced no {0} event")]
    MissingEvent(&'static str),
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::InvalidTransition { command, state } => AppError::with_message(
                ErrorCode::InvalidWizardTransition,
                format!("Cannot {command} while {state}"),
            )
            .with_detail("command", command)
            .with_detail("state", state.to_string()),
            WizardError::NoRoomSelected => AppError::new(ErrorCode::NoRoomSelected),
            WizardError::Validation(errors) => {
                AppError::invalid_fields(ErrorCode::BookingDraftInvalid, &errors)
            }
            WizardError::MissingEvent(event) => {
                AppError::internal(format!("Command produced no {event} event"))
            }
        }
    }
}

pub type WizardResult<T> = Result<T, WizardError>;

/// Command metadata carried from the envelope into every action
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub timestamp: i64,
}

/// Execution context handed to a command action
///
/// Actions read the snapshot and allocate sequence numbers here; they never
/// mutate the snapshot themselves.
pub struct CommandContext<'a> {
    snapshot: &'a WizardSnapshot,
    sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(snapshot: &'a WizardSnapshot, current_sequence: u64) -> Self {
        Self {
            snapshot,
            sequence: current_sequence,
        }
    }

    pub fn snapshot(&self) -> &WizardSnapshot {
        self.snapshot
    }

    /// Allocate the next event sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Reject the command unless the wizard is in one of `allowed`
    pub fn require_state(
        &self,
        command: &'static str,
        allowed: &[WizardState],
    ) -> WizardResult<()> {
        if allowed.contains(&self.snapshot.state) {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                command,
                state: self.snapshot.state,
            })
        }
    }
}

/// Command handler - one implementation per command type
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>>;
}

/// Event applier - one implementation per event type
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut WizardSnapshot, event: &WizardEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sequence_increments() {
        let snapshot = WizardSnapshot::new();
        let mut ctx = CommandContext::new(&snapshot, 4);
        assert_eq!(ctx.next_sequence(), 5);
        assert_eq!(ctx.next_sequence(), 6);
    }

    #[test]
    fn test_require_state() {
        let snapshot = WizardSnapshot::new();
        let ctx = CommandContext::new(&snapshot, 0);
        assert!(ctx.require_state("back", &[WizardState::Idle]).is_ok());
        assert_eq!(
            ctx.require_state("back", &[WizardState::Summary]),
            Err(WizardError::InvalidTransition {
                command: "back",
                state: WizardState::Idle,
            })
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = WizardError::InvalidTransition {
            command: "confirm_booking",
            state: WizardState::Editing,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidWizardTransition);
        assert_eq!(err.message, "Cannot confirm_booking while EDITING");

        let mut errors = FieldErrors::new();
        errors.insert("cnic", "CNIC must be 13 digits");
        let err: AppError = WizardError::Validation(errors.clone()).into();
        assert_eq!(err.code, ErrorCode::BookingDraftInvalid);
        assert_eq!(err.field_errors(), Some(errors));
    }
}
