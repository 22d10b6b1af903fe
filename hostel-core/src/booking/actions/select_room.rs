//! SelectRoom command handler
//!
//! "Book Now" on a room card. Unavailable rooms are ignored in every state:
//! the button is disabled for them, so a selection that still arrives
//! produces no events.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{EventPayload, WizardEvent, WizardEventType, WizardState};
use shared::models::Room;

/// SelectRoom action
#[derive(Debug, Clone)]
pub struct SelectRoomAction {
    pub room: Room,
}

impl CommandHandler for SelectRoomAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        if !self.room.available {
            tracing::debug!(room = %self.room.name, "Ignoring selection of unavailable room");
            return Ok(vec![]);
        }

        // The cancellation prompt is modal
        ctx.require_state(
            "select_room",
            &[WizardState::Idle, WizardState::Editing, WizardState::Summary],
        )?;

        let seq = ctx.next_sequence();
        let event = WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::RoomSelected,
            EventPayload::RoomSelected {
                room: self.room.clone(),
            },
        );

        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fixtures::{metadata, room, snapshot_in};
    use crate::booking::traits::WizardError;

    #[test]
    fn test_select_available_room_from_idle() {
        let snapshot = snapshot_in(WizardState::Idle);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);

        let action = SelectRoomAction {
            room: room("Standard Single", true),
        };
        let events = action.execute(&mut ctx, &metadata()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sequence, 4);
        assert_eq!(events[0].event_type, WizardEventType::RoomSelected);
        assert_eq!(events[0].command_id, "cmd-1");
    }

    #[test]
    fn test_unavailable_room_is_noop() {
        for state in [
            WizardState::Idle,
            WizardState::Editing,
            WizardState::Summary,
            WizardState::Cancelling,
        ] {
            let snapshot = snapshot_in(state);
            let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);

            let action = SelectRoomAction {
                room: room("Dorm", false),
            };
            let events = action.execute(&mut ctx, &metadata()).unwrap();
            assert!(events.is_empty());
        }
    }

    #[test]
    fn test_reselect_from_summary_allowed() {
        let snapshot = snapshot_in(WizardState::Summary);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);

        let action = SelectRoomAction {
            room: room("Standard Single", true),
        };
        assert_eq!(action.execute(&mut ctx, &metadata()).unwrap().len(), 1);
    }

    #[test]
    fn test_select_while_cancelling_fails() {
        let snapshot = snapshot_in(WizardState::Cancelling);
        let mut ctx = CommandContext::new(&snapshot, snapshot.last_sequence);

        let action = SelectRoomAction {
            room: room("Standard Single", true),
        };
        let result = action.execute(&mut ctx, &metadata());
        assert!(matches!(
            result,
            Err(WizardError::InvalidTransition {
                command: "select_room",
                state: WizardState::Cancelling,
            })
        ));
    }
}
