//! Test fixtures shared by actions, appliers and the manager

use crate::booking::traits::CommandMetadata;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::booking::{
    BookingInput, EventPayload, WizardEvent, WizardEventType, WizardSnapshot, WizardState,
};
use shared::models::Room;
use std::num::NonZeroU32;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn room(name: &str, available: bool) -> Room {
    Room {
        name: name.to_string(),
        beds: NonZeroU32::new(2).unwrap(),
        price: Decimal::new(12000, 0),
        available,
        image: format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-")),
    }
}

pub fn valid_input() -> BookingInput {
    BookingInput {
        name: "Ayesha Khan".to_string(),
        address: "House 12, Street 4, Lahore".to_string(),
        cnic: "3520212345671".to_string(),
        phone: "+923001234567".to_string(),
        check_in_date: Some(date(2026, 11, 1)),
        check_out_date: Some(date(2026, 11, 30)),
    }
}

pub fn metadata() -> CommandMetadata {
    CommandMetadata {
        command_id: "cmd-1".to_string(),
        timestamp: 1_790_000_000_000,
    }
}

/// Snapshot parked in `state` with a room (and a draft when in Summary)
pub fn snapshot_in(state: WizardState) -> WizardSnapshot {
    let mut snapshot = WizardSnapshot::new();
    snapshot.state = state;
    if state != WizardState::Idle {
        snapshot.room = Some(room("Deluxe Double", true));
    }
    if state == WizardState::Summary {
        let draft = valid_input().to_draft().unwrap();
        snapshot.form = draft.to_input();
        snapshot.draft = Some(draft);
    }
    if state == WizardState::Cancelling {
        snapshot.resume_state = Some(WizardState::Editing);
    }
    snapshot.last_sequence = 3;
    snapshot
}

pub fn event(seq: u64, event_type: WizardEventType, payload: EventPayload) -> WizardEvent {
    WizardEvent::new(seq, "cmd-1".to_string(), event_type, payload)
}
