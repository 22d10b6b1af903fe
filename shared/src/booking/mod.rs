//! Booking Wizard Event Sourcing Module
//!
//! This module provides types for the booking wizard:
//! - Commands: Requests from the page to change wizard state
//! - Events: Immutable facts recorded after command processing
//! - Snapshots: Computed wizard state from the event stream
//! - Types: Form buffer, validated draft and side-effect records

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use command::{WizardCommand, WizardCommandPayload};
pub use event::{EventPayload, WizardEvent, WizardEventType};
pub use snapshot::{WizardSnapshot, WizardState};
pub use types::*;
