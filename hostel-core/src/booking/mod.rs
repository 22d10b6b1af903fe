//! Booking wizard
//!
//! Commands are turned into events by actions, events are folded into the
//! snapshot by appliers, and the event log can be replayed.

pub mod traits;

pub mod actions;
pub mod appliers;
pub mod carousel;
pub mod reducer;
pub mod wizard;

#[cfg(test)]
pub(crate) mod fixtures;

pub use carousel::Carousel;
pub use reducer::replay;
pub use traits::{WizardError, WizardResult};
pub use wizard::BookingWizard;
