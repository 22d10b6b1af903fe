//! Payment entry
//!
//! Card details dialog with a simulated processing period.

pub mod dialog;
pub mod gateway;

pub use dialog::{PaymentDialog, PaymentError, PaymentTask};
pub use gateway::{CoinFlipGateway, FixedGateway, PaymentGateway};
