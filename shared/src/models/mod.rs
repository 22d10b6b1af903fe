//! Data models
//!
//! Hostel catalog records supplied by the page loader and the payment
//! dialog's form and outcome types. All are serde-serializable with
//! camelCase field names to match the web client.

pub mod hostel;
pub mod payment;

// Re-exports
pub use hostel::*;
pub use payment::*;
