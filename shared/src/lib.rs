//! Shared types for the hostel booking components
//!
//! Common types used across crates: the hostel/room/payment data model,
//! booking wizard commands, events and snapshots, and the unified error
//! types.

pub mod booking;
pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
