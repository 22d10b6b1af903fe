//! Unified error codes for the hostel booking components
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Hostel catalog errors
//! - 4xxx: Booking wizard errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Hostel ====================
    /// Hostel not found
    HostelNotFound = 1001,
    /// Room not found in the hostel listing
    RoomNotFound = 1002,

    // ==================== 4xxx: Booking ====================
    /// Command is not allowed in the current wizard step
    InvalidWizardTransition = 4001,
    /// No room has been selected
    NoRoomSelected = 4002,
    /// Booking details failed validation
    BookingDraftInvalid = 4003,

    // ==================== 5xxx: Payment ====================
    /// A payment is already being processed
    PaymentInProgress = 5002,
    /// The payment dialog is closed
    PaymentDialogClosed = 5003,
    /// Draft amount differs from the amount the dialog was opened with
    PaymentAmountMismatch = 5004,
    /// Payment was abandoned before completion
    PaymentCancelled = 5005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Background task failed
    TaskFailed = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Hostel
            ErrorCode::HostelNotFound => "Hostel not found",
            ErrorCode::RoomNotFound => "Room not found",

            // Booking
            ErrorCode::InvalidWizardTransition => "Action not allowed in the current booking step",
            ErrorCode::NoRoomSelected => "No room selected",
            ErrorCode::BookingDraftInvalid => "Booking details are invalid",

            // Payment
            ErrorCode::PaymentInProgress => "Payment is already being processed",
            ErrorCode::PaymentDialogClosed => "Payment dialog is closed",
            ErrorCode::PaymentAmountMismatch => "Payment amount does not match",
            ErrorCode::PaymentCancelled => "Payment was cancelled",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::TaskFailed => "Background task failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Hostel
            1001 => Ok(ErrorCode::HostelNotFound),
            1002 => Ok(ErrorCode::RoomNotFound),

            // Booking
            4001 => Ok(ErrorCode::InvalidWizardTransition),
            4002 => Ok(ErrorCode::NoRoomSelected),
            4003 => Ok(ErrorCode::BookingDraftInvalid),

            // Payment
            5002 => Ok(ErrorCode::PaymentInProgress),
            5003 => Ok(ErrorCode::PaymentDialogClosed),
            5004 => Ok(ErrorCode::PaymentAmountMismatch),
            5005 => Ok(ErrorCode::PaymentCancelled),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9006 => Ok(ErrorCode::TaskFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
