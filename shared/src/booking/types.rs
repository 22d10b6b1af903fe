//! Booking form, draft and side-effect record types

use crate::models::Room;
use crate::types::FieldErrors;
use crate::util::{format_long_date, snowflake_id};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// CNIC: exactly 13 ASCII digits, no separators
pub static CNIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("CNIC pattern compiles"));

/// Phone: literal `+92` followed by exactly 10 ASCII digits
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+92[0-9]{10}$").expect("phone pattern compiles"));

/// Raw booking form buffer
///
/// This is what the guest typed. It is kept as-is across validation failures
/// and when stepping back from the summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,
    #[validate(regex(path = *CNIC_PATTERN, message = "CNIC must be 13 digits"))]
    pub cnic: String,
    #[validate(regex(
        path = *PHONE_PATTERN,
        message = "Phone number must be in the format +92xxxxxxxxxx"
    ))]
    pub phone: String,
    #[validate(required(message = "Check-in date is required"))]
    pub check_in_date: Option<NaiveDate>,
    #[validate(required(message = "Check-out date is required"))]
    pub check_out_date: Option<NaiveDate>,
}

impl BookingInput {
    /// Validate the buffer into a [`BookingDraft`].
    ///
    /// Each field is checked on its own; there is no rule relating the
    /// check-in and check-out dates.
    pub fn to_draft(&self) -> Result<BookingDraft, FieldErrors> {
        self.validate().map_err(|e| FieldErrors::from(&e))?;

        match (self.check_in_date, self.check_out_date) {
            (Some(check_in_date), Some(check_out_date)) => Ok(BookingDraft {
                name: self.name.clone(),
                address: self.address.clone(),
                cnic: self.cnic.clone(),
                phone: self.phone.clone(),
                check_in_date,
                check_out_date,
            }),
            _ => {
                let mut errors = FieldErrors::new();
                if self.check_in_date.is_none() {
                    errors.insert("check_in_date", "Check-in date is required");
                }
                if self.check_out_date.is_none() {
                    errors.insert("check_out_date", "Check-out date is required");
                }
                Err(errors)
            }
        }
    }
}

/// Booking details that passed every field rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub name: String,
    pub address: String,
    pub cnic: String,
    pub phone: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl BookingDraft {
    /// The raw buffer this draft was validated from
    pub fn to_input(&self) -> BookingInput {
        BookingInput {
            name: self.name.clone(),
            address: self.address.clone(),
            cnic: self.cnic.clone(),
            phone: self.phone.clone(),
            check_in_date: Some(self.check_in_date),
            check_out_date: Some(self.check_out_date),
        }
    }

    /// Label/value rows of the summary step
    pub fn summary(&self, room: &Room) -> Vec<SummaryLine> {
        vec![
            SummaryLine::new("Name", self.name.clone()),
            SummaryLine::new("Address", self.address.clone()),
            SummaryLine::new("CNIC", self.cnic.clone()),
            SummaryLine::new("Phone", self.phone.clone()),
            SummaryLine::new("Check-in Date", format_long_date(self.check_in_date)),
            SummaryLine::new("Check-out Date", format_long_date(self.check_out_date)),
            SummaryLine::new("Room", room.name.clone()),
            SummaryLine::new("Price", room.price_label()),
        ]
    }
}

/// One row of the booking summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl SummaryLine {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Booking request handed to the hostel owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub request_id: i64,
    pub room: Room,
    pub draft: BookingDraft,
    pub requested_at: i64,
}

impl BookingRequest {
    pub fn new(room: Room, draft: BookingDraft, requested_at: i64) -> Self {
        Self {
            request_id: snowflake_id(),
            room,
            draft,
            requested_at,
        }
    }
}

/// Record of a cancelled booking and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationRecord {
    pub record_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    pub reason: String,
    pub cancelled_at: i64,
}

impl CancellationRecord {
    pub fn new(room_name: Option<String>, reason: String, cancelled_at: i64) -> Self {
        Self {
            record_id: snowflake_id(),
            room_name,
            reason,
            cancelled_at,
        }
    }
}

/// Visual weight of an acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// User-visible acknowledgment (toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn booking_requested() -> Self {
        Self {
            title: "Booking Request Sent".to_string(),
            description: "Your booking request has been sent to the hostel owner.".to_string(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn booking_cancelled() -> Self {
        Self {
            title: "Booking Cancelled".to_string(),
            description: "Your booking has been successfully cancelled.".to_string(),
            variant: NoticeVariant::Destructive,
        }
    }
}
