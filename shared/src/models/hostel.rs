//! Hostel and Room Models

use crate::error::{AppError, AppResult};
use crate::util::format_grouped;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

const MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Room listing (immutable once loaded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub name: String,
    pub beds: NonZeroU32,
    /// Price per bed per month (PKR)
    pub price: Decimal,
    pub available: bool,
    /// Image reference (path or URL)
    pub image: String,
}

impl Room {
    /// "Private room" for single-bed rooms, "Shared room" otherwise
    pub fn kind_label(&self) -> &'static str {
        if self.beds.get() == 1 {
            "Private room"
        } else {
            "Shared room"
        }
    }

    pub fn beds_label(&self) -> String {
        let beds = self.beds.get();
        if beds > 1 {
            format!("{beds} beds")
        } else {
            format!("{beds} bed")
        }
    }

    pub fn price_label(&self) -> String {
        format!("PKR {} per bed/month", format_grouped(self.price))
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }

    /// Label of the booking button; the button is disabled when the room
    /// is unavailable.
    pub fn book_button_label(&self) -> &'static str {
        if self.available {
            "Book Now"
        } else {
            "Not Available"
        }
    }
}

/// Hostel record supplied by the page loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub id: i64,
    pub name: String,
    pub rating: f64,
    pub location: String,
    pub capacity: u32,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Hostel {
    /// Parse and check a hostel record from JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        let hostel: Hostel = serde_json::from_str(json)
            .map_err(|e| AppError::invalid_request(format!("Invalid hostel data: {e}")))?;
        hostel.check()?;
        Ok(hostel)
    }

    /// Reject data the page cannot render sensibly
    pub fn check(&self) -> AppResult<()> {
        for room in &self.rooms {
            if room.price.is_sign_negative() {
                return Err(AppError::validation(format!(
                    "Room '{}' has a negative price",
                    room.name
                ))
                .with_detail("room", room.name.clone()));
            }
        }
        Ok(())
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Google Maps search link for the hostel location
    pub fn map_url(&self) -> String {
        let query: String = url::form_urlencoded::byte_serialize(self.location.as_bytes()).collect();
        format!("{MAPS_BASE_URL}?q={query}")
    }
}
