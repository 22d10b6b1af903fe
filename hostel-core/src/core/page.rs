//! Hostel page composition
//!
//! A page is built from an optional hostel record. A missing record is a
//! terminal not-found view; otherwise the profile owns the booking wizard and
//! the room image carousel.

use crate::booking::{BookingWizard, Carousel};
use crate::core::Config;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Hostel, Room};

pub const NOT_FOUND_TITLE: &str = "Hostel Not Found";
pub const NOT_FOUND_MESSAGE: &str = "Sorry, we couldn't find the hostel you're looking for.";

/// Terminal view for a missing hostel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    pub code: ErrorCode,
    pub title: &'static str,
    pub message: &'static str,
    /// Only navigation offered
    pub home_path: String,
}

/// Display data of one room card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCard {
    pub index: usize,
    pub name: String,
    pub image: String,
    pub kind: &'static str,
    pub beds: String,
    pub price: String,
    pub availability: &'static str,
    pub button_label: &'static str,
    /// Whether "Book Now" is enabled
    pub bookable: bool,
}

impl RoomCard {
    fn new(index: usize, room: &Room) -> Self {
        Self {
            index,
            name: room.name.clone(),
            image: room.image.clone(),
            kind: room.kind_label(),
            beds: room.beds_label(),
            price: room.price_label(),
            availability: room.availability_label(),
            button_label: room.book_button_label(),
            bookable: room.available,
        }
    }
}

/// Profile view of a loaded hostel
#[derive(Debug)]
pub struct HostelProfile {
    hostel: Hostel,
    wizard: BookingWizard,
    carousel: Carousel,
}

impl HostelProfile {
    pub fn hostel(&self) -> &Hostel {
        &self.hostel
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut BookingWizard {
        &mut self.wizard
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn map_url(&self) -> String {
        self.hostel.map_url()
    }

    pub fn room_cards(&self) -> Vec<RoomCard> {
        self.hostel
            .rooms
            .iter()
            .enumerate()
            .map(|(i, room)| RoomCard::new(i, room))
            .collect()
    }

    /// "Book Now" on the card at `index`
    ///
    /// Returns `false` for an unavailable room (no state change).
    pub fn book_now(&mut self, index: usize) -> AppResult<bool> {
        let room = self.hostel.room(index).ok_or_else(|| {
            AppError::with_message(ErrorCode::RoomNotFound, format!("No room at index {index}"))
                .with_detail("index", index)
        })?;
        Ok(self.wizard.select_room(room)?)
    }

    /// Room shown by the image carousel
    pub fn current_room(&self) -> Option<&Room> {
        self.carousel.current(&self.hostel.rooms)
    }

    pub fn next_image(&mut self) -> Option<&Room> {
        self.carousel.next();
        self.current_room()
    }

    pub fn prev_image(&mut self) -> Option<&Room> {
        self.carousel.prev();
        self.current_room()
    }
}

/// Hostel page
#[derive(Debug)]
pub enum HostelPage {
    NotFound(NotFoundView),
    Profile(Box<HostelProfile>),
}

impl HostelPage {
    /// Build the page for a (possibly missing) hostel record
    ///
    /// A present record must pass [`Hostel::check`].
    pub fn load(hostel: Option<Hostel>, config: &Config) -> AppResult<Self> {
        let Some(hostel) = hostel else {
            tracing::info!("Hostel not found, rendering not-found view");
            return Ok(HostelPage::NotFound(NotFoundView {
                code: ErrorCode::HostelNotFound,
                title: NOT_FOUND_TITLE,
                message: NOT_FOUND_MESSAGE,
                home_path: config.home_path.clone(),
            }));
        };

        hostel.check()?;
        tracing::debug!(hostel_id = hostel.id, rooms = hostel.rooms.len(), "Hostel page loaded");

        let carousel = Carousel::new(hostel.rooms.len());
        Ok(HostelPage::Profile(Box::new(HostelProfile {
            hostel,
            wizard: BookingWizard::new(),
            carousel,
        })))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HostelPage::NotFound(_))
    }

    pub fn profile_mut(&mut self) -> Option<&mut HostelProfile> {
        match self {
            HostelPage::Profile(profile) => Some(profile.as_mut()),
            HostelPage::NotFound(_) => None,
        }
    }
}
