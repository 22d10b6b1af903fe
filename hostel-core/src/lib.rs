//! Hostel Core - hostel booking page and payment entry
//!
//! # Architecture
//!
//! - **Booking wizard** (`booking`): room selection, form entry, summary and
//!   cancellation as an event-sourced state machine
//! - **Page** (`core::page`): hostel profile or not-found view, room cards and
//!   the image carousel
//! - **Payment** (`payment`): card entry dialog with a cancellable
//!   processing period
//!
//! # Module layout
//!
//! ```text
//! hostel-core/src/
//! ├── core/          # configuration, page composition
//! ├── booking/       # wizard commands, events, appliers, replay
//! ├── payment/       # gateway seam, payment dialog
//! └── utils/         # logging, validation
//! ```

pub mod booking;
pub mod core;
pub mod payment;
pub mod utils;

pub use booking::{BookingWizard, Carousel, WizardError, WizardResult};
pub use crate::core::{Config, HostelPage, HostelProfile, NotFoundView, RoomCard};
pub use payment::{CoinFlipGateway, PaymentDialog, PaymentError, PaymentGateway};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
    __  __           __       __
   / / / /___  _____/ /____  / /
  / /_/ / __ \/ ___/ __/ _ \/ /
 / __  / /_/ (__  ) /_/  __/ /
/_/ /_/\____/____/\__/\___/_/
    "#
    );
}
