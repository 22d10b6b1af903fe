//! Core - configuration and page composition

pub mod config;
pub mod page;

pub use config::Config;
pub use page::{HostelPage, HostelProfile, NotFoundView, RoomCard};
