//! ActivityBoard
//!
//! A sign-up board client for school club activities. This library models
//! the activity page as one composed controller: it fetches the activity
//! collection from a REST backend, renders the cards and selection control,
//! submits sign-ups, cancels registrations after confirmation, and surfaces
//! transient status messages that auto-hide.

#![allow(non_snake_case)]

pub mod board;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ActivityBoardError, ApiError, Result};

// Re-export main components for easy access
pub use board::{ActivityBoard, ConfirmPrompt};
pub use models::{Activity, ActivityCollection};
pub use services::ActivitiesService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
