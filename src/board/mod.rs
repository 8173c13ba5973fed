//! The activity board component
//!
//! This module contains the board controller, its mounted view surface,
//! the card rendering and the injected confirmation capability.

pub mod confirm;
pub mod controller;
pub mod render;
pub mod view;

pub use confirm::{AcceptAll, ConfirmPrompt};
pub use controller::{ActivityBoard, StatusSnapshot};
pub use view::{MessageTone, SelectOption, UnregisterControl};
