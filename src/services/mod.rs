//! Services module
//!
//! This module contains the backend-facing service layer

pub mod activities;

pub use activities::{ActionReply, ActivitiesService};
