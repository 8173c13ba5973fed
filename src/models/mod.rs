//! Data models
//!
//! This module contains the domain models shared across the crate

pub mod activity;

pub use activity::{Activity, ActivityCollection};
