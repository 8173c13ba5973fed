//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

/// Escape the five HTML-significant characters in untrusted text.
///
/// Everything interpolated into the board markup (activity names,
/// descriptions, schedules, participant emails) goes through this before
/// insertion, so hostile data renders as literal text.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
