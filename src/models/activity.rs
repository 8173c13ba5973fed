//! Activity model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A club activity as served by the backend.
///
/// The participant roster keeps the backend's order, which is also the
/// display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// The full activity collection, keyed by activity name.
///
/// `IndexMap` keeps the backend's JSON key order; cards and select options
/// render in exactly that order.
pub type ActivityCollection = IndexMap<String, Activity>;

impl Activity {
    /// Remaining capacity. Goes negative when the backend over-allocates;
    /// the value is displayed as-is, never clamped.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}
