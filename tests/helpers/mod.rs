//! Test helpers module
//!
//! This module provides utilities for testing the activity board against a
//! mock backend: the wiremock server wrapper, canned fixtures and the
//! deterministic confirmation stub.

pub mod backend_mock;
pub mod test_data;

pub use backend_mock::*;
pub use test_data::*;
