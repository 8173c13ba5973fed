//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

/// Activities API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Optional request timeout. When unset the transport default applies.
    pub timeout_seconds: Option<u64>,
}

/// Board behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// How long a sign-up status message stays visible, in milliseconds.
    pub signup_notice_ms: u64,
    /// How long an unregister status message stays visible, in milliseconds.
    pub unregister_notice_ms: u64,
    /// Label of the non-removable placeholder option of the select control.
    pub select_placeholder: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout-only when unset.
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ACTIVITY_BOARD").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ActivityBoardError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_seconds: None,
            },
            board: BoardConfig {
                signup_notice_ms: 5_000,
                unregister_notice_ms: 4_000,
                select_placeholder: "-- Select an activity --".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
