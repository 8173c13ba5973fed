//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{ActivityBoardError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_board_config(&settings.board)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate activities API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(ActivityBoardError::Config(
            "API base URL is required".to_string(),
        ));
    }

    url::Url::parse(&config.base_url)?;

    if config.timeout_seconds == Some(0) {
        return Err(ActivityBoardError::Config(
            "API timeout must be greater than zero when set".to_string(),
        ));
    }

    Ok(())
}

/// Validate board behavior configuration
fn validate_board_config(config: &super::BoardConfig) -> Result<()> {
    if config.signup_notice_ms == 0 || config.unregister_notice_ms == 0 {
        return Err(ActivityBoardError::Config(
            "Status notice delays must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ActivityBoardError::Config(
            "Log level is required".to_string(),
        ));
    }

    Ok(())
}
