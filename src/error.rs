// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `irclimate` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, configuration loading, and hub communication.

use thiserror::Error;

use crate::types::{FanMode, OperationMode};

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when driving a
/// climate entity against an infrared hub.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the infrared hub.
    #[error("hub error: {0}")]
    Hub(#[from] HubError),

    /// Error occurred while validating configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when a setter or parser receives a value outside the
/// closed vocabulary or the configured bounds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A temperature is outside the configured bounds.
    #[error("temperature {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed temperature.
        min: f64,
        /// Maximum allowed temperature.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// An unrecognized operation mode string was provided.
    #[error("invalid operation mode: {0}")]
    InvalidOperationMode(String),

    /// An unrecognized fan mode string was provided.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(String),

    /// An unrecognized temperature unit string was provided.
    #[error("invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// An operation mode outside the entity's configured operation list.
    #[error("operation mode {0} is not in the configured operation list")]
    OperationNotAllowed(OperationMode),

    /// A fan mode outside the entity's configured fan mode list.
    #[error("fan mode {0} is not in the configured fan mode list")]
    FanModeNotAllowed(FanMode),

    /// A temperature range with min above max.
    #[error("invalid temperature range: min {min} is above max {max}")]
    InvalidRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
}

/// Errors related to hub communication.
#[derive(Debug, Error)]
pub enum HubError {
    /// HTTP request to the hub bridge failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the hub failed at setup.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid hub address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The hub rejected the command.
    #[error("command rejected with status {status}")]
    CommandRejected {
        /// HTTP status code returned by the bridge.
        status: u16,
    },
}

/// Errors related to climate configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value inside the configuration failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The default operation is not a member of the operation list.
    #[error("default operation {0} is not in the operation list")]
    DefaultOperationNotListed(OperationMode),

    /// The default fan mode is not a member of the fan mode list.
    #[error("default fan mode {0} is not in the fan mode list")]
    DefaultFanModeNotListed(FanMode),

    /// The default-operation-from-idle is not a member of the operation list.
    #[error("default operation from idle {0} is not in the operation list")]
    IdleFallbackNotListed(OperationMode),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 16.0,
            max: 30.0,
            actual: 42.0,
        };
        assert_eq!(err.to_string(), "temperature 42 is out of range [16, 30]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidOperationMode("dry".to_string());
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidOperationMode(_))
        ));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::DefaultOperationNotListed(OperationMode::Heat);
        assert_eq!(
            err.to_string(),
            "default operation Heat is not in the operation list"
        );
    }

    #[test]
    fn hub_error_display() {
        let err = HubError::CommandRejected { status: 503 };
        assert_eq!(err.to_string(), "command rejected with status 503");
    }
}
