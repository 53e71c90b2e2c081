// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration schema for a climate entity.

use crate::error::{ConfigError, ValueError};
use crate::hub::HubConfig;
use crate::types::{FanMode, OperationMode, TemperatureRange};

fn default_name() -> String {
    "Harmony Hub Climate".to_string()
}

fn default_min_temp() -> f64 {
    16.0
}

fn default_max_temp() -> f64 {
    30.0
}

fn default_target_temp() -> f64 {
    20.0
}

fn default_target_temp_step() -> f64 {
    1.0
}

/// Override block for the allowed operation and fan mode lists.
///
/// Empty or missing lists fall back to the defaults, mirroring the platform
/// schema this configuration descends from.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customize {
    /// Allowed operation modes, replacing [`OperationMode::DEFAULT_LIST`].
    #[serde(default)]
    pub operations: Option<Vec<OperationMode>>,
    /// Allowed fan modes, replacing [`FanMode::DEFAULT_LIST`].
    #[serde(default)]
    pub fan_modes: Option<Vec<FanMode>>,
}

/// Configuration of one climate entity.
///
/// Deserializable from the host's configuration format; unknown modes and
/// units fail at deserialization because the value types are closed.
/// Semantic rules (defaults belong to the lists, target within bounds) are
/// checked by [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use irclimate_lib::climate::ClimateConfig;
///
/// let config: ClimateConfig = serde_json::from_str(
///     r#"{
///         "host": "192.168.1.20",
///         "device_id": "53161320",
///         "temp_sensor": "sensor.living_room_temp",
///         "default_operation_from_idle": "heat"
///     }"#,
/// )
/// .unwrap();
/// config.validate().unwrap();
/// assert_eq!(config.name, "Harmony Hub Climate");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClimateConfig {
    /// Display name of the entity.
    #[serde(default = "default_name")]
    pub name: String,
    /// Hub host address.
    pub host: String,
    /// Optional hub port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Identifier of the infrared device behind the hub.
    pub device_id: String,
    /// Minimum target temperature.
    #[serde(default = "default_min_temp")]
    pub min_temp: f64,
    /// Maximum target temperature.
    #[serde(default = "default_max_temp")]
    pub max_temp: f64,
    /// Initial target temperature.
    #[serde(default = "default_target_temp")]
    pub target_temp: f64,
    /// Target temperature step.
    #[serde(default = "default_target_temp_step")]
    pub target_temp_step: f64,
    /// External temperature sensor entity to mirror, if any.
    #[serde(default)]
    pub temp_sensor: Option<String>,
    /// Allowed-list overrides.
    #[serde(default)]
    pub customize: Customize,
    /// Initial operation mode.
    #[serde(default)]
    pub default_operation: OperationMode,
    /// Initial fan mode.
    #[serde(default)]
    pub default_fan_mode: FanMode,
    /// Operation to switch to when the target temperature is set while the
    /// entity is off or idle.
    #[serde(default)]
    pub default_operation_from_idle: Option<OperationMode>,
}

impl ClimateConfig {
    /// Creates a configuration with platform defaults for everything but the
    /// required host and device id.
    #[must_use]
    pub fn new(host: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            host: host.into(),
            port: None,
            device_id: device_id.into(),
            min_temp: default_min_temp(),
            max_temp: default_max_temp(),
            target_temp: default_target_temp(),
            target_temp_step: default_target_temp_step(),
            temp_sensor: None,
            customize: Customize::default(),
            default_operation: OperationMode::default(),
            default_fan_mode: FanMode::default(),
            default_operation_from_idle: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the temperature bounds.
    #[must_use]
    pub const fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_temp = min;
        self.max_temp = max;
        self
    }

    /// Sets the initial target temperature.
    #[must_use]
    pub const fn with_target_temp(mut self, target: f64) -> Self {
        self.target_temp = target;
        self
    }

    /// Sets the sensor entity to mirror.
    #[must_use]
    pub fn with_temp_sensor(mut self, entity_id: impl Into<String>) -> Self {
        self.temp_sensor = Some(entity_id.into());
        self
    }

    /// Overrides the allowed operation list.
    #[must_use]
    pub fn with_operations(mut self, operations: Vec<OperationMode>) -> Self {
        self.customize.operations = Some(operations);
        self
    }

    /// Overrides the allowed fan mode list.
    #[must_use]
    pub fn with_fan_modes(mut self, fan_modes: Vec<FanMode>) -> Self {
        self.customize.fan_modes = Some(fan_modes);
        self
    }

    /// Sets the initial operation mode.
    #[must_use]
    pub const fn with_default_operation(mut self, mode: OperationMode) -> Self {
        self.default_operation = mode;
        self
    }

    /// Sets the initial fan mode.
    #[must_use]
    pub const fn with_default_fan_mode(mut self, mode: FanMode) -> Self {
        self.default_fan_mode = mode;
        self
    }

    /// Sets the operation to leave idle with when a temperature is set.
    #[must_use]
    pub const fn with_default_operation_from_idle(mut self, mode: OperationMode) -> Self {
        self.default_operation_from_idle = Some(mode);
        self
    }

    /// Returns the effective allowed operation list.
    ///
    /// An absent or empty override falls back to
    /// [`OperationMode::DEFAULT_LIST`].
    #[must_use]
    pub fn operation_list(&self) -> Vec<OperationMode> {
        match &self.customize.operations {
            Some(list) if !list.is_empty() => list.clone(),
            _ => OperationMode::DEFAULT_LIST.to_vec(),
        }
    }

    /// Returns the effective allowed fan mode list.
    ///
    /// An absent or empty override falls back to [`FanMode::DEFAULT_LIST`].
    #[must_use]
    pub fn fan_mode_list(&self) -> Vec<FanMode> {
        match &self.customize.fan_modes {
            Some(list) if !list.is_empty() => list.clone(),
            _ => FanMode::DEFAULT_LIST.to_vec(),
        }
    }

    /// Returns the hub connection settings from this configuration.
    #[must_use]
    pub fn hub_config(&self) -> HubConfig {
        let mut hub = HubConfig::new(self.host.clone());
        if let Some(port) = self.port {
            hub = hub.with_port(port);
        }
        hub
    }

    /// Returns the configured temperature bounds.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRange` if min is above max.
    pub fn bounds(&self) -> Result<TemperatureRange, ValueError> {
        TemperatureRange::new(self.min_temp, self.max_temp)
    }

    /// Validates the semantic rules of this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the bounds are inverted, the initial
    /// target lies outside them, or a configured default mode is not a
    /// member of its allowed list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = self.bounds()?;
        if !bounds.contains(self.target_temp) {
            return Err(ValueError::OutOfRange {
                min: bounds.min(),
                max: bounds.max(),
                actual: self.target_temp,
            }
            .into());
        }

        let operations = self.operation_list();
        if !operations.contains(&self.default_operation) {
            return Err(ConfigError::DefaultOperationNotListed(
                self.default_operation,
            ));
        }
        if let Some(mode) = self.default_operation_from_idle
            && !operations.contains(&mode)
        {
            return Err(ConfigError::IdleFallbackNotListed(mode));
        }

        if !self.fan_mode_list().contains(&self.default_fan_mode) {
            return Err(ConfigError::DefaultFanModeNotListed(self.default_fan_mode));
        }

        Ok(())
    }
}
