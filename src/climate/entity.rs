// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The climate entity adapter.
//!
//! [`ClimateEntity`] holds the thermostat state, translates every
//! user-initiated change into one infrared command forwarded through the
//! hub client, and mirrors an external temperature sensor into its current
//! temperature. The hub is always driven by the complete current state,
//! never by a delta.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};

use crate::climate::{ClimateConfig, SavedState, SupportedFeatures};
use crate::command::{ClimateCommand, Command};
use crate::error::{Error, Result, ValueError};
use crate::hub::{DeviceId, HubClient};
use crate::sensor::{SensorBus, SensorState};
use crate::types::{FanMode, OperationMode, Temperature, TemperatureRange, TemperatureUnit};

/// Mutable state of a climate entity, snapshotted on every change for the
/// host's state watchers.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClimateState {
    /// Target temperature in the entity's unit.
    pub target_temperature: f64,
    /// Mirrored sensor reading, if a sensor has reported one.
    pub current_temperature: Option<f64>,
    /// Current operation mode.
    pub operation_mode: OperationMode,
    /// Last active (non-off/idle) operation mode, recalled by turn-on.
    pub last_active_operation: OperationMode,
    /// Current fan mode.
    pub fan_mode: FanMode,
}

/// A thermostat-like entity driving an infrared device through a hub.
///
/// # Examples
///
/// ```no_run
/// use irclimate_lib::climate::{ClimateConfig, ClimateEntity};
/// use irclimate_lib::types::{OperationMode, TemperatureUnit};
///
/// # async fn example() -> irclimate_lib::Result<()> {
/// let config = ClimateConfig::new("192.168.1.20", "53161320")
///     .with_default_operation_from_idle(OperationMode::Heat);
/// let hub = config.hub_config().connect().await?;
///
/// let entity = ClimateEntity::new(config, TemperatureUnit::Celsius, hub, None)?;
/// entity.set_operation_mode(OperationMode::Heat).await?;
/// entity.set_temperature(22.0).await?;
/// # Ok(())
/// # }
/// ```
pub struct ClimateEntity<H: HubClient> {
    name: String,
    hub: Arc<H>,
    device: DeviceId,
    unit: TemperatureUnit,
    bounds: TemperatureRange,
    step: f64,
    operation_list: Vec<OperationMode>,
    fan_mode_list: Vec<FanMode>,
    default_operation_from_idle: Option<OperationMode>,
    sensor_entity: Option<Arc<str>>,
    state: RwLock<ClimateState>,
    state_tx: watch::Sender<ClimateState>,
}

impl<H: HubClient> ClimateEntity<H> {
    /// Creates a climate entity from a validated configuration.
    ///
    /// When a sensor entity is configured and a bus is given, the current
    /// temperature is seeded from the sensor's present state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` (wrapped in [`Error::Config`]) if the
    /// configuration fails validation.
    pub fn new(
        config: ClimateConfig,
        unit: TemperatureUnit,
        hub: H,
        bus: Option<&SensorBus>,
    ) -> Result<Self> {
        config.validate().map_err(Error::Config)?;

        let bounds = config.bounds().map_err(Error::Value)?;
        let operation_list = config.operation_list();
        let fan_mode_list = config.fan_mode_list();

        // Recall target for turn-on: the configured default if it is active,
        // otherwise the first active entry of the allowed list.
        let mut last_active = config.default_operation;
        if !last_active.is_active()
            && let Some(op) = operation_list.iter().copied().find(OperationMode::is_active)
        {
            last_active = op;
        }

        let sensor_entity: Option<Arc<str>> =
            config.temp_sensor.as_deref().map(Arc::from);

        let mut current_temperature = None;
        if let (Some(sensor), Some(bus)) = (&sensor_entity, bus)
            && let Some(present) = bus.current_state(sensor)
        {
            current_temperature = converted_reading(&present, unit);
        }

        let initial = ClimateState {
            target_temperature: config.target_temp,
            current_temperature,
            operation_mode: config.default_operation,
            last_active_operation: last_active,
            fan_mode: config.default_fan_mode,
        };
        let (state_tx, _) = watch::channel(initial.clone());

        tracing::debug!(
            name = %config.name,
            device = %config.device_id,
            sensor = sensor_entity.as_deref().unwrap_or("none"),
            "climate entity initialized"
        );

        Ok(Self {
            name: config.name,
            hub: Arc::new(hub),
            device: DeviceId::new(config.device_id),
            unit,
            bounds,
            step: config.target_temp_step,
            operation_list,
            fan_mode_list,
            default_operation_from_idle: config.default_operation_from_idle,
            sensor_entity,
            state: RwLock::new(initial),
            state_tx,
        })
    }

    // ========== Host-facing attributes ==========

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the temperature unit inherited from the host configuration.
    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Returns the controlled device identifier.
    #[must_use]
    pub const fn device(&self) -> &DeviceId {
        &self.device
    }

    /// Returns the features this entity advertises.
    #[must_use]
    pub const fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::climate()
    }

    /// Returns the minimum target temperature.
    #[must_use]
    pub const fn min_temp(&self) -> f64 {
        self.bounds.min()
    }

    /// Returns the maximum target temperature.
    #[must_use]
    pub const fn max_temp(&self) -> f64 {
        self.bounds.max()
    }

    /// Returns the target temperature step.
    #[must_use]
    pub const fn target_temperature_step(&self) -> f64 {
        self.step
    }

    /// Returns the current target temperature.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        self.state.read().target_temperature
    }

    /// Returns the mirrored current temperature, if a sensor has reported.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.state.read().current_temperature
    }

    /// Returns the current operation mode.
    #[must_use]
    pub fn operation_mode(&self) -> OperationMode {
        self.state.read().operation_mode
    }

    /// Returns the last active operation mode, recalled by
    /// [`turn_on`](Self::turn_on).
    #[must_use]
    pub fn last_active_operation(&self) -> OperationMode {
        self.state.read().last_active_operation
    }

    /// Returns the current fan mode.
    #[must_use]
    pub fn fan_mode(&self) -> FanMode {
        self.state.read().fan_mode
    }

    /// Returns the allowed operation list.
    #[must_use]
    pub fn operation_list(&self) -> &[OperationMode] {
        &self.operation_list
    }

    /// Returns the allowed fan mode list.
    #[must_use]
    pub fn fan_mode_list(&self) -> &[FanMode] {
        &self.fan_mode_list
    }

    /// Returns a snapshot of the full entity state.
    #[must_use]
    pub fn state(&self) -> ClimateState {
        self.state.read().clone()
    }

    /// Returns a watch receiver that observes every state change.
    ///
    /// This is the host's "state updated" notification channel: the entity
    /// pushes a fresh snapshot after every mutation.
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<ClimateState> {
        self.state_tx.subscribe()
    }

    // ========== Mutators ==========

    /// Sets a new target temperature.
    ///
    /// While the entity is active, the updated command is sent immediately.
    /// While off or idle, a configured default-operation-from-idle is
    /// switched to instead (which sends by itself); without one the value is
    /// only stored.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for a target outside the configured
    /// bounds, or a hub error if the command send fails.
    pub async fn set_temperature(&self, target: f64) -> Result<()> {
        if !self.bounds.contains(target) {
            return Err(ValueError::OutOfRange {
                min: self.bounds.min(),
                max: self.bounds.max(),
                actual: target,
            }
            .into());
        }

        let (active, leave_idle_with) = {
            let mut state = self.state.write();
            state.target_temperature = target;
            (state.operation_mode.is_active(), self.default_operation_from_idle)
        };

        if active {
            self.send_ir().await?;
        } else if let Some(mode) = leave_idle_with {
            self.set_operation_mode(mode).await?;
        }

        self.notify();
        Ok(())
    }

    /// Sets the fan mode, sending the updated command if the entity is
    /// active.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::FanModeNotAllowed` for a mode outside the
    /// configured list, or a hub error if the command send fails.
    pub async fn set_fan_mode(&self, fan: FanMode) -> Result<()> {
        if !self.fan_mode_list.contains(&fan) {
            return Err(ValueError::FanModeNotAllowed(fan).into());
        }

        let active = {
            let mut state = self.state.write();
            state.fan_mode = fan;
            state.operation_mode.is_active()
        };

        if active {
            self.send_ir().await?;
        }

        self.notify();
        Ok(())
    }

    /// Sets the operation mode and always sends the resulting command;
    /// switching to off or idle is what produces the `"Off"` command.
    ///
    /// Inactive modes are accepted regardless of the configured list since
    /// they all render the universal `"Off"`; active modes must be listed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OperationNotAllowed` for an active mode outside
    /// the configured list, or a hub error if the command send fails.
    pub async fn set_operation_mode(&self, mode: OperationMode) -> Result<()> {
        if mode.is_active() && !self.operation_list.contains(&mode) {
            return Err(ValueError::OperationNotAllowed(mode).into());
        }

        {
            let mut state = self.state.write();
            state.operation_mode = mode;
            if mode.is_active() {
                state.last_active_operation = mode;
            }
        }

        self.send_ir().await?;
        self.notify();
        Ok(())
    }

    /// Turns the entity on by recalling the last active operation mode.
    ///
    /// # Errors
    ///
    /// Returns a hub error if the command send fails.
    pub async fn turn_on(&self) -> Result<()> {
        let last = self.last_active_operation();
        self.set_operation_mode(last).await
    }

    /// Turns the entity off.
    ///
    /// # Errors
    ///
    /// Returns a hub error if the command send fails.
    pub async fn turn_off(&self) -> Result<()> {
        self.set_operation_mode(OperationMode::Off).await
    }

    // ========== Sensor mirroring ==========

    /// Handles a state change of the mirrored sensor entity.
    ///
    /// An absent state is a no-op. A non-numeric reading is silently
    /// ignored; an unparsable unit is logged and ignored. A numeric reading
    /// is converted into the entity's unit, stored as current temperature,
    /// and the host is notified.
    pub fn handle_sensor_changed(&self, new_state: Option<&SensorState>) {
        let Some(sensor_state) = new_state else {
            return;
        };

        if let Some(value) = converted_reading(sensor_state, self.unit) {
            self.state.write().current_temperature = Some(value);
        }
        self.notify();
    }

    /// Spawns a task that mirrors the configured sensor from the bus into
    /// this entity.
    ///
    /// Returns `None` when no sensor entity is configured.
    pub fn spawn_sensor_mirror(
        self: &Arc<Self>,
        bus: &SensorBus,
    ) -> Option<tokio::task::JoinHandle<()>>
    where
        H: Send + Sync + 'static,
    {
        let sensor = self.sensor_entity.clone()?;
        let mut rx = bus.subscribe();
        let entity = Arc::clone(self);

        Some(tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) if event.entity_id == sensor => {
                        entity.handle_sensor_changed(event.state.as_ref());
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(sensor = %sensor, missed, "sensor mirror lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }))
    }

    // ========== Persistence ==========

    /// Produces the snapshot the host persists across restarts.
    #[must_use]
    pub fn snapshot(&self) -> SavedState {
        let state = self.state.read();
        SavedState::new()
            .with_target_temperature(state.target_temperature)
            .with_operation_mode(state.operation_mode)
            .with_fan_mode(state.fan_mode)
    }

    /// Restores persisted attributes when the entity is re-added after a
    /// restart.
    ///
    /// `None` means no prior state; present fields overwrite the configured
    /// defaults as-is. Restoring an active operation also refreshes the
    /// turn-on recall. No command is sent.
    pub fn restore(&self, saved: Option<SavedState>) {
        let Some(saved) = saved else {
            return;
        };

        {
            let mut state = self.state.write();
            if let Some(target) = saved.target_temperature {
                state.target_temperature = target;
            }
            if let Some(mode) = saved.operation_mode {
                state.operation_mode = mode;
                if mode.is_active() {
                    state.last_active_operation = mode;
                }
            }
            if let Some(fan) = saved.fan_mode {
                state.fan_mode = fan;
            }
        }

        tracing::debug!(name = %self.name, "restored persisted climate state");
        self.notify();
    }

    // ========== Internals ==========

    /// Renders the full current state into one IR command and forwards it
    /// to the hub. Best-effort: failures propagate, nothing retries.
    async fn send_ir(&self) -> Result<()> {
        let command = {
            let state = self.state.read();
            ClimateCommand::new(state.operation_mode, state.fan_mode, state.target_temperature)
        };
        let rendered = command.render();

        tracing::debug!(device = %self.device, command = %rendered, "sending IR command");
        self.hub
            .send_command(&self.device, &rendered)
            .await
            .map_err(Error::Hub)
    }

    fn notify(&self) {
        self.state_tx.send_replace(self.state.read().clone());
    }
}

impl<H: HubClient> std::fmt::Debug for ClimateEntity<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClimateEntity")
            .field("name", &self.name)
            .field("device", &self.device)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

/// Parses a raw sensor state into the entity's unit.
///
/// Non-numeric readings yield `None`; an unparsable unit attribute is
/// logged and yields `None`; a missing unit is taken to already match the
/// target unit.
fn converted_reading(sensor_state: &SensorState, target: TemperatureUnit) -> Option<f64> {
    let value: f64 = sensor_state.reading.trim().parse().ok()?;

    let unit = match &sensor_state.unit {
        Some(raw) => match raw.parse::<TemperatureUnit>() {
            Ok(unit) => unit,
            Err(err) => {
                tracing::error!(error = %err, "unable to update from sensor");
                return None;
            }
        },
        None => target,
    };

    Some(Temperature::new(value, unit).to_unit(target).value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converted_reading_parses_numeric() {
        let state = SensorState::new("21.5", Some("°C".to_string()));
        let value = converted_reading(&state, TemperatureUnit::Celsius).unwrap();
        assert!((value - 21.5).abs() < 1e-9);
    }

    #[test]
    fn converted_reading_converts_units() {
        let state = SensorState::new("68", Some("°F".to_string()));
        let value = converted_reading(&state, TemperatureUnit::Celsius).unwrap();
        assert!((value - 20.0).abs() < 1e-9);
    }

    #[test]
    fn converted_reading_ignores_non_numeric() {
        let state = SensorState::new("unavailable", Some("°C".to_string()));
        assert!(converted_reading(&state, TemperatureUnit::Celsius).is_none());
    }

    #[test]
    fn converted_reading_ignores_bad_unit() {
        let state = SensorState::new("21.5", Some("kelvin".to_string()));
        assert!(converted_reading(&state, TemperatureUnit::Celsius).is_none());
    }

    #[test]
    fn converted_reading_assumes_target_unit_when_absent() {
        let state = SensorState::new("70.7", None);
        let value = converted_reading(&state, TemperatureUnit::Fahrenheit).unwrap();
        assert!((value - 70.7).abs() < 1e-9);
    }
}
