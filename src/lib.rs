// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `IRClimate` Lib - expose infrared-command hubs as climate entities.
//!
//! This library turns a thermostat-like device controlled through an
//! infrared hub into a climate entity a home-automation host can drive:
//! operation mode, fan mode, and target temperature in; one full-state IR
//! command string out.
//!
//! # What it does
//!
//! - **Command mapping**: every state change re-renders `mode + fan +
//!   temperature` (e.g. `"HeatHigh22"`); off and idle render the literal
//!   `"Off"`.
//! - **Sensor mirroring**: subscribes to an external temperature sensor and
//!   copies numeric readings (with unit conversion) into the entity's
//!   current temperature.
//! - **Restore**: rehydrates target temperature, operation mode, and fan
//!   mode from a persisted snapshot after a restart.
//!
//! The hub's wire protocol is out of scope; commands go through the
//! [`hub::HubClient`] trait. The `http` feature ships a transport for
//! REST-style hub bridges.
//!
//! # Quick Start
//!
//! ```no_run
//! use irclimate_lib::climate::{ClimateConfig, ClimateEntity};
//! use irclimate_lib::types::{OperationMode, TemperatureUnit};
//!
//! #[tokio::main]
//! async fn main() -> irclimate_lib::Result<()> {
//!     let config = ClimateConfig::new("192.168.1.20", "53161320")
//!         .with_name("Living Room AC")
//!         .with_default_operation_from_idle(OperationMode::Heat);
//!
//!     // Abort setup when the hub is unreachable.
//!     let hub = config.hub_config().connect().await?;
//!     let entity = ClimateEntity::new(config, TemperatureUnit::Celsius, hub, None)?;
//!
//!     entity.set_operation_mode(OperationMode::Heat).await?;
//!     entity.set_temperature(22.0).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Mirroring a temperature sensor
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use irclimate_lib::climate::{ClimateConfig, ClimateEntity};
//! use irclimate_lib::sensor::{SensorBus, SensorState};
//! use irclimate_lib::types::TemperatureUnit;
//!
//! #[tokio::main]
//! async fn main() -> irclimate_lib::Result<()> {
//!     let bus = SensorBus::new();
//!     let config = ClimateConfig::new("192.168.1.20", "53161320")
//!         .with_temp_sensor("sensor.living_room_temp");
//!
//!     let hub = config.hub_config().connect().await?;
//!     let entity = Arc::new(ClimateEntity::new(
//!         config,
//!         TemperatureUnit::Celsius,
//!         hub,
//!         Some(&bus),
//!     )?);
//!     let _mirror = entity.spawn_sensor_mirror(&bus);
//!
//!     // Host glue publishes sensor changes on the bus.
//!     bus.publish(
//!         "sensor.living_room_temp",
//!         Some(SensorState::new("21.5", Some("°C".to_string()))),
//!     );
//!     Ok(())
//! }
//! ```

pub mod climate;
pub mod command;
pub mod error;
pub mod hub;
pub mod sensor;
pub mod types;

pub use climate::{ClimateConfig, ClimateEntity, ClimateState, SavedState, SupportedFeatures};
pub use command::{ClimateCommand, Command};
pub use error::{ConfigError, Error, HubError, Result, ValueError};
#[cfg(feature = "http")]
pub use hub::HttpHubClient;
pub use hub::{DeviceId, HubClient, HubConfig};
pub use sensor::{SensorBus, SensorEvent, SensorState};
pub use types::{FanMode, OperationMode, Temperature, TemperatureRange, TemperatureUnit};
