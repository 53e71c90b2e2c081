// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infrared command rendering.
//!
//! A climate entity never sends deltas: every state change re-renders one
//! command string from the complete current state and forwards it to the hub.
//!
//! # Command format
//!
//! - Inactive operation (Off or Idle) renders the literal `"Off"`.
//! - Active operation renders `mode + fan + truncated temperature`,
//!   e.g. heat/high/22.7 renders `"HeatHigh22"`.

use crate::types::{FanMode, OperationMode};

/// A command that can be rendered into the string a hub transmits.
pub trait Command {
    /// Renders the command into the hub's command string.
    fn render(&self) -> String;
}

/// Full-state command of a climate entity.
///
/// # Examples
///
/// ```
/// use irclimate_lib::command::{ClimateCommand, Command};
/// use irclimate_lib::types::{FanMode, OperationMode};
///
/// let cmd = ClimateCommand::new(OperationMode::Heat, FanMode::High, 22.7);
/// assert_eq!(cmd.render(), "HeatHigh22");
///
/// let off = ClimateCommand::new(OperationMode::Idle, FanMode::High, 22.7);
/// assert_eq!(off.render(), "Off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateCommand {
    operation: OperationMode,
    fan: FanMode,
    target_temperature: f64,
}

impl ClimateCommand {
    /// Creates a command from the entity's current state.
    #[must_use]
    pub const fn new(operation: OperationMode, fan: FanMode, target_temperature: f64) -> Self {
        Self {
            operation,
            fan,
            target_temperature,
        }
    }

    /// Returns the operation mode baked into this command.
    #[must_use]
    pub const fn operation(&self) -> OperationMode {
        self.operation
    }

    /// Returns the fan mode baked into this command.
    #[must_use]
    pub const fn fan(&self) -> FanMode {
        self.fan
    }

    /// Returns the target temperature baked into this command.
    #[must_use]
    pub const fn target_temperature(&self) -> f64 {
        self.target_temperature
    }
}

impl Command for ClimateCommand {
    fn render(&self) -> String {
        if !self.operation.is_active() {
            return "Off".to_string();
        }
        // Temperature is truncated toward zero, matching the device's
        // integer-degree command vocabulary.
        #[allow(clippy::cast_possible_truncation)]
        let temp = self.target_temperature.trunc() as i64;
        format!("{}{}{temp}", self.operation.as_str(), self.fan.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_modes_render_off() {
        for mode in [OperationMode::Off, OperationMode::Idle] {
            for fan in FanMode::DEFAULT_LIST {
                let cmd = ClimateCommand::new(mode, fan, 22.7);
                assert_eq!(cmd.render(), "Off");
            }
        }
    }

    #[test]
    fn active_mode_renders_mode_fan_temp() {
        let cmd = ClimateCommand::new(OperationMode::Heat, FanMode::High, 22.7);
        assert_eq!(cmd.render(), "HeatHigh22");
    }

    #[test]
    fn temperature_is_truncated_not_rounded() {
        let cmd = ClimateCommand::new(OperationMode::Cool, FanMode::Low, 19.9);
        assert_eq!(cmd.render(), "CoolLow19");
    }

    #[test]
    fn integral_temperature_renders_verbatim() {
        let cmd = ClimateCommand::new(OperationMode::Auto, FanMode::Mid, 24.0);
        assert_eq!(cmd.render(), "AutoMid24");
    }

    #[test]
    fn all_active_modes_and_fans() {
        for mode in [OperationMode::Heat, OperationMode::Cool, OperationMode::Auto] {
            for fan in FanMode::DEFAULT_LIST {
                let rendered = ClimateCommand::new(mode, fan, 21.0).render();
                assert_eq!(rendered, format!("{}{}21", mode.as_str(), fan.as_str()));
            }
        }
    }
}
