// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation mode type for climate entities.
//!
//! The operation mode is the thermostat's functional state. `Off` and `Idle`
//! are logically inactive: while in either of them the entity sends the
//! literal `"Off"` command instead of a full mode/fan/temperature command.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The functional state of a climate entity.
///
/// # Examples
///
/// ```
/// use irclimate_lib::types::OperationMode;
///
/// let heat: OperationMode = "heat".parse().unwrap();
/// assert_eq!(heat.as_str(), "Heat");
/// assert!(heat.is_active());
///
/// assert!(!OperationMode::Idle.is_active());
/// assert!("dry".parse::<OperationMode>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Device is off.
    #[default]
    Off,
    /// Heating.
    Heat,
    /// Cooling.
    Cool,
    /// Automatic heating/cooling.
    Auto,
    /// Logically off while the device idles; treated like [`Off`](Self::Off)
    /// for command purposes.
    Idle,
}

impl OperationMode {
    /// Default allowed operation list when the configuration does not
    /// override it.
    pub const DEFAULT_LIST: [Self; 4] = [Self::Off, Self::Heat, Self::Cool, Self::Auto];

    /// Returns the capitalized command token for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Heat => "Heat",
            Self::Cool => "Cool",
            Self::Auto => "Auto",
            Self::Idle => "Idle",
        }
    }

    /// Returns whether this mode actively drives the device.
    ///
    /// `Off` and `Idle` are inactive; every other mode is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Off | Self::Idle)
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "auto" => Ok(Self::Auto),
            "idle" => Ok(Self::Idle),
            _ => Err(ValueError::InvalidOperationMode(s.to_string())),
        }
    }
}
