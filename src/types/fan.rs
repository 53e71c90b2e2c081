// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan mode type for climate entities.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Fan speed setting of a climate entity.
///
/// # Examples
///
/// ```
/// use irclimate_lib::types::FanMode;
///
/// let high: FanMode = "high".parse().unwrap();
/// assert_eq!(high.as_str(), "High");
/// assert!("turbo".parse::<FanMode>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum FanMode {
    /// Device picks the fan speed.
    #[default]
    Auto,
    /// Low speed.
    Low,
    /// Medium speed.
    Mid,
    /// High speed.
    High,
}

impl FanMode {
    /// Default allowed fan mode list when the configuration does not
    /// override it.
    pub const DEFAULT_LIST: [Self; 4] = [Self::Low, Self::Mid, Self::High, Self::Auto];

    /// Returns the capitalized command token for this fan mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            _ => Err(ValueError::InvalidFanMode(s.to_string())),
        }
    }
}
