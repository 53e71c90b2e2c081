// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature types: units, readings, and configured bounds.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Temperature unit of a climate entity or sensor reading.
///
/// # Examples
///
/// ```
/// use irclimate_lib::types::TemperatureUnit;
///
/// let unit: TemperatureUnit = "°C".parse().unwrap();
/// assert_eq!(unit, TemperatureUnit::Celsius);
/// assert_eq!(unit.symbol(), "°C");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the display symbol for this unit.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "°C" | "C" | "c" | "celsius" | "Celsius" => Ok(Self::Celsius),
            "°F" | "F" | "f" | "fahrenheit" | "Fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(ValueError::InvalidTemperatureUnit(other.to_string())),
        }
    }
}

/// A temperature reading carrying its unit.
///
/// Replaces the host platform's unit-conversion utility: sensor readings are
/// converted into the entity's configured unit before being mirrored.
///
/// # Examples
///
/// ```
/// use irclimate_lib::types::{Temperature, TemperatureUnit};
///
/// let t = Temperature::new(68.0, TemperatureUnit::Fahrenheit);
/// let c = t.to_unit(TemperatureUnit::Celsius);
/// assert!((c.value() - 20.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    /// Creates a new temperature reading.
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Converts the reading into the target unit.
    #[must_use]
    pub fn to_unit(self, target: TemperatureUnit) -> Self {
        let value = match (self.unit, target) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => self.value * 9.0 / 5.0 + 32.0,
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                (self.value - 32.0) * 5.0 / 9.0
            }
            _ => self.value,
        };
        Self {
            value,
            unit: target,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}

/// Configured min/max target temperature bounds, fixed at construction.
///
/// # Examples
///
/// ```
/// use irclimate_lib::types::TemperatureRange;
///
/// let range = TemperatureRange::new(16.0, 30.0).unwrap();
/// assert!(range.contains(20.0));
/// assert!(!range.contains(31.0));
/// assert!(TemperatureRange::new(30.0, 16.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemperatureRange {
    min: f64,
    max: f64,
}

impl TemperatureRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRange` if `min` is above `max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValueError> {
        if min > max {
            return Err(ValueError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns whether the value lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: 16.0,
            max: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_from_str() {
        assert_eq!(
            "°F".parse::<TemperatureUnit>().unwrap(),
            TemperatureUnit::Fahrenheit
        );
        assert_eq!(
            "celsius".parse::<TemperatureUnit>().unwrap(),
            TemperatureUnit::Celsius
        );
        assert!(matches!(
            "kelvin".parse::<TemperatureUnit>().unwrap_err(),
            ValueError::InvalidTemperatureUnit(_)
        ));
    }

    #[test]
    fn conversion_roundtrip() {
        let c = Temperature::new(21.5, TemperatureUnit::Celsius);
        let f = c.to_unit(TemperatureUnit::Fahrenheit);
        assert!((f.value() - 70.7).abs() < 1e-9);

        let back = f.to_unit(TemperatureUnit::Celsius);
        assert!((back.value() - 21.5).abs() < 1e-9);
    }

    #[test]
    fn conversion_same_unit_is_identity() {
        let t = Temperature::new(22.7, TemperatureUnit::Celsius);
        assert_eq!(t.to_unit(TemperatureUnit::Celsius), t);
    }

    #[test]
    fn range_contains_bounds() {
        let range = TemperatureRange::new(16.0, 30.0).unwrap();
        assert!(range.contains(16.0));
        assert!(range.contains(30.0));
        assert!(!range.contains(15.9));
        assert!(!range.contains(30.1));
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(matches!(
            TemperatureRange::new(30.0, 16.0).unwrap_err(),
            ValueError::InvalidRange { .. }
        ));
    }

    #[test]
    fn default_range_matches_platform_defaults() {
        let range = TemperatureRange::default();
        assert!((range.min() - 16.0).abs() < f64::EPSILON);
        assert!((range.max() - 30.0).abs() < f64::EPSILON);
    }
}
