// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Supported-feature flags exposed to the host platform.

/// Features a climate entity advertises to the host platform.
///
/// # Examples
///
/// ```
/// use irclimate_lib::climate::SupportedFeatures;
///
/// let features = SupportedFeatures::climate();
/// assert!(features.target_temperature);
/// assert!(features.on_off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// Each boolean is an independent host-facing feature flag.
#[allow(clippy::struct_excessive_bools)]
pub struct SupportedFeatures {
    /// Target temperature can be set.
    pub target_temperature: bool,
    /// Operation mode can be set.
    pub operation_mode: bool,
    /// Fan mode can be set.
    pub fan_mode: bool,
    /// Entity supports turn on / turn off.
    pub on_off: bool,
}

impl SupportedFeatures {
    /// Feature set of an infrared climate entity: everything this library
    /// implements.
    #[must_use]
    pub const fn climate() -> Self {
        Self {
            target_temperature: true,
            operation_mode: true,
            fan_mode: true,
            on_off: true,
        }
    }
}

impl Default for SupportedFeatures {
    fn default() -> Self {
        Self::climate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_advertises_all_features() {
        let features = SupportedFeatures::climate();
        assert!(features.target_temperature);
        assert!(features.operation_mode);
        assert!(features.fan_mode);
        assert!(features.on_off);
    }
}
