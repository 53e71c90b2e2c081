// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persisted entity state for restore-on-add.
//!
//! The host persists a [`SavedState`] snapshot and hands it back when the
//! entity is recreated after a restart. Only three attributes survive a
//! restart: target temperature, operation mode, and fan mode.

use chrono::{DateTime, Utc};

use crate::types::{FanMode, OperationMode};

/// Snapshot of the attributes a climate entity persists across restarts.
///
/// Every field is optional so a host that persisted only part of the state
/// can still restore the rest; "no prior state at all" is represented by
/// `Option<SavedState>` being `None` at the restore call site.
///
/// # Examples
///
/// ```
/// use irclimate_lib::climate::SavedState;
/// use irclimate_lib::types::{FanMode, OperationMode};
///
/// let saved = SavedState::new()
///     .with_target_temperature(23.0)
///     .with_operation_mode(OperationMode::Cool)
///     .with_fan_mode(FanMode::Low);
///
/// let json = serde_json::to_string(&saved).unwrap();
/// let back: SavedState = serde_json::from_str(&json).unwrap();
/// assert_eq!(back.operation_mode, Some(OperationMode::Cool));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SavedState {
    /// Persisted target temperature.
    pub target_temperature: Option<f64>,
    /// Persisted operation mode.
    pub operation_mode: Option<OperationMode>,
    /// Persisted fan mode.
    pub fan_mode: Option<FanMode>,
    /// When the snapshot was taken.
    pub recorded_at: DateTime<Utc>,
}

impl SavedState {
    /// Creates an empty snapshot timestamped now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target_temperature: None,
            operation_mode: None,
            fan_mode: None,
            recorded_at: Utc::now(),
        }
    }

    /// Sets the persisted target temperature.
    #[must_use]
    pub const fn with_target_temperature(mut self, value: f64) -> Self {
        self.target_temperature = Some(value);
        self
    }

    /// Sets the persisted operation mode.
    #[must_use]
    pub const fn with_operation_mode(mut self, mode: OperationMode) -> Self {
        self.operation_mode = Some(mode);
        self
    }

    /// Sets the persisted fan mode.
    #[must_use]
    pub const fn with_fan_mode(mut self, mode: FanMode) -> Self {
        self.fan_mode = Some(mode);
        self
    }
}

impl Default for SavedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_is_empty() {
        let saved = SavedState::new();
        assert!(saved.target_temperature.is_none());
        assert!(saved.operation_mode.is_none());
        assert!(saved.fan_mode.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let saved = SavedState::new()
            .with_target_temperature(23.0)
            .with_operation_mode(OperationMode::Cool)
            .with_fan_mode(FanMode::Low);

        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, saved);
    }

    #[test]
    fn modes_serialize_lowercase() {
        let saved = SavedState::new().with_operation_mode(OperationMode::Heat);
        let json = serde_json::to_string(&saved).unwrap();
        assert!(json.contains("\"heat\""));
    }
}
