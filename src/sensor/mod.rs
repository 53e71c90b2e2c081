// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External sensor state bus.
//!
//! Climate entities mirror one external temperature sensor. The host glue
//! publishes sensor state changes on a [`SensorBus`]; entities subscribe by
//! sensor entity id and copy numeric readings into their current
//! temperature. The bus also retains the latest state per sensor so a newly
//! constructed entity can seed its reading immediately.

use std::collections::HashMap;

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default channel capacity for the sensor bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Identifier assigned to a published sensor event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw state of a sensor entity as reported by the host platform.
///
/// The reading stays a string at this boundary: hosts report placeholder
/// states such as `"unavailable"` through the same channel as numeric
/// readings, and the unit arrives as a free-form attribute.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SensorState {
    /// The raw state value, e.g. `"21.5"` or `"unavailable"`.
    pub reading: String,
    /// Unit-of-measurement attribute, if the sensor reports one.
    pub unit: Option<String>,
}

impl SensorState {
    /// Creates a sensor state with a unit attribute.
    #[must_use]
    pub fn new(reading: impl Into<String>, unit: Option<String>) -> Self {
        Self {
            reading: reading.into(),
            unit,
        }
    }
}

/// A sensor state change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorEvent {
    /// Identifier of this event.
    pub id: EventId,
    /// The sensor entity that changed, e.g. `"sensor.living_room_temp"`.
    pub entity_id: Arc<str>,
    /// The new state, or `None` when the sensor disappeared.
    pub state: Option<SensorState>,
}

/// Broadcast bus carrying sensor state changes to entity subscribers.
///
/// Cloning the bus shares the same channel and retained-state map.
///
/// # Examples
///
/// ```
/// use irclimate_lib::sensor::{SensorBus, SensorState};
///
/// let bus = SensorBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(
///     "sensor.living_room_temp",
///     Some(SensorState::new("21.5", Some("°C".to_string()))),
/// );
/// assert!(bus.current_state("sensor.living_room_temp").is_some());
/// ```
#[derive(Debug)]
pub struct SensorBus {
    sender: broadcast::Sender<SensorEvent>,
    retained: Arc<RwLock<HashMap<Arc<str>, SensorState>>>,
}

impl SensorBus {
    /// Creates a new bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new bus with the specified channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            retained: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribes to sensor state changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SensorEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes a state change for a sensor entity.
    ///
    /// The latest non-`None` state is retained for
    /// [`current_state`](Self::current_state) lookups. Delivery errors
    /// (no subscribers) are ignored.
    pub fn publish(&self, entity_id: impl Into<Arc<str>>, state: Option<SensorState>) {
        let entity_id: Arc<str> = entity_id.into();

        match &state {
            Some(s) => {
                self.retained
                    .write()
                    .insert(Arc::clone(&entity_id), s.clone());
            }
            None => {
                self.retained.write().remove(&entity_id);
            }
        }

        let _ = self.sender.send(SensorEvent {
            id: EventId::new(),
            entity_id,
            state,
        });
    }

    /// Returns the latest retained state of a sensor entity.
    #[must_use]
    pub fn current_state(&self, entity_id: &str) -> Option<SensorState> {
        self.retained.read().get(entity_id).cloned()
    }
}

impl Default for SensorBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SensorBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            retained: Arc::clone(&self.retained),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celsius(reading: &str) -> SensorState {
        SensorState::new(reading, Some("°C".to_string()))
    }

    #[test]
    fn new_bus_has_no_subscribers() {
        let bus = SensorBus::new();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn publish_retains_latest_state() {
        let bus = SensorBus::new();
        bus.publish("sensor.temp", Some(celsius("20.0")));
        bus.publish("sensor.temp", Some(celsius("21.5")));

        let state = bus.current_state("sensor.temp").unwrap();
        assert_eq!(state.reading, "21.5");
    }

    #[test]
    fn publish_none_clears_retained_state() {
        let bus = SensorBus::new();
        bus.publish("sensor.temp", Some(celsius("20.0")));
        bus.publish("sensor.temp", None);
        assert!(bus.current_state("sensor.temp").is_none());
    }

    #[test]
    fn unknown_sensor_has_no_state() {
        let bus = SensorBus::new();
        assert!(bus.current_state("sensor.unknown").is_none());
    }

    #[tokio::test]
    async fn publish_delivers_to_subscriber() {
        let bus = SensorBus::new();
        let mut rx = bus.subscribe();

        bus.publish("sensor.temp", Some(celsius("21.5")));

        let event = rx.recv().await.unwrap();
        assert_eq!(&*event.entity_id, "sensor.temp");
        assert_eq!(event.state.unwrap().reading, "21.5");
    }

    #[tokio::test]
    async fn publish_delivers_to_multiple_subscribers() {
        let bus = SensorBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish("sensor.temp", Some(celsius("19.0")));

        assert_eq!(rx1.recv().await.unwrap().state.unwrap().reading, "19.0");
        assert_eq!(rx2.recv().await.unwrap().state.unwrap().reading, "19.0");
    }

    #[test]
    fn clone_shares_channel_and_retained_state() {
        let bus1 = SensorBus::new();
        let bus2 = bus1.clone();

        let _rx = bus1.subscribe();
        assert_eq!(bus2.subscriber_count(), 1);

        bus2.publish("sensor.temp", Some(celsius("18.0")));
        assert!(bus1.current_state("sensor.temp").is_some());
    }

    #[test]
    fn event_ids_are_unique() {
        assert_ne!(EventId::new(), EventId::new());
    }
}
