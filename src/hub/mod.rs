// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub client capability.
//!
//! The infrared hub's wire protocol is out of scope for this library; it is
//! delegated to a client behind the [`HubClient`] trait. The shipped
//! transport is [`HttpHubClient`] (feature `http`), a thin client for
//! REST-style hub bridges. Anything that can forward a command string to a
//! device can stand in, which is also how tests drive the entity.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpHubClient;

use std::fmt;
use std::time::Duration;

use crate::error::HubError;

/// Identifier of a device behind the hub, as configured on the hub itself.
///
/// # Examples
///
/// ```
/// use irclimate_lib::hub::DeviceId;
///
/// let device = DeviceId::new("53161320");
/// assert_eq!(device.as_str(), "53161320");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a new device identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Trait for clients that can forward a command string to a hub device.
///
/// The send is best-effort: the entity awaits completion but performs no
/// retry, and failures propagate to the caller untouched.
#[allow(async_fn_in_trait)]
pub trait HubClient {
    /// Sends a command string to the given device.
    ///
    /// # Errors
    ///
    /// Returns `HubError` if the command could not be delivered.
    async fn send_command(&self, device: &DeviceId, command: &str) -> Result<(), HubError>;
}

/// Connection configuration for a hub.
///
/// # Examples
///
/// ```
/// use irclimate_lib::hub::HubConfig;
/// use std::time::Duration;
///
/// let config = HubConfig::new("192.168.1.20")
///     .with_port(8282)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.20:8282");
/// ```
#[derive(Debug, Clone)]
pub struct HubConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HubConfig {
    /// Default port of a hub bridge.
    pub const DEFAULT_PORT: u16 = 8282;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Creates an [`HttpHubClient`] from this configuration without probing
    /// the bridge.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    #[cfg(feature = "http")]
    pub fn into_client(self) -> Result<HttpHubClient, HubError> {
        HttpHubClient::from_config(self)
    }
}
