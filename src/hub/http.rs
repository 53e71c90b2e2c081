// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for REST-style hub bridges.

use reqwest::Client;

use crate::error::HubError;
use crate::hub::{DeviceId, HubClient, HubConfig};

/// HTTP client for a hub bridge.
///
/// Commands are posted as
/// `POST {base}/devices/{device}/commands/{command}`; a non-success status
/// is reported as [`HubError::CommandRejected`].
///
/// # Examples
///
/// ```no_run
/// use irclimate_lib::hub::{DeviceId, HubClient, HubConfig};
///
/// # async fn example() -> Result<(), irclimate_lib::error::HubError> {
/// let hub = HubConfig::new("192.168.1.20").connect().await?;
/// hub.send_command(&DeviceId::new("53161320"), "HeatHigh22").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpHubClient {
    base_url: String,
    client: Client,
}

impl HttpHubClient {
    /// Creates a client from a configuration without contacting the bridge.
    ///
    /// # Errors
    ///
    /// Returns `HubError::InvalidAddress` for an empty host, or the
    /// underlying error if the HTTP client cannot be created.
    pub fn from_config(config: HubConfig) -> Result<Self, HubError> {
        if config.host().is_empty() {
            return Err(HubError::InvalidAddress("empty host".to_string()));
        }

        let base_url = config.base_url();
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HubError::Http)?;

        Ok(Self { base_url, client })
    }

    /// Probes the bridge's status endpoint to verify it is reachable.
    ///
    /// Entity setup uses this to abort registration when the hub cannot be
    /// reached, instead of carrying a non-functional handle.
    ///
    /// # Errors
    ///
    /// Returns `HubError::ConnectionFailed` if the bridge does not answer
    /// with a success status.
    pub async fn probe(&self) -> Result<(), HubError> {
        let url = format!("{}/status", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            HubError::ConnectionFailed(format!("{}: {e}", self.base_url))
        })?;

        if !response.status().is_success() {
            return Err(HubError::ConnectionFailed(format!(
                "{}: status {}",
                self.base_url,
                response.status()
            )));
        }
        Ok(())
    }

    /// Returns the base URL of the bridge.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HubConfig {
    /// Connects to the bridge: builds a client and probes it.
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be created or the bridge is
    /// unreachable.
    pub async fn connect(self) -> Result<HttpHubClient, HubError> {
        let client = HttpHubClient::from_config(self)?;
        client.probe().await?;
        Ok(client)
    }
}

impl HubClient for HttpHubClient {
    async fn send_command(&self, device: &DeviceId, command: &str) -> Result<(), HubError> {
        let url = format!(
            "{}/devices/{}/commands/{}",
            self.base_url,
            urlencoding::encode(device.as_str()),
            urlencoding::encode(command)
        );

        tracing::debug!(device = %device, command = %command, "sending command to hub bridge");

        let response = self.client.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(device = %device, status = %status, "hub bridge rejected command");
            return Err(HubError::CommandRejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_rejects_empty_host() {
        let result = HttpHubClient::from_config(HubConfig::new(""));
        assert!(matches!(result.unwrap_err(), HubError::InvalidAddress(_)));
    }

    #[test]
    fn from_config_builds_base_url() {
        let client = HttpHubClient::from_config(HubConfig::new("hub.local").with_port(9123))
            .expect("client should build");
        assert_eq!(client.base_url(), "http://hub.local:9123");
    }
}
