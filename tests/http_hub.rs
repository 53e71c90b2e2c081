// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP hub transport against a mock bridge.

#![cfg(feature = "http")]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use irclimate_lib::error::HubError;
use irclimate_lib::hub::{DeviceId, HubClient, HubConfig};

fn hub_config(server: &MockServer) -> HubConfig {
    HubConfig::new(server.address().ip().to_string()).with_port(server.address().port())
}

#[tokio::test]
async fn send_command_posts_to_the_device_command_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/devices/53161320/commands/HeatHigh22"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = hub_config(&server).into_client().unwrap();
    client
        .send_command(&DeviceId::new("53161320"), "HeatHigh22")
        .await
        .unwrap();
}

#[tokio::test]
async fn send_command_percent_encodes_path_segments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/devices/living%20room%2Fac/commands/Off"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = hub_config(&server).into_client().unwrap();
    client
        .send_command(&DeviceId::new("living room/ac"), "Off")
        .await
        .unwrap();
}

#[tokio::test]
async fn send_command_reports_rejection_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = hub_config(&server).into_client().unwrap();
    let result = client
        .send_command(&DeviceId::new("53161320"), "CoolLow24")
        .await;

    assert!(matches!(
        result.unwrap_err(),
        HubError::CommandRejected { status: 503 }
    ));
}

#[tokio::test]
async fn connect_probes_the_status_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = hub_config(&server).connect().await.unwrap();
    assert_eq!(client.base_url(), server.uri());
}

#[tokio::test]
async fn connect_fails_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = hub_config(&server).connect().await;
    assert!(matches!(
        result.unwrap_err(),
        HubError::ConnectionFailed(_)
    ));
}

#[tokio::test]
async fn connect_fails_when_the_bridge_is_unreachable() {
    let server = MockServer::start().await;
    let config = hub_config(&server);
    drop(server);

    let result = config.connect().await;
    assert!(matches!(
        result.unwrap_err(),
        HubError::ConnectionFailed(_)
    ));
}

#[tokio::test]
async fn probe_succeeds_independently_of_command_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = hub_config(&server).into_client().unwrap();
    client.probe().await.unwrap();
}
