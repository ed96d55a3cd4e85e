#![allow(clippy::unwrap_used)]
// Integration tests for `UispClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use uispond_api::{Error, TransportConfig, UispClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, UispClient) {
    let server = MockServer::start().await;
    let token: secrecy::SecretString = "test-token".to_string().into();
    let client = UispClient::from_token(&server.uri(), &token, &TransportConfig::default()).unwrap();
    (server, client)
}

// ── Auth header ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_auth_token_header_is_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Authentication { status: 401 })),
        "expected Authentication error, got: {result:?}"
    );
}

// ── Device listing ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    let body = json!([{
        "identification": {
            "hostname": "AP-Roof",
            "name": "AP-Roof",
            "mac": "aa:bb:cc:dd:ee:ff",
            "firmwareVersion": "8.7.4",
            "model": "LAP-120"
        },
        "location": { "latitude": 50.11, "longitude": 8.68 },
        "overview": { "uptime": 86400 }
    }]);

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].identification.hostname.as_deref(), Some("AP-Roof"));
    assert_eq!(
        devices[0].identification.mac.as_deref(),
        Some("aa:bb:cc:dd:ee:ff")
    );
    assert_eq!(devices[0].overview.uptime, Some(86_400));
}

#[tokio::test]
async fn test_malformed_list_element_degrades_not_fatal() {
    let (server, client) = setup().await;

    // Second element is junk; the list must still come back with both slots.
    let body = json!([
        { "identification": { "hostname": "AP-One" } },
        "garbage"
    ]);

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].identification.hostname.as_deref(), Some("AP-One"));
    assert_eq!(devices[1].identification.hostname, None);
}

#[tokio::test]
async fn test_non_list_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nope": true})))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Data links ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_data_links() {
    let (server, client) = setup().await;

    let body = json!([{
        "from": { "device": { "identification": { "name": "AP-Yard" } } },
        "to": { "device": { "identification": { "name": "AP-Gate" } } }
    }]);

    Mock::given(method("GET"))
        .and(path("/data-links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let links = client.list_data_links().await.unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].from_name(), Some("AP-Yard"));
    assert_eq!(links[0].to_name(), Some("AP-Gate"));
}

// ── URL handling ────────────────────────────────────────────────────

#[tokio::test]
async fn test_base_url_with_api_prefix_and_trailing_slash() {
    let server = MockServer::start().await;
    let token: secrecy::SecretString = "test-token".to_string().into();
    let base = format!("{}/nms/api/v2.1/", server.uri());
    let client = UispClient::from_token(&base, &token, &TransportConfig::default()).unwrap();

    Mock::given(method("GET"))
        .and(path("/nms/api/v2.1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list_devices().await.unwrap();
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})),
        )
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
