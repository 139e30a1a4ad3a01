//! End-to-end tests of the HTTP facades against a real listener.

use confhub::provider::ConfigMessage;
use confhub::Configuration;
use reqwest::StatusCode;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn round_trip_put_then_read() {
    let hub = common::start_hub().await;
    let client = client();

    let fragment = common::fragment_json("b1", "s1", "http://127.0.0.1:9000");
    let res = client
        .put(hub.url("/api"))
        .json(&fragment)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // PUT responds with the merged configuration including the fragment.
    let merged: Configuration = res.json().await.unwrap();
    assert_eq!(
        merged.backends["b1"].servers["s1"].url,
        "http://127.0.0.1:9000"
    );

    // And subsequent reads agree.
    let read: Configuration = client
        .get(hub.url("/api"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(read, merged);
}

#[tokio::test]
async fn example_scenario_server_lookup() {
    let hub = common::start_hub().await;
    let client = client();

    hub.aggregator
        .ingest_and_read(ConfigMessage::new(
            "provider-a",
            serde_json::from_value(common::fragment_json("b1", "s1", "http://127.0.0.1:9000"))
                .unwrap(),
        ))
        .await
        .unwrap();

    let res = client
        .get(hub.url("/api/backends/b1/servers/s1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["url"], "http://127.0.0.1:9000");

    let res = client
        .get(hub.url("/api/backends/b1/servers/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn union_merge_across_providers() {
    let hub = common::start_hub().await;
    let client = client();

    hub.aggregator
        .ingest_and_read(ConfigMessage::new(
            "provider-a",
            serde_json::from_value(common::fragment_json("b1", "s1", "http://127.0.0.1:9000"))
                .unwrap(),
        ))
        .await
        .unwrap();

    let res = client
        .put(hub.url("/api"))
        .json(&common::fragment_json("b2", "s1", "http://127.0.0.1:9001"))
        .send()
        .await
        .unwrap();
    let merged: Configuration = res.json().await.unwrap();

    assert_eq!(merged.backends.len(), 2);
    assert!(merged.backends.contains_key("b1"));
    assert!(merged.backends.contains_key("b2"));
}

#[tokio::test]
async fn collision_last_merge_wins() {
    let hub = common::start_hub().await;

    hub.aggregator
        .ingest_and_read(ConfigMessage::new(
            "provider-a",
            serde_json::from_value(common::fragment_json("shared", "s1", "http://from-a:9000"))
                .unwrap(),
        ))
        .await
        .unwrap();
    let merged = hub
        .aggregator
        .ingest_and_read(ConfigMessage::new(
            "provider-b",
            serde_json::from_value(common::fragment_json("shared", "s1", "http://from-b:9000"))
                .unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(merged.backends.len(), 1);
    assert_eq!(
        merged.backends["shared"].servers["s1"].url,
        "http://from-b:9000"
    );
}

#[tokio::test]
async fn not_found_on_every_lookup_route() {
    let hub = common::start_hub().await;
    let client = client();

    for path in [
        "/api/backends/missing",
        "/api/backends/missing/servers",
        "/api/backends/missing/servers/s1",
        "/api/frontends/missing",
    ] {
        let res = client.get(hub.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {}", path);
    }
}

#[tokio::test]
async fn malformed_payload_rejected_without_state_change() {
    let hub = common::start_hub().await;
    let client = client();

    client
        .put(hub.url("/api"))
        .json(&common::fragment_json("b1", "s1", "http://127.0.0.1:9000"))
        .send()
        .await
        .unwrap();
    let before = hub.store.read();

    let res = client
        .put(hub.url("/api"))
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Semantically invalid (bad URL) is rejected too.
    let res = client
        .put(hub.url("/api"))
        .json(&common::fragment_json("b2", "s1", "not a url"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let after = hub.store.read();
    assert_eq!(*before, *after, "rejected writes must not change the view");
}

#[tokio::test]
async fn backend_and_frontend_listing_routes() {
    let hub = common::start_hub().await;
    let client = client();

    let fragment = serde_json::json!({
        "backends": {
            "b1": { "servers": { "s1": { "url": "http://127.0.0.1:9000" } } }
        },
        "frontends": {
            "f1": {
                "backend": "b1",
                "routes": { "r1": { "rule": "Host", "value": "example.com" } }
            }
        }
    });
    client
        .put(hub.url("/api"))
        .json(&fragment)
        .send()
        .await
        .unwrap();

    let backends: serde_json::Value = client
        .get(hub.url("/api/backends"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(backends.get("b1").is_some());

    let frontend: serde_json::Value = client
        .get(hub.url("/api/frontends/f1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(frontend["backend"], "b1");

    let servers: serde_json::Value = client
        .get(hub.url("/api/backends/b1/servers"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(servers.get("s1").is_some());
}

#[tokio::test]
async fn partial_tls_pair_serves_plaintext() {
    use std::sync::Arc;

    use confhub::health::Health;
    use confhub::provider::web::WebProvider;
    use confhub::{Aggregator, ConfigStore};

    let store = Arc::new(ConfigStore::new());
    let health = Arc::new(Health::new());
    let aggregator = Aggregator::spawn(store.clone(), health.clone());

    // Only a certificate, no key: the listener must come up plaintext
    // instead of refusing to start.
    let mut provider = WebProvider::new("127.0.0.1:0");
    provider.cert_file = Some("/etc/confhub/cert.pem".into());

    let addr = provider
        .provide(store, aggregator, health)
        .await
        .expect("incomplete TLS pair must fall back to plaintext");

    let res = client()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_reports_counts() {
    let hub = common::start_hub().await;
    let client = client();

    client
        .put(hub.url("/api"))
        .json(&common::fragment_json("b1", "s1", "http://127.0.0.1:9000"))
        .send()
        .await
        .unwrap();

    let health: serde_json::Value = client
        .get(hub.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health["status"], "operational");
    assert_eq!(health["backends"], 1);
    assert!(health["config_reloads_total"].as_u64().unwrap() >= 1);
}
