//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use confhub::aggregator::Aggregator;
use confhub::health::Health;
use confhub::provider::web::WebProvider;
use confhub::store::ConfigStore;

/// A running hub instance bound to an ephemeral port.
pub struct TestHub {
    pub addr: SocketAddr,
    pub store: Arc<ConfigStore>,
    pub aggregator: Aggregator,
}

impl TestHub {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a full hub (store, aggregator, web provider) on 127.0.0.1:0.
pub async fn start_hub() -> TestHub {
    let store = Arc::new(ConfigStore::new());
    let health = Arc::new(Health::new());
    let aggregator = Aggregator::spawn(store.clone(), health.clone());

    let addr = WebProvider::new("127.0.0.1:0")
        .provide(store.clone(), aggregator.clone(), health)
        .await
        .expect("web provider failed to bind");

    TestHub {
        addr,
        store,
        aggregator,
    }
}

/// A minimal valid fragment with one backend/server pair.
pub fn fragment_json(backend: &str, server: &str, url: &str) -> serde_json::Value {
    serde_json::json!({
        "backends": {
            backend: {
                "servers": {
                    server: { "url": url, "weight": 1 }
                }
            }
        }
    })
}
