//! Fan-in of provider fragments into the merged configuration.
//!
//! # Responsibilities
//! - Accept messages from any number of producers without blocking them
//! - Drain the queue with exactly one task, preserving arrival order
//! - Retain the latest fragment per provider and re-merge after each message
//! - Publish every merged result to the store as one atomic replace
//!
//! # Design Decisions
//! - Unbounded mpsc channel with a single spawned drain task enforces the
//!   single-consumer property; producers only ever enqueue
//! - The aggregator assumes fragments are already validated at the ingress
//!   boundary; a malformed message here is a caller bug, not a runtime error
//! - `ingest_and_read` pairs the message with a oneshot ack so the write
//!   facade can return the snapshot that includes its own fragment; the
//!   message type itself stays a plain (provider, fragment) pair

pub mod merge;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::config::schema::Configuration;
use crate::health::Health;
use crate::provider::ConfigMessage;
use crate::store::ConfigStore;
use merge::{merge, RetainedFragment};

/// Queue item: the message plus an optional ack for callers that want the
/// post-merge snapshot back.
struct Envelope {
    msg: ConfigMessage,
    ack: Option<oneshot::Sender<Arc<Configuration>>>,
}

/// Cloneable producer handle to the aggregator queue.
#[derive(Clone)]
pub struct Aggregator {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl Aggregator {
    /// Spawn the drain task and return the producer handle.
    ///
    /// The drain task is the only writer to `store` and runs until every
    /// handle is dropped.
    pub fn spawn(store: Arc<ConfigStore>, health: Arc<Health>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(drain(rx, store, health));
        Self { tx }
    }

    /// Enqueue a message, fire-and-forget.
    ///
    /// Never blocks; if the drain task is gone the process is shutting down
    /// and the message is dropped.
    pub fn ingest(&self, msg: ConfigMessage) {
        let _ = self.tx.send(Envelope { msg, ack: None });
    }

    /// Enqueue a message and wait until it has been merged, returning the
    /// snapshot that includes it.
    ///
    /// `None` means the drain task is gone, which only happens during
    /// process shutdown; callers must not report the merge as applied.
    pub async fn ingest_and_read(&self, msg: ConfigMessage) -> Option<Arc<Configuration>> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                msg,
                ack: Some(ack_tx),
            })
            .ok()?;
        ack_rx.await.ok()
    }
}

/// The single consumer: processes messages strictly in arrival order.
async fn drain(
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    store: Arc<ConfigStore>,
    health: Arc<Health>,
) {
    let mut fragments: HashMap<String, RetainedFragment> = HashMap::new();
    let mut next_sequence: u64 = 0;

    while let Some(Envelope { msg, ack }) = rx.recv().await {
        next_sequence += 1;
        tracing::info!(
            provider = %msg.provider_name,
            backends = msg.configuration.backends.len(),
            frontends = msg.configuration.frontends.len(),
            "Configuration fragment received"
        );

        fragments.insert(
            msg.provider_name,
            RetainedFragment {
                sequence: next_sequence,
                configuration: msg.configuration,
            },
        );

        let merged = merge(fragments.values());
        let snapshot = Arc::new(merged);
        store.replace_arc(snapshot.clone());
        health.record_reload();
        health.set_providers_seen(fragments.len());

        if let Some(ack) = ack {
            let _ = ack.send(snapshot);
        }
    }

    tracing::debug!("Aggregator drain task stopped");
}
