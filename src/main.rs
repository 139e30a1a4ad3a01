//! confhub: dynamic configuration hub.
//!
//! Starts the aggregator, the optional file provider, and one HTTP(S)
//! listener serving the configuration API.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confhub::aggregator::Aggregator;
use confhub::health::Health;
use confhub::provider::file::FileProvider;
use confhub::provider::web::WebProvider;
use confhub::store::ConfigStore;

#[derive(Parser, Debug)]
#[command(name = "confhub", version, about = "Dynamic configuration hub")]
struct Args {
    /// Bind address for the API listener.
    #[arg(long, default_value = "0.0.0.0:8080")]
    address: String,

    /// TLS certificate file (PEM). Requires --key-file.
    #[arg(long, requires = "key_file")]
    cert_file: Option<PathBuf>,

    /// TLS private key file (PEM). Requires --cert-file.
    #[arg(long, requires = "cert_file")]
    key_file: Option<PathBuf>,

    /// TOML configuration fragment loaded under the "file" provider.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Re-emit the file fragment when the file changes.
    #[arg(long, default_value_t = false)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confhub=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!(address = %args.address, "confhub starting");

    let store = Arc::new(ConfigStore::new());
    let health = Arc::new(Health::new());
    let aggregator = Aggregator::spawn(store.clone(), health.clone());

    // Keep the watcher alive for the lifetime of the process.
    let _watcher = match &args.file {
        Some(path) => FileProvider::new(path.clone(), args.watch).provide(aggregator.clone())?,
        None => None,
    };

    let mut web = WebProvider::new(args.address);
    if let (Some(cert), Some(key)) = (args.cert_file, args.key_file) {
        web = web.with_tls(cert, key);
    }

    let bound = web.provide(store, aggregator, health).await?;
    tracing::info!(address = %bound, "API listening");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    Ok(())
}
