//! File provider: configuration fragments from a TOML file on disk.
//!
//! Emits the fragment once at startup and, when watching is enabled,
//! re-emits it whenever the file changes. A fragment that fails to load or
//! validate is logged and dropped; the previously retained fragment stays in
//! effect.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::aggregator::Aggregator;
use crate::config::schema::Configuration;
use crate::config::validation::validate;
use crate::provider::{ConfigMessage, FILE_PROVIDER};

/// Errors loading a fragment from disk.
#[derive(Debug, Error)]
pub enum FileProviderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Provider that loads its fragment from a TOML file.
pub struct FileProvider {
    path: PathBuf,
    watch: bool,
}

impl FileProvider {
    pub fn new(path: PathBuf, watch: bool) -> Self {
        Self { path, watch }
    }

    /// Load and emit the initial fragment, then optionally start watching.
    ///
    /// The returned watcher must be kept alive for change events to keep
    /// flowing; dropping it stops the watch.
    pub fn provide(&self, aggregator: Aggregator) -> Result<Option<RecommendedWatcher>, FileProviderError> {
        let configuration = load_fragment(&self.path)?;
        tracing::info!(
            path = ?self.path,
            backends = configuration.backends.len(),
            frontends = configuration.frontends.len(),
            "File provider loaded"
        );
        aggregator.ingest(ConfigMessage::new(FILE_PROVIDER, configuration));

        if !self.watch {
            return Ok(None);
        }

        let path = self.path.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_fragment(&path) {
                            Ok(configuration) => {
                                aggregator
                                    .ingest(ConfigMessage::new(FILE_PROVIDER, configuration));
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload config: {}. Keeping current fragment.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;
        tracing::info!(path = ?self.path, "File provider watcher started");
        Ok(Some(watcher))
    }
}

fn load_fragment(path: &Path) -> Result<Configuration, FileProviderError> {
    let content = std::fs::read_to_string(path)?;
    let configuration: Configuration = toml::from_str(&content)?;

    validate(&configuration).map_err(|errors| {
        FileProviderError::Validation(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    })?;

    Ok(configuration)
}
