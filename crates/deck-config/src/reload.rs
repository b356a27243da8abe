//! Atomically swappable configuration for hot reload
//!
//! Readers take a snapshot with [`ConfigHandle::current`] and keep using it
//! for as long as they like; a reload publishes a whole new [`Config`] and
//! never mutates one in place.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use deck_schema::Diagnostics;
use serde_json::Value;

use crate::Result;
use crate::assemble::{ConfigResolution, resolve_document};
use crate::loader::ConfigLoader;
use crate::model::Config;

/// Shared handle to the active configuration.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<ArcSwap<Config>>,
}

impl ConfigHandle {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the configuration as it is right now.
    pub fn current(&self) -> Arc<Config> {
        self.inner.load_full()
    }

    /// Publish `config`, returning the one it replaced.
    pub fn replace(&self, config: Config) -> Arc<Config> {
        self.inner.swap(Arc::new(config))
    }

    /// Resolve `raw` and publish the result.
    pub fn reload(&self, raw: &Value) -> Result<Diagnostics> {
        Ok(self.publish(resolve_document(raw)?))
    }

    /// Reload from `path` and publish the result.
    ///
    /// On error the active configuration is left untouched. Diagnostics do
    /// not prevent the swap: the resolved configuration is always usable.
    pub fn reload_file(&self, path: &Path) -> Result<Diagnostics> {
        self.reload_with(&ConfigLoader::new(), path)
    }

    pub fn reload_with(&self, loader: &ConfigLoader, path: &Path) -> Result<Diagnostics> {
        let resolution = loader.load(path)?;
        tracing::debug!(path = %path.display(), "reloading configuration");
        Ok(self.publish(resolution))
    }

    fn publish(&self, resolution: ConfigResolution) -> Diagnostics {
        tracing::debug!(
            diagnostics = resolution.diagnostics.len(),
            "publishing configuration"
        );
        self.replace(resolution.config);
        resolution.diagnostics
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
