//! Shared handle to the active configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::QueryKey;
use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Adjustments layered over every freshly read file, e.g. command-line flags.
type Overrides = Arc<dyn Fn(Config) -> Result<Config, ConfigError> + Send + Sync>;

/// Cloneable handle to the running config and the file it was read from.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: Option<Overrides>,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides: None,
        }
    }

    /// Re-apply `overrides` to the file contents on every reload.
    pub fn with_overrides<F>(mut self, overrides: F) -> Self
    where
        F: Fn(Config) -> Result<Config, ConfigError> + Send + Sync + 'static,
    {
        self.overrides = Some(Arc::new(overrides));
        self
    }

    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-read the config file and make it active.
    ///
    /// Returns the listing query of the new config. On any error the
    /// previous config stays in place.
    pub fn reload(&self) -> Result<QueryKey, ConfigError> {
        let mut config = Config::load_from(&self.path)?;
        if let Some(apply) = &self.overrides {
            config = apply(config)?;
        }
        let key = config.query_key()?;
        *self.inner.write() = config;
        Ok(key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
