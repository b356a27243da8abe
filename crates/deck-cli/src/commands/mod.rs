//! Command implementations for deck-cli

pub mod check;
pub mod defaults;
pub mod schema;
pub mod show;

use std::path::{Path, PathBuf};

use deck_config::{ConfigResolution, load_file, resolve_document};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::error::Result;

pub use check::run_check;
pub use defaults::run_defaults;
pub use schema::run_schema;
pub use show::run_show;

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named with `--config` or `DECK_CONFIG_FILE`; must exist.
    Explicit(PathBuf),
    /// The per-user default location.
    Discovered(PathBuf),
    /// Nothing to load; built-in defaults apply.
    Builtin,
}

impl ConfigSource {
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }
        match default_config_path() {
            Some(path) if path.is_file() => ConfigSource::Discovered(path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no configuration file found");
                ConfigSource::Builtin
            }
            None => ConfigSource::Builtin,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Builtin => None,
        }
    }

    pub fn describe(&self) -> String {
        match self.path() {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }

    pub fn load(&self) -> Result<ConfigResolution> {
        let resolution = match self.path() {
            Some(path) => load_file(path)?,
            None => resolve_document(&Value::Object(Map::new()))?,
        };
        Ok(resolution)
    }
}

/// `<config dir>/deck/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deck").join("config.yaml"))
}

pub(crate) fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}
