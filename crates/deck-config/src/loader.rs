//! Reading configuration documents from disk or memory
//!
//! Format is detected from the file extension:
//! - `.yaml`, `.yml` -> YAML
//! - `.json` -> JSON
//! - `.toml` -> TOML
//!
//! Parsing only produces the raw document; every validation decision is
//! left to [`resolve_document`].

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::assemble::{ConfigResolution, resolve_document};
use crate::{Error, Result};

/// Largest configuration file the loader will read.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("");
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Json => "JSON",
            DocumentFormat::Toml => "TOML",
        }
    }

    /// Parse `content` into a raw document.
    ///
    /// Blank input, and YAML holding nothing but comments, is an empty
    /// document rather than an error.
    pub fn parse(self, content: &str) -> std::result::Result<Value, String> {
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        match self {
            DocumentFormat::Yaml => match serde_yaml::from_str(content) {
                Ok(Value::Null) => Ok(Value::Object(Map::new())),
                Ok(value) => Ok(value),
                Err(e) => Err(e.to_string()),
            },
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Loads configuration documents and resolves them.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    max_size: u64,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            max_size: MAX_CONFIG_SIZE,
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with a custom file size limit in bytes.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Load and resolve the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, exceeds the size limit, has an
    /// unsupported extension or is not well-formed. Schema violations are
    /// not errors: they are returned as diagnostics.
    pub fn load(&self, path: &Path) -> Result<ConfigResolution> {
        let format = DocumentFormat::from_path(path)?;

        let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
        if metadata.len() > self.max_size {
            return Err(Error::ConfigTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: self.max_size,
            });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), format = format.name(), "loading configuration");

        let raw = format.parse(&content).map_err(|message| Error::Parse {
            origin: path.display().to_string(),
            format: format.name(),
            message,
        })?;
        resolve_document(&raw)
    }

    /// Resolve a document held in memory.
    pub fn load_str(&self, content: &str, format: DocumentFormat) -> Result<ConfigResolution> {
        if content.len() as u64 > self.max_size {
            return Err(Error::ConfigTooLarge {
                path: "<memory>".into(),
                size: content.len() as u64,
                max: self.max_size,
            });
        }
        let raw = format.parse(content).map_err(|message| Error::Parse {
            origin: "<memory>".to_string(),
            format: format.name(),
            message,
        })?;
        resolve_document(&raw)
    }
}

/// Load a configuration file with the default loader.
pub fn load_file(path: impl AsRef<Path>) -> Result<ConfigResolution> {
    ConfigLoader::new().load(path.as_ref())
}

/// Resolve an in-memory document with the default loader.
pub fn load_str(content: &str, format: DocumentFormat) -> Result<ConfigResolution> {
    ConfigLoader::new().load_str(content, format)
}
