//! Error types for deck-config

use std::path::PathBuf;

/// Result type for deck-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a configuration.
///
/// Validation problems inside a well-formed document are not errors: they
/// are reported as diagnostics next to a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config from {origin}: {message}")]
    Parse {
        origin: String,
        format: &'static str,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Config file too large: {path} is {size} bytes (max {max})")]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },

    /// The resolved tree did not fit the typed model.
    #[error("Resolved configuration does not match the typed model: {0}")]
    Materialize(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
