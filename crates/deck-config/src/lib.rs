//! Configuration for the deck terminal presentation tool
//!
//! This crate owns the configuration schema and its typed counterpart:
//!
//! - [`model`]: typed sections ([`Config`] and friends) with their defaults
//! - [`schema`]: the schema tree those sections are resolved against
//! - [`resolve_document`]: raw document to [`Config`] plus diagnostics
//! - [`ConfigLoader`]: reads YAML, JSON or TOML files
//! - [`ConfigHandle`]: atomically swappable configuration for hot reload
//!
//! # Example
//!
//! ```
//! use deck_config::{DocumentFormat, load_str};
//!
//! let resolution = load_str(
//!     "defaults:\n  max_columns: 100\n  image_protocol: sixel\nmermaid:\n  scale: 0.5\n",
//!     DocumentFormat::Yaml,
//! )
//! .unwrap();
//!
//! assert_eq!(resolution.config.defaults.max_columns, 100);
//! // The bad scale is reported and replaced by its default.
//! assert_eq!(resolution.diagnostics.len(), 1);
//! assert_eq!(resolution.config.mermaid.scale, 2);
//! ```

pub mod assemble;
pub mod error;
pub mod language;
pub mod loader;
pub mod model;
pub mod reload;
pub mod schema;

pub use assemble::{ConfigResolution, resolve_document};
pub use error::{Error, Result};
pub use language::SnippetLanguage;
pub use loader::{ConfigLoader, DocumentFormat, MAX_CONFIG_SIZE, load_file, load_str};
pub use model::{Config, Presence, SchemaEnum};
pub use reload::ConfigHandle;
pub use schema::{config_schema, json_schema};

pub use deck_schema::{Diagnostic, Diagnostics, ErrorKind};
