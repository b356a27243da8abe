//! Root configuration assembly
//!
//! Resolves a raw document against [`config_schema`] and materializes the
//! typed [`Config`]. A document that cannot be used at all still yields the
//! default configuration, with the reason in the diagnostics.

use deck_schema::{Diagnostics, Fields, Resolution, Resolved};
use serde_json::{Map, Value};

use crate::Result;
use crate::language::SnippetLanguage;
use crate::model::{Config, MaxColumnsAlignment, MaxRowsAlignment};
use crate::schema::config_schema;

/// Outcome of resolving one configuration document.
#[derive(Debug, Clone)]
pub struct ConfigResolution {
    pub config: Config,
    /// The resolved tree `config` was materialized from.
    pub resolved: Resolved,
    pub diagnostics: Diagnostics,
}

impl ConfigResolution {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Resolve a raw document into a typed configuration.
///
/// Validation problems never make this fail; they are collected in
/// [`ConfigResolution::diagnostics`]. An error means the resolved tree
/// could not be materialized into [`Config`].
pub fn resolve_document(raw: &Value) -> Result<ConfigResolution> {
    let Resolution {
        value,
        mut diagnostics,
    } = deck_schema::resolve(config_schema(), raw);

    let resolved = match value {
        Some(resolved) => resolved,
        None => {
            tracing::debug!("configuration root is unusable, falling back to defaults");
            let defaults = deck_schema::resolve(config_schema(), &Value::Object(Map::new()));
            diagnostics.extend(defaults.diagnostics);
            defaults.value.unwrap_or(Resolved::Object(Fields::new()))
        }
    };

    let config: Config = serde_json::from_value(resolved.to_value())?;
    note_inert_settings(&config);

    tracing::debug!(
        diagnostics = diagnostics.len(),
        "resolved configuration document"
    );
    Ok(ConfigResolution {
        config,
        resolved,
        diagnostics,
    })
}

/// Settings that are valid but have no effect.
fn note_inert_settings(config: &Config) {
    let defaults = &config.defaults;
    if defaults.column_limit().is_none()
        && defaults.max_columns_alignment != MaxColumnsAlignment::default()
    {
        tracing::debug!(
            alignment = ?defaults.max_columns_alignment,
            "max_columns_alignment has no effect without a max_columns cap"
        );
    }
    if defaults.row_limit().is_none() && defaults.max_rows_alignment != MaxRowsAlignment::default() {
        tracing::debug!(
            alignment = ?defaults.max_rows_alignment,
            "max_rows_alignment has no effect without a max_rows cap"
        );
    }

    for language in config.snippet.exec.custom.keys() {
        if let SnippetLanguage::Unknown(name) = language {
            tracing::debug!(language = name.as_str(), "custom executor for an unrecognized language");
        }
    }
}
