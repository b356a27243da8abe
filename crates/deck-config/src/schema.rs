//! The configuration schema tree
//!
//! One process-wide, immutable tree describes every section. It is built on
//! first use and shared by the resolver, the JSON Schema export and the CLI.

use std::sync::LazyLock;

use deck_schema::{FieldSpec, ObjectSchema, Schema};
use serde_json::{Value, json};

use crate::model::{
    bindings, defaults, export, options, renderers, snippet, speaker_notes, transition,
};

/// Draft the exported JSON Schema declares itself against.
pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

static CONFIG_SCHEMA: LazyLock<Schema> = LazyLock::new(build);

/// The root schema describing a whole configuration document.
pub fn config_schema() -> &'static Schema {
    &CONFIG_SCHEMA
}

/// The root schema rendered as a standalone JSON Schema document.
pub fn json_schema() -> Value {
    let mut rendered = CONFIG_SCHEMA.to_json_schema();
    if let Value::Object(map) = &mut rendered {
        map.insert("$schema".to_string(), json!(JSON_SCHEMA_DRAFT));
        map.insert("title".to_string(), json!("Config"));
    }
    rendered
}

fn section(schema: Schema, description: &'static str) -> FieldSpec {
    FieldSpec::optional(schema)
        .with_default(json!({}))
        .describe(description)
}

fn build() -> Schema {
    Schema::Object(
        ObjectSchema::new("Config")
            .field(
                "bindings",
                section(bindings::schema(), "The key bindings."),
            )
            .field(
                "defaults",
                section(defaults::schema(), "The default configuration for the presentation."),
            )
            .field(
                "export",
                section(export::schema(), "The configuration for presentation exports."),
            )
            .field(
                "mermaid",
                section(renderers::mermaid_schema(), "The configuration for mermaid diagrams."),
            )
            .field(
                "options",
                section(options::schema(), "The presentation options."),
            )
            .field(
                "snippet",
                section(snippet::schema(), "The configuration for code snippets."),
            )
            .field(
                "speaker_notes",
                section(speaker_notes::schema(), "The configuration for speaker notes."),
            )
            .field(
                "transition",
                FieldSpec::optional(Schema::nullable(transition::schema()))
                    .describe("The configuration for slide transitions."),
            )
            .field(
                "typst",
                section(renderers::typst_schema(), "The configuration for typst formulas."),
            ),
    )
}
