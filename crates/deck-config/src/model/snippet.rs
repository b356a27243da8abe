//! Code snippet execution and rendering

use std::collections::BTreeMap;

use deck_schema::{FieldSpec, IntWidth, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::language::SnippetLanguage;

pub const DEFAULT_RENDER_THREADS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    pub exec: SnippetExecConfig,
    pub exec_replace: SnippetExecReplaceConfig,
    pub render: SnippetRenderConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetExecConfig {
    pub enable: bool,
    /// User-defined executors, keyed by language.
    pub custom: BTreeMap<SnippetLanguage, LanguageSnippetExecutionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetExecReplaceConfig {
    pub enable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetRenderConfig {
    pub threads: usize,
}

impl Default for SnippetRenderConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_RENDER_THREADS,
        }
    }
}

/// How to run snippets written in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSnippetExecutionConfig {
    /// Name of the file the snippet is written to before running.
    pub filename: String,

    #[serde(default)]
    pub environment: BTreeMap<String, String>,

    /// Lines starting with this prefix run but are not displayed.
    #[serde(default)]
    pub hidden_line_prefix: Option<String>,

    /// Commands run in order; each is a program followed by its arguments.
    pub commands: Vec<Vec<String>>,
}

impl SnippetExecConfig {
    pub fn executor(&self, language: &SnippetLanguage) -> Option<&LanguageSnippetExecutionConfig> {
        self.custom.get(language)
    }
}

fn execution_schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("LanguageSnippetExecutionConfig")
            .field(
                "filename",
                FieldSpec::required(Schema::string())
                    .describe("The filename to use for the snippet input file."),
            )
            .field(
                "environment",
                FieldSpec::optional(Schema::map_of(Schema::string()))
                    .with_default(json!({}))
                    .describe("The environment variables to set before invoking every command."),
            )
            .field(
                "hidden_line_prefix",
                FieldSpec::optional(Schema::nullable(Schema::string()))
                    .describe("The prefix to use to hide lines visually but still execute them."),
            )
            .field(
                "commands",
                FieldSpec::required(Schema::array_of(Schema::array_of(Schema::string())))
                    .describe("The commands to be run when executing snippets for this programming language."),
            ),
    )
}

pub(crate) fn schema() -> Schema {
    let exec = ObjectSchema::new("SnippetExecConfig")
        .field(
            "enable",
            FieldSpec::optional(Schema::boolean())
                .with_default(false)
                .describe("Whether to enable snippet execution."),
        )
        .field(
            "custom",
            FieldSpec::optional(Schema::map_of(execution_schema()))
                .with_default(json!({}))
                .describe("Custom snippet executors."),
        );

    let exec_replace = ObjectSchema::new("SnippetExecReplaceConfig").field(
        "enable",
        FieldSpec::optional(Schema::boolean())
            .with_default(false)
            .describe("Whether to enable snippet replacement."),
    );

    let render = ObjectSchema::new("SnippetRenderConfig").field(
        "threads",
        FieldSpec::optional(Schema::uint(IntWidth::Unbounded))
            .with_default(DEFAULT_RENDER_THREADS)
            .describe("The number of threads to use when rendering."),
    );

    Schema::Object(
        ObjectSchema::new("SnippetConfig")
            .field(
                "exec",
                FieldSpec::optional(Schema::Object(exec))
                    .with_default(json!({}))
                    .describe("The properties for snippet execution."),
            )
            .field(
                "exec_replace",
                FieldSpec::optional(Schema::Object(exec_replace))
                    .with_default(json!({}))
                    .describe("The properties for snippet execution replacement."),
            )
            .field(
                "render",
                FieldSpec::optional(Schema::Object(render))
                    .with_default(json!({}))
                    .describe("The properties for snippet auto rendering."),
            ),
    )
}
