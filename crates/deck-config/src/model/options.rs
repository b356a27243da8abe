//! Parsing and rendering options
//!
//! Every option is tri-state: `None` means the user expressed no preference
//! and the presentation (or its front matter) decides.

use deck_schema::{FieldSpec, IntWidth, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::language::SnippetLanguage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    pub implicit_slide_ends: Option<bool>,
    pub command_prefix: Option<String>,
    pub image_attributes_prefix: Option<String>,
    pub incremental_lists: Option<bool>,
    pub strict_front_matter_parsing: Option<bool>,
    pub end_slide_shorthand: Option<bool>,
    pub auto_render_languages: Vec<SnippetLanguage>,
    pub list_item_newlines: Option<u8>,
    pub h1_slide_titles: Option<bool>,
}

impl OptionsConfig {
    /// Whether snippets in `language` render without an explicit `+render`.
    pub fn auto_renders(&self, language: &SnippetLanguage) -> bool {
        self.auto_render_languages.contains(language)
    }
}

fn flag(description: &'static str) -> FieldSpec {
    FieldSpec::optional(Schema::nullable(Schema::boolean())).describe(description)
}

pub(crate) fn schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("OptionsConfig")
            .field(
                "implicit_slide_ends",
                flag("Whether slides are automatically terminated when a slide title is found."),
            )
            .field(
                "command_prefix",
                FieldSpec::optional(Schema::nullable(Schema::string()))
                    .describe("The prefix to use for commands."),
            )
            .field(
                "image_attributes_prefix",
                FieldSpec::optional(Schema::nullable(Schema::string()))
                    .describe("The prefix to use for image attributes."),
            )
            .field(
                "incremental_lists",
                flag("Show all lists incrementally, by implicitly adding pauses in between elements."),
            )
            .field(
                "strict_front_matter_parsing",
                flag("Whether to treat a front matter with unknown keys as an error."),
            )
            .field(
                "end_slide_shorthand",
                flag("Whether to allow the `---` shorthand to end slides."),
            )
            .field(
                "auto_render_languages",
                FieldSpec::optional(Schema::array_of(SnippetLanguage::schema()))
                    .with_default(json!([]))
                    .describe("Assume snippets for these languages contain `+render` and render them automatically."),
            )
            .field(
                "list_item_newlines",
                FieldSpec::optional(Schema::nullable(Schema::uint(IntWidth::U8)))
                    .describe("The number of newlines in between list items."),
            )
            .field(
                "h1_slide_titles",
                flag("Whether to treat h1 headers as slide titles."),
            ),
    )
}
