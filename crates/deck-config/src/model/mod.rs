//! Typed configuration model
//!
//! Every section here is materialized from a resolved tree, so by the time
//! a [`Config`] exists all of its values have been validated and defaulted.
//! `Config::default()` is the configuration an empty document resolves to.

pub mod bindings;
pub mod defaults;
pub mod export;
pub mod options;
pub mod renderers;
pub mod snippet;
pub mod speaker_notes;
pub mod transition;

use deck_schema::{EnumSchema, FieldSpec, Schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use bindings::KeyBindingsConfig;
pub use defaults::{
    DefaultsConfig, ImageProtocol, IncrementalListsConfig, MaxColumnsAlignment,
    MaxRowsAlignment, ValidateOverflows,
};
pub use export::{ExportConfig, ExportDimensionsConfig};
pub use options::OptionsConfig;
pub use renderers::{MermaidConfig, TypstConfig};
pub use snippet::{
    LanguageSnippetExecutionConfig, SnippetConfig, SnippetExecConfig, SnippetExecReplaceConfig,
    SnippetRenderConfig,
};
pub use speaker_notes::SpeakerNotesConfig;
pub use transition::{SlideTransitionConfig, SlideTransitionStyleConfig};

/// The fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bindings: KeyBindingsConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub mermaid: MermaidConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub snippet: SnippetConfig,

    #[serde(default)]
    pub speaker_notes: SpeakerNotesConfig,

    /// Absent and explicit `null` are kept apart; both mean no transition.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub transition: Presence<SlideTransitionConfig>,

    #[serde(default)]
    pub typst: TypstConfig,
}

impl Config {
    /// The transition to animate slide changes with, if any.
    pub fn slide_transition(&self) -> Option<&SlideTransitionConfig> {
        self.transition.as_option()
    }
}

/// A field that distinguishes "never written" from an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Presence::Null)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Presence::Value(value) => Some(value),
            Presence::Absent | Presence::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Value(value) => Some(value),
            Presence::Absent | Presence::Null => None,
        }
    }
}

// Absent fields never reach the serializer: containers skip them.
impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Presence::Value(value) => serializer.serialize_some(value),
            Presence::Absent | Presence::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Presence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Presence::Value(value),
            None => Presence::Null,
        })
    }
}

/// A closed string enumeration with a schema counterpart.
///
/// `VARIANTS` is the single source for literals and descriptions, so the
/// schema literal and the serde spelling of each variant can be checked
/// against each other.
pub trait SchemaEnum: Copy + Default + PartialEq + Sized + 'static {
    const NAME: &'static str;

    /// `(variant, literal, description)` in declaration order.
    const VARIANTS: &'static [(Self, &'static str, &'static str)];

    fn literal(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, literal, _)| *literal)
            .unwrap_or_default()
    }

    fn schema() -> Schema {
        let schema = Self::VARIANTS
            .iter()
            .fold(EnumSchema::closed(Self::NAME), |schema, (_, literal, description)| {
                schema.literal(literal, description)
            });
        Schema::Enum(schema)
    }

    /// Optional field defaulting to `Self::default()`.
    fn field() -> FieldSpec {
        FieldSpec::optional(Self::schema()).with_default(Self::default().literal())
    }
}
