//! External diagram and formula renderers

use deck_schema::{FieldSpec, IntWidth, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MERMAID_SCALE: u32 = 2;
pub const DEFAULT_TYPST_PPI: u32 = 300;

/// Settings for rendering mermaid diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MermaidConfig {
    pub scale: u32,
}

impl Default for MermaidConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_MERMAID_SCALE,
        }
    }
}

/// Settings for rendering typst and latex formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypstConfig {
    pub ppi: u32,
}

impl Default for TypstConfig {
    fn default() -> Self {
        Self {
            ppi: DEFAULT_TYPST_PPI,
        }
    }
}

pub(crate) fn mermaid_schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("MermaidConfig").field(
            "scale",
            FieldSpec::optional(Schema::uint(IntWidth::U32))
                .with_default(DEFAULT_MERMAID_SCALE)
                .describe("The scaling parameter to be used in the mermaid CLI."),
        ),
    )
}

pub(crate) fn typst_schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("TypstConfig").field(
            "ppi",
            FieldSpec::optional(Schema::uint(IntWidth::U32))
                .with_default(DEFAULT_TYPST_PPI)
                .describe("The pixels per inch when rendering latex/typst formulas."),
        ),
    )
}
