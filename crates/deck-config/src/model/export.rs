//! Presentation export settings

use deck_schema::{FieldSpec, IntWidth, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Fixed terminal size to export with, instead of the current one.
    pub dimensions: Option<ExportDimensionsConfig>,
}

/// Both members are required: a half-specified size is discarded whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportDimensionsConfig {
    pub rows: u16,
    pub columns: u16,
}

pub(crate) fn schema() -> Schema {
    let dimensions = ObjectSchema::new("ExportDimensionsConfig")
        .field(
            "rows",
            FieldSpec::required(Schema::uint(IntWidth::U16)).describe("The number of rows."),
        )
        .field(
            "columns",
            FieldSpec::required(Schema::uint(IntWidth::U16)).describe("The number of columns."),
        );

    Schema::Object(
        ObjectSchema::new("ExportConfig").field(
            "dimensions",
            FieldSpec::optional(Schema::nullable(Schema::Object(dimensions)))
                .describe("The dimensions to use for presentation exports."),
        ),
    )
}
