//! Presentation-wide defaults

use deck_schema::{FieldSpec, IntWidth, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::SchemaEnum;

pub const DEFAULT_TERMINAL_FONT_SIZE: u8 = 16;

/// `max_columns` / `max_rows` value meaning "no cap".
pub const UNCAPPED: u16 = u16::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Theme name, or `None` to use the built in default theme.
    pub theme: Option<String>,
    pub terminal_font_size: u8,
    pub image_protocol: ImageProtocol,
    pub validate_overflows: ValidateOverflows,
    pub max_columns: u16,
    pub max_columns_alignment: MaxColumnsAlignment,
    pub max_rows: u16,
    pub max_rows_alignment: MaxRowsAlignment,
    pub incremental_lists: IncrementalListsConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            theme: None,
            terminal_font_size: DEFAULT_TERMINAL_FONT_SIZE,
            image_protocol: ImageProtocol::default(),
            validate_overflows: ValidateOverflows::default(),
            max_columns: UNCAPPED,
            max_columns_alignment: MaxColumnsAlignment::default(),
            max_rows: UNCAPPED,
            max_rows_alignment: MaxRowsAlignment::default(),
            incremental_lists: IncrementalListsConfig::default(),
        }
    }
}

impl DefaultsConfig {
    /// Effective column cap and its alignment, or `None` when uncapped.
    pub fn column_limit(&self) -> Option<(u16, MaxColumnsAlignment)> {
        cap(self.max_columns).map(|columns| (columns, self.max_columns_alignment))
    }

    /// Effective row cap and its alignment, or `None` when uncapped.
    pub fn row_limit(&self) -> Option<(u16, MaxRowsAlignment)> {
        cap(self.max_rows).map(|rows| (rows, self.max_rows_alignment))
    }
}

// Zero is treated like the sentinel: a zero-sized presentation is never wanted.
fn cap(value: u16) -> Option<u16> {
    (value != 0 && value != UNCAPPED).then_some(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageProtocol {
    #[default]
    Auto,
    Iterm2,
    Iterm2Multipart,
    KittyLocal,
    KittyRemote,
    Sixel,
    Ascii,
}

impl SchemaEnum for ImageProtocol {
    const NAME: &'static str = "ImageProtocol";
    const VARIANTS: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Auto, "auto", "Automatically detect the best image protocol to use."),
        (Self::Iterm2, "iterm2", "Use the iTerm2 image protocol."),
        (
            Self::Iterm2Multipart,
            "iterm2-multipart",
            "Use the iTerm2 image protocol in multipart mode.",
        ),
        (
            Self::KittyLocal,
            "kitty-local",
            "Use the kitty protocol in \"local\" mode, meaning both the terminal and the application run on the same host.",
        ),
        (
            Self::KittyRemote,
            "kitty-remote",
            "Use the kitty protocol in \"remote\" mode, meaning the terminal and the application run on different hosts.",
        ),
        (Self::Sixel, "sixel", "Use the sixel protocol."),
        (Self::Ascii, "ascii", "Use ascii blocks."),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidateOverflows {
    #[default]
    Never,
    Always,
    WhenPresenting,
    WhenDeveloping,
}

impl SchemaEnum for ValidateOverflows {
    const NAME: &'static str = "ValidateOverflows";
    const VARIANTS: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Never, "never", "Never validate overflows."),
        (Self::Always, "always", "Always validate overflows."),
        (
            Self::WhenPresenting,
            "when_presenting",
            "Validate overflows only when presenting.",
        ),
        (
            Self::WhenDeveloping,
            "when_developing",
            "Validate overflows only when developing a presentation.",
        ),
    ];
}

impl ValidateOverflows {
    /// Whether overflows are validated in the given mode.
    pub fn applies(self, presenting: bool) -> bool {
        match self {
            ValidateOverflows::Never => false,
            ValidateOverflows::Always => true,
            ValidateOverflows::WhenPresenting => presenting,
            ValidateOverflows::WhenDeveloping => !presenting,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxColumnsAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl SchemaEnum for MaxColumnsAlignment {
    const NAME: &'static str = "MaxColumnsAlignment";
    const VARIANTS: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Left, "left", "Align the presentation to the left."),
        (Self::Center, "center", "Center the presentation."),
        (Self::Right, "right", "Align the presentation to the right."),
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxRowsAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl SchemaEnum for MaxRowsAlignment {
    const NAME: &'static str = "MaxRowsAlignment";
    const VARIANTS: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Top, "top", "Align the presentation to the top."),
        (Self::Center, "center", "Center the presentation."),
        (Self::Bottom, "bottom", "Align the presentation to the bottom."),
    ];
}

/// Pause behavior around lists shown incrementally.
///
/// `None` leaves the decision to the presentation renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncrementalListsConfig {
    pub pause_before: Option<bool>,
    pub pause_after: Option<bool>,
}

fn incremental_lists_schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("IncrementalListsConfig")
            .field(
                "pause_before",
                FieldSpec::optional(Schema::nullable(Schema::boolean()))
                    .describe("Whether to pause before a list begins."),
            )
            .field(
                "pause_after",
                FieldSpec::optional(Schema::nullable(Schema::boolean()))
                    .describe("Whether to pause after a list ends."),
            ),
    )
}

pub(crate) fn schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("DefaultsConfig")
            .field(
                "theme",
                FieldSpec::optional(Schema::nullable(Schema::string()))
                    .describe("The theme to use by default in every presentation unless overridden."),
            )
            .field(
                "terminal_font_size",
                FieldSpec::optional(Schema::uint(IntWidth::U8))
                    .with_default(DEFAULT_TERMINAL_FONT_SIZE)
                    .describe("Override the terminal font size when in windows or when using sixel."),
            )
            .field(
                "image_protocol",
                ImageProtocol::field().describe("The image protocol to use."),
            )
            .field(
                "validate_overflows",
                ValidateOverflows::field().describe(
                    "Validate that the presentation does not overflow the terminal screen.",
                ),
            )
            .field(
                "max_columns",
                FieldSpec::optional(Schema::uint(IntWidth::U16))
                    .with_default(UNCAPPED)
                    .describe("A max width in columns that the presentation must always be capped to."),
            )
            .field(
                "max_columns_alignment",
                MaxColumnsAlignment::field().describe(
                    "The alignment the presentation should have if `max_columns` is set and the terminal is larger than that.",
                ),
            )
            .field(
                "max_rows",
                FieldSpec::optional(Schema::uint(IntWidth::U16))
                    .with_default(UNCAPPED)
                    .describe("A max height in rows that the presentation must always be capped to."),
            )
            .field(
                "max_rows_alignment",
                MaxRowsAlignment::field().describe(
                    "The alignment the presentation should have if `max_rows` is set and the terminal is larger than that.",
                ),
            )
            .field(
                "incremental_lists",
                FieldSpec::optional(incremental_lists_schema())
                    .with_default(json!({}))
                    .describe("The configuration for lists when incremental lists are enabled."),
            ),
    )
}
