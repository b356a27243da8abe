//! Slide transition animations

use std::time::Duration;

use deck_schema::{
    EnumSchema, FieldSpec, IntWidth, ObjectSchema, Schema, TaggedUnionSchema,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRANSITION_DURATION_MILLIS: u16 = 1000;
pub const DEFAULT_TRANSITION_FRAMES: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideTransitionConfig {
    #[serde(default = "default_duration_millis")]
    pub duration_millis: u16,

    #[serde(default = "default_frames")]
    pub frames: usize,

    pub animation: SlideTransitionStyleConfig,
}

fn default_duration_millis() -> u16 {
    DEFAULT_TRANSITION_DURATION_MILLIS
}

fn default_frames() -> usize {
    DEFAULT_TRANSITION_FRAMES
}

impl SlideTransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_millis))
    }

    /// Time each frame stays on screen; zero when there are no frames.
    pub fn frame_interval(&self) -> Duration {
        match u32::try_from(self.frames) {
            Ok(frames) if frames > 0 => self.duration() / frames,
            _ => Duration::ZERO,
        }
    }
}

/// Animation variant, tagged by its `style` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum SlideTransitionStyleConfig {
    /// Slide the new slide in horizontally.
    SlideHorizontal,
}

fn animation_schema() -> Schema {
    let style = Schema::Enum(
        EnumSchema::closed("SlideHorizontalStyle").literal("slide_horizontal", ""),
    );
    let slide_horizontal =
        ObjectSchema::new("SlideHorizontal").field("style", FieldSpec::required(style));

    Schema::TaggedUnion(
        TaggedUnionSchema::new("SlideTransitionStyleConfig", "style")
            .member("slide_horizontal", Schema::Object(slide_horizontal)),
    )
}

pub(crate) fn schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("SlideTransitionConfig")
            .field(
                "duration_millis",
                FieldSpec::optional(Schema::uint(IntWidth::U16))
                    .with_default(DEFAULT_TRANSITION_DURATION_MILLIS)
                    .describe("The amount of time to take to perform the transition."),
            )
            .field(
                "frames",
                FieldSpec::optional(Schema::uint(IntWidth::Unbounded))
                    .with_default(DEFAULT_TRANSITION_FRAMES)
                    .describe("The number of frames in a transition."),
            )
            .field(
                "animation",
                FieldSpec::required(animation_schema())
                    .describe("The slide transition style."),
            ),
    )
}
