//! End-to-end resolution of a small, realistic schema

use deck_schema::{
    EnumSchema, EnumValue, ErrorKind, FieldSpec, Fields, Finding, IntWidth, ObjectSchema,
    Resolved, Schema, TaggedUnionSchema, Unset, resolve,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn language() -> Schema {
    Schema::Enum(
        EnumSchema::open("Language")
            .literal("rust", "Rust")
            .literal("python", "Python"),
    )
}

fn executor() -> Schema {
    Schema::Object(
        ObjectSchema::new("Executor")
            .field("filename", FieldSpec::required(Schema::string()))
            .field(
                "environment",
                FieldSpec::optional(Schema::map_of(Schema::string())).with_default(json!({})),
            )
            .field(
                "commands",
                FieldSpec::required(Schema::array_of(Schema::array_of(Schema::string()))),
            ),
    )
}

fn animation() -> Schema {
    Schema::TaggedUnion(TaggedUnionSchema::new("Animation", "style").member(
        "slide_horizontal",
        Schema::Object(ObjectSchema::new("SlideHorizontal").field(
            "style",
            FieldSpec::required(Schema::Enum(
                EnumSchema::closed("SlideHorizontalStyle").literal("slide_horizontal", ""),
            )),
        )),
    ))
}

fn positive_frames(fields: &Fields) -> Vec<Finding> {
    match fields.get("frames").and_then(Resolved::as_u64) {
        Some(0) => vec![Finding::new("frames", "frames must be greater than zero")],
        _ => Vec::new(),
    }
}

fn root() -> Schema {
    let transition = ObjectSchema::new("Transition")
        .field(
            "duration_millis",
            FieldSpec::optional(Schema::uint(IntWidth::U16)).with_default(1000),
        )
        .field(
            "frames",
            FieldSpec::optional(Schema::uint(IntWidth::Unbounded)).with_default(30),
        )
        .field("animation", FieldSpec::required(animation()))
        .check(positive_frames);

    Schema::Object(
        ObjectSchema::new("Root")
            .field(
                "custom",
                FieldSpec::optional(Schema::map_of(executor())).with_default(json!({})),
            )
            .field(
                "auto_render",
                FieldSpec::optional(Schema::array_of(language())).with_default(json!([])),
            )
            .field(
                "transition",
                FieldSpec::optional(Schema::nullable(Schema::Object(transition))),
            ),
    )
}

fn resolved(document: Value) -> Resolved {
    let resolution = resolve(&root(), &document);
    assert!(resolution.is_clean(), "{}", resolution.diagnostics);
    resolution.value.unwrap()
}

#[test]
fn test_custom_executor_gets_default_environment() {
    let value = resolved(json!({
        "custom": { "mylang": { "filename": "x", "commands": [["run"]] } }
    }));

    assert_eq!(
        value.lookup("custom.mylang.environment"),
        Some(&Resolved::Map(Default::default()))
    );
    assert_eq!(
        value.lookup("custom.mylang.filename").and_then(Resolved::as_str),
        Some("x")
    );
    assert_eq!(
        value.lookup("custom.mylang").unwrap().to_value(),
        json!({ "filename": "x", "environment": {}, "commands": [["run"]] })
    );
}

#[test]
fn test_broken_executor_is_dropped_alone() {
    let resolution = resolve(
        &root(),
        &json!({
            "custom": {
                "good": { "filename": "a", "commands": [] },
                "bad": { "commands": [] }
            }
        }),
    );

    assert_eq!(resolution.diagnostics.len(), 1);
    let diagnostic = &resolution.diagnostics.as_slice()[0];
    assert_eq!(diagnostic.kind, ErrorKind::MissingRequiredField);
    assert_eq!(diagnostic.path.to_string(), "custom.bad.filename");

    let value = resolution.value.unwrap();
    assert!(value.lookup("custom.good").is_some());
    assert!(value.lookup("custom.bad").is_none());
}

#[test]
fn test_open_enum_elements() {
    let value = resolved(json!({ "auto_render": ["rust", "d2"] }));
    let items = value.get("auto_render").and_then(Resolved::as_array).unwrap();
    assert_eq!(
        items,
        &[
            Resolved::Enum(EnumValue::Known("rust")),
            Resolved::Enum(EnumValue::Unknown("d2".into())),
        ]
    );
}

#[test]
fn test_transition_states_are_distinct() {
    let absent = resolved(json!({}));
    let null = resolved(json!({ "transition": null }));
    let present = resolved(json!({
        "transition": { "animation": { "style": "slide_horizontal" }, "duration_millis": 500 }
    }));

    assert_eq!(absent.get("transition"), Some(&Resolved::Unset(Unset::Absent)));
    assert_eq!(null.get("transition"), Some(&Resolved::Unset(Unset::Null)));
    assert_eq!(
        present.lookup("transition.duration_millis").and_then(Resolved::as_u64),
        Some(500)
    );
    assert_eq!(
        present.lookup("transition.frames").and_then(Resolved::as_u64),
        Some(30)
    );
}

#[rstest]
#[case(
    json!({ "transition": {} }),
    ErrorKind::MissingRequiredField,
    "transition.animation",
    true
)]
#[case(
    json!({ "transition": { "animation": {} } }),
    ErrorKind::UnknownVariant,
    "transition.animation",
    true
)]
#[case(
    json!({ "transition": { "animation": { "style": "fade" } } }),
    ErrorKind::UnknownVariant,
    "transition.animation.style",
    true
)]
#[case(
    json!({ "transition": { "animation": { "style": "slide_horizontal", "speed": 2 } } }),
    ErrorKind::UnknownField,
    "transition.animation.speed",
    false
)]
fn test_transition_faults(
    #[case] document: Value,
    #[case] kind: ErrorKind,
    #[case] path: &str,
    #[case] dropped: bool,
) {
    let resolution = resolve(&root(), &document);
    assert_eq!(resolution.diagnostics.len(), 1, "{}", resolution.diagnostics);
    let diagnostic = &resolution.diagnostics.as_slice()[0];
    assert_eq!(diagnostic.kind, kind);
    assert_eq!(diagnostic.path.to_string(), path);

    // Without a usable animation the transition is dropped entirely.
    let transition = resolution.value.unwrap().get("transition").cloned();
    assert_eq!(
        transition == Some(Resolved::Unset(Unset::Absent)),
        dropped
    );
}

#[test]
fn test_object_check_resets_to_default() {
    let resolution = resolve(
        &root(),
        &json!({ "transition": { "animation": { "style": "slide_horizontal" }, "frames": 0 } }),
    );
    assert_eq!(resolution.diagnostics.len(), 1);
    let diagnostic = &resolution.diagnostics.as_slice()[0];
    assert_eq!(diagnostic.kind, ErrorKind::InvalidValue);
    assert_eq!(diagnostic.path.to_string(), "transition.frames");
    assert_eq!(
        resolution
            .value
            .unwrap()
            .lookup("transition.frames")
            .and_then(Resolved::as_u64),
        Some(30)
    );
}

#[test]
fn test_round_trip_is_clean() {
    let first = resolved(json!({
        "custom": { "rust": { "filename": "main.rs", "commands": [["cargo", "run"]], "environment": { "A": "1" } } },
        "auto_render": ["python", "zig"],
        "transition": null
    }));
    let second = resolved(first.to_value());
    assert_eq!(first, second);
}
