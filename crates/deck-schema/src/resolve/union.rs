//! Enumerations, tagged variants and nullable alternatives

use serde_json::{Map, Value};

use super::{Context, kind_of};
use crate::diagnostic::ErrorKind;
use crate::node::{EnumSchema, Schema, TaggedUnionSchema};
use crate::value::{EnumValue, Resolved, Unset};

pub(super) fn resolve_enum(cx: &mut Context, schema: &EnumSchema, raw: &Value) -> Option<Resolved> {
    let Value::String(value) = raw else {
        cx.report(
            ErrorKind::InvalidEnumValue,
            format!(
                "expected one of: {}, found {}",
                schema.accepted(),
                kind_of(raw)
            ),
        );
        return None;
    };

    if let Some(literal) = schema.find(value) {
        return Some(Resolved::Enum(EnumValue::Known(literal)));
    }

    if schema.is_open() {
        tracing::debug!(
            path = %cx.path(),
            value = value.as_str(),
            schema = schema.name(),
            "accepting unrecognized value verbatim"
        );
        return Some(Resolved::Enum(EnumValue::Unknown(value.clone())));
    }

    cx.report(
        ErrorKind::InvalidEnumValue,
        format!(
            "invalid value '{value}', expected one of: {}",
            schema.accepted()
        ),
    );
    None
}

pub(super) fn resolve_tagged(
    cx: &mut Context,
    schema: &TaggedUnionSchema,
    raw: &Value,
) -> Option<Resolved> {
    let Value::Object(map) = raw else {
        cx.mismatch("object", raw);
        return None;
    };

    let discriminant = schema.discriminant();
    let tag = match map.get(discriminant) {
        Some(Value::String(tag)) => tag,
        Some(other) => {
            cx.with_key(discriminant, |cx| {
                cx.report(
                    ErrorKind::UnknownVariant,
                    format!("expected one of: {}, found {}", schema.accepted(), kind_of(other)),
                )
            });
            return None;
        }
        None => {
            cx.report(
                ErrorKind::UnknownVariant,
                format!(
                    "missing field '{discriminant}', expected one of: {}",
                    schema.accepted()
                ),
            );
            return None;
        }
    };

    let Some((tag, member)) = schema.find(tag) else {
        cx.with_key(discriminant, |cx| {
            cx.report(
                ErrorKind::UnknownVariant,
                format!(
                    "unknown variant '{tag}', expected one of: {}",
                    schema.accepted()
                ),
            )
        });
        return None;
    };

    // Members that do not re-declare the discriminant never see it.
    let payload = match member {
        Schema::Object(object) if object.get(discriminant).is_none() => {
            let stripped: Map<String, Value> = map
                .iter()
                .filter(|(key, _)| key.as_str() != discriminant)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            cx.resolve(member, &Value::Object(stripped))
        }
        _ => cx.resolve(member, raw),
    }?;

    Some(Resolved::Variant {
        discriminant,
        tag,
        payload: Box::new(payload),
    })
}

pub(super) fn resolve_nullable(cx: &mut Context, inner: &Schema, raw: &Value) -> Option<Resolved> {
    match raw {
        Value::Null => Some(Resolved::Unset(Unset::Null)),
        other => cx.resolve(inner, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FieldSpec, IntWidth, ObjectSchema};
    use crate::resolve::resolve;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn alignment() -> Schema {
        Schema::Enum(
            EnumSchema::closed("Alignment")
                .literal("left", "Align to the left")
                .literal("center", "Center")
                .literal("right", "Align to the right"),
        )
    }

    fn animation() -> Schema {
        let slide = ObjectSchema::new("SlideHorizontal").field(
            "style",
            FieldSpec::required(Schema::Enum(
                EnumSchema::closed("Style").literal("slide_horizontal", ""),
            )),
        );
        let fade = ObjectSchema::new("Fade")
            .field("steps", FieldSpec::optional(Schema::uint(IntWidth::U8)).with_default(4));
        Schema::TaggedUnion(
            TaggedUnionSchema::new("Animation", "style")
                .member("slide_horizontal", Schema::Object(slide))
                .member("fade", Schema::Object(fade)),
        )
    }

    #[test]
    fn test_enum_rejects_other_case() {
        let resolution = resolve(&alignment(), &json!("Left"));
        assert!(resolution.value.is_none());
        let diagnostic = &resolution.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.kind, ErrorKind::InvalidEnumValue);
        assert_eq!(
            diagnostic.detail,
            "invalid value 'Left', expected one of: left, center, right"
        );
    }

    #[test]
    fn test_enum_rejects_non_strings() {
        let resolution = resolve(&alignment(), &json!(1));
        assert_eq!(
            resolution.diagnostics.as_slice()[0].kind,
            ErrorKind::InvalidEnumValue
        );
    }

    #[test]
    fn test_open_enum_keeps_unknown_values() {
        let schema = Schema::Enum(EnumSchema::open("Language").literal("rust", ""));
        assert_eq!(
            resolve(&schema, &json!("rust")).value,
            Some(Resolved::Enum(EnumValue::Known("rust")))
        );
        let resolution = resolve(&schema, &json!("Rust"));
        assert!(resolution.is_clean());
        assert_eq!(
            resolution.value,
            Some(Resolved::Enum(EnumValue::Unknown("Rust".into())))
        );
    }

    #[test]
    fn test_tagged_member_redeclaring_discriminant() {
        let resolution = resolve(&animation(), &json!({ "style": "slide_horizontal" }));
        assert!(resolution.is_clean());
        let value = resolution.value.unwrap();
        assert_eq!(value.get("style").and_then(Resolved::as_str), Some("slide_horizontal"));
        assert_eq!(value.to_value(), json!({ "style": "slide_horizontal" }));
    }

    #[test]
    fn test_tagged_member_without_discriminant_field() {
        let resolution = resolve(&animation(), &json!({ "style": "fade" }));
        assert!(resolution.is_clean());
        let value = resolution.value.unwrap();
        assert_eq!(value.get("steps").and_then(Resolved::as_u64), Some(4));
        assert_eq!(value.to_value(), json!({ "style": "fade", "steps": 4 }));
    }

    #[test]
    fn test_tagged_unknown_and_missing_discriminant() {
        let unknown = resolve(&animation(), &json!({ "style": "spin" }));
        assert!(unknown.value.is_none());
        let diagnostic = &unknown.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.kind, ErrorKind::UnknownVariant);
        assert_eq!(diagnostic.path.to_string(), "style");

        let missing = resolve(&animation(), &json!({}));
        assert!(missing.value.is_none());
        let diagnostic = &missing.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.kind, ErrorKind::UnknownVariant);
        assert!(diagnostic.path.is_root());
    }

    #[test]
    fn test_nullable() {
        let schema = Schema::nullable(Schema::boolean());
        assert_eq!(
            resolve(&schema, &json!(null)).value,
            Some(Resolved::Unset(Unset::Null))
        );
        assert_eq!(resolve(&schema, &json!(true)).value, Some(Resolved::Bool(true)));
        assert!(resolve(&schema, &json!("yes")).value.is_none());
    }
}
