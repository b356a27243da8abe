//! Object resolution against a named schema

use serde_json::Value;

use super::{Context, fallback};
use crate::diagnostic::ErrorKind;
use crate::node::ObjectSchema;
use crate::value::{Fields, Resolved};

pub(super) fn resolve_object(cx: &mut Context, schema: &ObjectSchema, raw: &Value) -> Option<Resolved> {
    let Value::Object(map) = raw else {
        cx.mismatch(&format!("`{}` object", schema.name()), raw);
        return None;
    };

    let mut fields = Fields::new();
    let mut complete = true;

    for (key, value) in map {
        let Some(spec) = schema.get(key) else {
            if schema.is_closed() {
                cx.with_key(key, |cx| {
                    cx.report(
                        ErrorKind::UnknownField,
                        format!("unknown field '{key}' in `{}`", schema.name()),
                    )
                });
            } else {
                tracing::debug!(path = %cx.path(), key = key.as_str(), "ignoring undeclared key");
            }
            continue;
        };

        let resolved = cx
            .with_key(key, |cx| cx.resolve(spec.schema(), value))
            .or_else(|| {
                tracing::debug!(path = %cx.path(), field = key.as_str(), "falling back to default");
                fallback(spec)
            });
        match resolved {
            Some(resolved) => {
                fields.insert(key.clone(), resolved);
            }
            None => complete = false,
        }
    }

    for (name, spec) in schema.fields() {
        if map.contains_key(name) {
            continue;
        }
        if spec.is_required() {
            cx.with_key(name, |cx| {
                cx.report(
                    ErrorKind::MissingRequiredField,
                    format!("missing required field '{name}' in `{}`", schema.name()),
                )
            });
            complete = false;
            continue;
        }
        if let Some(resolved) = fallback(spec) {
            fields.insert(name.to_string(), resolved);
        }
    }

    if !complete {
        tracing::debug!(path = %cx.path(), object = schema.name(), "dropping incomplete object");
        return None;
    }

    // Every check sees the same fields; resets apply once all have run.
    let findings: Vec<_> = schema
        .checks()
        .iter()
        .flat_map(|check| check.check(&fields))
        .collect();
    let mut failed = false;
    for finding in findings {
        cx.with_key(&finding.field, |cx| {
            cx.report(ErrorKind::InvalidValue, finding.detail.clone())
        });
        let Some(spec) = schema.get(&finding.field) else {
            continue;
        };
        match fallback(spec) {
            Some(resolved) => {
                fields.insert(finding.field, resolved);
            }
            None => failed = true,
        }
    }

    if failed {
        tracing::debug!(path = %cx.path(), object = schema.name(), "dropping object rejected by checks");
        return None;
    }
    Some(Resolved::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FieldSpec, Finding, IntWidth, Schema};
    use crate::resolve::resolve;
    use crate::value::Unset;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn dimensions() -> Schema {
        Schema::Object(
            ObjectSchema::new("ExportDimensions")
                .field("rows", FieldSpec::required(Schema::uint(IntWidth::U16)))
                .field("columns", FieldSpec::required(Schema::uint(IntWidth::U16))),
        )
    }

    fn export() -> Schema {
        Schema::Object(
            ObjectSchema::new("Export")
                .field("dimensions", FieldSpec::optional(Schema::nullable(dimensions())))
                .field(
                    "scale",
                    FieldSpec::optional(Schema::uint(IntWidth::U32)).with_default(2),
                ),
        )
    }

    #[test]
    fn test_missing_optional_fields_take_fallbacks() {
        let resolution = resolve(&export(), &json!({}));
        assert!(resolution.is_clean());
        let value = resolution.value.unwrap();
        assert_eq!(value.get("scale"), Some(&Resolved::Integer(2)));
        assert_eq!(value.get("dimensions"), Some(&Resolved::Unset(Unset::Absent)));
    }

    #[test]
    fn test_unknown_field_is_reported_and_dropped() {
        let resolution = resolve(&export(), &json!({ "scale": 3, "scael": 4 }));
        assert_eq!(resolution.diagnostics.len(), 1);
        let diagnostic = &resolution.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.kind, ErrorKind::UnknownField);
        assert_eq!(diagnostic.path.last_key(), Some("scael"));

        let value = resolution.value.unwrap();
        assert_eq!(value.get("scale"), Some(&Resolved::Integer(3)));
        assert!(value.get("scael").is_none());
    }

    #[test]
    fn test_open_object_ignores_unknown_keys() {
        let schema = Schema::Object(ObjectSchema::new("Loose").open());
        let resolution = resolve(&schema, &json!({ "anything": 1 }));
        assert!(resolution.is_clean());
        assert_eq!(resolution.value, Some(Resolved::Object(Fields::new())));
    }

    #[test]
    fn test_missing_required_field_drops_subtree() {
        let resolution = resolve(&export(), &json!({ "dimensions": { "rows": 10 } }));
        assert_eq!(resolution.diagnostics.len(), 1);
        let diagnostic = &resolution.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.kind, ErrorKind::MissingRequiredField);
        assert_eq!(diagnostic.path.to_string(), "dimensions.columns");

        // The parent keeps going with the nullable field unset.
        let value = resolution.value.unwrap();
        assert_eq!(value.get("dimensions"), Some(&Resolved::Unset(Unset::Absent)));
    }

    #[test]
    fn test_siblings_are_all_reported() {
        let resolution = resolve(
            &export(),
            &json!({ "dimensions": { "rows": -1, "columns": "wide" }, "scale": 1.5 }),
        );
        let paths: Vec<String> = resolution
            .diagnostics
            .iter()
            .map(|d| d.path.to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["dimensions.columns", "dimensions.rows", "scale"]
        );
        let value = resolution.value.unwrap();
        assert_eq!(value.get("scale"), Some(&Resolved::Integer(2)));
    }

    #[test]
    fn test_non_object_is_type_mismatch() {
        let resolution = resolve(&export(), &json!("fast"));
        assert!(resolution.value.is_none());
        assert_eq!(
            resolution.diagnostics.as_slice()[0].detail,
            "expected `Export` object, found string"
        );
    }

    fn even_scale(fields: &Fields) -> Vec<Finding> {
        match fields.get("scale").and_then(Resolved::as_u64) {
            Some(scale) if scale % 2 == 1 => vec![Finding::new("scale", "scale must be even")],
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_check_findings_reset_field() {
        let schema = Schema::Object(
            ObjectSchema::new("Scaled")
                .field(
                    "scale",
                    FieldSpec::optional(Schema::uint(IntWidth::U32)).with_default(2),
                )
                .check(even_scale),
        );

        let resolution = resolve(&schema, &json!({ "scale": 3 }));
        assert_eq!(resolution.diagnostics.len(), 1);
        let diagnostic = &resolution.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.kind, ErrorKind::InvalidValue);
        assert_eq!(diagnostic.path.to_string(), "scale");
        assert_eq!(
            resolution.value.unwrap().get("scale"),
            Some(&Resolved::Integer(2))
        );

        assert!(resolve(&schema, &json!({ "scale": 4 })).is_clean());
    }

    #[test]
    fn test_check_failure_on_required_field_keeps_every_finding() {
        let schema = Schema::Object(
            ObjectSchema::new("Endpoint")
                .field("host", FieldSpec::required(Schema::string()))
                .field(
                    "scale",
                    FieldSpec::optional(Schema::uint(IntWidth::U32)).with_default(2),
                )
                .check(|_: &Fields| vec![Finding::new("host", "host is not reachable")])
                .check(even_scale),
        );

        let resolution = resolve(&schema, &json!({ "host": "nowhere", "scale": 5 }));
        assert!(resolution.value.is_none());
        let paths: Vec<String> = resolution
            .diagnostics
            .iter()
            .map(|d| d.path.to_string())
            .collect();
        assert_eq!(paths, vec!["host", "scale"]);
        assert!(
            resolution
                .diagnostics
                .iter()
                .all(|d| d.kind == ErrorKind::InvalidValue)
        );
    }
}
