//! JSON Schema (draft-07) rendering of schema nodes
//!
//! Editors use the rendered schema for completion and inline validation of
//! configuration files. The rendering is strictly descriptive: resolution
//! never consults it.

use serde_json::{Map, Value, json};

use crate::node::{EnumSchema, IntWidth, ObjectSchema, ScalarKind, Schema, TaggedUnionSchema};

impl Schema {
    /// Render this node as a JSON Schema fragment.
    pub fn to_json_schema(&self) -> Value {
        match self {
            Schema::Scalar(ScalarKind::String) => json!({ "type": "string" }),
            Schema::Scalar(ScalarKind::Boolean) => json!({ "type": "boolean" }),
            Schema::Scalar(ScalarKind::Integer { width, minimum }) => {
                let mut schema = json!({
                    "type": "integer",
                    "format": width.format(),
                    "minimum": minimum,
                });
                if *width != IntWidth::Unbounded {
                    schema["maximum"] = json!(width.max());
                }
                schema
            }
            Schema::Enum(schema) => enum_schema(schema),
            Schema::TaggedUnion(schema) => tagged_schema(schema),
            Schema::Object(schema) => object_schema(schema),
            Schema::OpenMap(value) => json!({
                "type": "object",
                "additionalProperties": value.to_json_schema(),
            }),
            Schema::Array(element) => json!({
                "type": "array",
                "items": element.to_json_schema(),
            }),
            Schema::Nullable(inner) => json!({
                "anyOf": [inner.to_json_schema(), { "type": "null" }],
            }),
        }
    }
}

fn enum_schema(schema: &EnumSchema) -> Value {
    let literals: Vec<Value> = schema
        .literals()
        .iter()
        .map(|literal| {
            let mut entry = json!({ "type": "string", "const": literal.value });
            if !literal.description.is_empty() {
                entry["description"] = json!(literal.description);
            }
            entry
        })
        .collect();

    if schema.is_open() {
        json!({
            "title": schema.name(),
            "anyOf": [{ "oneOf": literals }, { "type": "string" }],
        })
    } else {
        json!({ "title": schema.name(), "oneOf": literals })
    }
}

fn tagged_schema(schema: &TaggedUnionSchema) -> Value {
    let discriminant = schema.discriminant();
    let members: Vec<Value> = schema
        .members()
        .iter()
        .map(|(tag, member)| {
            let mut rendered = member.to_json_schema();
            let missing_tag = rendered
                .get("properties")
                .and_then(Value::as_object)
                .is_some_and(|properties| !properties.contains_key(discriminant));
            if missing_tag {
                rendered["properties"][discriminant] = json!({ "type": "string", "const": tag });
                if let Some(required) = rendered["required"].as_array_mut() {
                    required.push(json!(discriminant));
                }
            }
            rendered
        })
        .collect();
    json!({ "title": schema.name(), "oneOf": members })
}

fn object_schema(schema: &ObjectSchema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, spec) in schema.fields() {
        let mut property = spec.schema().to_json_schema();
        if !spec.description().is_empty() {
            property["description"] = json!(spec.description());
        }
        if let Some(default) = spec.default_value() {
            property["default"] = default.clone();
        }
        if spec.is_required() {
            required.push(json!(name));
        }
        properties.insert(name.to_string(), property);
    }

    json!({
        "title": schema.name(),
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": !schema.is_closed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::FieldSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_bounds() {
        assert_eq!(
            Schema::uint(IntWidth::U16).to_json_schema(),
            json!({ "type": "integer", "format": "uint16", "minimum": 0, "maximum": 65535 })
        );
        assert_eq!(
            Schema::uint(IntWidth::Unbounded).to_json_schema(),
            json!({ "type": "integer", "format": "uint", "minimum": 0 })
        );
    }

    #[test]
    fn test_object_rendering() {
        let schema = Schema::Object(
            ObjectSchema::new("Typst").field(
                "ppi",
                FieldSpec::optional(Schema::uint(IntWidth::U32))
                    .with_default(300)
                    .describe("Pixels per inch"),
            ),
        );
        let rendered = schema.to_json_schema();
        assert_eq!(rendered["additionalProperties"], json!(false));
        assert_eq!(rendered["required"], json!([]));
        assert_eq!(rendered["properties"]["ppi"]["default"], json!(300));
        assert_eq!(rendered["properties"]["ppi"]["description"], json!("Pixels per inch"));
    }

    #[test]
    fn test_nullable_rendering() {
        assert_eq!(
            Schema::nullable(Schema::string()).to_json_schema(),
            json!({ "anyOf": [{ "type": "string" }, { "type": "null" }] })
        );
    }
}
