//! Arrays

use serde_json::Value;

use super::Context;
use crate::node::Schema;
use crate::value::Resolved;

/// Every element is resolved so all faults are reported. A single bad
/// element fails the whole array; elements are never filtered out.
pub(super) fn resolve_array(cx: &mut Context, element: &Schema, raw: &Value) -> Option<Resolved> {
    let Value::Array(items) = raw else {
        cx.mismatch("array", raw);
        return None;
    };

    let mut resolved = Vec::with_capacity(items.len());
    let mut complete = true;
    for (index, item) in items.iter().enumerate() {
        match cx.with_index(index, |cx| cx.resolve(element, item)) {
            Some(value) => resolved.push(value),
            None => complete = false,
        }
    }
    complete.then_some(Resolved::Array(resolved))
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::ErrorKind;
    use crate::node::Schema;
    use crate::resolve::resolve;
    use crate::value::Resolved;
    use serde_json::json;

    #[test]
    fn test_nested_arrays() {
        let schema = Schema::array_of(Schema::array_of(Schema::string()));
        let resolution = resolve(&schema, &json!([["cargo", "run"], []]));
        assert!(resolution.is_clean());
        assert_eq!(resolution.value.unwrap().to_value(), json!([["cargo", "run"], []]));
    }

    #[test]
    fn test_bad_elements_are_all_reported() {
        let schema = Schema::array_of(Schema::array_of(Schema::string()));
        let resolution = resolve(&schema, &json!([["run", 1], "x"]));
        assert!(resolution.value.is_none());
        let paths: Vec<String> = resolution
            .diagnostics
            .iter()
            .map(|d| d.path.to_string())
            .collect();
        assert_eq!(paths, vec!["[0][1]", "[1]"]);
        assert!(resolution
            .diagnostics
            .iter()
            .all(|d| d.kind == ErrorKind::TypeMismatch));
    }

    #[test]
    fn test_empty_array() {
        let resolution = resolve(&Schema::array_of(Schema::boolean()), &json!([]));
        assert_eq!(resolution.value, Some(Resolved::Array(Vec::new())));
    }
}
