//! Open maps: arbitrary string keys sharing one value schema

use std::collections::BTreeMap;

use serde_json::Value;

use super::Context;
use crate::node::Schema;
use crate::value::Resolved;

pub(super) fn resolve_open_map(cx: &mut Context, value_schema: &Schema, raw: &Value) -> Option<Resolved> {
    let Value::Object(map) = raw else {
        cx.mismatch("object", raw);
        return None;
    };

    let mut entries = BTreeMap::new();
    for (key, value) in map {
        match cx.with_key(key, |cx| cx.resolve(value_schema, value)) {
            Some(resolved) => {
                entries.insert(key.clone(), resolved);
            }
            None => {
                tracing::debug!(path = %cx.path(), key = key.as_str(), "dropping map entry");
            }
        }
    }
    Some(Resolved::Map(entries))
}
