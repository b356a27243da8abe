//! Schema-directed resolution of raw documents
//!
//! Resolution is a single depth-first pass over the raw document driven by
//! the schema tree. Every node ends up either as a [`Resolved`] value or as
//! one or more diagnostics; there is no backtracking and no other terminal
//! state.
//!
//! Faults are recovered as locally as possible:
//!
//! - a field whose value fails falls back to its declared default, or to
//!   [`Unset::Absent`] when it has none;
//! - a required field that is missing or fails marks its whole object as
//!   unresolved, which the parent then treats like any other failed field;
//! - an open-map entry that fails is dropped without affecting siblings.

mod array;
mod object;
mod open_map;
mod primitive;
mod union;

use serde_json::Value;

use crate::diagnostic::{Diagnostic, Diagnostics, ErrorKind};
use crate::node::{FieldSpec, Schema};
use crate::path::FieldPath;
use crate::value::{Resolved, Unset};

/// Outcome of resolving one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// `None` when the root itself could not be resolved.
    pub value: Option<Resolved>,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Resolve `raw` against `schema`, collecting every diagnostic.
pub fn resolve(schema: &Schema, raw: &Value) -> Resolution {
    let mut cx = Context::default();
    let value = cx.resolve(schema, raw);
    Resolution {
        value,
        diagnostics: cx.diagnostics,
    }
}

/// Traversal state: the current path and the diagnostics seen so far.
#[derive(Default)]
pub(crate) struct Context {
    path: FieldPath,
    diagnostics: Diagnostics,
}

impl Context {
    pub(crate) fn resolve(&mut self, schema: &Schema, raw: &Value) -> Option<Resolved> {
        match schema {
            Schema::Scalar(kind) => primitive::resolve_scalar(self, *kind, raw),
            Schema::Enum(schema) => union::resolve_enum(self, schema, raw),
            Schema::TaggedUnion(schema) => union::resolve_tagged(self, schema, raw),
            Schema::Nullable(inner) => union::resolve_nullable(self, inner, raw),
            Schema::Object(schema) => object::resolve_object(self, schema, raw),
            Schema::OpenMap(value) => open_map::resolve_open_map(self, value, raw),
            Schema::Array(element) => array::resolve_array(self, element, raw),
        }
    }

    pub(crate) fn path(&self) -> &FieldPath {
        &self.path
    }

    pub(crate) fn report(&mut self, kind: ErrorKind, detail: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            path: self.path.clone(),
            kind,
            detail: detail.into(),
        });
    }

    pub(crate) fn mismatch(&mut self, expected: &str, raw: &Value) {
        self.report(
            ErrorKind::TypeMismatch,
            format!("expected {expected}, found {}", kind_of(raw)),
        );
    }

    pub(crate) fn with_key<T>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push_key(key);
        let result = f(self);
        self.path.pop();
        result
    }

    pub(crate) fn with_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push_index(index);
        let result = f(self);
        self.path.pop();
        result
    }
}

/// Value a field takes when it is absent or its supplied value failed.
///
/// `None` means the field has no fallback and is required.
pub(crate) fn fallback(spec: &FieldSpec) -> Option<Resolved> {
    if let Some(default) = spec.default_value() {
        let mut scratch = Context::default();
        let resolved = scratch.resolve(spec.schema(), default);
        debug_assert!(
            scratch.diagnostics.is_empty(),
            "declared default does not satisfy its schema: {}",
            scratch.diagnostics
        );
        return resolved;
    }
    if spec.is_required() {
        None
    } else {
        Some(Resolved::Unset(Unset::Absent))
    }
}

/// JSON kind name of a raw value.
pub(crate) fn kind_of(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
