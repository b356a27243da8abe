//! Schema-driven resolution of configuration documents
//!
//! This crate turns a loosely-structured document (a `serde_json::Value`
//! tree of objects, arrays and scalars) into a fully decided [`Resolved`]
//! tree by walking it alongside an immutable [`Schema`]:
//!
//! - **Primitive validation**: strings, booleans and unsigned integers with
//!   an explicit bit width and minimum.
//! - **Unions**: closed (or open) string enumerations, tagged object variants
//!   and nullable alternatives.
//! - **Objects**: declared fields, defaults, required fields and strict
//!   rejection of undeclared keys, plus post-resolution checks.
//! - **Open maps**: arbitrary keys sharing one value schema.
//!
//! Resolution never fails. Every problem is reported as a path-qualified
//! [`Diagnostic`] and the offending field falls back to its default, so a
//! single pass surfaces every fault in the document.
//!
//! # Example
//!
//! ```
//! use deck_schema::{FieldSpec, IntWidth, ObjectSchema, Schema, resolve};
//! use serde_json::json;
//!
//! let schema = Schema::Object(
//!     ObjectSchema::new("Render")
//!         .field("threads", FieldSpec::optional(Schema::uint(IntWidth::U8)).with_default(2)),
//! );
//!
//! let resolution = resolve(&schema, &json!({ "threads": 300 }));
//! assert_eq!(resolution.diagnostics.len(), 1);
//! assert_eq!(resolution.value.unwrap().lookup("threads").and_then(|v| v.as_u64()), Some(2));
//! ```

pub mod diagnostic;
pub mod json_schema;
pub mod node;
pub mod path;
pub mod resolve;
pub mod value;

pub use diagnostic::{Diagnostic, Diagnostics, ErrorKind};
pub use node::{
    EnumSchema, FieldSpec, Finding, IntWidth, Literal, ObjectCheck, ObjectSchema, ScalarKind,
    Schema, TaggedUnionSchema,
};
pub use path::{FieldPath, Segment};
pub use resolve::{Resolution, resolve};
pub use value::{EnumValue, Fields, Resolved, Unset};
