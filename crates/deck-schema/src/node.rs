//! Schema nodes
//!
//! A [`Schema`] is a static description of one configuration construct.
//! Schemas are assembled once (typically behind a `LazyLock`) and are never
//! mutated afterwards, which makes them safe to share between concurrent
//! resolutions without locking.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::value::Fields;

/// Bit width of an unsigned integer scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    /// No width constraint beyond what a `u64` can hold.
    Unbounded,
}

impl IntWidth {
    /// Largest value representable with this width.
    pub fn max(self) -> u64 {
        match self {
            IntWidth::U8 => u8::MAX.into(),
            IntWidth::U16 => u16::MAX.into(),
            IntWidth::U32 => u32::MAX.into(),
            IntWidth::Unbounded => u64::MAX,
        }
    }

    /// Format name used in diagnostics and JSON Schema output.
    pub fn format(self) -> &'static str {
        match self {
            IntWidth::U8 => "uint8",
            IntWidth::U16 => "uint16",
            IntWidth::U32 => "uint32",
            IntWidth::Unbounded => "uint",
        }
    }
}

/// Kind of a scalar schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Boolean,
    Integer { width: IntWidth, minimum: u64 },
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Boolean => write!(f, "boolean"),
            ScalarKind::Integer { width, .. } => write!(f, "{} integer", width.format()),
        }
    }
}

/// One literal of an enumeration, with its help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub value: &'static str,
    pub description: &'static str,
}

/// String enumeration.
///
/// A closed enumeration accepts exactly its literals. An open enumeration
/// additionally accepts any other string as an unknown escape value, which
/// keeps known literals strongly typed while tolerating identifiers this
/// version does not know about.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    name: &'static str,
    literals: Vec<Literal>,
    open: bool,
}

impl EnumSchema {
    pub fn closed(name: &'static str) -> Self {
        Self {
            name,
            literals: Vec::new(),
            open: false,
        }
    }

    pub fn open(name: &'static str) -> Self {
        Self {
            name,
            literals: Vec::new(),
            open: true,
        }
    }

    /// Append a literal. Order only affects help and schema output.
    pub fn literal(mut self, value: &'static str, description: &'static str) -> Self {
        self.literals.push(Literal { value, description });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Exact, case-sensitive lookup of a literal.
    pub fn find(&self, value: &str) -> Option<&'static str> {
        self.literals
            .iter()
            .find(|literal| literal.value == value)
            .map(|literal| literal.value)
    }

    /// Comma separated list of accepted literals.
    pub fn accepted(&self) -> String {
        self.literals
            .iter()
            .map(|literal| literal.value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Object variants selected by a discriminant field.
#[derive(Debug, Clone)]
pub struct TaggedUnionSchema {
    name: &'static str,
    discriminant: &'static str,
    members: Vec<(&'static str, Schema)>,
}

impl TaggedUnionSchema {
    pub fn new(name: &'static str, discriminant: &'static str) -> Self {
        Self {
            name,
            discriminant,
            members: Vec::new(),
        }
    }

    pub fn member(mut self, tag: &'static str, schema: Schema) -> Self {
        self.members.push((tag, schema));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn discriminant(&self) -> &'static str {
        self.discriminant
    }

    pub fn members(&self) -> &[(&'static str, Schema)] {
        &self.members
    }

    /// Find the member schema for a tag value.
    pub fn find(&self, tag: &str) -> Option<(&'static str, &Schema)> {
        self.members
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(name, schema)| (*name, schema))
    }

    pub fn accepted(&self) -> String {
        self.members
            .iter()
            .map(|(tag, _)| *tag)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Per-field metadata inside an [`ObjectSchema`].
#[derive(Debug, Clone)]
pub struct FieldSpec {
    schema: Schema,
    required: bool,
    default: Option<Value>,
    description: &'static str,
}

impl FieldSpec {
    /// A field that must be present in the document.
    pub fn required(schema: Schema) -> Self {
        Self {
            schema,
            required: true,
            default: None,
            description: "",
        }
    }

    /// A field that may be omitted.
    ///
    /// Without a default an omitted field resolves to [`crate::Unset::Absent`].
    pub fn optional(schema: Schema) -> Self {
        Self {
            schema,
            required: false,
            default: None,
            description: "",
        }
    }

    /// Raw default, resolved against the field's own schema when used.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

/// A problem found by an [`ObjectCheck`], scoped to one declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub field: String,
    pub detail: String,
}

impl Finding {
    pub fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// Post-resolution validation attached to an object schema.
///
/// Checks see the object after every field has been resolved and defaulted.
/// Each finding is reported as [`crate::ErrorKind::InvalidValue`] and the
/// flagged field is reset to its fallback.
pub trait ObjectCheck: Send + Sync {
    fn check(&self, fields: &Fields) -> Vec<Finding>;
}

impl<F> ObjectCheck for F
where
    F: Fn(&Fields) -> Vec<Finding> + Send + Sync,
{
    fn check(&self, fields: &Fields) -> Vec<Finding> {
        self(fields)
    }
}

/// Named object with declared fields.
#[derive(Clone)]
pub struct ObjectSchema {
    name: &'static str,
    fields: Vec<(&'static str, FieldSpec)>,
    closed: bool,
    checks: Vec<Arc<dyn ObjectCheck>>,
}

impl ObjectSchema {
    /// A closed object: undeclared keys are reported and dropped.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            closed: true,
            checks: Vec::new(),
        }
    }

    /// Accept undeclared keys silently.
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    pub fn field(mut self, name: &'static str, spec: FieldSpec) -> Self {
        self.fields.push((name, spec));
        self
    }

    pub fn check(mut self, check: impl ObjectCheck + 'static) -> Self {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (*name, spec))
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, spec)| spec)
    }

    pub(crate) fn checks(&self) -> &[Arc<dyn ObjectCheck>] {
        &self.checks
    }
}

impl fmt::Debug for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("closed", &self.closed)
            .field("checks", &self.checks.len())
            .finish()
    }
}

/// Description of one configuration construct.
#[derive(Debug, Clone)]
pub enum Schema {
    Scalar(ScalarKind),
    Enum(EnumSchema),
    TaggedUnion(TaggedUnionSchema),
    Object(ObjectSchema),
    /// Arbitrary string keys, one value schema.
    OpenMap(Box<Schema>),
    Array(Box<Schema>),
    /// Accepts `null` in addition to the wrapped schema.
    Nullable(Box<Schema>),
}

impl Schema {
    pub fn string() -> Self {
        Schema::Scalar(ScalarKind::String)
    }

    pub fn boolean() -> Self {
        Schema::Scalar(ScalarKind::Boolean)
    }

    /// Unsigned integer with minimum `0`.
    pub fn uint(width: IntWidth) -> Self {
        Schema::Scalar(ScalarKind::Integer { width, minimum: 0 })
    }

    pub fn array_of(element: Schema) -> Self {
        Schema::Array(Box::new(element))
    }

    pub fn map_of(value: Schema) -> Self {
        Schema::OpenMap(Box::new(value))
    }

    pub fn nullable(inner: Schema) -> Self {
        Schema::Nullable(Box::new(inner))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Schema::Nullable(_))
    }

    /// Short human readable description of the expected shape.
    pub fn expected(&self) -> String {
        match self {
            Schema::Scalar(kind) => kind.to_string(),
            Schema::Enum(schema) => format!("one of: {}", schema.accepted()),
            Schema::TaggedUnion(schema) => format!("`{}` object", schema.name()),
            Schema::Object(schema) => format!("`{}` object", schema.name()),
            Schema::OpenMap(_) => "object".to_string(),
            Schema::Array(_) => "array".to_string(),
            Schema::Nullable(inner) => format!("{} or null", inner.expected()),
        }
    }
}
