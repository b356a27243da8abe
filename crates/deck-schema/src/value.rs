//! Resolved value tree
//!
//! The output of resolution mirrors the schema shape but every optional
//! field has already been decided: it carries either a concrete value
//! (supplied or defaulted) or an explicit [`Unset`] marker that records
//! whether the document left it out or set it to `null`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Resolved fields of an object, keyed by field name.
pub type Fields = BTreeMap<String, Resolved>;

/// Why a field carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unset {
    /// Not present in the document and no default declared.
    Absent,
    /// Explicitly set to `null`.
    Null,
}

/// Value of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumValue {
    /// One of the schema's literals.
    Known(&'static str),
    /// A string outside the literal set, accepted by an open enumeration.
    Unknown(String),
}

impl EnumValue {
    pub fn as_str(&self) -> &str {
        match self {
            EnumValue::Known(literal) => literal,
            EnumValue::Unknown(other) => other,
        }
    }
}

/// A fully validated, defaulted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Bool(bool),
    Integer(u64),
    String(String),
    Enum(EnumValue),
    Array(Vec<Resolved>),
    Object(Fields),
    Map(BTreeMap<String, Resolved>),
    Variant {
        discriminant: &'static str,
        tag: &'static str,
        payload: Box<Resolved>,
    },
    Unset(Unset),
}

impl Resolved {
    /// Child of an object, map or variant payload.
    pub fn get(&self, key: &str) -> Option<&Resolved> {
        match self {
            Resolved::Object(fields) | Resolved::Map(fields) => fields.get(key),
            Resolved::Variant { payload, .. } => payload.get(key),
            _ => None,
        }
    }

    /// Follow a dotted path such as `defaults.max_columns`.
    pub fn lookup(&self, dotted: &str) -> Option<&Resolved> {
        dotted
            .split('.')
            .try_fold(self, |node, key| node.get(key))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Resolved::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Resolved::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// String content of a string or enumeration value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Resolved::String(value) => Some(value),
            Resolved::Enum(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Resolved]> {
        match self {
            Resolved::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_unset(&self) -> Option<Unset> {
        match self {
            Resolved::Unset(unset) => Some(*unset),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Resolved::Unset(_))
    }

    /// Render back into a raw document.
    ///
    /// Absent fields are omitted from their containing object, explicit
    /// nulls are kept. Resolving the output against the same schema yields
    /// an identical tree with no diagnostics.
    pub fn to_value(&self) -> Value {
        match self {
            Resolved::Bool(value) => Value::Bool(*value),
            Resolved::Integer(value) => Value::from(*value),
            Resolved::String(value) => Value::String(value.clone()),
            Resolved::Enum(value) => Value::String(value.as_str().to_string()),
            Resolved::Array(items) => Value::Array(items.iter().map(Resolved::to_value).collect()),
            Resolved::Object(fields) | Resolved::Map(fields) => {
                let map = fields
                    .iter()
                    .filter(|(_, value)| !matches!(value, Resolved::Unset(Unset::Absent)))
                    .map(|(key, value)| (key.clone(), value.to_value()))
                    .collect::<Map<String, Value>>();
                Value::Object(map)
            }
            Resolved::Variant {
                discriminant,
                tag,
                payload,
            } => {
                let mut value = payload.to_value();
                if let Value::Object(map) = &mut value {
                    map.entry(discriminant.to_string())
                        .or_insert_with(|| Value::String(tag.to_string()));
                }
                value
            }
            Resolved::Unset(_) => Value::Null,
        }
    }
}
