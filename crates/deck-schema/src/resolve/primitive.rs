//! Scalar validation: strings, booleans and width-constrained integers

use serde_json::{Number, Value};

use super::Context;
use crate::diagnostic::ErrorKind;
use crate::node::{IntWidth, ScalarKind};
use crate::value::Resolved;

/// 2^64, the smallest float that cannot have been parsed as a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

pub(super) fn resolve_scalar(cx: &mut Context, kind: ScalarKind, raw: &Value) -> Option<Resolved> {
    match (kind, raw) {
        (ScalarKind::String, Value::String(value)) => Some(Resolved::String(value.clone())),
        (ScalarKind::Boolean, Value::Bool(value)) => Some(Resolved::Bool(*value)),
        (ScalarKind::Integer { width, minimum }, Value::Number(number)) => {
            resolve_integer(cx, width, minimum, number)
        }
        (kind, other) => {
            cx.mismatch(&kind.to_string(), other);
            None
        }
    }
}

fn resolve_integer(
    cx: &mut Context,
    width: IntWidth,
    minimum: u64,
    number: &Number,
) -> Option<Resolved> {
    if let Some(value) = number.as_u64() {
        if value < minimum {
            cx.report(
                ErrorKind::OutOfRange,
                format!("{value} is below the minimum of {minimum}"),
            );
            return None;
        }
        if value > width.max() {
            cx.report(
                ErrorKind::OutOfRange,
                format!(
                    "{value} exceeds the {} maximum of {}",
                    width.format(),
                    width.max()
                ),
            );
            return None;
        }
        return Some(Resolved::Integer(value));
    }

    if let Some(value) = number.as_i64() {
        cx.report(
            ErrorKind::OutOfRange,
            format!("{value} is below the minimum of {minimum}"),
        );
        return None;
    }

    // Integers too large for i64/u64 arrive as floats.
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value >= U64_LIMIT => {
            cx.report(
                ErrorKind::OutOfRange,
                format!(
                    "{number} exceeds the {} maximum of {}",
                    width.format(),
                    width.max()
                ),
            );
        }
        Some(value) if value.fract() == 0.0 && value < i64::MIN as f64 => {
            cx.report(
                ErrorKind::OutOfRange,
                format!("{number} is below the minimum of {minimum}"),
            );
        }
        _ => cx.report(
            ErrorKind::TypeMismatch,
            format!("expected {} integer, found number {number}", width.format()),
        ),
    }
    None
}
