//! Best-effort integer coercion for untyped JSON scalars

use serde_json::Value;

/// Coerce a value to an integer, falling back to `0`.
///
/// See [`coerce_int_or`].
pub fn coerce_int(value: Option<&Value>) -> i64 {
    coerce_int_or(value, 0)
}

/// Coerce a value to an integer, falling back to `default`.
///
/// The value is read as a floating-point number first and then truncated
/// toward zero, so `"5.9"`, `5.9` and `5` all give `5`. Numeric strings may
/// carry surrounding whitespace. Anything that is not a finite number
/// (absent, `null`, `"abc"`, `""`, `"nan"`, arrays, objects) gives `default`.
/// Booleans count as `1` and `0`.
pub fn coerce_int_or(value: Option<&Value>, default: i64) -> i64 {
    value.and_then(as_finite_f64).map(truncate).unwrap_or(default)
}

/// Numeric reading of a scalar, if it has a finite one.
pub(crate) fn as_finite_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    number.is_finite().then_some(number)
}

/// Truncate toward zero. Finite values beyond the `i64` range saturate.
pub(crate) fn truncate(number: f64) -> i64 {
    number.trunc() as i64
}
