//! Value -> JSON conversion utilities

use crate::Value;

/// Convert a bound Value to serde_json::Value
///
/// Decimals and timestamps have no native JSON form and are emitted as
/// strings (`"1.50"`, RFC 3339).
pub fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Decimal(d) => serde_json::Value::String(d.to_string()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Timestamp(t) => serde_json::Value::String(t.to_rfc3339()),
    }
}

/// Serialize a value list as a compact JSON array.
pub fn values_to_json(values: &[Value]) -> String {
    serde_json::Value::Array(values.iter().map(value_to_json).collect()).to_string()
}
