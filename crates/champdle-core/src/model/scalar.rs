//! Canonical form for scalar attribute values.
//!
//! Release years arrive as JSON numbers from some clients and as strings from
//! others and from CSV files. Every scalar is normalized here, once, so the
//! validator can compare with plain string equality.

use serde_json::Value;

/// Normalize a raw scalar to its canonical text.
///
/// Returns `None` for empty or whitespace-only input. Integer-looking text is
/// rewritten to plain decimal (`"+02015"` becomes `"2015"`), as is float text
/// with no fractional part (`"2015.0"`). Everything else is trimmed only.
pub fn normalize_scalar(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(int.to_string());
    }

    if let Ok(float) = trimmed.parse::<f64>() {
        if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
            return Some((float as i64).to_string());
        }
    }

    Some(trimmed.to_string())
}

/// A JSON value that cannot stand in for a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAScalar(pub &'static str);

/// Text of a JSON request value, trimmed but otherwise untouched.
///
/// Strings and numbers yield their text; `null` and blank strings are
/// absent. Booleans, arrays and objects are rejected.
pub fn json_text(value: &Value) -> Result<Option<String>, NotAScalar> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(_) => return Err(NotAScalar("boolean")),
        Value::Array(_) => return Err(NotAScalar("array")),
        Value::Object(_) => return Err(NotAScalar("object")),
    };
    Ok(Some(text).filter(|t| !t.is_empty()))
}

/// Normalize a JSON request value to canonical scalar text.
pub fn normalize_json(value: &Value) -> Result<Option<String>, NotAScalar> {
    Ok(json_text(value)?.and_then(|text| normalize_scalar(&text)))
}
