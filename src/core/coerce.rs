// src/core/coerce.rs
// Best-effort integer conversion for untrusted JSON fields.

use std::num::IntErrorKind;

use serde_json::Value;

/// Convert `v` to an integer, or return `default`. Never fails.
///
/// Numbers truncate toward zero, strings are parsed as decimal integers
/// (surrounding whitespace, a sign, and `_` between digits allowed),
/// booleans become 1/0. Numeric values beyond the i64 range saturate at
/// `i64::MIN`/`i64::MAX`. Anything else yields `default`.
pub fn safe_int(v: &Value, default: i64) -> i64 {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.is_u64() {
                i64::MAX
            } else {
                n.as_f64().and_then(float_to_int).unwrap_or(default)
            }
        }
        Value::String(s) => parse_int(s).unwrap_or(default),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => default,
    }
}

/// Same as `safe_int` for a field that may be absent.
pub fn safe_int_opt(v: Option<&Value>, default: i64) -> i64 {
    v.map_or(default, |v| safe_int(v, default))
}

fn float_to_int(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    // float -> int casts saturate
    Some(f.trunc() as i64)
}

fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (neg, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }
    let mut clean = String::with_capacity(digits.len() + 1);
    if neg {
        clean.push('-');
    }
    for ch in digits.chars() {
        match ch {
            '0'..='9' => clean.push(ch),
            '_' => {}
            _ => return None,
        }
    }
    match clean.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
