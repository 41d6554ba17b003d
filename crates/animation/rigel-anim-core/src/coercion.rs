//! Permissive scalar coercion for loosely typed source fields.
//!
//! Neither helper ever fails loudly. `parse_float` reports a diagnostic and
//! returns `None`; each call site decides whether that means "use a default"
//! (duration) or "drop the entry" (keyframe time).

use serde_json::Value as JsonValue;

use crate::diagnostics::Diagnostics;

/// Strings accepted as `true` by [`normalize_bool`] after trimming and lower-casing.
const TRUTHY: [&str; 4] = ["true", "1", "yes", "y"];

/// Attempt to read a finite real number from a JSON value.
/// Rules:
/// - Number -> its value
/// - String -> trimmed and parsed as f64
/// - Bool -> 1.0 / 0.0
/// - anything else, or a non-finite result -> `None` plus a diagnostic
pub fn parse_float(value: &JsonValue, context: &str, diag: &mut Diagnostics) -> Option<f64> {
    let parsed = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        JsonValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    };
    match parsed {
        Some(f) if f.is_finite() => Some(f),
        _ => {
            diag.warn(format!(
                "Skipping invalid float '{}' in {context}",
                display_raw(value)
            ));
            None
        }
    }
}

/// Same as [`parse_float`] for a bare string such as an object key.
pub fn parse_float_str(text: &str, context: &str, diag: &mut Diagnostics) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f),
        _ => {
            diag.warn(format!("Skipping invalid float '{text}' in {context}"));
            None
        }
    }
}

/// Interpret a loosely typed flag.
/// - Bool -> itself
/// - Number -> non-zero
/// - String -> one of `true`, `1`, `yes`, `y` (case-insensitive, trimmed)
/// - anything else -> false
pub fn normalize_bool(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        JsonValue::String(s) => {
            let lowered = s.trim().to_ascii_lowercase();
            TRUTHY.contains(&lowered.as_str())
        }
        _ => false,
    }
}

/// Render a value the way it should appear inside a diagnostic: strings raw,
/// everything else as compact JSON.
fn display_raw(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
