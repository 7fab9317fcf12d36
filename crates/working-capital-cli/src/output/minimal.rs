use serde_json::Value;

use super::scalar_text;

/// Result fields that carry the headline answer, in priority order.
const PRIORITY_KEYS: [&str; 8] = [
    "cash_release",
    "all_passing",
    "ccc",
    "current_ratio",
    "cash_impact",
    "working_capital",
    "default_probability",
    "predicted_cash",
];

/// Print just the key answer from the envelope.
///
/// Objects are searched for the priority fields, one level of nesting deep.
/// Insight lists print one title per line; other lists use their last row.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    for line in key_answer(result) {
        println!("{}", line);
    }
}

fn key_answer(result: &Value) -> Vec<String> {
    match result {
        Value::Array(rows) if rows.iter().all(|r| r.get("title").is_some()) && !rows.is_empty() => {
            rows.iter()
                .map(|r| {
                    format!(
                        "[{}] {}",
                        r.get("severity").map(scalar_text).unwrap_or_default(),
                        r.get("title").map(scalar_text).unwrap_or_default()
                    )
                })
                .collect()
        }
        Value::Array(rows) => rows.last().map(key_answer).unwrap_or_default(),
        Value::Object(map) => {
            if let Some(val) = find_priority(result) {
                return vec![scalar_text(val)];
            }
            // Nested collections such as forecast rows or invoice scores
            for val in map.values() {
                if val.is_array() {
                    let nested = key_answer(val);
                    if !nested.is_empty() {
                        return nested;
                    }
                }
            }
            map.iter()
                .next()
                .map(|(k, v)| vec![format!("{}: {}", k, scalar_text(v))])
                .unwrap_or_default()
        }
        other => vec![scalar_text(other)],
    }
}

fn find_priority(obj: &Value) -> Option<&Value> {
    let map = obj.as_object()?;
    for key in PRIORITY_KEYS {
        if let Some(val) = map.get(key).filter(|v| is_scalar(v)) {
            return Some(val);
        }
    }
    for key in PRIORITY_KEYS {
        for nested in map.values().filter(|v| v.is_object()) {
            if let Some(val) = nested.get(key).filter(|v| is_scalar(v)) {
                return Some(val);
            }
        }
    }
    None
}

fn is_scalar(value: &Value) -> bool {
    !(value.is_null() || value.is_array() || value.is_object())
}
