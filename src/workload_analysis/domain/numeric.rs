use serde_json::Value;

/// Coerces a raw JSON value into a finite f64.
///
/// Summary rows come back from the analysis service with numeric columns that
/// may be numbers, numeric strings, placeholders like "-", or missing
/// entirely. Aggregations treat anything that does not parse to a finite
/// number as zero.
pub fn safe_numeric(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}
