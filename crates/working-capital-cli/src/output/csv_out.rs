use serde_json::{Map, Value};
use std::io;

use super::scalar_text;

/// Write the result as CSV to stdout.
///
/// Row lists (forecast years, insights) become one row per item; a
/// sensitivity grid becomes a DSO x DIO matrix; anything else is flattened
/// to `field,value` pairs with dotted paths.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    for record in csv_records(result) {
        if let Err(e) = wtr.write_record(&record) {
            tracing::error!(error = %e, "failed to write CSV record");
            return;
        }
    }
    let _ = wtr.flush();
}

fn csv_records(result: &Value) -> Vec<Vec<String>> {
    match result {
        Value::Array(arr) if arr.first().map(Value::is_object).unwrap_or(false) => {
            array_records(arr)
        }
        Value::Object(map) => {
            if let Some(rows) = matrix_records(map) {
                return rows;
            }
            let mut rows = vec![vec!["field".to_string(), "value".to_string()]];
            flatten("", result, &mut rows);
            rows
        }
        other => {
            let mut rows = vec![vec!["field".to_string(), "value".to_string()]];
            flatten("result", other, &mut rows);
            rows
        }
    }
}

fn array_records(arr: &[Value]) -> Vec<Vec<String>> {
    let Some(Value::Object(first)) = arr.first() else {
        return Vec::new();
    };
    let headers: Vec<String> = first.keys().cloned().collect();
    let mut rows = vec![headers.clone()];
    for item in arr.iter().filter_map(Value::as_object) {
        rows.push(
            headers
                .iter()
                .map(|h| item.get(h.as_str()).map(scalar_text).unwrap_or_default())
                .collect(),
        );
    }
    rows
}

fn matrix_records(map: &Map<String, Value>) -> Option<Vec<Vec<String>>> {
    let dso = map.get("dso_deltas")?.as_array()?;
    let dio = map.get("dio_deltas")?.as_array()?;
    let cells = map.get("cash_impact")?.as_array()?;

    let mut header = vec!["dso_delta".to_string()];
    header.extend(dio.iter().map(|d| format!("dio_{}", scalar_text(d))));
    let mut rows = vec![header];
    for (d, row) in dso.iter().zip(cells.iter()) {
        let mut record = vec![scalar_text(d)];
        record.extend(row.as_array()?.iter().map(scalar_text));
        rows.push(record);
    }
    Some(rows)
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, val, rows);
            }
        }
        Value::Array(arr) => {
            for (i, val) in arr.iter().enumerate() {
                flatten(&format!("{}[{}]", prefix, i), val, rows);
            }
        }
        other => rows.push(vec![prefix.to_string(), scalar_text(other)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_result_is_flattened() {
        let result = json!({
            "metrics": { "ccc": "26" },
            "all_passing": true,
            "results": [{ "name": "Minimum DSCR" }],
        });
        let rows = csv_records(&result);
        assert_eq!(rows[0], vec!["field", "value"]);
        assert!(rows.contains(&vec!["metrics.ccc".to_string(), "26".to_string()]));
        assert!(rows.contains(&vec!["all_passing".to_string(), "true".to_string()]));
        assert!(rows.contains(&vec!["results[0].name".to_string(), "Minimum DSCR".to_string()]));
    }

    #[test]
    fn test_row_lists_use_headers() {
        let result = json!([
            { "year": 1, "revenue": "22000000" },
            { "year": 2, "revenue": "24200000" },
        ]);
        let rows = csv_records(&result);
        assert_eq!(rows.len(), 3);
        let col = rows[0].iter().position(|h| h == "revenue").unwrap();
        assert_eq!(rows[2][col], "24200000");
    }

    #[test]
    fn test_sensitivity_matrix_layout() {
        let result = json!({
            "base_ccc": "26",
            "dso_deltas": ["0", "5"],
            "dio_deltas": ["0", "5"],
            "cash_impact": [["0", "1"], ["1", "2"]],
            "resulting_ccc": [["26", "21"], ["21", "16"]],
        });
        let rows = csv_records(&result);
        assert_eq!(rows[0], vec!["dso_delta", "dio_0", "dio_5"]);
        assert_eq!(rows[2], vec!["5", "1", "2"]);
    }
}
