use colored::Colorize;
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::scalar_text;
use crate::config::Branding;

/// Format the envelope as tables: a banner, the result broken into one table
/// per section, then warnings and methodology.
pub fn print_table(value: &Value, branding: &Branding) {
    print_banner(branding);

    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_section("result", result);
                print_envelope_notes(map);
            } else {
                print_section("output", value);
            }
        }
        other => print_section("output", other),
    }
}

fn print_banner(branding: &Branding) {
    println!("{} {}", branding.icon, branding.name.bold());
    println!("{} | {}\n", branding.instructor, branding.credentials.dimmed());
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow().bold());
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_section(title: &str, value: &Value) {
    match value {
        Value::Object(map) => print_object(title, map),
        Value::Array(arr) => print_array(title, arr),
        other => println!("{}: {}", title, scalar_text(other)),
    }
}

/// Scalar fields (and flat lists) go in one Field/Value table; nested
/// objects and row lists each get their own titled table.
fn print_object(title: &str, map: &Map<String, Value>) {
    if let Some(table) = sensitivity_matrix(map) {
        println!("{}\n{}\n", heading(title), table);
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut flat_rows = 0;
    let mut nested = Vec::new();
    for (key, val) in map {
        if is_flat(val) {
            builder.push_record([key.clone(), flat_text(val)]);
            flat_rows += 1;
        } else {
            nested.push((key, val));
        }
    }

    if flat_rows > 0 {
        println!("{}\n{}\n", heading(title), Table::from(builder));
    }
    for (key, val) in nested {
        print_section(&format!("{}.{}", title, key), val);
    }
}

fn print_array(title: &str, arr: &[Value]) {
    if arr.is_empty() {
        println!("{}\n(empty)\n", heading(title));
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(headers.clone());
        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(flat_text).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}\n{}\n", heading(title), Table::from(builder));
    } else if arr.iter().all(Value::is_array) {
        let mut builder = Builder::default();
        for row in arr.iter().filter_map(Value::as_array) {
            builder.push_record(row.iter().map(scalar_text).collect::<Vec<_>>());
        }
        println!("{}\n{}\n", heading(title), Table::from(builder));
    } else {
        println!("{}", heading(title));
        for item in arr {
            println!("  {}", scalar_text(item));
        }
        println!();
    }
}

/// Render a sensitivity grid with DSO deltas as rows and DIO deltas as columns.
fn sensitivity_matrix(map: &Map<String, Value>) -> Option<Table> {
    let dso = map.get("dso_deltas")?.as_array()?;
    let dio = map.get("dio_deltas")?.as_array()?;
    let cells = map.get("cash_impact")?.as_array()?;

    let mut builder = Builder::default();
    let mut header = vec!["DSO \\ DIO".to_string()];
    header.extend(dio.iter().map(scalar_text));
    builder.push_record(header);
    for (d, row) in dso.iter().zip(cells.iter()) {
        let mut record = vec![scalar_text(d)];
        if let Some(row) = row.as_array() {
            record.extend(row.iter().map(scalar_text));
        }
        builder.push_record(record);
    }
    Some(Table::from(builder))
}

fn is_flat(value: &Value) -> bool {
    match value {
        Value::Object(_) => false,
        Value::Array(arr) => arr.iter().all(|v| !v.is_object() && !v.is_array()),
        _ => true,
    }
}

fn flat_text(value: &Value) -> String {
    match value {
        Value::Array(arr) => arr.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        other => scalar_text(other),
    }
}

fn heading(title: &str) -> String {
    title.cyan().bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_detection() {
        assert!(is_flat(&json!("1.2")));
        assert!(is_flat(&json!(["-10", "0", "10"])));
        assert!(!is_flat(&json!({ "a": 1 })));
        assert!(!is_flat(&json!([{ "year": 1 }])));
    }

    #[test]
    fn test_flat_text_joins_lists() {
        assert_eq!(flat_text(&json!(["-5", "0", "5"])), "-5, 0, 5");
    }

    #[test]
    fn test_sensitivity_matrix_needs_all_axes() {
        let grid = json!({
            "base_ccc": "26",
            "dso_deltas": ["0", "5"],
            "dio_deltas": ["0"],
            "cash_impact": [["0"], ["5479.45"]],
        });
        assert!(sensitivity_matrix(grid.as_object().unwrap()).is_some());

        let partial = json!({ "dso_deltas": ["0"] });
        assert!(sensitivity_matrix(partial.as_object().unwrap()).is_none());
    }
}
