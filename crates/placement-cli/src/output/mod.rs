use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table::TableOptions::from_env()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Arrays of records become one row per record with the union of their keys
/// as columns, in first-seen order. A single object becomes key/value rows.
fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers = Vec::<String>::new();
            for map in items.iter().filter_map(Value::as_object) {
                for key in map.keys() {
                    if !headers.contains(key) {
                        headers.push(key.clone());
                    }
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect::<Vec<_>>();
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            Ok(table::render_table(&header_refs, &rows, options))
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            Ok(table::render_table(&["value"], &rows, options))
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![cell(&scalar)]], options)),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: &'static str,
        placement_count: u32,
        requirements: Vec<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            id: "c1",
            placement_count: 7,
            requirements: vec![],
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["placementCount"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&vec!["a", "b"], OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"["a","b"]"#);
    }

    #[test]
    fn record_list_renders_one_row_per_record() {
        let rows = vec![
            Row {
                id: "c1",
                placement_count: 150,
                requirements: vec!["Java", "SQL"],
            },
            Row {
                id: "c2",
                placement_count: 3,
                requirements: vec![],
            },
        ];
        let out = render_table(&rows, TableOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("placementCount"));
        assert!(lines[2].contains("Java, SQL"));
    }

    #[test]
    fn empty_list_says_so() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render_table(&rows, TableOptions::default()).unwrap(), "(no rows)");
    }

    #[test]
    fn object_renders_key_value_rows() {
        let value = Row {
            id: "c1",
            placement_count: 7,
            requirements: vec![],
        };
        let out = render_table(&value, TableOptions::default()).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("placementCount"));
    }
}
