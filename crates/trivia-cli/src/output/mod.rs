use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become a key/value table for their scalar fields, followed by one
/// section per nested array or map (e.g. `questions`, `categories`).
fn render_table(value: &Value) -> String {
    match value {
        Value::Object(map) => render_object(map),
        Value::Array(items) => render_array_table(items),
        scalar => table::render_entity_table(&["value"], &[vec![value_to_cell(scalar)]]),
    }
}

fn render_object(map: &Map<String, Value>) -> String {
    let scalars: Vec<Vec<String>> = map
        .iter()
        .filter(|(_, v)| !v.is_array() && !v.is_object())
        .map(|(k, v)| vec![k.clone(), value_to_cell(v)])
        .collect();

    let mut sections = Vec::new();
    if !scalars.is_empty() {
        sections.push(table::render_entity_table(&["key", "value"], &scalars));
    }
    for (key, nested) in map {
        match nested {
            Value::Array(items) => {
                sections.push(format!("{key}:\n{}", render_array_table(items)));
            }
            Value::Object(inner) => {
                let rows: Vec<Vec<String>> = inner
                    .iter()
                    .map(|(k, v)| vec![k.clone(), value_to_cell(v)])
                    .collect();
                sections.push(format!(
                    "{key}:\n{}",
                    table::render_entity_table(&["id", "value"], &rows)
                ));
            }
            _ => {}
        }
    }
    sections.join("\n\n")
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows);
    }

    // Columns appear in first-seen key order across rows.
    let mut headers = Vec::<String>::new();
    for item in items.iter().filter_map(Value::as_object) {
        for key in item.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
