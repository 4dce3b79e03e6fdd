use std::io::Read;

use serde_json::{Map, Value};
use trivia_core::errors::CoreError;

/// Parse a `--body` argument. `-` reads the payload from stdin.
pub fn read_body(raw: &str) -> anyhow::Result<Value> {
    let text = if raw == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        raw.to_string()
    };
    parse_body(&text)
}

fn parse_body(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text)
        .map_err(|e| CoreError::Unprocessable(format!("body is not valid JSON: {e}")).into())
}

/// Build a JSON object from the flags that were actually given, so that
/// absent flags show up as absent fields.
pub fn object_from_fields(fields: Vec<(&str, Option<Value>)>) -> Value {
    let map: Map<String, Value> = fields
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect();
    Value::Object(map)
}
