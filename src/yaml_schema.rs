//! JSON Schema → OpenAPI-flavoured YAML lines.
//!
//! API Connect only renders a schema correctly when `type` is the first key of
//! every object, and it rejects several JSON-Schema-only keywords. The printer
//! drops those keywords, emits the well-known keys in a fixed order followed by
//! the rest alphabetically, and indents with two spaces per level. Callers add
//! whatever base indentation the surrounding template needs.

use serde_json::{Map, Value};

const EXCLUDED_KEYS: &[&str] = &["$schema", "$id", "$comment", "definitions", "$defs"];

const KEY_ORDER: &[&str] = &[
    "type",
    "format",
    "title",
    "description",
    "required",
    "enum",
    "default",
    "example",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "minLength",
    "maxLength",
    "minItems",
    "maxItems",
    "pattern",
    "properties",
    "items",
    "additionalProperties",
    "allOf",
    "oneOf",
    "anyOf",
];

/// Render `schema` as YAML lines without a trailing newline.
pub fn render_schema_yaml(schema: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    render_value(schema, 0, &mut lines);
    lines
}

fn render_value(value: &Value, depth: usize, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => render_object(map, depth, lines),
        Value::Array(items) => render_array(items, depth, lines),
        scalar => lines.push(format!("{}{}", indent(depth), scalar_text(scalar))),
    }
}

fn render_object(map: &Map<String, Value>, depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for key in ordered_keys(map) {
        let value = &map[key];
        match value {
            Value::Object(_) | Value::Array(_) => {
                lines.push(format!("{pad}{key}:"));
                render_value(value, depth + 1, lines);
            }
            scalar => lines.push(format!("{pad}{key}: {}", scalar_text(scalar))),
        }
    }
}

fn render_array(items: &[Value], depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for item in items {
        match item {
            Value::Object(_) | Value::Array(_) => {
                let mut nested = Vec::new();
                render_value(item, depth + 1, &mut nested);
                let mut nested = nested.into_iter();
                match nested.next() {
                    // nested lines already sit one level deeper, which lines up
                    // with the text after "- "
                    Some(first) => {
                        lines.push(format!("{pad}- {}", first.trim_start()));
                        lines.extend(nested);
                    }
                    None => lines.push(format!("{pad}-")),
                }
            }
            scalar => lines.push(format!("{pad}- {}", scalar_text(scalar))),
        }
    }
}

fn ordered_keys(map: &Map<String, Value>) -> Vec<&str> {
    let mut keys: Vec<&str> = KEY_ORDER
        .iter()
        .copied()
        .filter(|key| map.contains_key(*key) && !EXCLUDED_KEYS.contains(key))
        .collect();
    let mut remaining: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|key| !KEY_ORDER.contains(key) && !EXCLUDED_KEYS.contains(key))
        .collect();
    remaining.sort_unstable();
    keys.extend(remaining);
    keys
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote_if_needed(text),
        // containers never reach here
        other => other.to_string(),
    }
}

fn quote_if_needed(text: &str) -> String {
    let needs_quotes = text.is_empty()
        || text.contains(':')
        || text.contains('#')
        || text.starts_with(['*', '&', '!']);
    if needs_quotes {
        format!("'{}'", text.replace('\'', "''"))
    } else {
        text.to_string()
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
