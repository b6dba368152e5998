//! JSON text codec for documents.
//!
//! Parsing and printing are delegated to `serde_json` (built with
//! `preserve_order`, so object keys keep their textual order). This module
//! only converts between its tree and [`Value`].

use super::{Doc, DocError, Value};

/// Parses text into a document value.
pub fn parse(text: &str) -> Result<Value, DocError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(raw))
}

/// Parses raw bytes (UTF-8 JSON) into a document value.
pub fn parse_slice(bytes: &[u8]) -> Result<Value, DocError> {
    let raw: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(Value::from(raw))
}

/// Parses text that must hold a JSON object at the top level.
pub fn parse_object(text: &str) -> Result<Doc, DocError> {
    into_object(parse(text)?)
}

/// Parses bytes that must hold a JSON object at the top level.
pub fn parse_object_slice(bytes: &[u8]) -> Result<Doc, DocError> {
    into_object(parse_slice(bytes)?)
}

fn into_object(value: Value) -> Result<Doc, DocError> {
    match value {
        Value::Object(doc) => Ok(doc),
        other => Err(DocError::NotAnObject {
            found: other.kind(),
        }),
    }
}

/// Prints a value as JSON text, optionally pretty-printed with two-space indentation.
pub fn print(value: &Value, pretty: bool) -> String {
    let raw = serde_json::Value::from(value);
    if pretty {
        format!("{raw:#}")
    } else {
        raw.to_string()
    }
}

/// Prints a document object as JSON text.
pub fn print_object(doc: &Doc, pretty: bool) -> String {
    let raw = serde_json::Value::Object(
        doc.iter()
            .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
            .collect(),
    );
    if pretty {
        format!("{raw:#}")
    } else {
        raw.to_string()
    }
}
