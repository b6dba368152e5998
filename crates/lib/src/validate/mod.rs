//! Shape checks for documents loaded from external input.
//!
//! Every `from_document` constructor runs its input through these functions
//! before building anything, so a malformed document fails with a
//! [`ValidationError`] and no partially constructed entity escapes.
//!
//! The `require_*` functions fail when the field is absent. The `optional_*`
//! functions return `None` when it is absent but still fail when it is present
//! with the wrong kind. A JSON `null` counts as the wrong kind.

use indexmap::IndexMap;

use crate::doc::{Doc, Kind, List, Value};

pub mod errors;

pub use errors::ValidationError;

/// Checks that `value` has the `expected` kind.
fn expect_kind(field: &str, value: &Value, expected: Kind) -> Result<(), ValidationError> {
    let found = value.kind();
    if found == expected {
        Ok(())
    } else {
        Err(ValidationError::WrongType {
            field: field.to_string(),
            expected,
            found,
        })
    }
}

fn missing(field: &str, expected: Kind) -> ValidationError {
    ValidationError::MissingField {
        field: field.to_string(),
        expected,
    }
}

/// Returns the string stored under `field`, failing if it is absent or not a string.
pub fn require_text<'a>(doc: &'a Doc, field: &str) -> Result<&'a str, ValidationError> {
    optional_text(doc, field)?.ok_or_else(|| missing(field, Kind::Text))
}

/// Like [`require_text`], but additionally rejects the empty string.
pub fn require_non_empty_text<'a>(doc: &'a Doc, field: &str) -> Result<&'a str, ValidationError> {
    let text = require_text(doc, field)?;
    if text.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(text)
}

/// Returns the string stored under `field` if present.
pub fn optional_text<'a>(doc: &'a Doc, field: &str) -> Result<Option<&'a str>, ValidationError> {
    match doc.get(field) {
        None => Ok(None),
        Some(Value::Text(text)) => Ok(Some(text)),
        Some(other) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: Kind::Text,
            found: other.kind(),
        }),
    }
}

/// Returns the object stored under `field`, failing if it is absent or not an object.
pub fn require_object<'a>(doc: &'a Doc, field: &str) -> Result<&'a Doc, ValidationError> {
    optional_object(doc, field)?.ok_or_else(|| missing(field, Kind::Object))
}

/// Returns the object stored under `field` if present.
pub fn optional_object<'a>(doc: &'a Doc, field: &str) -> Result<Option<&'a Doc>, ValidationError> {
    match doc.get(field) {
        None => Ok(None),
        Some(Value::Object(object)) => Ok(Some(object)),
        Some(other) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: Kind::Object,
            found: other.kind(),
        }),
    }
}

/// Returns the array stored under `field`, checking that every element has
/// the `element` kind.
///
/// Element errors name the offending index, e.g. `tags[3]`.
pub fn require_array_of<'a>(
    doc: &'a Doc,
    field: &str,
    element: Kind,
) -> Result<&'a List, ValidationError> {
    optional_array_of(doc, field, element)?.ok_or_else(|| missing(field, Kind::Array))
}

/// Returns the array stored under `field` if present, checking element kinds.
pub fn optional_array_of<'a>(
    doc: &'a Doc,
    field: &str,
    element: Kind,
) -> Result<Option<&'a List>, ValidationError> {
    let list = match doc.get(field) {
        None => return Ok(None),
        Some(Value::Array(list)) => list,
        Some(other) => {
            return Err(ValidationError::WrongType {
                field: field.to_string(),
                expected: Kind::Array,
                found: other.kind(),
            });
        }
    };
    for (index, item) in list.iter().enumerate() {
        expect_kind(&format!("{field}[{index}]"), item, element)?;
    }
    Ok(Some(list))
}

/// Returns the string-to-string map stored under `field`, failing if it is
/// absent, not an object, or holds a non-string value.
pub fn require_string_map(
    doc: &Doc,
    field: &str,
) -> Result<IndexMap<String, String>, ValidationError> {
    optional_string_map(doc, field)?.ok_or_else(|| missing(field, Kind::Object))
}

/// Returns the string-to-string map stored under `field` if present.
///
/// Entry errors name the offending key, e.g. `content.de-DE`.
pub fn optional_string_map(
    doc: &Doc,
    field: &str,
) -> Result<Option<IndexMap<String, String>>, ValidationError> {
    let Some(object) = optional_object(doc, field)? else {
        return Ok(None);
    };
    let mut map = IndexMap::with_capacity(object.len());
    for (key, value) in object.iter() {
        match value {
            Value::Text(text) => {
                map.insert(key.clone(), text.clone());
            }
            other => {
                return Err(ValidationError::WrongType {
                    field: format!("{field}.{key}"),
                    expected: Kind::Text,
                    found: other.kind(),
                });
            }
        }
    }
    Ok(Some(map))
}

/// Returns the text elements of a validated string array.
pub(crate) fn texts(list: &List) -> impl Iterator<Item = &str> {
    list.iter().filter_map(Value::as_text)
}

/// Returns the object elements of a validated object array.
pub(crate) fn objects(list: &List) -> impl Iterator<Item = &Doc> {
    list.iter().filter_map(Value::as_object)
}

/// Builds a document object from a string map.
pub(crate) fn string_map_doc(map: &IndexMap<String, String>) -> Doc {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Copies every listed field of `doc` that holds an empty object or array
/// into `extra`.
///
/// Built documents leave empty containers out. A container that was present
/// but empty on load is remembered this way, so the document prints back as
/// it was read until a mutation fills the container.
pub(crate) fn keep_empty_containers(doc: &Doc, extra: &mut Doc, fields: &[&str]) {
    for &field in fields {
        let Some(value) = doc.get(field) else {
            continue;
        };
        let empty = match value {
            Value::Object(object) => object.is_empty(),
            Value::Array(list) => list.is_empty(),
            _ => false,
        };
        if empty {
            extra.insert(field, value.clone());
        }
    }
}

/// Returns true if the container `field` belongs in a built document: it
/// has entries, or it was loaded empty (see [`keep_empty_containers`]).
pub(crate) fn emit_container(extra: &Doc, field: &str, is_empty: bool) -> bool {
    !is_empty || extra.contains_key(field)
}
