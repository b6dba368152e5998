//! Generic hierarchical documents.
//!
//! Every guide, step, option, content descriptor and message is persisted as a
//! node of a JSON-shaped document tree. This module provides that tree:
//!
//! - [`Doc`] - an object with insertion-ordered, unique keys
//! - [`List`] - an ordered array
//! - [`Value`] - any node (null, boolean, number, text, object, array)
//! - [`json`] - the text codec (parse and print)
//!
//! The typed model in [`crate::guide`], [`crate::step`] and [`crate::content`]
//! builds these trees with [`Doc::get_or_create_object`] and
//! [`Doc::get_or_create_array`], and reads them back through
//! [`crate::validate`].
//!
//! # Usage
//!
//! ```
//! use guidedoc::doc::Doc;
//!
//! let mut doc = Doc::new();
//! doc.insert("id", "g1");
//! doc.get_or_create_object("content").insert("de-DE", "c1");
//! doc.get_or_create_array("tags").push("#vip");
//!
//! assert_eq!(doc.get_text("id"), Some("g1"));
//! assert_eq!(doc.to_string(), r##"{"id":"g1","content":{"de-DE":"c1"},"tags":["#vip"]}"##);
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod errors;
pub mod json;
pub mod list;
pub mod value;

pub use errors::DocError;
pub use list::List;
pub use value::{Kind, Value};

/// A document object: ordered, unique string keys mapped to [`Value`]s.
///
/// Keys keep their insertion order; overwriting a key keeps its position and
/// removing a key preserves the order of the remaining ones. Equality ignores
/// key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Doc {
    children: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document object
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Returns true if the object has no keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the object contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Gets the text stored under `key`, if it is a string
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Sets `key` to `value`, returning the previous value if present.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.shift_remove(key)
    }

    /// Returns the object stored under `key`, creating it first if the key is
    /// absent or holds a value of another kind.
    pub fn get_or_create_object(&mut self, key: impl Into<String>) -> &mut Doc {
        let entry = self
            .children
            .entry(key.into())
            .or_insert_with(|| Value::Object(Doc::new()));
        if !matches!(entry, Value::Object(_)) {
            *entry = Value::Object(Doc::new());
        }
        match entry {
            Value::Object(doc) => doc,
            _ => unreachable!(),
        }
    }

    /// Returns the array stored under `key`, creating it first if the key is
    /// absent or holds a value of another kind.
    pub fn get_or_create_array(&mut self, key: impl Into<String>) -> &mut List {
        let entry = self
            .children
            .entry(key.into())
            .or_insert_with(|| Value::Array(List::new()));
        if !matches!(entry, Value::Array(_)) {
            *entry = Value::Array(List::new());
        }
        match entry {
            Value::Array(list) => list,
            _ => unreachable!(),
        }
    }

    /// Returns an iterator over all key-value pairs in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.children.iter()
    }

    /// Returns an iterator over all keys in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.children.keys()
    }

    /// Returns an iterator over all values in order
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.children.values()
    }

    /// Copies every field of `other` that is not already present.
    ///
    /// Used to put preserved, unrecognised fields back behind the fields a
    /// typed entity writes itself.
    pub fn extend_missing(&mut self, other: &Doc) {
        for (key, value) in other.iter() {
            if !self.contains_key(key) {
                self.children.insert(key.clone(), value.clone());
            }
        }
    }

    /// Returns a copy of this object without the listed keys.
    pub fn without(&self, keys: &[&str]) -> Doc {
        self.iter()
            .filter(|(key, _)| !keys.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&json::print_object(self, false))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Doc {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
