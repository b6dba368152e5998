//! Guide classification tags.
//!
//! A [`Tag`] is either custom (`#value`) or typed (`@value`). The marker
//! character is part of the canonical form stored in the guide document.
//!
//! ```
//! use guidedoc::{Tag, TagKind};
//!
//! let tag: Tag = "#vip".parse().unwrap();
//! assert_eq!(tag.kind(), TagKind::Custom);
//! assert_eq!(tag.value(), "vip");
//! assert!("vip".parse::<Tag>().is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{CUSTOM_TAG_MARKER, TYPED_TAG_MARKER},
    validate::ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Free-form label, marker `#`
    Custom,
    /// Label from a known vocabulary, marker `@`
    Typed,
}

impl TagKind {
    /// Returns the marker character of this kind.
    pub fn marker(self) -> char {
        match self {
            TagKind::Custom => CUSTOM_TAG_MARKER,
            TagKind::Typed => TYPED_TAG_MARKER,
        }
    }
}

/// A tag attached to a guide.
///
/// Equality and hashing are structural over kind and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    kind: TagKind,
    value: String,
}

impl Tag {
    pub fn new(kind: TagKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self::new(TagKind::Custom, value)
    }

    pub fn typed(value: impl Into<String>) -> Self {
        Self::new(TagKind::Typed, value)
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_custom(&self) -> bool {
        self.kind == TagKind::Custom
    }

    pub fn is_typed(&self) -> bool {
        self.kind == TagKind::Typed
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.value)
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let kind = match chars.next() {
            Some(CUSTOM_TAG_MARKER) => TagKind::Custom,
            Some(TYPED_TAG_MARKER) => TagKind::Typed,
            _ => {
                return Err(ValidationError::InvalidTag {
                    value: s.to_string(),
                    reason: format!(
                        "expected a '{CUSTOM_TAG_MARKER}' or '{TYPED_TAG_MARKER}' marker"
                    ),
                });
            }
        };
        Ok(Tag::new(kind, chars.as_str()))
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
