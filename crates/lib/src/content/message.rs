//! Warnings and hints of a content descriptor.

use std::hash::{Hash, Hasher};

use crate::{
    constants::{ICON, TEXT},
    doc::Doc,
    validate::{self, ValidationError},
};

/// A message with an optional icon, used for warnings and hints.
///
/// Two messages are equal when their text and icon are equal; unrecognised
/// fields kept from a loaded document do not take part in equality.
///
/// ```
/// use guidedoc::IconizedMessage;
///
/// let a = IconizedMessage::with_icon("Hot surface", "fire");
/// let b = IconizedMessage::with_icon("Hot surface", "fire");
/// assert_eq!(a, b);
/// assert_ne!(a, IconizedMessage::new("Hot surface"));
/// ```
#[derive(Debug, Clone)]
pub struct IconizedMessage {
    text: String,
    icon: Option<String>,
    extra: Doc,
}

impl IconizedMessage {
    /// Creates a message without an icon.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            extra: Doc::new(),
        }
    }

    pub fn with_icon(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::new(text)
        }
    }

    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        Ok(Self {
            text: validate::require_text(doc, TEXT)?.to_string(),
            icon: validate::optional_text(doc, ICON)?.map(str::to_string),
            extra: doc.without(&[TEXT, ICON]),
        })
    }

    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        doc.insert(TEXT, &self.text);
        if let Some(icon) = &self.icon {
            doc.insert(ICON, icon);
        }
        doc.extend_missing(&self.extra);
        doc
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    pub fn clear_icon(&mut self) -> Option<String> {
        self.icon.take()
    }
}

impl PartialEq for IconizedMessage {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.icon == other.icon
    }
}

impl Eq for IconizedMessage {}

impl Hash for IconizedMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.icon.hash(state);
    }
}
