//! Media attachment of a content descriptor.

use crate::{
    constants::{MIME_TYPE, PATH},
    doc::Doc,
    validate::{self, ValidationError},
};

/// A media file referenced by a [`Content`](super::Content).
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    mime_type: String,
    path: String,
    extra: Doc,
}

impl Media {
    pub fn new(mime_type: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            path: path.into(),
            extra: Doc::new(),
        }
    }

    /// Reconstructs a media reference; both `mimeType` and `path` are required.
    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        Ok(Self {
            mime_type: validate::require_text(doc, MIME_TYPE)?.to_string(),
            path: validate::require_text(doc, PATH)?.to_string(),
            extra: doc.without(&[MIME_TYPE, PATH]),
        })
    }

    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        doc.insert(MIME_TYPE, &self.mime_type);
        doc.insert(PATH, &self.path);
        doc.extend_missing(&self.extra);
        doc
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn set_mime_type(&mut self, mime_type: impl Into<String>) {
        self.mime_type = mime_type.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }
}
