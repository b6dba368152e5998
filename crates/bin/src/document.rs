//! Loading documents from disk as a guide or a content descriptor.

use std::{fs, path::Path};

use guidedoc::{Content, Guide, doc::{Doc, json}};
use tracing::debug;

use crate::cli::DocKind;

/// Fields that only occur in guide documents.
const GUIDE_FIELDS: &[&str] = &["steps", "access", "tags"];

/// Fields that only occur in content documents.
const CONTENT_FIELDS: &[&str] = &["title", "media", "warnings", "hints"];

/// A loaded and validated document
pub enum Loaded {
    Guide(Guide),
    Content(Content),
}

impl Loaded {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Loaded::Guide(_) => "guide",
            Loaded::Content(_) => "content",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Loaded::Guide(guide) => guide.id(),
            Loaded::Content(content) => content.id(),
        }
    }

    pub fn to_document(&self) -> Doc {
        match self {
            Loaded::Guide(guide) => guide.to_document(),
            Loaded::Content(content) => content.to_document(),
        }
    }
}

/// Resolves `auto` by looking at which fields the document carries.
///
/// Anything without a content-only field is treated as a guide.
pub fn detect(doc: &Doc, kind: DocKind) -> DocKind {
    match kind {
        DocKind::Auto => {
            if GUIDE_FIELDS.iter().any(|f| doc.contains_key(f)) {
                DocKind::Guide
            } else if CONTENT_FIELDS.iter().any(|f| doc.contains_key(f)) {
                DocKind::Content
            } else {
                DocKind::Guide
            }
        }
        explicit => explicit,
    }
}

/// Reads, parses and validates the document at `path`.
pub fn load(path: &Path, kind: DocKind) -> Result<Loaded, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)?;
    let doc = json::parse_object_slice(&bytes)?;
    let kind = detect(&doc, kind);
    debug!(path = %path.display(), ?kind, "Loading document");

    Ok(match kind {
        DocKind::Content => Loaded::Content(Content::from_document(&doc)?),
        DocKind::Guide | DocKind::Auto => Loaded::Guide(Guide::from_document(&doc)?),
    })
}
