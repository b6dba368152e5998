//! Reading and writing guide and content documents.
//!
//! These helpers combine the JSON codec in [`crate::doc::json`] with
//! [`Guide::from_document`]/[`Content::from_document`] and their
//! `to_document` counterparts. Read helpers require the top-level JSON value
//! to be an object.
//!
//! ```
//! use guidedoc::io;
//!
//! let guide = io::read_guide(r#"{"id":"g1","steps":[{"id":"s1","type":"milestone"}]}"#).unwrap();
//! assert_eq!(guide.steps().len(), 1);
//!
//! let text = io::export_guide(&guide, false);
//! assert!(text.starts_with(r#"{"id":"g1","#));
//! ```

use std::{fs, path::Path};

use tracing::debug;

use crate::{Content, Guide, Result, doc::json};

/// Parses and validates a guide from JSON text.
pub fn read_guide(text: &str) -> Result<Guide> {
    let doc = json::parse_object(text)?;
    Ok(Guide::from_document(&doc)?)
}

/// Reads, parses and validates a guide from a JSON file.
pub fn read_guide_file(path: impl AsRef<Path>) -> Result<Guide> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading guide file");
    let bytes = fs::read(path)?;
    let doc = json::parse_object_slice(&bytes)?;
    Ok(Guide::from_document(&doc)?)
}

/// Serializes a guide to JSON text, optionally pretty-printed.
pub fn export_guide(guide: &Guide, pretty: bool) -> String {
    json::print_object(&guide.to_document(), pretty)
}

/// Writes a guide to a JSON file, replacing any existing content.
pub fn write_guide(guide: &Guide, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), guide_id = guide.id(), "Writing guide file");
    fs::write(path, export_guide(guide, pretty))?;
    Ok(())
}

/// Parses and validates a content descriptor from JSON text.
pub fn read_content(text: &str) -> Result<Content> {
    let doc = json::parse_object(text)?;
    Ok(Content::from_document(&doc)?)
}

/// Reads, parses and validates a content descriptor from a JSON file.
pub fn read_content_file(path: impl AsRef<Path>) -> Result<Content> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading content file");
    let bytes = fs::read(path)?;
    let doc = json::parse_object_slice(&bytes)?;
    Ok(Content::from_document(&doc)?)
}

/// Serializes a content descriptor to JSON text, optionally pretty-printed.
pub fn export_content(content: &Content, pretty: bool) -> String {
    json::print_object(&content.to_document(), pretty)
}

/// Writes a content descriptor to a JSON file, replacing any existing content.
pub fn write_content(content: &Content, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), content_id = content.id(), "Writing content file");
    fs::write(path, export_content(content, pretty))?;
    Ok(())
}
