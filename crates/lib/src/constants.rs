//! Constants used throughout the guidedoc library.
//!
//! This module provides central definitions for the field names of the
//! interchange documents and the canonical markers of the value types.

// Shared fields

/// Identity of a guide, step or content descriptor.
pub const ID: &str = "id";

/// Step discriminator.
pub const TYPE: &str = "type";

/// Per-language content map (`languageId -> contentId`).
pub const CONTENT: &str = "content";

/// Suggested successor step of a step or option.
pub const NEXT: &str = "next";

/// Modification timestamp of an aggregate root.
pub const LAST_UPDATE: &str = "lastUpdate";

// Guide fields

pub const ACCESS: &str = "access";
pub const TAGS: &str = "tags";
pub const STEPS: &str = "steps";

// Step fields

/// Target guide of a chapter step.
pub const TARGET: &str = "target";

/// Nested sub-document of a branch step.
pub const USER_REQUEST: &str = "userRequest";

pub const OPTIONS: &str = "options";

// Content fields

pub const LANGUAGE_ID: &str = "languageId";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const MEDIA: &str = "media";
pub const MIME_TYPE: &str = "mimeType";
pub const PATH: &str = "path";
pub const WARNINGS: &str = "warnings";
pub const HINTS: &str = "hints";
pub const TEXT: &str = "text";
pub const ICON: &str = "icon";

// Canonical value markers

/// Prefix of a user access entry.
pub const ACCESS_USER_PREFIX: &str = "@user:";

/// Prefix of a group access entry.
pub const ACCESS_GROUP_PREFIX: &str = "@group:";

/// The access entry granting everyone.
pub const ACCESS_ALL: &str = "@all";

/// Marker of a custom tag.
pub const CUSTOM_TAG_MARKER: char = '#';

/// Marker of a typed tag.
pub const TYPED_TAG_MARKER: char = '@';
