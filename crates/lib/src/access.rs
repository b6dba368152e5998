//! Access-control entries.
//!
//! An [`AccessEntry`] grants visibility of a guide to one user, one group, or
//! everyone. Entries are stored in the guide document in their canonical
//! string form:
//!
//! | entry              | canonical form |
//! |--------------------|----------------|
//! | `User("alice")`    | `@user:alice`  |
//! | `Group("staff")`   | `@group:staff` |
//! | `All`              | `@all`         |
//!
//! ```
//! use guidedoc::AccessEntry;
//!
//! let entry: AccessEntry = "@group:staff".parse().unwrap();
//! assert_eq!(entry, AccessEntry::group("staff"));
//! assert_eq!(entry.to_string(), "@group:staff");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{ACCESS_ALL, ACCESS_GROUP_PREFIX, ACCESS_USER_PREFIX},
    validate::ValidationError,
};

/// The variant of an [`AccessEntry`], without its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    User,
    Group,
    All,
}

/// A single access grant.
///
/// Equality and hashing are structural over the variant and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessEntry {
    /// Access for one user
    User(String),
    /// Access for every member of a group
    Group(String),
    /// Access for everyone
    All,
}

impl AccessEntry {
    /// Creates a user entry. The entry is only [valid](Self::is_valid) if
    /// `id` is not empty.
    pub fn user(id: impl Into<String>) -> Self {
        AccessEntry::User(id.into())
    }

    /// Creates a group entry. The entry is only [valid](Self::is_valid) if
    /// `id` is not empty.
    pub fn group(id: impl Into<String>) -> Self {
        AccessEntry::Group(id.into())
    }

    pub fn all() -> Self {
        AccessEntry::All
    }

    /// Returns the variant of this entry.
    pub fn kind(&self) -> AccessKind {
        match self {
            AccessEntry::User(_) => AccessKind::User,
            AccessEntry::Group(_) => AccessKind::Group,
            AccessEntry::All => AccessKind::All,
        }
    }

    /// Returns true if the canonical form of this entry parses back to it.
    ///
    /// User and group entries need a non-empty identifier.
    ///
    /// ```
    /// # use guidedoc::AccessEntry;
    /// assert!(AccessEntry::user("alice").is_valid());
    /// assert!(!AccessEntry::group("").is_valid());
    /// assert!("@group:".parse::<AccessEntry>().is_err());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.id().is_none_or(|id| !id.is_empty())
    }

    /// Returns the user or group identifier, `None` for [`AccessEntry::All`].
    pub fn id(&self) -> Option<&str> {
        match self {
            AccessEntry::User(id) | AccessEntry::Group(id) => Some(id),
            AccessEntry::All => None,
        }
    }
}

impl fmt::Display for AccessEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessEntry::User(id) => write!(f, "{ACCESS_USER_PREFIX}{id}"),
            AccessEntry::Group(id) => write!(f, "{ACCESS_GROUP_PREFIX}{id}"),
            AccessEntry::All => f.write_str(ACCESS_ALL),
        }
    }
}

impl FromStr for AccessEntry {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidAccessEntry {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if s == ACCESS_ALL {
            return Ok(AccessEntry::All);
        }
        let (id, entry) = if let Some(id) = s.strip_prefix(ACCESS_USER_PREFIX) {
            (id, AccessEntry::User(id.to_string()))
        } else if let Some(id) = s.strip_prefix(ACCESS_GROUP_PREFIX) {
            (id, AccessEntry::Group(id.to_string()))
        } else {
            return Err(invalid("expected '@user:<id>', '@group:<id>' or '@all'"));
        };
        if id.is_empty() {
            return Err(invalid("identifier must not be empty"));
        }
        Ok(entry)
    }
}

impl Serialize for AccessEntry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccessEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
