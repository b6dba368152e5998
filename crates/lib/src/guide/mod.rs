//! The guide aggregate.
//!
//! A [`Guide`] owns an ordered list of [`Step`]s together with a
//! per-language content map, an access-control list and a list of tags. It is
//! the root of change notification for everything it owns: every mutation,
//! including changes to steps made through [`Guide::step_mut`] and
//! [`Guide::try_update_step`], stamps the guide's `lastUpdate`.
//!
//! # Example
//!
//! ```
//! use guidedoc::{Guide, Step};
//!
//! let mut guide = Guide::new("g1");
//! guide.set_content_id("de-DE", "c1");
//! guide.grant_user_access("u1");
//! guide.insert_step(0, Step::chapter("s1", "g2"));
//!
//! assert_eq!(guide.get_step("s1").and_then(Step::target), Some("g2"));
//! assert_eq!(guide.index_of_step("s1"), Some(0));
//! assert!(guide.has_user_access("u1"));
//! ```

use std::{collections::HashSet, str::FromStr, sync::Arc};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    access::AccessEntry,
    clock::{Clock, SystemClock, Timestamp},
    constants::{ACCESS, CONTENT, ID, LAST_UPDATE, STEPS, TAGS},
    doc::{Doc, Kind, List},
    step::Step,
    tag::{Tag, TagKind},
    tracked::{Revision, Tracked, UpdateListener},
    validate::{self, ValidationError},
};


/// An interactive, multi-step guide.
#[derive(Debug, Clone)]
pub struct Guide {
    id: String,
    revision: Revision,
    content: IndexMap<String, String>,
    access: Vec<AccessEntry>,
    tags: Vec<Tag>,
    steps: Vec<Step>,
    extra: Doc,
}

impl Guide {
    /// Creates an empty guide stamped with the system time.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_clock(id, Arc::new(SystemClock))
    }

    /// Creates an empty guide using `clock` for timestamps.
    pub fn with_clock(id: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            id: id.into(),
            revision: Revision::new(clock),
            content: IndexMap::new(),
            access: Vec::new(),
            tags: Vec::new(),
            steps: Vec::new(),
            extra: Doc::new(),
        }
    }

    /// Reconstructs a guide from its document.
    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        Self::from_document_with_clock(doc, Arc::new(SystemClock))
    }

    /// Reconstructs a guide, using `clock` for later timestamps.
    ///
    /// The whole document is validated, steps included, before the guide is
    /// built. Errors inside a step name it by index (`steps[2].id`).
    pub fn from_document_with_clock(
        doc: &Doc,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ValidationError> {
        let id = validate::require_text(doc, ID)?.to_string();
        let last_update = validate::optional_text(doc, LAST_UPDATE)?
            .map(|text| Timestamp::parse(text).map_err(|err| err.at(LAST_UPDATE)))
            .transpose()?;
        let content = validate::optional_string_map(doc, CONTENT)?.unwrap_or_default();

        let access: Vec<AccessEntry> = parse_texts(doc, ACCESS)?;
        let tags: Vec<Tag> = parse_texts(doc, TAGS)?;
        let steps = match validate::optional_array_of(doc, STEPS, Kind::Object)? {
            Some(list) => validate::objects(list)
                .enumerate()
                .map(|(index, step)| {
                    Step::from_document(step)
                        .map_err(|err| err.within(&format!("{STEPS}[{index}]")))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id()) {
                warn!(
                    guide_id = %id,
                    step_id = step.id(),
                    "Duplicate step id in guide document, lookups use the first match"
                );
            }
        }
        debug!(guide_id = %id, steps = steps.len(), "Loaded guide from document");

        let mut extra = doc.without(&[ID, LAST_UPDATE, CONTENT, ACCESS, TAGS, STEPS]);
        validate::keep_empty_containers(doc, &mut extra, &[CONTENT, ACCESS, TAGS, STEPS]);

        Ok(Self {
            id,
            revision: Revision::loaded(last_update, clock),
            content,
            access,
            tags,
            steps,
            extra,
        })
    }

    /// Builds the document of this guide.
    ///
    /// Empty maps and lists are left out, unless they were loaded empty and
    /// have not been filled since.
    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        doc.insert(ID, &self.id);
        if let Some(last_update) = self.revision.last_update() {
            doc.insert(LAST_UPDATE, last_update.as_str());
        }
        if validate::emit_container(&self.extra, CONTENT, self.content.is_empty()) {
            doc.insert(CONTENT, validate::string_map_doc(&self.content));
        }
        if validate::emit_container(&self.extra, ACCESS, self.access.is_empty()) {
            let access: List = self.access.iter().map(ToString::to_string).collect();
            doc.insert(ACCESS, access);
        }
        if validate::emit_container(&self.extra, TAGS, self.tags.is_empty()) {
            let tags: List = self.tags.iter().map(ToString::to_string).collect();
            doc.insert(TAGS, tags);
        }
        if validate::emit_container(&self.extra, STEPS, self.steps.is_empty()) {
            let steps: List = self.steps.iter().map(Step::to_document).collect();
            doc.insert(STEPS, steps);
        }
        doc.extend_missing(&self.extra);
        doc
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the time of the last modification.
    ///
    /// `None` only for a guide loaded without `lastUpdate` and not modified
    /// since.
    pub fn last_update(&self) -> Option<&Timestamp> {
        self.revision.last_update()
    }

    fn touch(&mut self) {
        self.revision.update_performed();
    }

    // Content

    pub fn content_id(&self, language_id: &str) -> Option<&str> {
        self.content.get(language_id).map(String::as_str)
    }

    pub fn content_ids(&self) -> &IndexMap<String, String> {
        &self.content
    }

    pub fn set_content_id(
        &mut self,
        language_id: impl Into<String>,
        content_id: impl Into<String>,
    ) {
        self.content.insert(language_id.into(), content_id.into());
        self.extra.remove(CONTENT);
        self.touch();
    }

    /// Removes the content id for `language_id`. A no-op if there is none.
    pub fn remove_content_id(&mut self, language_id: &str) -> Option<String> {
        let old = self.content.shift_remove(language_id);
        if old.is_some() {
            self.touch();
        }
        old
    }

    // Access control

    pub fn access_entries(&self) -> &[AccessEntry] {
        &self.access
    }

    pub fn has_access(&self, entry: &AccessEntry) -> bool {
        self.access.contains(entry)
    }

    pub fn has_user_access(&self, user_id: &str) -> bool {
        self.access
            .iter()
            .any(|entry| matches!(entry, AccessEntry::User(id) if id == user_id))
    }

    pub fn has_group_access(&self, group_id: &str) -> bool {
        self.access
            .iter()
            .any(|entry| matches!(entry, AccessEntry::Group(id) if id == group_id))
    }

    pub fn has_all_access(&self) -> bool {
        self.has_access(&AccessEntry::All)
    }

    /// Adds `entry` unless an equal entry is present. Returns true if added.
    ///
    /// A user or group entry with an empty identifier has no canonical form
    /// that can be read back, and is never added.
    pub fn grant_access(&mut self, entry: AccessEntry) -> bool {
        if !entry.is_valid() {
            debug!(guide_id = %self.id, %entry, "Ignoring access entry without identifier");
            return false;
        }
        if self.has_access(&entry) {
            return false;
        }
        self.access.push(entry);
        self.extra.remove(ACCESS);
        self.touch();
        true
    }

    /// Removes every entry equal to `entry`. Returns true if any was removed.
    pub fn revoke_access(&mut self, entry: &AccessEntry) -> bool {
        let before = self.access.len();
        self.access.retain(|e| e != entry);
        let removed = self.access.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn grant_user_access(&mut self, user_id: impl Into<String>) -> bool {
        self.grant_access(AccessEntry::user(user_id))
    }

    pub fn grant_group_access(&mut self, group_id: impl Into<String>) -> bool {
        self.grant_access(AccessEntry::group(group_id))
    }

    pub fn grant_all_access(&mut self) -> bool {
        self.grant_access(AccessEntry::All)
    }

    pub fn revoke_user_access(&mut self, user_id: impl Into<String>) -> bool {
        self.revoke_access(&AccessEntry::user(user_id))
    }

    pub fn revoke_group_access(&mut self, group_id: impl Into<String>) -> bool {
        self.revoke_access(&AccessEntry::group(group_id))
    }

    pub fn revoke_all_access(&mut self) -> bool {
        self.revoke_access(&AccessEntry::All)
    }

    // Tags

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the values of all custom tags, in order.
    pub fn custom_tags(&self) -> Vec<&str> {
        self.tag_values(TagKind::Custom)
    }

    /// Returns the values of all typed tags, in order.
    pub fn typed_tags(&self) -> Vec<&str> {
        self.tag_values(TagKind::Typed)
    }

    fn tag_values(&self, kind: TagKind) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|tag| tag.kind() == kind)
            .map(Tag::value)
            .collect()
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Adds `tag` unless an equal tag is present. Returns true if added.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.extra.remove(TAGS);
        self.touch();
        true
    }

    /// Removes every tag equal to `tag`. Returns true if any was removed.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        let removed = self.tags.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn add_custom_tag(&mut self, value: impl Into<String>) -> bool {
        self.add_tag(Tag::custom(value))
    }

    pub fn add_typed_tag(&mut self, value: impl Into<String>) -> bool {
        self.add_tag(Tag::typed(value))
    }

    pub fn remove_custom_tag(&mut self, value: impl Into<String>) -> bool {
        self.remove_tag(&Tag::custom(value))
    }

    pub fn remove_typed_tag(&mut self, value: impl Into<String>) -> bool {
        self.remove_tag(&Tag::typed(value))
    }

    // Steps

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the first step with the given id.
    pub fn get_step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id() == id)
    }

    /// Returns the position of the first step with the given id.
    pub fn index_of_step(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id() == id)
    }

    /// Returns tracked mutable access to the first step with the given id.
    ///
    /// The guide is stamped when the returned guard is dropped, if the step
    /// was borrowed mutably through it.
    pub fn step_mut(&mut self, id: &str) -> Option<Tracked<'_, Step>> {
        let step = self.steps.iter_mut().find(|step| step.id() == id)?;
        Some(Tracked::new(step, &mut self.revision))
    }

    /// Inserts `step` at `index`, shifting later steps.
    ///
    /// # Panics
    ///
    /// Panics if `index > steps().len()`.
    pub fn insert_step(&mut self, index: usize, step: Step) {
        debug!(guide_id = %self.id, step_id = step.id(), index, "Inserting step");
        self.steps.insert(index, step);
        self.extra.remove(STEPS);
        self.touch();
    }

    /// Appends `step`.
    pub fn add_step(&mut self, step: Step) {
        self.insert_step(self.steps.len(), step);
    }

    /// Removes and returns the first step with the given id.
    pub fn remove_step(&mut self, id: &str) -> Option<Step> {
        let index = self.index_of_step(id)?;
        debug!(guide_id = %self.id, step_id = id, index, "Removing step");
        let step = self.steps.remove(index);
        self.touch();
        Some(step)
    }

    /// Applies `f` to the first step with the given id as one all-or-nothing
    /// update.
    ///
    /// If `f` fails the step is restored to its prior state and the guide is
    /// not stamped. Returns `Ok(None)` if no step has the id.
    ///
    /// ```
    /// use guidedoc::{Guide, Step};
    ///
    /// let mut guide = Guide::new("g1");
    /// guide.add_step(Step::action("s1"));
    ///
    /// let result = guide.try_update_step("s1", |step| {
    ///     step.set_next("s2");
    ///     step.set_target("g2")
    /// });
    /// assert!(result.is_err());
    /// assert_eq!(guide.get_step("s1").and_then(Step::next), None);
    /// ```
    pub fn try_update_step<F, R, E>(&mut self, id: &str, f: F) -> Result<Option<R>, E>
    where
        F: FnOnce(&mut Step) -> Result<R, E>,
    {
        let Some(step) = self.steps.iter_mut().find(|step| step.id() == id) else {
            return Ok(None);
        };
        let mut tracked = Tracked::new(step, &mut self.revision);
        let result = f(&mut *tracked);
        if result.is_err() {
            tracked.rollback();
        }
        result.map(Some)
    }
}

/// Parses the canonical strings of the array `field`, locating errors by index.
fn parse_texts<T>(doc: &Doc, field: &str) -> Result<Vec<T>, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    let Some(list) = validate::optional_array_of(doc, field, Kind::Text)? else {
        return Ok(Vec::new());
    };
    validate::texts(list)
        .enumerate()
        .map(|(index, text)| {
            T::from_str(text).map_err(|err| err.at(&format!("{field}[{index}]")))
        })
        .collect()
}
