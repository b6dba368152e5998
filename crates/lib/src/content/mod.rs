//! Language-specific content descriptors.
//!
//! A [`Content`] is a standalone aggregate, referenced by id from guides,
//! steps and options. It carries a title, a description, an optional
//! [`Media`] attachment and ordered lists of warning and hint
//! [`IconizedMessage`]s. Like [`Guide`](crate::Guide), it stamps its
//! `lastUpdate` on every change, including changes made to its media and
//! messages through [`Content::media_mut`], [`Content::warning_mut`] and
//! [`Content::hint_mut`].

use std::sync::Arc;

use tracing::debug;

use crate::{
    clock::{Clock, SystemClock, Timestamp},
    constants::{
        DESCRIPTION, HINTS, ID, LANGUAGE_ID, LAST_UPDATE, MEDIA, TITLE, WARNINGS,
    },
    doc::{Doc, Kind, List},
    tracked::{Revision, Tracked, UpdateListener},
    validate::{self, ValidationError},
};

mod media;
mod message;

pub use media::Media;
pub use message::IconizedMessage;

/// A content descriptor.
#[derive(Debug, Clone)]
pub struct Content {
    id: String,
    revision: Revision,
    language_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    media: Option<Media>,
    warnings: Vec<IconizedMessage>,
    hints: Vec<IconizedMessage>,
    extra: Doc,
}

impl Content {
    /// Creates an empty content descriptor stamped with the system time.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_clock(id, Arc::new(SystemClock))
    }

    /// Creates an empty content descriptor using `clock` for timestamps.
    pub fn with_clock(id: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            id: id.into(),
            revision: Revision::new(clock),
            language_id: None,
            title: None,
            description: None,
            media: None,
            warnings: Vec::new(),
            hints: Vec::new(),
            extra: Doc::new(),
        }
    }

    /// Reconstructs a content descriptor from its document.
    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        Self::from_document_with_clock(doc, Arc::new(SystemClock))
    }

    /// Reconstructs a content descriptor, using `clock` for later timestamps.
    ///
    /// The whole document is validated before the descriptor is built.
    pub fn from_document_with_clock(
        doc: &Doc,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ValidationError> {
        let id = validate::require_text(doc, ID)?.to_string();
        let last_update = validate::optional_text(doc, LAST_UPDATE)?
            .map(|text| Timestamp::parse(text).map_err(|err| err.at(LAST_UPDATE)))
            .transpose()?;
        let language_id = validate::optional_text(doc, LANGUAGE_ID)?.map(str::to_string);
        let title = validate::optional_text(doc, TITLE)?.map(str::to_string);
        let description = validate::optional_text(doc, DESCRIPTION)?.map(str::to_string);
        let media = validate::optional_object(doc, MEDIA)?
            .map(|media| Media::from_document(media).map_err(|err| err.within(MEDIA)))
            .transpose()?;
        let warnings = messages_from_document(doc, WARNINGS)?;
        let hints = messages_from_document(doc, HINTS)?;

        debug!(
            content_id = %id,
            warnings = warnings.len(),
            hints = hints.len(),
            "Loaded content from document"
        );

        let mut extra = doc.without(&[
            ID,
            LAST_UPDATE,
            LANGUAGE_ID,
            TITLE,
            DESCRIPTION,
            MEDIA,
            WARNINGS,
            HINTS,
        ]);
        validate::keep_empty_containers(doc, &mut extra, &[WARNINGS, HINTS]);

        Ok(Self {
            id,
            revision: Revision::loaded(last_update, clock),
            language_id,
            title,
            description,
            media,
            warnings,
            hints,
            extra,
        })
    }

    /// Builds the document of this content descriptor.
    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        doc.insert(ID, &self.id);
        if let Some(last_update) = self.revision.last_update() {
            doc.insert(LAST_UPDATE, last_update.as_str());
        }
        let fields = [
            (LANGUAGE_ID, &self.language_id),
            (TITLE, &self.title),
            (DESCRIPTION, &self.description),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                doc.insert(field, value);
            }
        }
        if let Some(media) = &self.media {
            doc.insert(MEDIA, media.to_document());
        }
        for (field, messages) in [(WARNINGS, &self.warnings), (HINTS, &self.hints)] {
            if validate::emit_container(&self.extra, field, messages.is_empty()) {
                let list: List = messages.iter().map(IconizedMessage::to_document).collect();
                doc.insert(field, list);
            }
        }
        doc.extend_missing(&self.extra);
        doc
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the time of the last modification.
    ///
    /// `None` only for a descriptor loaded without `lastUpdate` and not
    /// modified since.
    pub fn last_update(&self) -> Option<&Timestamp> {
        self.revision.last_update()
    }

    fn touch(&mut self) {
        self.revision.update_performed();
    }

    pub fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref()
    }

    pub fn set_language_id(&mut self, language_id: impl Into<String>) {
        self.language_id = Some(language_id.into());
        self.touch();
    }

    pub fn clear_language_id(&mut self) -> Option<String> {
        let old = self.language_id.take();
        if old.is_some() {
            self.touch();
        }
        old
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
        self.touch();
    }

    pub fn clear_title(&mut self) -> Option<String> {
        let old = self.title.take();
        if old.is_some() {
            self.touch();
        }
        old
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
        self.touch();
    }

    pub fn clear_description(&mut self) -> Option<String> {
        let old = self.description.take();
        if old.is_some() {
            self.touch();
        }
        old
    }

    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    /// Returns tracked mutable access to the media attachment.
    pub fn media_mut(&mut self) -> Option<Tracked<'_, Media>> {
        let media = self.media.as_mut()?;
        Some(Tracked::new(media, &mut self.revision))
    }

    /// Attaches `media`, replacing and returning any previous attachment.
    pub fn set_media(&mut self, media: Media) -> Option<Media> {
        let old = self.media.replace(media);
        self.touch();
        old
    }

    /// Detaches and returns the media attachment. A no-op if there is none.
    pub fn remove_media(&mut self) -> Option<Media> {
        let old = self.media.take();
        if old.is_some() {
            self.touch();
        }
        old
    }

    pub fn warnings(&self) -> &[IconizedMessage] {
        &self.warnings
    }

    pub fn warning_mut(&mut self, index: usize) -> Option<Tracked<'_, IconizedMessage>> {
        let warning = self.warnings.get_mut(index)?;
        Some(Tracked::new(warning, &mut self.revision))
    }

    /// Appends a warning unless an equal one is already present.
    ///
    /// Returns true if the warning was added.
    pub fn add_warning(&mut self, warning: IconizedMessage) -> bool {
        let added = add_message(&mut self.warnings, warning);
        if added {
            self.extra.remove(WARNINGS);
            self.touch();
        }
        added
    }

    /// Removes every warning equal to `warning`, returning true if any was removed.
    pub fn remove_warning(&mut self, warning: &IconizedMessage) -> bool {
        let removed = remove_message(&mut self.warnings, warning);
        if removed {
            self.touch();
        }
        removed
    }

    pub fn hints(&self) -> &[IconizedMessage] {
        &self.hints
    }

    pub fn hint_mut(&mut self, index: usize) -> Option<Tracked<'_, IconizedMessage>> {
        let hint = self.hints.get_mut(index)?;
        Some(Tracked::new(hint, &mut self.revision))
    }

    /// Appends a hint unless an equal one is already present.
    pub fn add_hint(&mut self, hint: IconizedMessage) -> bool {
        let added = add_message(&mut self.hints, hint);
        if added {
            self.extra.remove(HINTS);
            self.touch();
        }
        added
    }

    /// Removes every hint equal to `hint`, returning true if any was removed.
    pub fn remove_hint(&mut self, hint: &IconizedMessage) -> bool {
        let removed = remove_message(&mut self.hints, hint);
        if removed {
            self.touch();
        }
        removed
    }
}

fn messages_from_document(
    doc: &Doc,
    field: &str,
) -> Result<Vec<IconizedMessage>, ValidationError> {
    let Some(list) = validate::optional_array_of(doc, field, Kind::Object)? else {
        return Ok(Vec::new());
    };
    validate::objects(list)
        .enumerate()
        .map(|(index, message)| {
            IconizedMessage::from_document(message)
                .map_err(|err| err.within(&format!("{field}[{index}]")))
        })
        .collect()
}

fn add_message(messages: &mut Vec<IconizedMessage>, message: IconizedMessage) -> bool {
    if messages.contains(&message) {
        return false;
    }
    messages.push(message);
    true
}

fn remove_message(messages: &mut Vec<IconizedMessage>, message: &IconizedMessage) -> bool {
    let before = messages.len();
    messages.retain(|m| m != message);
    messages.len() != before
}
