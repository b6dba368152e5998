//! The payload of branch steps: a user request and its options.

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    constants::{CONTENT, NEXT, OPTIONS},
    doc::{Doc, Kind, List},
    validate::{self, ValidationError},
};

/// The question a branch step puts to the user, with the options to choose from.
///
/// The request has its own per-language content map, stored in the nested
/// `userRequest` object of the step document rather than at step level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRequest {
    content: IndexMap<String, String>,
    options: Vec<RequestOption>,
    extra: Doc,
}

impl UserRequest {
    /// Creates an empty request without content or options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a request from its `userRequest` sub-document.
    ///
    /// Every option is validated before any is built; errors inside an option
    /// name it by index (`options[1].next`).
    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        let content = validate::optional_string_map(doc, CONTENT)?.unwrap_or_default();
        let options = match validate::optional_array_of(doc, OPTIONS, Kind::Object)? {
            Some(list) => validate::objects(list)
                .enumerate()
                .map(|(index, option)| {
                    RequestOption::from_document(option)
                        .map_err(|err| err.within(&format!("{OPTIONS}[{index}]")))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        let mut extra = doc.without(&[CONTENT, OPTIONS]);
        validate::keep_empty_containers(doc, &mut extra, &[CONTENT, OPTIONS]);

        Ok(Self {
            content,
            options,
            extra,
        })
    }

    /// Builds the `userRequest` sub-document.
    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        if validate::emit_container(&self.extra, CONTENT, self.content.is_empty()) {
            doc.insert(CONTENT, validate::string_map_doc(&self.content));
        }
        if validate::emit_container(&self.extra, OPTIONS, self.options.is_empty()) {
            let options: List = self.options.iter().map(RequestOption::to_document).collect();
            doc.insert(OPTIONS, options);
        }
        doc.extend_missing(&self.extra);
        doc
    }

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
    }

    /// Removes the content id for `language_id`, returning it if present.
    pub fn remove_content_id(&mut self, language_id: &str) -> Option<String> {
        self.content.shift_remove(language_id)
    }

    pub fn options(&self) -> &[RequestOption] {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut [RequestOption] {
        &mut self.options
    }

    pub fn option_mut(&mut self, index: usize) -> Option<&mut RequestOption> {
        self.options.get_mut(index)
    }

    /// Appends an option.
    pub fn add_option(&mut self, option: RequestOption) {
        debug!(next = ?option.next(), "Adding option to user request");
        self.options.push(option);
        self.extra.remove(OPTIONS);
    }

    /// Removes and returns the option at `index`, if present.
    pub fn remove_option(&mut self, index: usize) -> Option<RequestOption> {
        if index >= self.options.len() {
            return None;
        }
        debug!(index, "Removing option from user request");
        Some(self.options.remove(index))
    }
}

/// A selectable choice of a [`UserRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOption {
    content: IndexMap<String, String>,
    next: Option<String>,
    extra: Doc,
}

impl RequestOption {
    /// Creates an option without content and without a next step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        let content = validate::optional_string_map(doc, CONTENT)?.unwrap_or_default();
        let next = validate::optional_text(doc, NEXT)?.map(str::to_string);
        let mut extra = doc.without(&[CONTENT, NEXT]);
        validate::keep_empty_containers(doc, &mut extra, &[CONTENT]);
        Ok(Self {
            content,
            next,
            extra,
        })
    }

    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        if validate::emit_container(&self.extra, CONTENT, self.content.is_empty()) {
            doc.insert(CONTENT, validate::string_map_doc(&self.content));
        }
        if let Some(next) = &self.next {
            doc.insert(NEXT, next);
        }
        doc.extend_missing(&self.extra);
        doc
    }

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
    }

    pub fn remove_content_id(&mut self, language_id: &str) -> Option<String> {
        self.content.shift_remove(language_id)
    }

    /// Returns the id of the step this option leads to.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn set_next(&mut self, next: impl Into<String>) {
        self.next = Some(next.into());
    }

    pub fn remove_next(&mut self) -> Option<String> {
        self.next.take()
    }
}
