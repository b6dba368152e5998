//! Guide steps.
//!
//! A [`Step`] is one element of a guide's sequence. Steps share an id, a
//! per-language content map and an optional `next` link, and differ by
//! [`StepKind`]:
//!
//! | `type`      | variant                    | adds                          |
//! |-------------|----------------------------|-------------------------------|
//! | `action`    | [`StepKind::Action`]       |                               |
//! | `milestone` | [`StepKind::Milestone`]    |                               |
//! | `chapter`   | [`StepKind::Chapter`]      | `target` guide id (required)  |
//! | `branch`    | [`StepKind::Branch`]       | `userRequest` sub-document    |
//!
//! [`Step::from_document`] dispatches on the `type` field and validates the
//! shared fields before the variant-specific ones.
//!
//! # Example
//!
//! ```
//! use guidedoc::{RequestOption, Step, StepType};
//!
//! let mut step = Step::branch("s1");
//! let mut option = RequestOption::new();
//! option.set_next("s2");
//! step.add_option(option).unwrap();
//! step.set_content_id("de-DE", "c1");
//!
//! let doc = step.to_document();
//! assert_eq!(
//!     doc.to_string(),
//!     r#"{"id":"s1","type":"branch","userRequest":{"content":{"de-DE":"c1"},"options":[{"next":"s2"}]}}"#
//! );
//! assert_eq!(Step::from_document(&doc).unwrap(), step);
//! assert_eq!(step.step_type(), StepType::Branch);
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

use crate::{
    constants::{CONTENT, ID, NEXT, TARGET, TYPE, USER_REQUEST},
    doc::Doc,
    validate::{self, ValidationError},
};

pub mod errors;
mod request;

pub use errors::StepError;
pub use request::{RequestOption, UserRequest};

/// The discriminator of a step document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    Action,
    Milestone,
    Chapter,
    Branch,
}

impl StepType {
    pub fn as_str(self) -> &'static str {
        match self {
            StepType::Action => "action",
            StepType::Milestone => "milestone",
            StepType::Chapter => "chapter",
            StepType::Branch => "branch",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(StepType::Action),
            "milestone" => Ok(StepType::Milestone),
            "chapter" => Ok(StepType::Chapter),
            "branch" => Ok(StepType::Branch),
            _ => Err(ValidationError::InvalidStepType {
                value: s.to_string(),
            }),
        }
    }
}

/// Variant-specific data of a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// A task for the user
    Action,
    /// A marker of progress
    Milestone,
    /// A jump into another guide
    Chapter { target: String },
    /// A choice between options
    Branch(UserRequest),
}

impl StepKind {
    pub fn step_type(&self) -> StepType {
        match self {
            StepKind::Action => StepType::Action,
            StepKind::Milestone => StepType::Milestone,
            StepKind::Chapter { .. } => StepType::Chapter,
            StepKind::Branch(_) => StepType::Branch,
        }
    }
}

/// One step of a guide.
///
/// Step ids are expected to be unique within a guide, which the step itself
/// cannot check. Steps carry no timestamp; changes made through
/// [`Guide::step_mut`](crate::Guide::step_mut) stamp the owning guide.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    id: String,
    next: Option<String>,
    content: IndexMap<String, String>,
    kind: StepKind,
    extra: Doc,
}

impl Step {
    fn with_kind(id: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id: id.into(),
            next: None,
            content: IndexMap::new(),
            kind,
            extra: Doc::new(),
        }
    }

    pub fn action(id: impl Into<String>) -> Self {
        Self::with_kind(id, StepKind::Action)
    }

    pub fn milestone(id: impl Into<String>) -> Self {
        Self::with_kind(id, StepKind::Milestone)
    }

    /// Creates a chapter step leading to the guide `target`.
    pub fn chapter(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            StepKind::Chapter {
                target: target.into(),
            },
        )
    }

    /// Creates a branch step with an empty user request.
    pub fn branch(id: impl Into<String>) -> Self {
        Self::with_kind(id, StepKind::Branch(UserRequest::new()))
    }

    /// Reconstructs a step from its document, dispatching on `type`.
    ///
    /// Fails if `id` or `type` is missing, `type` names no known variant, a
    /// chapter lacks a non-empty `target`, or a branch lacks a well-formed
    /// `userRequest` object.
    pub fn from_document(doc: &Doc) -> Result<Self, ValidationError> {
        let id = validate::require_text(doc, ID)?;
        let step_type: StepType = validate::require_text(doc, TYPE)?.parse()?;
        let content = validate::optional_string_map(doc, CONTENT)?.unwrap_or_default();
        let next = validate::optional_text(doc, NEXT)?.map(str::to_string);

        let kind = match step_type {
            StepType::Action => StepKind::Action,
            StepType::Milestone => StepKind::Milestone,
            StepType::Chapter => StepKind::Chapter {
                target: validate::require_non_empty_text(doc, TARGET)?.to_string(),
            },
            StepType::Branch => {
                let request = validate::require_object(doc, USER_REQUEST)?;
                StepKind::Branch(
                    UserRequest::from_document(request).map_err(|err| err.within(USER_REQUEST))?,
                )
            }
        };
        let known: &[&str] = match step_type {
            StepType::Chapter => &[ID, TYPE, CONTENT, NEXT, TARGET],
            StepType::Branch => &[ID, TYPE, CONTENT, NEXT, USER_REQUEST],
            StepType::Action | StepType::Milestone => &[ID, TYPE, CONTENT, NEXT],
        };

        let mut extra = doc.without(known);
        validate::keep_empty_containers(doc, &mut extra, &[CONTENT]);

        Ok(Self {
            id: id.to_string(),
            next,
            content,
            kind,
            extra,
        })
    }

    /// Builds the document of this step.
    pub fn to_document(&self) -> Doc {
        let mut doc = Doc::new();
        doc.insert(ID, &self.id);
        doc.insert(TYPE, self.step_type().as_str());
        if validate::emit_container(&self.extra, CONTENT, self.content.is_empty()) {
            doc.insert(CONTENT, validate::string_map_doc(&self.content));
        }
        if let Some(next) = &self.next {
            doc.insert(NEXT, next);
        }
        match &self.kind {
            StepKind::Action | StepKind::Milestone => {}
            StepKind::Chapter { target } => {
                doc.insert(TARGET, target);
            }
            StepKind::Branch(request) => {
                doc.insert(USER_REQUEST, request.to_document());
            }
        }
        doc.extend_missing(&self.extra);
        doc
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn step_type(&self) -> StepType {
        self.kind.step_type()
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// Returns the id of the suggested successor step.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn set_next(&mut self, next: impl Into<String>) {
        self.next = Some(next.into());
    }

    pub fn remove_next(&mut self) -> Option<String> {
        self.next.take()
    }

    // On a branch the content map belongs to the user request.

    pub fn content_id(&self, language_id: &str) -> Option<&str> {
        match &self.kind {
            StepKind::Branch(request) => request.content_id(language_id),
            _ => self.content.get(language_id).map(String::as_str),
        }
    }

    pub fn content_ids(&self) -> &IndexMap<String, String> {
        match &self.kind {
            StepKind::Branch(request) => request.content_ids(),
            _ => &self.content,
        }
    }

    pub fn set_content_id(
        &mut self,
        language_id: impl Into<String>,
        content_id: impl Into<String>,
    ) {
        match &mut self.kind {
            StepKind::Branch(request) => request.set_content_id(language_id, content_id),
            _ => {
                self.content.insert(language_id.into(), content_id.into());
                self.extra.remove(CONTENT);
            }
        }
    }

    /// Removes the content id for `language_id`, returning it if present.
    pub fn remove_content_id(&mut self, language_id: &str) -> Option<String> {
        match &mut self.kind {
            StepKind::Branch(request) => request.remove_content_id(language_id),
            _ => self.content.shift_remove(language_id),
        }
    }

    /// Returns the target guide id of a chapter step.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            StepKind::Chapter { target } => Some(target),
            _ => None,
        }
    }

    /// Sets the target guide id of a chapter step.
    pub fn set_target(&mut self, target: impl Into<String>) -> Result<(), StepError> {
        match &mut self.kind {
            StepKind::Chapter { target: current } => {
                *current = target.into();
                Ok(())
            }
            _ => Err(self.unsupported("set_target")),
        }
    }

    pub fn user_request(&self) -> Option<&UserRequest> {
        match &self.kind {
            StepKind::Branch(request) => Some(request),
            _ => None,
        }
    }

    pub fn user_request_mut(&mut self) -> Option<&mut UserRequest> {
        match &mut self.kind {
            StepKind::Branch(request) => Some(request),
            _ => None,
        }
    }

    /// Appends an option to a branch step.
    pub fn add_option(&mut self, option: RequestOption) -> Result<(), StepError> {
        match &mut self.kind {
            StepKind::Branch(request) => {
                request.add_option(option);
                Ok(())
            }
            _ => Err(self.unsupported("add_option")),
        }
    }

    /// Removes the option at `index` from a branch step.
    pub fn remove_option(&mut self, index: usize) -> Result<Option<RequestOption>, StepError> {
        match &mut self.kind {
            StepKind::Branch(request) => Ok(request.remove_option(index)),
            _ => Err(self.unsupported("remove_option")),
        }
    }

    fn unsupported(&self, operation: &'static str) -> StepError {
        StepError::Unsupported {
            operation,
            step_type: self.step_type(),
        }
    }
}
