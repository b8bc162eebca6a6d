//! Add/edit workflow
//!
//! An [`EditSession`] is either closed, composing a new record, or editing
//! a copy of an existing one. The draft is always a value copy: edits to it
//! never reach the store until [`EditSession::commit`] replaces the record
//! explicitly.
//!
//! ```text
//! Closed ──open_for_add──▶ Composing ──commit ok / cancel──▶ Closed
//! Closed ──open_for_edit─▶ Editing   ──commit ok / cancel──▶ Closed
//!                          (commit failure stays open)
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::store::{Record, RecordStore};

/// How a form field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (numbers are typed as text and parsed on commit)
    Text,
    /// One of a fixed set of labels
    Choice(&'static [&'static str]),
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Must be non-blank for commit to succeed
    pub required: bool,
}

impl FormField {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Choice(options),
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Form-backed draft of a record
pub trait FormDraft: Clone + Default + fmt::Debug {
    const FIELDS: &'static [FormField];

    /// Current text of field `key`
    fn read(&self, key: &str) -> Option<String>;

    /// Set field `key` from text; choices must match one of their labels
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn field(key: &str) -> Option<&'static FormField> {
        Self::FIELDS.iter().find(|f| f.key == key)
    }

    /// Step a choice field to its next (or previous) option, wrapping around
    fn cycle_choice(&mut self, key: &str, forward: bool) -> AppResult<()> {
        let field = Self::field(key).ok_or_else(|| unknown_field(key))?;
        let FieldKind::Choice(options) = field.kind else {
            return Ok(());
        };
        if options.is_empty() {
            return Ok(());
        }
        let current = self.read(key).unwrap_or_default();
        let pos = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (pos + 1) % options.len()
        } else {
            (pos + options.len() - 1) % options.len()
        };
        self.write(key, options[next])
    }

    /// Labels of required fields that are blank
    fn missing_required(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|f| f.required)
            .filter(|f| self.read(f.key).is_none_or(|v| v.trim().is_empty()))
            .map(|f| f.label)
            .collect()
    }
}

pub(crate) fn unknown_field(key: &str) -> AppError {
    AppError::with_message(ErrorCode::UnknownFormField, format!("Unknown field: {}", key))
        .with_detail("field", key)
}

/// A record type that can be created and edited through a form
pub trait Editable: Record {
    type Draft: FormDraft;

    /// Singular noun used in notifications ("Staff member", "Menu item")
    const NOUN: &'static str;

    /// Shown when required fields are blank
    const MISSING_FIELDS_MESSAGE: &'static str = "Please fill in all required fields";

    /// Value copy of this record as a form draft
    fn to_draft(&self) -> Self::Draft;

    /// Build a new record from a draft whose required fields are present
    fn create(id: Self::Id, draft: &Self::Draft, now: NaiveDateTime) -> AppResult<Self>;

    /// Apply a draft to this record, keeping its id and non-form fields
    fn update(&self, draft: &Self::Draft) -> AppResult<Self>;
}

/// What a successful commit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Committed<Id> {
    Created(Id),
    Updated(Id),
    /// The edited record was deleted while the form was open; nothing changed
    Vanished(Id),
}

/// Transient add/edit state of one page
#[derive(Debug, Clone)]
pub enum EditSession<R: Editable> {
    Closed,
    Composing { draft: R::Draft },
    Editing { id: R::Id, draft: R::Draft },
}

impl<R: Editable> Default for EditSession<R> {
    fn default() -> Self {
        EditSession::Closed
    }
}

impl<R: Editable> EditSession<R> {
    /// Start composing a blank record, discarding any open draft
    pub fn open_for_add(&mut self) {
        *self = EditSession::Composing {
            draft: R::Draft::default(),
        };
    }

    /// Start editing a value copy of `record`, discarding any open draft
    pub fn open_for_edit(&mut self, record: &R) {
        *self = EditSession::Editing {
            id: record.id().clone(),
            draft: record.to_draft(),
        };
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        *self = EditSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<&R::Id> {
        match self {
            EditSession::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        match self {
            EditSession::Closed => None,
            EditSession::Composing { draft } | EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match self {
            EditSession::Closed => None,
            EditSession::Composing { draft } | EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    /// Set one field of the open draft
    pub fn set_field(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.draft_mut()
            .ok_or_else(|| AppError::new(ErrorCode::FormNotOpen))?
            .write(key, value)
    }

    /// Step a choice field of the open draft
    pub fn cycle_field(&mut self, key: &str, forward: bool) -> AppResult<()> {
        self.draft_mut()
            .ok_or_else(|| AppError::new(ErrorCode::FormNotOpen))?
            .cycle_choice(key, forward)
    }

    /// Validate the draft and write it into `store`.
    ///
    /// On success the session closes. On failure it stays open with the
    /// draft untouched and the store is unchanged.
    pub fn commit(
        &mut self,
        store: &mut RecordStore<R>,
        now: NaiveDateTime,
    ) -> AppResult<Committed<R::Id>> {
        let outcome = match &*self {
            EditSession::Closed => return Err(AppError::new(ErrorCode::FormNotOpen)),
            EditSession::Composing { draft } => {
                check_required::<R>(draft)?;
                let id = store.peek_next_id();
                let record = R::create(id.clone(), draft, now)?;
                store.append(record);
                Committed::Created(id)
            }
            EditSession::Editing { id, draft } => {
                check_required::<R>(draft)?;
                match store.get(id) {
                    Some(current) => {
                        let updated = current.update(draft)?;
                        store.replace_by_id(id, updated);
                        Committed::Updated(id.clone())
                    }
                    None => Committed::Vanished(id.clone()),
                }
            }
        };
        *self = EditSession::Closed;
        Ok(outcome)
    }
}

fn check_required<R: Editable>(draft: &R::Draft) -> AppResult<()> {
    let missing = draft.missing_required();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_fields(R::MISSING_FIELDS_MESSAGE, &missing))
    }
}
