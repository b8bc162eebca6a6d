//! Object-safe view over a record page
//!
//! The console works with whichever page the current route shows, so it
//! talks to pages through `dyn PageView` and addresses rows by their
//! position in the visible list.

use chrono::NaiveDateTime;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::notify::Notification;
use crate::pages::{Cell, RecordPage, TableRow};
use crate::session::{Editable, FormDraft, FormField};
use crate::store::Record;

pub trait PageView {
    fn columns(&self) -> &'static [&'static str];

    /// Cells of every visible row
    fn rows(&self) -> Vec<Vec<Cell>>;

    fn visible_len(&self) -> usize;

    /// Id of the visible row at `index`, as text
    fn id_at(&self, index: usize) -> Option<String>;

    fn record_count(&self) -> usize;

    fn search_term(&self) -> &str;

    fn set_search(&mut self, term: &str);

    /// Label of the active tab
    fn category_label(&self) -> String;

    fn cycle_category(&mut self);

    fn open_add(&mut self);

    fn open_edit_at(&mut self, index: usize) -> AppResult<()>;

    fn delete_at(&mut self, index: usize) -> Option<Notification>;

    fn form_open(&self) -> bool;

    fn form_editing(&self) -> bool;

    fn noun(&self) -> &'static str;

    fn form_fields(&self) -> &'static [FormField];

    fn form_value(&self, key: &str) -> Option<String>;

    fn set_form_value(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn cycle_form_choice(&mut self, key: &str, forward: bool) -> AppResult<()>;

    fn commit(&mut self, now: NaiveDateTime) -> Notification;

    fn cancel(&mut self);
}

impl<R: Editable + TableRow> RecordPage<R> {
    fn visible_id(&self, index: usize) -> AppResult<R::Id> {
        self.visible()
            .get(index)
            .map(|r| r.id().clone())
            .ok_or_else(|| AppError::with_message(ErrorCode::NotFound, "No row selected"))
    }
}

impl<R: Editable + TableRow> PageView for RecordPage<R> {
    fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    fn rows(&self) -> Vec<Vec<Cell>> {
        self.visible().into_iter().map(TableRow::cells).collect()
    }

    fn visible_len(&self) -> usize {
        self.visible().len()
    }

    fn id_at(&self, index: usize) -> Option<String> {
        self.visible_id(index).ok().map(|id| id.to_string())
    }

    fn record_count(&self) -> usize {
        self.records().len()
    }

    fn search_term(&self) -> &str {
        &self.filter().search_term
    }

    fn set_search(&mut self, term: &str) {
        RecordPage::set_search(self, term);
    }

    fn category_label(&self) -> String {
        self.filter().category.to_string()
    }

    fn cycle_category(&mut self) {
        RecordPage::cycle_category(self);
    }

    fn open_add(&mut self) {
        RecordPage::open_add(self);
    }

    fn open_edit_at(&mut self, index: usize) -> AppResult<()> {
        let id = self.visible_id(index)?;
        self.open_edit(&id)
    }

    fn delete_at(&mut self, index: usize) -> Option<Notification> {
        let id = self.visible_id(index).ok()?;
        self.delete(&id)
    }

    fn form_open(&self) -> bool {
        self.session().is_open()
    }

    fn form_editing(&self) -> bool {
        self.session().is_editing()
    }

    fn noun(&self) -> &'static str {
        R::NOUN
    }

    fn form_fields(&self) -> &'static [FormField] {
        R::Draft::FIELDS
    }

    fn form_value(&self, key: &str) -> Option<String> {
        self.session().draft().and_then(|d| d.read(key))
    }

    fn set_form_value(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.session_mut().set_field(key, value)
    }

    fn cycle_form_choice(&mut self, key: &str, forward: bool) -> AppResult<()> {
        self.session_mut().cycle_field(key, forward)
    }

    fn commit(&mut self, now: NaiveDateTime) -> Notification {
        RecordPage::commit(self, now)
    }

    fn cancel(&mut self) {
        RecordPage::cancel(self);
    }
}
