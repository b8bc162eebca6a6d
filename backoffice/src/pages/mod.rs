//! Record pages and navigation
//!
//! A [`RecordPage`] binds one store, one filter state and one edit session
//! for a single entity. Every page command that the user can observe
//! returns the [`Notification`] to show.

pub mod customers;
pub mod dashboard;
pub mod menu;
pub mod orders;
pub mod staff;

use std::fmt;

use chrono::NaiveDateTime;
use shared::error::{AppError, AppResult};

use crate::classify::BadgeTone;
use crate::filter::{CategoryFilter, FilterState};
use crate::notify::Notification;
use crate::session::{Committed, EditSession, Editable};
use crate::store::{Record, RecordStore};

/// One rendered table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// Badge or text tone, `None` for plain cells
    pub tone: Option<BadgeTone>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn badge(text: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

/// Tabular projection of a record
pub trait TableRow: Record {
    const COLUMNS: &'static [&'static str];

    /// One cell per column, in column order
    fn cells(&self) -> Vec<Cell>;
}

/// Store + filter + edit session for one entity
#[derive(Debug, Clone)]
pub struct RecordPage<R: Editable> {
    name: &'static str,
    store: RecordStore<R>,
    filter: FilterState<R::Category>,
    session: EditSession<R>,
}

impl<R: Editable> RecordPage<R> {
    pub fn new(name: &'static str, records: Vec<R>) -> Self {
        Self {
            name,
            store: RecordStore::from_records(records),
            filter: FilterState::default(),
            session: EditSession::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut RecordStore<R> {
        &mut self.store
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.store.get(id)
    }

    // ========== Filtering ==========

    pub fn filter(&self) -> &FilterState<R::Category> {
        &self.filter
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter<R::Category>) {
        self.filter.category = category;
    }

    /// Advance to the next category tab, wrapping back to "All"
    pub fn cycle_category(&mut self) -> CategoryFilter<R::Category> {
        self.filter.category = self.filter.category.cycle(R::CATEGORY_TABS);
        self.filter.category
    }

    /// Records matching the current search term and tab, in store order
    pub fn visible(&self) -> Vec<&R> {
        self.filter.apply(self.store.records())
    }

    // ========== Add / edit ==========

    pub fn session(&self) -> &EditSession<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession<R> {
        &mut self.session
    }

    pub fn open_add(&mut self) {
        tracing::debug!(page = self.name, "Opening add form");
        self.session.open_for_add();
    }

    /// Open the edit form on a copy of record `id`
    pub fn open_edit(&mut self, id: &R::Id) -> AppResult<()> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("{} #{}", R::NOUN, id)))?;
        tracing::debug!(page = self.name, id = %id, "Opening edit form");
        self.session.open_for_edit(record);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Commit the open form, reporting the outcome as a notification
    pub fn commit(&mut self, now: NaiveDateTime) -> Notification {
        match self.try_commit(now) {
            Ok(Committed::Created(_)) => {
                Notification::success(format!("{} added successfully", R::NOUN))
            }
            Ok(Committed::Updated(_)) => {
                Notification::success(format!("{} updated successfully", R::NOUN))
            }
            Ok(Committed::Vanished(id)) => Notification::from(AppError::not_found(format!(
                "{} #{}",
                R::NOUN,
                id
            ))),
            Err(e) => Notification::from(e),
        }
    }

    /// Commit the open form
    pub fn try_commit(&mut self, now: NaiveDateTime) -> AppResult<Committed<R::Id>> {
        let result = self.session.commit(&mut self.store, now);
        match &result {
            Ok(Committed::Created(id)) => tracing::info!(page = self.name, id = %id, "Record added"),
            Ok(Committed::Updated(id)) => {
                tracing::info!(page = self.name, id = %id, "Record updated")
            }
            Ok(Committed::Vanished(id)) => {
                tracing::warn!(page = self.name, id = %id, "Edited record no longer exists")
            }
            Err(e) => tracing::warn!(page = self.name, code = ?e.code, "Commit rejected: {}", e),
        }
        result
    }

    // ========== Delete ==========

    /// Remove record `id`; nothing happens and nothing is reported when absent
    pub fn delete(&mut self, id: &R::Id) -> Option<Notification> {
        if self.store.remove_by_id(id) == 0 {
            tracing::debug!(page = self.name, id = %id, "Delete of absent record ignored");
            return None;
        }
        tracing::info!(page = self.name, id = %id, "Record removed");
        Some(Notification::success(format!("{} removed successfully", R::NOUN)))
    }
}

/// Named top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Staff,
    Menu,
    Orders,
    Customers,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Staff,
        Route::Menu,
        Route::Orders,
        Route::Customers,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Staff => "/staff",
            Route::Menu => "/menu",
            Route::Orders => "/orders",
            Route::Customers => "/customers",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Staff => "Staff",
            Route::Menu => "Menu",
            Route::Orders => "Orders",
            Route::Customers => "Customers",
        }
    }

    /// Resolve a path; unknown paths are a not-found error
    pub fn from_path(path: &str) -> AppResult<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == normalized)
            .ok_or_else(|| AppError::not_found(format!("Page {}", trimmed)))
    }

    pub fn index(&self) -> usize {
        Route::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(&self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn prev(&self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/").unwrap(), Route::Dashboard);
        assert_eq!(Route::from_path("/staff").unwrap(), Route::Staff);
        assert_eq!(Route::from_path("/orders/").unwrap(), Route::Orders);
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let err = Route::from_path("/reports").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Page /reports not found");
    }

    #[test]
    fn test_route_cycling() {
        assert_eq!(Route::Dashboard.next(), Route::Staff);
        assert_eq!(Route::Customers.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.prev(), Route::Customers);
        assert_eq!(Route::Menu.to_string(), "Menu");
    }
}
