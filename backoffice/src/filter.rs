//! Search and category filtering
//!
//! The visible rows of a page are recomputed from the store on every
//! keystroke or tab change. Matching is a case-insensitive substring test
//! over the record's search fields, intersected with the active tab.

use std::fmt;

use crate::store::Record;

/// Tab selection; `All` is the sentinel that matches every category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Next tab in `All, tabs[0], tabs[1], ..., All` order
    pub fn cycle(&self, tabs: &[C]) -> Self {
        let next = match self {
            CategoryFilter::All => 0,
            CategoryFilter::Only(c) => match tabs.iter().position(|t| t == c) {
                Some(i) => i + 1,
                None => tabs.len(),
            },
        };
        tabs.get(next)
            .map(|c| CategoryFilter::Only(*c))
            .unwrap_or(CategoryFilter::All)
    }
}

impl<C: fmt::Display> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// Search term plus active tab for one page
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<C> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Copy + PartialEq> FilterState<C> {
    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Record<Category = C>,
    {
        visible(records, &self.search_term, &self.category)
    }
}

/// Records matching `search_term` and `category`, in store order
pub fn visible<'a, R: Record>(
    records: &'a [R],
    search_term: &str,
    category: &CategoryFilter<R::Category>,
) -> Vec<&'a R> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| category.matches(r.category()) && matches_search(*r, &needle))
        .collect()
}

/// `needle` must already be lowercase
fn matches_search<R: Record>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{Note, Tag, note};

    fn notes() -> Vec<Note> {
        vec![
            note(1, "Chocolate Cake", Tag::Red),
            note(2, "Hot Chocolate", Tag::Blue),
            note(3, "Lemon Tart", Tag::Red),
            note(4, "chocolate mousse", Tag::Red),
        ]
    }

    fn ids(rows: &[&Note]) -> Vec<i64> {
        rows.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_empty_search_and_all_is_identity() {
        let records = notes();
        let rows = visible(&records, "", &CategoryFilter::All);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_order_preserving() {
        let records = notes();
        let rows = visible(&records, "CHOC", &CategoryFilter::All);
        assert_eq!(ids(&rows), vec![1, 2, 4]);
        for row in rows {
            assert!(row.title.to_lowercase().contains("choc"));
        }
    }

    #[test]
    fn test_search_intersects_category() {
        let records = notes();
        let rows = visible(&records, "choc", &CategoryFilter::Only(Tag::Red));
        assert_eq!(ids(&rows), vec![1, 4]);

        let rows = visible(&records, "", &CategoryFilter::Only(Tag::Blue));
        assert_eq!(ids(&rows), vec![2]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let records = notes();
        assert!(visible(&records, "pizza", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_cycle_tabs() {
        let tabs = [Tag::Red, Tag::Blue];
        let all = CategoryFilter::All;
        let red = all.cycle(&tabs);
        assert_eq!(red, CategoryFilter::Only(Tag::Red));
        let blue = red.cycle(&tabs);
        assert_eq!(blue, CategoryFilter::Only(Tag::Blue));
        assert_eq!(blue.cycle(&tabs), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Tag>::All.cycle(&[]), CategoryFilter::All);
    }

    #[test]
    fn test_display() {
        assert_eq!(CategoryFilter::<Tag>::All.to_string(), "All");
        assert_eq!(CategoryFilter::Only(Tag::Blue).to_string(), "Blue");
    }

    #[test]
    fn test_filter_state_apply() {
        let records = notes();
        let state = FilterState {
            search_term: "tart".to_string(),
            category: CategoryFilter::All,
        };
        assert_eq!(ids(&state.apply(&records)), vec![3]);
    }
}
