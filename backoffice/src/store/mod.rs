//! In-memory record store
//!
//! One [`RecordStore`] backs each record page. Records keep insertion order.
//! Every command is total: replacing or removing an id that is not present
//! changes nothing.
//!
//! New ids come from a counter that only moves forward, so deleting a
//! record never frees its id for reuse.

use std::fmt;

/// Identifier that can be minted from a sequence number
pub trait SequentialId: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Build the id for sequence number `seq`
    fn from_seq(seq: u64) -> Self;

    /// Sequence number this id corresponds to, if it has one
    fn to_seq(&self) -> Option<u64>;
}

impl SequentialId for i64 {
    fn from_seq(seq: u64) -> Self {
        i64::try_from(seq).unwrap_or(i64::MAX)
    }

    fn to_seq(&self) -> Option<u64> {
        u64::try_from(*self).ok()
    }
}

impl SequentialId for String {
    fn from_seq(seq: u64) -> Self {
        seq.to_string()
    }

    fn to_seq(&self) -> Option<u64> {
        self.trim().parse().ok()
    }
}

/// A flat record held by a page
pub trait Record: Clone + fmt::Debug {
    type Id: SequentialId;
    /// Value the page's category tabs compare against
    type Category: Copy + PartialEq + fmt::Debug + fmt::Display + 'static;

    /// Tabs offered besides "All", in display order
    const CATEGORY_TABS: &'static [Self::Category];

    fn id(&self) -> &Self::Id;

    fn category(&self) -> Self::Category;

    /// Text fields matched by the search box
    fn search_fields(&self) -> Vec<&str>;
}

/// Ordered in-memory collection of records of one shape
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    next_seq: u64,
    revision: u64,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    /// Empty store; the first new record gets sequence number 1
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_seq: 1,
            revision: 0,
        }
    }

    /// Store seeded with existing records, counter placed past the largest id
    pub fn from_records(records: Vec<R>) -> Self {
        let mut store = Self::new();
        for record in &records {
            store.observe_id(record.id());
        }
        store.records = records;
        store
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Id the next new record will receive
    pub fn peek_next_id(&self) -> R::Id {
        R::Id::from_seq(self.next_seq)
    }

    /// Number of effective mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a record at the end
    pub fn append(&mut self, record: R) {
        self.observe_id(record.id());
        self.records.push(record);
        self.revision += 1;
    }

    /// Replace every record with `id` by `record`; returns how many were replaced
    pub fn replace_by_id(&mut self, id: &R::Id, record: R) -> usize {
        let mut replaced = 0;
        for slot in self.records.iter_mut().filter(|r| r.id() == id) {
            *slot = record.clone();
            replaced += 1;
        }
        if replaced > 0 {
            self.observe_id(record.id());
            self.revision += 1;
        }
        replaced
    }

    /// Remove every record with `id`; returns how many were removed
    pub fn remove_by_id(&mut self, id: &R::Id) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = before - self.records.len();
        if removed > 0 {
            self.revision += 1;
        }
        removed
    }

    fn observe_id(&mut self, id: &R::Id) {
        if let Some(seq) = id.to_seq() {
            self.next_seq = self.next_seq.max(seq.saturating_add(1));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Note {
        pub id: i64,
        pub title: String,
        pub tag: Tag,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) enum Tag {
        Red,
        Blue,
    }

    impl fmt::Display for Tag {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    impl Record for Note {
        type Id = i64;
        type Category = Tag;

        const CATEGORY_TABS: &'static [Tag] = &[Tag::Red, Tag::Blue];

        fn id(&self) -> &i64 {
            &self.id
        }

        fn category(&self) -> Tag {
            self.tag
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title]
        }
    }

    pub(crate) fn note(id: i64, title: &str, tag: Tag) -> Note {
        Note {
            id,
            title: title.to_string(),
            tag,
        }
    }

    fn seeded() -> RecordStore<Note> {
        RecordStore::from_records(vec![
            note(1, "alpha", Tag::Red),
            note(2, "beta", Tag::Blue),
            note(3, "gamma", Tag::Red),
        ])
    }

    #[test]
    fn test_from_records_places_counter_past_max_id() {
        let store = RecordStore::from_records(vec![note(7, "a", Tag::Red), note(3, "b", Tag::Red)]);
        assert_eq!(store.peek_next_id(), 8);
        assert_eq!(RecordStore::<Note>::new().peek_next_id(), 1);
    }

    #[test]
    fn test_append_then_remove_round_trips() {
        let mut store = seeded();
        let original = store.records().to_vec();

        store.append(note(4, "delta", Tag::Blue));
        assert_eq!(store.len(), 4);
        assert_eq!(store.records()[3].title, "delta");

        assert_eq!(store.remove_by_id(&4), 1);
        assert_eq!(store.records(), original.as_slice());
    }

    #[test]
    fn test_replace_absent_id_is_noop() {
        let mut store = seeded();
        let original = store.records().to_vec();
        let revision = store.revision();

        assert_eq!(store.replace_by_id(&42, note(42, "ghost", Tag::Red)), 0);
        assert_eq!(store.records(), original.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = seeded();
        assert_eq!(store.remove_by_id(&42), 0);
        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = seeded();
        assert_eq!(store.replace_by_id(&2, note(2, "BETA", Tag::Red)), 1);
        assert_eq!(store.records()[1].title, "BETA");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = seeded();
        store.remove_by_id(&3);
        // len + 1 would be 3 again
        assert_eq!(store.peek_next_id(), 4);
        store.remove_by_id(&2);
        assert_eq!(store.peek_next_id(), 4);
    }

    #[test]
    fn test_append_advances_counter() {
        let mut store = RecordStore::new();
        store.append(note(10, "x", Tag::Red));
        assert_eq!(store.peek_next_id(), 11);
        assert!(store.contains(&10));
        assert!(store.get(&11).is_none());
    }

    #[test]
    fn test_string_ids() {
        assert_eq!(String::from_seq(78944), "78944");
        assert_eq!("78943".to_string().to_seq(), Some(78943));
        assert_eq!("T-1".to_string().to_seq(), None);
        assert_eq!((-5i64).to_seq(), None);
    }
}
