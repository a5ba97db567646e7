//! The address book: records keyed by name, in insertion order.
//!
//! ## Keys
//!
//! A record's key is its name's text. Adding a record whose name is already
//! present replaces the old record in place (its position in the book does not
//! change). There is no merge.
//!
//! ## Enumeration
//!
//! [`AddressBook::pages`] hands out a [`Pages`] cursor. The cursor owns its
//! offset, so any number of enumerations can run over the same book without
//! seeing each other. A fresh cursor always starts at the first record.
//!
//! ## Persistence
//!
//! [`AddressBook::save`] and [`AddressBook::load`] move the whole book to and
//! from a [`SnapshotStore`]. A failed load leaves the book as it was.

use crate::error::{Result, RolodexError};
use crate::query::Query;
use crate::record::Record;
use crate::store::{Snapshot, SnapshotStore};
use std::iter::FusedIterator;
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.name().value() == name)
    }

    /// Inserts `record` under its name. Returns the record it replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().value()) {
            Some(i) => {
                debug!(name = record.name().value(), "Replacing contact");
                Some(std::mem::replace(&mut self.entries[i], record))
            }
            None => {
                debug!(name = record.name().value(), "Adding contact");
                self.entries.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.entries[i])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|i| &mut self.entries[i])
    }

    /// Removes the record for `name`. Absent names are not an error.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let i = self.position(name)?;
        debug!(name, "Deleting contact");
        Some(self.entries.remove(i))
    }

    /// Records matching a free-text query, in book order.
    pub fn search(&self, query: &str) -> Result<Vec<&Record>> {
        let query: Query = query.parse()?;
        Ok(self.entries.iter().filter(|r| query.matches(r)).collect())
    }

    /// A new enumeration over the book, `page_size` records at a time.
    pub fn pages(&self, page_size: usize) -> Result<Pages<'_>> {
        if page_size == 0 {
            return Err(RolodexError::Argument(
                "Page size must be at least 1".to_string(),
            ));
        }
        Ok(Pages {
            records: &self.entries,
            page_size,
            offset: 0,
        })
    }

    /// A new enumeration with [`DEFAULT_PAGE_SIZE`].
    pub fn paginate(&self) -> Pages<'_> {
        Pages {
            records: &self.entries,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.entries.clone())
    }

    pub fn save<S: SnapshotStore>(&self, store: &mut S) -> Result<()> {
        store.save(&self.snapshot())?;
        Ok(())
    }

    /// Replaces every entry with the store's snapshot.
    pub fn load<S: SnapshotStore>(&mut self, store: &S) -> Result<()> {
        let snapshot = store.load()?;
        let mut book = AddressBook::new();
        for record in snapshot.contacts {
            book.add_record(record);
        }
        debug!(
            location = %store.location(),
            contacts = book.len(),
            "Restored address book"
        );
        *self = book;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A pagination cursor over an [`AddressBook`].
///
/// Yields consecutive, non-overlapping pages. The last page may be short.
/// Once every record has been returned the cursor only yields `None`.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    offset: usize,
}

impl<'a> Pages<'a> {
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// How many records this cursor has handed out so far.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.records.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.records.len());
        let page = &self.records[self.offset..end];
        self.offset = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.offset);
        let pages = remaining.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, ValidationError};
    use crate::field::{Name, Phone};
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::BookFixture;

    fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
        records.into_iter().map(|r| r.name().value()).collect()
    }

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::value).collect()
    }

    #[test]
    fn test_add_then_find() {
        let book = BookFixture::new()
            .with_contact("John", &["1234567890", "1112223333"], Some("1990-01-01"))
            .book;

        let found = book.find("John").unwrap();
        assert_eq!(found.name().value(), "John");
        assert_eq!(phones(found), vec!["1234567890", "1112223333"]);
        assert_eq!(found.birthday().unwrap().value(), "1990-01-01");
        assert!(book.find("john").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = BookFixture::new()
            .with_contact("Ann", &["1111111111"], None)
            .with_contact("Bob", &[], None)
            .book;

        let replacement = Record::new(Name::new("Ann"), Some("2000-01-01")).unwrap();
        let previous = book.add_record(replacement).unwrap();

        assert_eq!(phones(&previous), vec!["1111111111"]);
        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["Ann", "Bob"]);
        assert!(book.find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_delete() {
        let mut book = BookFixture::new().with_contact("John", &[], None).book;
        assert!(book.delete("John").is_some());
        assert!(book.find("John").is_none());

        // Deleting again is a no-op
        assert!(book.delete("John").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = BookFixture::new().with_contact("John", &["1234567890"], None).book;
        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "0987654321")
            .unwrap();
        assert_eq!(phones(book.find("John").unwrap()), vec!["0987654321"]);
    }

    #[test]
    fn test_search_by_name_phone_and_birthday() {
        let book = BookFixture::new()
            .with_contact("John", &["1234567890"], Some("1990-01-31"))
            .with_contact("Johanna", &["5550001111"], None)
            .with_contact("Bob", &["1112223333", "4445556666"], Some("1985-06-05"))
            .book;

        assert_eq!(names(book.search("joh").unwrap()), vec!["John", "Johanna"]);
        assert_eq!(names(book.search("555").unwrap()), vec!["Johanna", "Bob"]);
        assert_eq!(names(book.search("05.06.1985").unwrap()), vec!["Bob"]);
        assert!(book.search("zed").unwrap().is_empty());
    }

    #[test]
    fn test_search_impossible_date_matches_nothing() {
        let book = BookFixture::new()
            .with_contact("Bob", &["1112223333"], Some("1990-02-28"))
            .book;
        assert!(book.search("31.02.1990").unwrap().is_empty());
        assert!(AddressBook::new().search("31.02.1990").unwrap().is_empty());
    }

    #[test]
    fn test_search_record_listed_once_even_with_several_matching_phones() {
        let book = BookFixture::new()
            .with_contact("Bob", &["1112223333", "1114445555"], None)
            .book;
        assert_eq!(book.search("111").unwrap().len(), 1);
    }

    #[test]
    fn test_search_rejects_malformed_query() {
        let book = BookFixture::new().with_contacts(3).book;
        let err = book.search("jo-5").unwrap_err();
        assert!(matches!(
            err,
            RolodexError::Validation(ValidationError::Query(_))
        ));
    }

    #[test]
    fn test_pages_cover_book_exactly_once() {
        let book = BookFixture::new().with_contacts(23).book;
        let pages: Vec<&[Record]> = book.pages(10).unwrap().collect();

        assert_eq!(pages.len(), 3);
        assert_eq!(
            pages.iter().map(|p| p.len()).collect::<Vec<_>>(),
            vec![10, 10, 3]
        );
        let flattened: Vec<&Record> = pages.into_iter().flatten().collect();
        assert_eq!(names(flattened), names(&book));
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let book = BookFixture::new().with_contacts(2).book;
        let mut pages = book.pages(2).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages.next().is_some());
        assert_eq!(pages.offset(), 2);
        assert!(pages.next().is_none());
        assert!(pages.next().is_none());
    }

    #[test]
    fn test_empty_book_has_no_pages() {
        let book = AddressBook::new();
        assert_eq!(book.paginate().count(), 0);
    }

    #[test]
    fn test_cursors_are_independent() {
        let book = BookFixture::new().with_contacts(5).book;
        let mut first = book.pages(2).unwrap();
        let mut second = book.pages(2).unwrap();

        assert_eq!(names(first.next().unwrap()), vec!["Contact 1", "Contact 2"]);
        assert_eq!(names(first.next().unwrap()), vec!["Contact 3", "Contact 4"]);
        assert_eq!(names(second.next().unwrap()), vec!["Contact 1", "Contact 2"]);
        assert_eq!(names(first.next().unwrap()), vec!["Contact 5"]);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_default_page_size() {
        let book = BookFixture::new().with_contacts(11).book;
        let pages = book.paginate();
        assert_eq!(pages.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(pages.map(|p| p.len()).collect::<Vec<_>>(), vec![10, 1]);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let book = AddressBook::new();
        assert!(matches!(book.pages(0), Err(RolodexError::Argument(_))));
    }

    #[test]
    fn test_save_then_load_into_fresh_book() {
        let book = BookFixture::new()
            .with_contact("John", &["1234567890", "1112223333"], Some("1990-01-31"))
            .with_contact("Jane", &[], None)
            .book;
        let mut store = InMemoryStore::new();
        book.save(&mut store).unwrap();

        let mut restored = AddressBook::new();
        restored.load(&store).unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_failed_load_keeps_current_entries() {
        let mut book = BookFixture::new().with_contacts(2).book;

        let missing = InMemoryStore::new();
        assert!(matches!(
            book.load(&missing),
            Err(RolodexError::Storage(StorageError::Missing(_)))
        ));

        let corrupt = InMemoryStore::with_content("{ nope");
        assert!(book.load(&corrupt).is_err());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_load_replaces_entries() {
        let mut store = InMemoryStore::new();
        BookFixture::new()
            .with_contact("Saved", &[], None)
            .book
            .save(&mut store)
            .unwrap();

        let mut book = BookFixture::new().with_contacts(4).book;
        book.load(&store).unwrap();
        assert_eq!(names(&book), vec!["Saved"]);
    }
}
