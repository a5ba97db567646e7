use super::{Snapshot, SnapshotStore};
use crate::error::StorageError;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The snapshot is kept as serialized text so loads go through the same
/// parsing and validation as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    content: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `content`, valid or not.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl SnapshotStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn load(&self) -> Result<Snapshot, StorageError> {
        let content = self
            .content
            .as_deref()
            .ok_or_else(|| StorageError::Missing("<memory>".into()))?;
        Snapshot::from_json(content)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.content = Some(snapshot.to_json()?);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::AddressBook;
    use crate::field::Name;
    use crate::record::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds `count` contacts named `Contact 1`.. with one phone each.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(Name::new(format!("Contact {}", i + 1)), None).unwrap();
                record.add_phone(&format!("{:010}", i + 1)).unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str], birthday: Option<&str>) -> Self {
            let mut record = Record::new(Name::new(name), birthday).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }
    }
}
