//! # Storage Layer
//!
//! The address book is persisted as one self-describing snapshot. The
//! [`SnapshotStore`] trait hides where that snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON file (default `contacts.json`) in the rolodex home
//!   - Atomic replace: temp file in the same directory, then rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the serialized text, so the same schema is exercised
//!   - No persistence
//!
//! ## Snapshot Format (version 1)
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "John", "phones": ["1234567890"], "birthday": "1990-01-31" },
//!     { "name": "Jane", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! - `contacts` is in address-book order.
//! - `phones` is in insertion order, duplicates allowed.
//! - `birthday` is `YYYY-MM-DD` or `null`.
//! - Phones and birthdays are validated again when read; an invalid value makes
//!   the whole snapshot unreadable.
//!
//! Readers reject any other `version`.
//!
//! ## Known Limitation
//!
//! There is no locking. Two processes writing the same file will silently
//! overwrite each other's snapshot; rolodex is a single-user, single-process
//! tool.

use crate::error::StorageError;
use crate::record::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

/// A full copy of an address book's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub contacts: Vec<Record>,
}

impl Snapshot {
    pub fn new(contacts: Vec<Record>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts,
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot. The version is checked before the contacts are read,
    /// so other versions fail as unsupported whatever their record shape.
    pub fn from_json(text: &str) -> Result<Self, StorageError> {
        let header: SnapshotHeader = serde_json::from_str(text)?;
        if header.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: header.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(serde_json::from_str(text)?)
    }
}

/// Abstract interface for snapshot persistence.
///
/// Both operations are all-or-nothing: a failed `save` leaves the previous
/// snapshot in place and a failed `load` returns no partial data.
pub trait SnapshotStore {
    /// Whether a snapshot has been saved before.
    fn exists(&self) -> bool;

    /// Read the saved snapshot. A store with nothing saved is an error.
    fn load(&self) -> Result<Snapshot, StorageError>;

    /// Replace the saved snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError>;

    /// Human-readable location, for messages and logs.
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Name;

    #[test]
    fn test_schema_shape() {
        let mut record = Record::new(Name::new("John"), Some("1990-01-31")).unwrap();
        record.add_phone("1234567890").unwrap();
        let snapshot = Snapshot::new(vec![record]);

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "contacts": [
                    { "name": "John", "phones": ["1234567890"], "birthday": "1990-01-31" }
                ]
            })
        );
    }

    #[test]
    fn test_rejects_other_versions() {
        let err = Snapshot::from_json(r#"{ "version": 2, "contacts": [] }"#).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion {
                found: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn test_other_version_is_unsupported_even_with_unknown_record_shape() {
        let text = r#"{ "version": 2, "contacts": [
            { "name": "x", "phones": [{ "number": "1234567890" }] }
        ] }"#;
        assert!(matches!(
            Snapshot::from_json(text),
            Err(StorageError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        ));

        let text = r#"{ "version": 3, "people": {} }"#;
        assert!(matches!(
            Snapshot::from_json(text),
            Err(StorageError::UnsupportedVersion { found: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_field_values() {
        let text = r#"{ "version": 1, "contacts": [
            { "name": "John", "phones": ["123"], "birthday": null }
        ] }"#;
        assert!(matches!(
            Snapshot::from_json(text),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{ "contacts": [] }"#),
            Err(StorageError::Serialization(_))
        ));
    }
}
