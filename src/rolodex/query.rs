//! Free-text search queries.
//!
//! A query is a single token classified by its shape:
//!
//! | Shape              | Searches  | Match                                   |
//! |--------------------|-----------|-----------------------------------------|
//! | letters only       | name      | substring, case-insensitive             |
//! | digits only        | phones    | substring of any phone                  |
//! | `DD.MM.YYYY`       | birthday  | substring of the stored `YYYY-MM-DD`    |
//!
//! Anything else is rejected with [`ValidationError::Query`].

use crate::error::ValidationError;
use crate::field::FieldKind;
use crate::record::Record;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    kind: FieldKind,
    needle: String,
}

impl Query {
    /// Which field this query looks at.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The text searched for, normalized to the stored representation.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// A record matches if any one of its fields of the query's kind matches.
    pub fn matches(&self, record: &Record) -> bool {
        record
            .fields()
            .iter()
            .filter(|field| field.kind() == self.kind)
            .any(|field| match self.kind {
                FieldKind::Name => field.value().to_lowercase().contains(&self.needle),
                FieldKind::Phone | FieldKind::Birthday => field.value().contains(&self.needle),
            })
    }
}

impl FromStr for Query {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ValidationError::Query(s.to_string());

        if text.is_empty() {
            return Err(invalid());
        }

        if text.chars().all(char::is_alphabetic) {
            return Ok(Query {
                kind: FieldKind::Name,
                needle: text.to_lowercase(),
            });
        }

        if text.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Query {
                kind: FieldKind::Phone,
                needle: text.to_string(),
            });
        }

        if let Some(needle) = dotted_to_iso(text) {
            return Ok(Query {
                kind: FieldKind::Birthday,
                needle,
            });
        }

        Err(invalid())
    }
}

/// Rewrites `DD.MM.YYYY` as `YYYY-MM-DD`. Only the shape is checked.
fn dotted_to_iso(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    Some(format!("{}-{}-{}", &text[6..10], &text[3..5], &text[0..2]))
}
