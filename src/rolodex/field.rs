//! Validated scalar values stored on a contact.
//!
//! Every field holds its text verbatim. The variants differ only in the rule
//! applied when the value is constructed:
//!
//! - [`Name`]: any text.
//! - [`Phone`]: exactly 10 ASCII digits.
//! - [`Birthday`]: a real calendar date written as `YYYY-MM-DD`.
//!
//! The same rules run when a snapshot is deserialized, so a value that made it
//! into a [`crate::record::Record`] is always valid.

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const PHONE_LEN: usize = 10;
const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// The closed set of field variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Names are never rejected here; blank-name checks belong to the caller.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_phone(&value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let date = parse_birthday(&value)?;
        Ok(Self { value, date })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::new(value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.value
    }
}

/// Any one field value, tagged with its variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name(Name),
    Phone(Phone),
    Birthday(Birthday),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Name(_) => FieldKind::Name,
            Field::Phone(_) => FieldKind::Phone,
            Field::Birthday(_) => FieldKind::Birthday,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Field::Name(name) => name.value(),
            Field::Phone(phone) => phone.value(),
            Field::Birthday(birthday) => birthday.value(),
        }
    }
}

impl From<Name> for Field {
    fn from(name: Name) -> Self {
        Field::Name(name)
    }
}

impl From<Phone> for Field {
    fn from(phone: Phone) -> Self {
        Field::Phone(phone)
    }
}

impl From<Birthday> for Field {
    fn from(birthday: Birthday) -> Self {
        Field::Birthday(birthday)
    }
}

macro_rules! display_value {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        })*
    };
}

display_value!(Name, Phone, Birthday, Field);

fn validate_phone(text: &str) -> Result<(), ValidationError> {
    if text.len() == PHONE_LEN && text.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::Phone(text.to_string()))
    }
}

/// Strict `YYYY-MM-DD`: chrono alone would also take `2020-1-5` or a signed year.
fn parse_birthday(text: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::Birthday(text.to_string());

    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).map_err(|_| invalid())
}
