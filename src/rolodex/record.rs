use crate::error::{Result, RolodexError, ValidationError};
use crate::field::{Birthday, Field, Name, Phone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a fixed name, its phones in insertion order and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Empty birthday text is the same as no birthday.
    pub fn new(name: Name, birthday: Option<&str>) -> std::result::Result<Self, ValidationError> {
        let mut record = Self {
            name,
            phones: Vec::new(),
            birthday: None,
        };
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, value: Option<&str>) -> std::result::Result<(), ValidationError> {
        self.birthday = match value {
            Some(text) if !text.is_empty() => Some(Birthday::new(text)?),
            _ => None,
        };
        Ok(())
    }

    pub fn add_phone(&mut self, text: &str) -> std::result::Result<(), ValidationError> {
        let phone = Phone::new(text)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn find_phone(&self, text: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == text)
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<String> {
        let position = self
            .phones
            .iter()
            .position(|p| p.value() == old)
            .ok_or_else(|| RolodexError::PhoneNotFound {
                name: self.name.value().to_string(),
                phone: old.to_string(),
            })?;

        self.phones[position] = Phone::new(new)?;
        Ok(format!(
            "Phone {} has been updated to {} in the record: {}",
            old,
            new,
            self.name.value()
        ))
    }

    /// Removes the first phone equal to `text`. Absent phones are not an error.
    pub fn remove_phone(&mut self, text: &str) -> Option<Phone> {
        let position = self.phones.iter().position(|p| p.value() == text)?;
        Some(self.phones.remove(position))
    }

    /// Every field of the record, name first, then phones, then the birthday.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(self.phones.len() + 2);
        fields.push(Field::from(self.name.clone()));
        fields.extend(self.phones.iter().cloned().map(Field::from));
        if let Some(birthday) = &self.birthday {
            fields.push(Field::from(birthday.clone()));
        }
        fields
    }

    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phones: {}", self.name, self.phone_list())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
