use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::field::Name;
use crate::record::Record;

/// Creates a contact with one phone. An existing contact of the same name is replaced.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(RolodexError::Argument(
            "Contact name cannot be empty".to_string(),
        ));
    }

    let mut record = Record::new(Name::new(name), None)?;
    record.add_phone(phone)?;
    record.set_birthday(birthday)?;

    let mut result = CmdResult::default();
    if book.add_record(record.clone()).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Replaced the existing contact \"{}\"",
            name
        )));
    }

    let content = match record.birthday() {
        Some(b) => format!(
            "A new contact added successfully. Name: {}, Phone: {}, Birthday: {}",
            name, phone, b
        ),
        None => format!(
            "A new contact added successfully. Name: {}, Phone: {}",
            name, phone
        ),
    };
    result.add_message(CmdMessage::success(content));
    result.affected_records.push(record);

    Ok(result)
}
