use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub fn run(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
    let message = record.edit_phone(old_phone, new_phone)?;

    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}
