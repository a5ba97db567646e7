use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::default()
        .with_affected_records(vec![removed])
        .with_message(CmdMessage::success(format!(
            "Contact with name \"{}\" has been deleted.",
            name
        ))))
}
