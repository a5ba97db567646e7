use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::{Result, RolodexError};

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}
