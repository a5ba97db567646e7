use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = book.search(query)?.into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts match \"{}\".",
            query.trim()
        )));
    }
    Ok(result.with_listed_records(matches))
}
