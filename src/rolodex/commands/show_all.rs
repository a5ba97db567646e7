use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<_> = book.pages(page_size)?.map(|page| page.to_vec()).collect();

    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("The address book is empty."));
    }
    Ok(result.with_pages(pages))
}
