use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
    record.add_phone(phone)?;

    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "A new phone: {}, has been added to contact name: {}.",
            phone, name
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Phone;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn appends_phone() {
        let mut book = BookFixture::new()
            .with_contact("John", &["1234567890"], None)
            .book;
        let result = run(&mut book, "John", "1112223333").unwrap();

        let phones: Vec<&str> = result.affected_records[0]
            .phones()
            .iter()
            .map(Phone::value)
            .collect();
        assert_eq!(phones, vec!["1234567890", "1112223333"]);
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "Ghost", "1112223333"),
            Err(RolodexError::ContactNotFound(name)) if name == "Ghost"
        ));
    }

    #[test]
    fn invalid_phone() {
        let mut book = BookFixture::new().with_contact("John", &[], None).book;
        assert!(matches!(
            run(&mut book, "John", "111"),
            Err(RolodexError::Validation(_))
        ));
        assert!(book.find("John").unwrap().phones().is_empty());
    }
}
