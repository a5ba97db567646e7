use colored::*;
use rolodex::api::{CmdMessage, CmdResult, MessageLevel};
use rolodex::error::RolodexError;
use rolodex::record::Record;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 24;
const BIRTHDAY_WIDTH: usize = 10;

pub fn print_result(out: &mut impl Write, result: &CmdResult) -> io::Result<()> {
    print_records(out, &result.affected_records)?;
    print_records(out, &result.listed_records)?;

    let page_count = result.pages.len();
    for (i, page) in result.pages.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let header = format!("Page {} of {}", i + 1, page_count);
        writeln!(out, "{}", header.dimmed())?;
        print_records(out, page)?;
    }

    print_messages(out, &result.messages)
}

pub fn print_messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub fn print_error(out: &mut impl Write, error: &RolodexError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

fn print_records(out: &mut impl Write, records: &[Record]) -> io::Result<()> {
    for record in records {
        let name = truncate_to_width(record.name().value(), NAME_WIDTH);
        let name_padding = NAME_WIDTH.saturating_sub(name.width());

        let birthday = record
            .birthday()
            .map(|b| b.value().to_string())
            .unwrap_or_default();
        let birthday_padding = BIRTHDAY_WIDTH.saturating_sub(birthday.width());

        let phones = if record.phones().is_empty() {
            "-".to_string()
        } else {
            record.phone_list()
        };

        writeln!(
            out,
            "  {}{}  {}{}  {}",
            name.bold(),
            " ".repeat(name_padding),
            birthday.dimmed(),
            " ".repeat(birthday_padding),
            phones
        )?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
