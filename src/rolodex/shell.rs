use crate::print;
use rolodex::api::RolodexApi;
use rolodex::command::Command;
use rolodex::error::RolodexError;
use rolodex::store::SnapshotStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Enter a command: ";

/// Reads commands line by line until `.`, an exit word, or end of input.
///
/// Command failures and undecodable lines are printed and the loop keeps
/// going; other I/O errors on `input` or `out` end it early.
pub fn run<S, R, W>(api: &mut RolodexApi<S>, input: R, out: &mut W) -> io::Result<()>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to rolodex >>> (type \"help\" for commands)")?;
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                print::print_error(out, &RolodexError::Io(e))?;
                continue;
            }
            Err(e) => return Err(e),
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "." {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                print::print_error(out, &e)?;
                continue;
            }
        };
        debug!(?command, "Running command");

        let exit = command.is_exit();
        match api.execute(command) {
            Ok(result) => print::print_result(out, &result)?,
            Err(e) => print::print_error(out, &e)?,
        }
        if exit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex::config::RolodexConfig;
    use rolodex::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn session(script: &str) -> (RolodexApi<InMemoryStore>, String) {
        session_bytes(script.as_bytes())
    }

    fn session_bytes(script: &[u8]) -> (RolodexApi<InMemoryStore>, String) {
        colored::control::set_override(false);
        let mut api = RolodexApi::new(InMemoryStore::new(), RolodexConfig::default());
        let mut out = Vec::new();
        run(&mut api, Cursor::new(script.to_vec()), &mut out).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn runs_commands_until_exit() {
        let (api, out) = session(
            "hello\n\
             add John 1234567890\n\
             phone John\n\
             exit\n\
             add Late 1112223333\n",
        );

        assert!(out.contains("Hello! How can I help you?"));
        assert!(out.contains("Name: John, Phones: 1234567890"));
        assert!(out.contains("Good bye!"));
        assert!(api.book().find("Late").is_none());
        assert!(api.store().exists());
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (api, out) = session(
            "add John\n\
             add John 123\n\
             dance\n\
             delete Ghost\n\
             add John 1234567890\n",
        );

        assert!(out.contains("Error: Wrong number of arguments for add"));
        assert!(out.contains("Error: Phone number must be a 10-digit number"));
        assert!(out.contains("Error: Invalid command: dance"));
        assert!(out.contains("Error: Contact with name \"Ghost\" not found"));
        assert_eq!(api.book().len(), 1);
    }

    #[test]
    fn undecodable_line_does_not_end_the_session() {
        let (api, out) = session_bytes(b"add Ann 12\xff\xfe\nadd Bob 1234567890\n");
        assert!(out.contains("Error: IO error"));
        assert!(api.book().find("Ann").is_none());
        assert!(api.book().find("Bob").is_some());
    }

    #[test]
    fn dot_stops_the_loop() {
        let (api, _) = session("add Ann 1234567890\n.\nadd Bob 1234567890\n");
        assert_eq!(api.book().len(), 1);
    }

    #[test]
    fn show_all_prints_pages() {
        let (_, out) = session(
            "add Ann 1111111111 1990-01-01\n\
             add Bob 2222222222\n\
             show_all\n",
        );
        assert!(out.contains("Page 1 of 1"));
        assert!(out.contains("1990-01-01"));
        assert!(out.contains("2222222222"));
    }
}
