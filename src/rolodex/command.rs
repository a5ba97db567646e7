//! The command vocabulary shared by every front end.
//!
//! A [`Command`] is one requested operation with its arguments already split
//! out. Lines of user text are parsed with [`str::parse`]:
//!
//! ```
//! use rolodex::command::Command;
//!
//! let cmd: Command = "add John 1234567890".parse().unwrap();
//! assert_eq!(
//!     cmd,
//!     Command::Add {
//!         name: "John".into(),
//!         phone: "1234567890".into(),
//!         birthday: None,
//!     }
//! );
//!
//! assert!("add John".parse::<Command>().is_err());
//! assert_eq!("good bye".parse::<Command>().unwrap(), Command::Exit);
//! ```
//!
//! Command words are case-insensitive. Arguments are passed through as typed.

use crate::error::{Result, RolodexError};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    AddPhone {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    Hello,
    ShowAll,
    Exit,
    Help,
    Delete {
        name: String,
    },
    Find {
        name: String,
    },
    Search {
        query: String,
    },
}

impl Command {
    /// Whether running this command changes the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::AddPhone { .. }
                | Command::Change { .. }
                | Command::Delete { .. }
        )
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

/// Help entry for one command word.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub args: &'static str,
    pub description: &'static str,
}

impl CommandInfo {
    pub fn usage(&self) -> String {
        if self.args.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, self.args)
        }
    }
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "add",
        args: "<name> <phone> [birthday]",
        description: "Add a new contact",
    },
    CommandInfo {
        name: "add_phone",
        args: "<name> <phone>",
        description: "Add a new phone to an existing contact",
    },
    CommandInfo {
        name: "change",
        args: "<name> <old_phone> <new_phone>",
        description: "Change a contact's phone number",
    },
    CommandInfo {
        name: "phone",
        args: "<name>",
        description: "Get the phone numbers for a contact",
    },
    CommandInfo {
        name: "hello",
        args: "",
        description: "Greet the bot",
    },
    CommandInfo {
        name: "show_all",
        args: "",
        description: "Show all contacts, page by page",
    },
    CommandInfo {
        name: "good bye",
        args: "",
        description: "Exit the bot",
    },
    CommandInfo {
        name: "close",
        args: "",
        description: "Exit the bot",
    },
    CommandInfo {
        name: "exit",
        args: "",
        description: "Exit the bot",
    },
    CommandInfo {
        name: "help",
        args: "",
        description: "Show available commands",
    },
    CommandInfo {
        name: "delete",
        args: "<name>",
        description: "Delete a contact",
    },
    CommandInfo {
        name: "find",
        args: "<name>",
        description: "Show a contact by exact name",
    },
    CommandInfo {
        name: "search",
        args: "<letters|digits|DD.MM.YYYY>",
        description: "Search contacts by name, phone or birthday",
    },
];

fn expect_args(command: &str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }
    let usage = COMMANDS
        .iter()
        .find(|info| info.name == command)
        .map(CommandInfo::usage)
        .unwrap_or_else(|| command.to_string());
    Err(RolodexError::Argument(format!(
        "Wrong number of arguments for {}. Usage: {}",
        command, usage
    )))
}

impl FromStr for Command {
    type Err = RolodexError;

    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return Err(RolodexError::Argument(
                "Enter a command (try \"help\")".to_string(),
            ));
        };
        let word = first.to_lowercase();

        if word == "good" && tokens.get(1).is_some_and(|t| t.eq_ignore_ascii_case("bye")) {
            expect_args("good bye", &tokens[2..], 0, 0)?;
            return Ok(Command::Exit);
        }

        let args = &tokens[1..];
        let arg = |i: usize| args[i].to_string();

        let command = match word.as_str() {
            "add" => {
                expect_args("add", args, 2, 3)?;
                Command::Add {
                    name: arg(0),
                    phone: arg(1),
                    birthday: args.get(2).map(|b| b.to_string()),
                }
            }
            "add_phone" => {
                expect_args("add_phone", args, 2, 2)?;
                Command::AddPhone {
                    name: arg(0),
                    phone: arg(1),
                }
            }
            "change" => {
                expect_args("change", args, 3, 3)?;
                Command::Change {
                    name: arg(0),
                    old_phone: arg(1),
                    new_phone: arg(2),
                }
            }
            "phone" => {
                expect_args("phone", args, 1, 1)?;
                Command::Phone { name: arg(0) }
            }
            "delete" => {
                expect_args("delete", args, 1, 1)?;
                Command::Delete { name: arg(0) }
            }
            "find" => {
                expect_args("find", args, 1, 1)?;
                Command::Find { name: arg(0) }
            }
            "search" => {
                expect_args("search", args, 1, 1)?;
                Command::Search { query: arg(0) }
            }
            "hello" => {
                expect_args("hello", args, 0, 0)?;
                Command::Hello
            }
            "show_all" => {
                expect_args("show_all", args, 0, 0)?;
                Command::ShowAll
            }
            "help" => {
                expect_args("help", args, 0, 0)?;
                Command::Help
            }
            "close" | "exit" => {
                expect_args(&word, args, 0, 0)?;
                Command::Exit
            }
            other => {
                return Err(RolodexError::Argument(format!(
                    "Invalid command: {}",
                    other
                )));
            }
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    fn arity_error(line: &str) -> String {
        match line.parse::<Command>() {
            Err(RolodexError::Argument(msg)) => msg,
            other => panic!("expected an argument error for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_parses_add_with_and_without_birthday() {
        assert_eq!(
            parse("add John 1234567890 1990-01-01"),
            Command::Add {
                name: "John".into(),
                phone: "1234567890".into(),
                birthday: Some("1990-01-01".into()),
            }
        );
        assert!(matches!(
            parse("add John 1234567890"),
            Command::Add { birthday: None, .. }
        ));
    }

    #[test]
    fn test_parses_name_commands() {
        assert_eq!(parse("phone John"), Command::Phone { name: "John".into() });
        assert_eq!(parse("delete John"), Command::Delete { name: "John".into() });
        assert_eq!(parse("find John"), Command::Find { name: "John".into() });
        assert_eq!(
            parse("change John 1111111111 2222222222"),
            Command::Change {
                name: "John".into(),
                old_phone: "1111111111".into(),
                new_phone: "2222222222".into(),
            }
        );
    }

    #[test]
    fn test_command_word_is_case_insensitive_but_args_are_not() {
        assert_eq!(parse("  FIND   John "), Command::Find { name: "John".into() });
        assert_eq!(parse("Show_All"), Command::ShowAll);
    }

    #[test]
    fn test_exit_words() {
        assert_eq!(parse("good bye"), Command::Exit);
        assert_eq!(parse("Good Bye"), Command::Exit);
        assert_eq!(parse("close"), Command::Exit);
        assert_eq!(parse("exit"), Command::Exit);
        assert!(parse("exit").is_exit());
    }

    #[test]
    fn test_wrong_arity() {
        assert!(arity_error("add John").contains("Usage: add <name> <phone> [birthday]"));
        arity_error("add John 1234567890 1990-01-01 extra");
        arity_error("add_phone John");
        arity_error("change John 1111111111");
        arity_error("phone");
        arity_error("find John Smith");
        arity_error("hello there");
        arity_error("good bye now");
    }

    #[test]
    fn test_unknown_and_empty_input() {
        assert_eq!(arity_error("dance"), "Invalid command: dance");
        arity_error("   ");
        arity_error("good");
    }

    #[test]
    fn test_mutating_commands() {
        assert!(parse("add John 1234567890").is_mutating());
        assert!(parse("add_phone John 1234567890").is_mutating());
        assert!(parse("change John 1111111111 2222222222").is_mutating());
        assert!(parse("delete John").is_mutating());
        assert!(!parse("find John").is_mutating());
        assert!(!parse("show_all").is_mutating());
    }

    #[test]
    fn test_every_command_has_help() {
        for word in ["add", "add_phone", "change", "phone", "hello", "show_all", "help", "delete", "find", "search", "close", "exit", "good bye"] {
            assert!(COMMANDS.iter().any(|info| info.name == word), "{}", word);
        }
    }
}
