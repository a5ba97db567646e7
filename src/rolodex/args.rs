use clap::{Parser, Subcommand};
use rolodex::command::Command;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Personal contact directory for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the address book and its config
    #[arg(long, global = true, env = "ROLODEX_HOME")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact (replaces a contact with the same name)
    Add {
        name: String,
        /// 10-digit phone number
        phone: String,
        /// Birthday as YYYY-MM-DD
        birthday: Option<String>,
    },

    /// Add a new phone to an existing contact
    #[command(name = "add_phone", alias = "add-phone")]
    AddPhone { name: String, phone: String },

    /// Change a contact's phone number
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show the phone numbers of a contact
    Phone { name: String },

    /// Show all contacts, page by page
    #[command(name = "show_all", alias = "ls")]
    ShowAll,

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Show a contact by exact name
    Find { name: String },

    /// Search by name (letters), phone (digits) or birthday (DD.MM.YYYY)
    Search { query: String },

    /// Start the interactive shell (the default)
    Shell,
}

impl Commands {
    /// The library command for this subcommand, or `None` for the shell.
    pub fn into_command(self) -> Option<Command> {
        let command = match self {
            Commands::Add {
                name,
                phone,
                birthday,
            } => Command::Add {
                name,
                phone,
                birthday,
            },
            Commands::AddPhone { name, phone } => Command::AddPhone { name, phone },
            Commands::Change {
                name,
                old_phone,
                new_phone,
            } => Command::Change {
                name,
                old_phone,
                new_phone,
            },
            Commands::Phone { name } => Command::Phone { name },
            Commands::ShowAll => Command::ShowAll,
            Commands::Delete { name } => Command::Delete { name },
            Commands::Find { name } => Command::Find { name },
            Commands::Search { query } => Command::Search { query },
            Commands::Shell => return None,
        };
        Some(command)
    }
}
