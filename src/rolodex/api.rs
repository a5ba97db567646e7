//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every rolodex operation, whichever front end is driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`AddressBook`] for the session and the store it came from
//! - **Dispatches** each [`Command`] to its function in `commands/*.rs`
//! - **Persists** the book after every command that changed it
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and the model
//! - **Terminal I/O**: No stdout, stderr, or prompts
//!
//! ## Generic Over SnapshotStore
//!
//! `RolodexApi<S: SnapshotStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::command::Command;
use crate::commands;
use crate::config::RolodexConfig;
use crate::error::Result;
use crate::store::SnapshotStore;
use tracing::{debug, info};

pub struct RolodexApi<S: SnapshotStore> {
    book: AddressBook,
    store: S,
    config: RolodexConfig,
}

impl<S: SnapshotStore> RolodexApi<S> {
    /// Starts with an empty book, ignoring anything already in `store`.
    pub fn new(store: S, config: RolodexConfig) -> Self {
        Self {
            book: AddressBook::new(),
            store,
            config,
        }
    }

    /// Starts with the book saved in `store`, or an empty one if nothing was saved yet.
    ///
    /// A snapshot that exists but cannot be read is an error, not an empty book.
    pub fn open(store: S, config: RolodexConfig) -> Result<Self> {
        let mut api = Self::new(store, config);
        if api.store.exists() {
            api.book.load(&api.store)?;
            info!(
                location = %api.store.location(),
                contacts = api.book.len(),
                "Opened address book"
            );
        }
        Ok(api)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &RolodexConfig {
        &self.config
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone, birthday)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add_phone::run(&mut self.book, name, phone)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old_phone, new_phone)
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn find(&self, name: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.book, name)
    }

    pub fn delete(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn show_all(&self) -> Result<commands::CmdResult> {
        commands::show_all::run(&self.book, self.config.page_size)
    }

    /// Writes the whole book to the store.
    pub fn save(&mut self) -> Result<()> {
        self.book.save(&mut self.store)
    }

    /// Runs one command, saving afterwards if it changed the book.
    ///
    /// If a changing command or its save fails, the book is restored to its
    /// state before the command, so memory never holds unsaved changes.
    pub fn execute(&mut self, command: Command) -> Result<commands::CmdResult> {
        if !command.is_mutating() {
            return self.dispatch(command);
        }

        let before = self.book.clone();
        let outcome = self.dispatch(command).and_then(|result| {
            self.save()?;
            Ok(result)
        });
        if let Err(e) = &outcome {
            debug!(error = %e, "Command failed, restoring address book");
            self.book = before;
        }
        outcome
    }

    fn dispatch(&mut self, command: Command) -> Result<commands::CmdResult> {
        match command {
            Command::Add {
                name,
                phone,
                birthday,
            } => self.add_contact(&name, &phone, birthday.as_deref()),
            Command::AddPhone { name, phone } => self.add_phone(&name, &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_phone(&name, &old_phone, &new_phone),
            Command::Phone { name } => self.phones(&name),
            Command::Find { name } => self.find(&name),
            Command::Delete { name } => self.delete(&name),
            Command::Search { query } => self.search(&query),
            Command::ShowAll => self.show_all(),
            Command::Hello => Ok(commands::session::hello()),
            Command::Help => Ok(commands::session::help()),
            Command::Exit => Ok(commands::session::exit()),
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
