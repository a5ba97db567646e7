//! # Rolodex Architecture
//!
//! Rolodex is a **personal contact directory library** with a small CLI client. The
//! library holds the model and its rules; the binary only turns text into commands
//! and results back into text.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, shell.rs, print.rs)           │
//! │  - One-shot subcommands and the interactive shell           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Command
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the session's book and store           │
//! │  - Saves after every command that changed the book          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (field.rs, record.rs, book.rs, query.rs)             │
//! │  - Validated fields, records, the keyed address book        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Versioned JSON snapshot behind the SnapshotStore trait   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Nothing below the CLI layer prints
//! or swallows a failure: validation, not-found, argument and storage errors all
//! travel back to the caller as a [`error::RolodexError`].
//!
//! ## Logging
//!
//! The library emits `tracing` events (record changes, snapshot reads and writes)
//! and never installs a subscriber. The binary does that.
//!
//! ## Module Overview
//!
//! - [`field`]: `Name`, `Phone`, `Birthday` and their rules
//! - [`record`]: A single contact
//! - [`book`]: The address book and its pagination cursor
//! - [`query`]: Search query classification
//! - [`store`]: Snapshot schema and storage backends
//! - [`command`]: The command vocabulary and its parser
//! - [`commands`]: Business logic for each command
//! - [`api`]: The API facade
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod store;
