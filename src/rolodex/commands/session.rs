//! Commands that talk to the user without touching the book.

use crate::command::COMMANDS;
use crate::commands::{CmdMessage, CmdResult};

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("Hello! How can I help you?"))
}

pub fn help() -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::info("Available commands:"));
    for info in COMMANDS {
        result.add_message(CmdMessage::info(format!(
            "  {}: {}",
            info.usage(),
            info.description
        )));
    }
    result
}

pub fn exit() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::success("Thank you for using rolodex. Good bye!"))
}
