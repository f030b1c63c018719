//! Exits the application.

use crate::command::CommandOutcome;
use crate::error::CommandResult;
use crate::model::Model;

/// `exit` - no model mutation; signals the caller to terminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, _model: &mut Model) -> CommandResult<CommandOutcome> {
        Ok(CommandOutcome::with_exit(
            "Exiting restaurant directory as requested ...",
        ))
    }
}
