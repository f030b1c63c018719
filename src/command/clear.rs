//! Clears the directory.

use crate::command::CommandOutcome;
use crate::error::CommandResult;
use crate::model::{Directory, Model};

/// `clear` - replaces the directory with an empty one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.set_directory(Directory::new());
        Ok(CommandOutcome::new("Restaurant directory has been cleared!"))
    }
}
