//! Shows usage help.

use crate::command::CommandOutcome;
use crate::error::CommandResult;
use crate::model::Model;

/// `help` - no model mutation; signals the UI to show its help surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";

    pub const USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, _model: &mut Model) -> CommandResult<CommandOutcome> {
        Ok(CommandOutcome::with_help("Showing help."))
    }
}
