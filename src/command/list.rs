//! Lists every restaurant.

use crate::command::CommandOutcome;
use crate::error::CommandResult;
use crate::model::Model;

/// `list` - resets the predicate to show-all and reports the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.show_all();
        let count = model.filtered().len();
        Ok(CommandOutcome::new(format!("{count} restaurants listed")))
    }
}
