//! Deletes a restaurant addressed by display index.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::Model;
use crate::parser::fields;

/// `delete INDEX`
///
/// The index is resolved against the current filtered view, so after a
/// `find` the first displayed restaurant is `delete 1` even if it is not
/// the first in the directory. Removal is by exact state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: DisplayIndex,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const USAGE: &'static str = "delete: Deletes the restaurant at the shown index.\n\
        Parameters: INDEX\n\
        Example: delete 1";

    pub fn new(index: DisplayIndex) -> Self {
        Self { index }
    }

    pub fn parse(args: &str) -> ParseResult<Self> {
        let args = args.trim();
        if args.is_empty() {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        Ok(Self::new(fields::parse_index(args)?))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = shown_restaurant(model, self.index)?;
        model
            .remove_restaurant(&target)
            .map_err(CommandError::from)?;
        Ok(CommandOutcome::new(format!("Deleted restaurant: {target}")))
    }
}
