//! Marks a restaurant as visited.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::Model;
use crate::model::value_objects::Visited;
use crate::parser::fields;

/// `mark INDEX`
///
/// Fails without mutating anything if the restaurant is already visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkCommand {
    index: DisplayIndex,
}

impl MarkCommand {
    pub const COMMAND_WORD: &'static str = "mark";

    pub const USAGE: &'static str = "mark: Marks the restaurant at the shown index as visited.\n\
        Parameters: INDEX\n\
        Example: mark 1";

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
        if target.visited().is_visited() {
            return Err(CommandError::AlreadyVisited {
                restaurant: target.to_string(),
            });
        }

        let updated = target.with_visited(Visited::yes());
        model
            .replace_restaurant(&target, updated.clone())
            .map_err(CommandError::from)?;
        Ok(CommandOutcome::new(format!(
            "Marked restaurant as visited: {updated}"
        )))
    }
}
