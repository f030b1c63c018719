//! Clears a restaurant's rating.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::Model;
use crate::parser::fields;

/// `unrate INDEX`
///
/// Clears the rating back to absent; fails if none is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrateCommand {
    index: DisplayIndex,
}

impl UnrateCommand {
    pub const COMMAND_WORD: &'static str = "unrate";

    pub const USAGE: &'static str = "unrate: Removes the rating of the restaurant at the shown index.\n\
        Parameters: INDEX\n\
        Example: unrate 1";

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
        if target.rating().is_none() {
            return Err(CommandError::NoRating);
        }

        let updated = target.without_rating();
        model
            .replace_restaurant(&target, updated.clone())
            .map_err(CommandError::from)?;
        Ok(CommandOutcome::new(format!(
            "Removed rating from restaurant: {updated}"
        )))
    }
}
