//! Marks a restaurant as not visited.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::Model;
use crate::model::value_objects::Visited;
use crate::parser::fields;

/// `unmark INDEX` - the inverse of `mark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmarkCommand {
    index: DisplayIndex,
}

impl UnmarkCommand {
    pub const COMMAND_WORD: &'static str = "unmark";

    pub const USAGE: &'static str = "unmark: Marks the restaurant at the shown index as not visited.\n\
        Parameters: INDEX\n\
        Example: unmark 1";

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
        if !target.visited().is_visited() {
            return Err(CommandError::NotVisited);
        }

        let updated = target.with_visited(Visited::no());
        model
            .replace_restaurant(&target, updated.clone())
            .map_err(CommandError::from)?;
        Ok(CommandOutcome::new(format!(
            "Marked restaurant as not visited: {updated}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{AddCommand, MarkCommand};

    fn model() -> Model {
        let mut model = Model::new();
        AddCommand::parse(" n/Atlas p/63964466 a/600 North Bridge Rd, Singapore 188778")
            .unwrap()
            .execute(&mut model)
            .unwrap();
        model
    }

    #[test]
    fn test_mark_then_unmark_restores_fresh_state() {
        let mut model = model();
        let fresh = model.filtered()[0].clone();

        MarkCommand::parse(" 1").unwrap().execute(&mut model).unwrap();
        UnmarkCommand::parse(" 1").unwrap().execute(&mut model).unwrap();

        assert_eq!(model.filtered()[0], &fresh);
    }

    #[test]
    fn test_execute_not_visited_fails() {
        let mut model = model();
        assert_eq!(
            UnmarkCommand::parse(" 1").unwrap().execute(&mut model),
            Err(CommandError::NotVisited)
        );
    }

    #[test]
    fn test_execute_out_of_range() {
        let mut model = model();
        assert_eq!(
            UnmarkCommand::parse(" 2").unwrap().execute(&mut model),
            Err(CommandError::InvalidDisplayedIndex)
        );
    }
}
