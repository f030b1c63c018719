//! Filters the displayed list by keywords.

use crate::command::CommandOutcome;
use crate::error::{CommandResult, ParseError, ParseResult};
use crate::model::{KeywordPredicate, Model, RestaurantFilter};
use crate::parser::fields;

/// `find KEYWORD[,KEYWORD]...`
///
/// Replaces the active predicate. A restaurant is shown when any keyword is
/// a case-insensitive substring of its name, phone, address or any tag.
/// Never mutates the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: KeywordPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const USAGE: &'static str = "find: Shows restaurants matching any of the given \
        comma-separated keywords, searching names, phones, addresses and tags.\n\
        Parameters: KEYWORD[,KEYWORD]...\n\
        Example: find chicken rice, laksa";

    pub fn new(predicate: KeywordPredicate) -> Self {
        Self { predicate }
    }

    pub fn parse(args: &str) -> ParseResult<Self> {
        let keywords = fields::parse_keywords(args);
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        Ok(Self::new(KeywordPredicate::new(keywords)))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.set_filter(RestaurantFilter::Keywords(self.predicate.clone()));
        let count = model.filtered().len();
        Ok(CommandOutcome::new(format!("{count} restaurants listed")))
    }
}
