//! Adds tags to a restaurant.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::Model;
use crate::model::value_objects::Tag;
use crate::parser::fields;
use crate::parser::tokenizer::{self, Prefix};
use std::collections::BTreeSet;

/// `tag INDEX t/TAG [t/TAG]...`
///
/// Unions the given tags into the restaurant's tag set. Tagging with a tag
/// the restaurant already carries is not an error; the duplicate collapses.
/// Resets the filter to show-all afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCommand {
    index: DisplayIndex,
    tags: BTreeSet<Tag>,
}

impl TagCommand {
    pub const COMMAND_WORD: &'static str = "tag";

    pub const USAGE: &'static str = "tag: Adds tags to the restaurant at the shown index.\n\
        Parameters: INDEX t/TAG [t/TAG]...\n\
        Example: tag 1 t/halal t/supper";

    pub fn new(index: DisplayIndex, tags: BTreeSet<Tag>) -> Self {
        Self { index, tags }
    }

    pub fn parse(args: &str) -> ParseResult<Self> {
        let (index, tags) = parse_index_and_tags(args, Self::USAGE)?;
        Ok(Self::new(index, tags))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = shown_restaurant(model, self.index)?;

        let mut tags = target.tags().clone();
        tags.extend(self.tags.iter().cloned());
        let updated = target.with_tags(tags);

        model
            .replace_restaurant(&target, updated.clone())
            .map_err(CommandError::from)?;
        model.show_all();
        Ok(CommandOutcome::new(format!("Tagged restaurant: {updated}")))
    }
}

/// Shared argument shape for `tag` and `untag`: an index plus one or more
/// `t/` values.
pub(super) fn parse_index_and_tags(
    args: &str,
    usage: &str,
) -> ParseResult<(DisplayIndex, BTreeSet<Tag>)> {
    let tokens = tokenizer::tokenize(args, &[Prefix::TAG]);
    if tokens.preamble().is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    let index = fields::parse_index(tokens.preamble())?;

    let raw = tokens.all_values(Prefix::TAG);
    if raw.is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    let tags = fields::parse_tags(raw)?;
    Ok((index, tags))
}
