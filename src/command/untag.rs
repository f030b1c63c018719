//! Removes tags from a restaurant.

use crate::command::tag::parse_index_and_tags;
use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseResult};
use crate::model::Model;
use crate::model::value_objects::Tag;
use std::collections::BTreeSet;

/// `untag INDEX t/TAG [t/TAG]...`
///
/// Every given tag must already be on the restaurant; if any is missing the
/// command fails naming the missing tags and changes nothing. Resets the
/// filter to show-all afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntagCommand {
    index: DisplayIndex,
    tags: BTreeSet<Tag>,
}

impl UntagCommand {
    pub const COMMAND_WORD: &'static str = "untag";

    pub const USAGE: &'static str = "untag: Removes tags from the restaurant at the shown index.\n\
        Parameters: INDEX t/TAG [t/TAG]...\n\
        Example: untag 1 t/supper";

    pub fn new(index: DisplayIndex, tags: BTreeSet<Tag>) -> Self {
        Self { index, tags }
    }

    pub fn parse(args: &str) -> ParseResult<Self> {
        let (index, tags) = parse_index_and_tags(args, Self::USAGE)?;
        Ok(Self::new(index, tags))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = shown_restaurant(model, self.index)?;

        let missing: Vec<&str> = self
            .tags
            .iter()
            .filter(|tag| !target.tags().contains(tag))
            .map(|tag| tag.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(CommandError::tags_not_present(missing));
        }

        let remaining: BTreeSet<Tag> = target
            .tags()
            .iter()
            .filter(|tag| !self.tags.contains(tag))
            .cloned()
            .collect();
        let updated = target.with_tags(remaining);

        model
            .replace_restaurant(&target, updated.clone())
            .map_err(CommandError::from)?;
        model.show_all();
        Ok(CommandOutcome::new(format!(
            "Removed tags from restaurant: {updated}"
        )))
    }
}
