//! Rates a restaurant.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::Model;
use crate::model::value_objects::Rating;
use crate::parser::fields;
use crate::parser::tokenizer::{self, Prefix};

/// `rate INDEX RATING` (the rating is also accepted as `r/RATING`)
///
/// The rating is range-checked at parse time, so an out-of-range `rate 1 6`
/// never reaches the model. Executing replaces any existing rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCommand {
    index: DisplayIndex,
    rating: Rating,
}

impl RateCommand {
    pub const COMMAND_WORD: &'static str = "rate";

    pub const USAGE: &'static str = "rate: Rates the restaurant at the shown index from 0 to 5.\n\
        Parameters: INDEX RATING (or INDEX r/RATING)\n\
        Example: rate 1 4";

    pub fn new(index: DisplayIndex, rating: Rating) -> Self {
        Self { index, rating }
    }

    pub fn parse(args: &str) -> ParseResult<Self> {
        let tokens = tokenizer::tokenize(args, &[Prefix::RATING]);
        tokens.ensure_no_duplicates(&[Prefix::RATING])?;

        let preamble_tokens: Vec<&str> = tokens.preamble().split_whitespace().collect();
        let (index_token, rating_token) = match (preamble_tokens.as_slice(), tokens.value_of(Prefix::RATING)) {
            ([index], Some(rating)) => (*index, rating),
            ([index, rating], None) => (*index, *rating),
            _ => return Err(ParseError::invalid_format(Self::USAGE)),
        };

        let index = fields::parse_index(index_token)?;
        let rating = fields::parse_rating(rating_token)?;
        Ok(Self::new(index, rating))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let target = shown_restaurant(model, self.index)?;
        let updated = target.with_rating(self.rating);
        model
            .replace_restaurant(&target, updated.clone())
            .map_err(CommandError::from)?;
        Ok(CommandOutcome::new(format!("Rated restaurant: {updated}")))
    }
}
