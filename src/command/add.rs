//! Adds a restaurant to the directory.

use crate::command::CommandOutcome;
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::value_objects::{Address, Name, Phone, Visited};
use crate::model::{Model, Restaurant};
use crate::parser::fields;
use crate::parser::tokenizer::{self, Prefix};

/// `add n/NAME p/PHONE a/ADDRESS [t/TAG]...`
///
/// Rejects a restaurant weakly-identical (same name, phone and address) to
/// an existing entry. After a successful insert the directory is re-sorted
/// by name, case-insensitively, so the new entry appears in alphabetical
/// position rather than at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    restaurant: Restaurant,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const USAGE: &'static str = "add: Adds a restaurant to the directory.\n\
        Parameters: n/NAME p/PHONE a/ADDRESS [t/TAG]...\n\
        Example: add n/McDonald's p/67773777 a/200 Victoria St, Singapore 188021 t/fast food";

    pub fn new(restaurant: Restaurant) -> Self {
        Self { restaurant }
    }

    /// Parse the arguments after the command word.
    pub fn parse(args: &str) -> ParseResult<Self> {
        let tokens = tokenizer::tokenize(
            args,
            &[Prefix::NAME, Prefix::PHONE, Prefix::ADDRESS, Prefix::TAG],
        );

        if !tokens.preamble().is_empty() {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        let required = [Prefix::NAME, Prefix::PHONE, Prefix::ADDRESS];
        if required.iter().any(|&p| !tokens.contains(p)) {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        tokens.ensure_no_duplicates(&required)?;

        let name = Name::new(tokens.value_of(Prefix::NAME).unwrap_or_default())?;
        let phone = Phone::new(tokens.value_of(Prefix::PHONE).unwrap_or_default())?;
        let address = Address::new(tokens.value_of(Prefix::ADDRESS).unwrap_or_default())?;
        let tags = fields::parse_tags(tokens.all_values(Prefix::TAG))?;

        Ok(Self::new(Restaurant::new(
            name,
            phone,
            address,
            tags,
            None,
            Visited::default(),
        )))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model
            .add_restaurant(self.restaurant.clone())
            .map_err(CommandError::from)?;
        model.sort_by_name();
        Ok(CommandOutcome::new(format!(
            "New restaurant added: {}",
            self.restaurant
        )))
    }
}
