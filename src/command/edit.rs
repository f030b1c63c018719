//! Edits the identity fields of a restaurant.

use crate::command::{CommandOutcome, DisplayIndex, shown_restaurant};
use crate::error::{CommandError, CommandResult, ParseError, ParseResult};
use crate::model::value_objects::{Address, Name, Phone};
use crate::model::{Model, Restaurant};
use crate::parser::fields;
use crate::parser::tokenizer::{self, Prefix};

/// The fields an edit wants to change. Untouched fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub address: Option<Address>,
}

impl EditDescriptor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

/// `edit INDEX [n/NAME] [p/PHONE] [a/ADDRESS]`
///
/// Builds a replacement restaurant that keeps every untouched field — tags,
/// rating and the visited flag always carry over. The replacement may keep
/// the original's identity (fixing a typo in the name is a self-replacement)
/// but must not collide with a *different* entry. After the edit the filter
/// resets to show-all so the edited entry is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: DisplayIndex,
    descriptor: EditDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const USAGE: &'static str = "edit: Edits the restaurant at the shown index. \
        At least one field must be given.\n\
        Parameters: INDEX [n/NAME] [p/PHONE] [a/ADDRESS]\n\
        Example: edit 1 p/91234567";

    pub fn new(index: DisplayIndex, descriptor: EditDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn parse(args: &str) -> ParseResult<Self> {
        let tokens =
            tokenizer::tokenize(args, &[Prefix::NAME, Prefix::PHONE, Prefix::ADDRESS]);

        if tokens.preamble().is_empty() {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        let index = fields::parse_index(tokens.preamble())?;
        tokens.ensure_no_duplicates(&[Prefix::NAME, Prefix::PHONE, Prefix::ADDRESS])?;

        let descriptor = EditDescriptor {
            name: tokens.value_of(Prefix::NAME).map(Name::new).transpose()?,
            phone: tokens.value_of(Prefix::PHONE).map(Phone::new).transpose()?,
            address: tokens
                .value_of(Prefix::ADDRESS)
                .map(Address::new)
                .transpose()?,
        };

        Ok(Self::new(index, descriptor))
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        if self.descriptor.is_empty() {
            return Err(CommandError::NoFieldsEdited);
        }
        let target = shown_restaurant(model, self.index)?;

        let edited = Restaurant::new(
            self.descriptor
                .name
                .clone()
                .unwrap_or_else(|| target.name().clone()),
            self.descriptor
                .phone
                .clone()
                .unwrap_or_else(|| target.phone().clone()),
            self.descriptor
                .address
                .clone()
                .unwrap_or_else(|| target.address().clone()),
            target.tags().clone(),
            target.rating(),
            target.visited(),
        );

        model
            .replace_restaurant(&target, edited.clone())
            .map_err(CommandError::from)?;
        model.show_all();
        Ok(CommandOutcome::new(format!("Edited restaurant: {edited}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::AddCommand;
    use crate::error::ValidationError;
    use crate::model::value_objects::Rating;
    use crate::model::{KeywordPredicate, RestaurantFilter};

    fn model_with(entries: &[(&str, &str)]) -> Model {
        let mut model = Model::new();
        for (name, phone) in entries {
            AddCommand::parse(&format!(
                " n/{name} p/{phone} a/200 Victoria St, Singapore 188021 t/hawker"
            ))
            .unwrap()
            .execute(&mut model)
            .unwrap();
        }
        model
    }

    #[test]
    fn test_parse_fields() {
        let command = EditCommand::parse(" 2 n/New Name p/91234567").unwrap();
        assert_eq!(command.index, DisplayIndex::from_one_based(2));
        assert_eq!(
            command.descriptor.name,
            Some(Name::new("New Name").unwrap())
        );
        assert_eq!(
            command.descriptor.phone,
            Some(Phone::new("91234567").unwrap())
        );
        assert_eq!(command.descriptor.address, None);
    }

    #[test]
    fn test_parse_requires_index() {
        assert_eq!(
            EditCommand::parse(" n/New Name"),
            Err(ParseError::invalid_format(EditCommand::USAGE))
        );
        assert_eq!(EditCommand::parse(" x n/New Name"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn test_parse_no_fields_builds_empty_descriptor() {
        // rejected at execute time, not parse time
        let command = EditCommand::parse(" 1").unwrap();
        assert!(command.descriptor.is_empty());
    }

    #[test]
    fn test_parse_duplicate_prefix_rejected() {
        assert_eq!(
            EditCommand::parse(" 1 n/A n/B"),
            Err(ParseError::duplicate_prefixes(["n/"]))
        );
    }

    #[test]
    fn test_parse_surfaces_constraints() {
        assert_eq!(
            EditCommand::parse(" 1 p/123"),
            Err(ParseError::Constraint(ValidationError::InvalidPhone))
        );
    }

    #[test]
    fn test_execute_no_fields_is_command_error() {
        let mut model = model_with(&[("Atlas", "63964466")]);
        assert_eq!(
            EditCommand::parse(" 1").unwrap().execute(&mut model),
            Err(CommandError::NoFieldsEdited)
        );
    }

    #[test]
    fn test_execute_keeps_untouched_fields() {
        let mut model = model_with(&[("Atlas", "63964466")]);
        // decorate the entry so carry-over is observable
        let original = model.filtered()[0].clone();
        let decorated = original.with_rating(Rating::new(4).unwrap());
        model.replace_restaurant(&original, decorated).unwrap();

        EditCommand::parse(" 1 p/91234567")
            .unwrap()
            .execute(&mut model)
            .unwrap();

        let edited = model.filtered()[0].clone();
        assert_eq!(edited.phone().as_str(), "91234567");
        assert_eq!(edited.name().as_str(), "Atlas");
        assert_eq!(edited.rating(), Some(Rating::new(4).unwrap()));
        assert_eq!(edited.tags().len(), 1);
    }

    #[test]
    fn test_execute_self_identity_edit_allowed() {
        let mut model = model_with(&[("Atlas", "63964466")]);
        // phone unchanged: the replacement keeps the same weak identity
        let outcome = EditCommand::parse(" 1 p/63964466")
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert!(outcome.message().starts_with("Edited restaurant: "));
    }

    #[test]
    fn test_execute_duplicate_with_other_entry_rejected() {
        let mut model = model_with(&[("Atlas", "63964466"), ("Zam Zam", "63987308")]);
        // editing Zam Zam into Atlas's full identity must fail
        assert_eq!(
            EditCommand::parse(" 2 n/Atlas p/63964466")
                .unwrap()
                .execute(&mut model),
            Err(CommandError::DuplicateRestaurant)
        );
    }

    #[test]
    fn test_execute_resets_filter_to_show_all() {
        let mut model = model_with(&[("Atlas", "63964466"), ("Zam Zam", "63987308")]);
        model.set_filter(RestaurantFilter::Keywords(KeywordPredicate::new(["zam"])));

        EditCommand::parse(" 1 n/Zam Zam Express")
            .unwrap()
            .execute(&mut model)
            .unwrap();

        assert_eq!(model.filter(), &RestaurantFilter::All);
        assert_eq!(model.filtered().len(), 2);
    }

    #[test]
    fn test_execute_out_of_range() {
        let mut model = model_with(&[("Atlas", "63964466")]);
        assert_eq!(
            EditCommand::parse(" 5 n/X").unwrap().execute(&mut model),
            Err(CommandError::InvalidDisplayedIndex)
        );
    }
}
