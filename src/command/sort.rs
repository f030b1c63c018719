//! Sorts the directory by name.

use crate::command::CommandOutcome;
use crate::error::CommandResult;
use crate::model::Model;

/// `sort`
///
/// Sorts the backing sequence by name, case-insensitive ascending, stable
/// for ties. The active predicate is re-applied unchanged over the new
/// order. Idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCommand;

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.sort_by_name();
        Ok(CommandOutcome::new("Sorted all restaurants by name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::value_objects::{Address, Name, Phone, Visited};
    use crate::model::{KeywordPredicate, Restaurant, RestaurantFilter};
    use std::collections::BTreeSet;

    fn restaurant(name: &str, phone: &str) -> Restaurant {
        Restaurant::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Address::new("200 Victoria St, Singapore 188021").unwrap(),
            BTreeSet::new(),
            None,
            Visited::default(),
        )
    }

    fn unsorted_model() -> Model {
        let mut model = Model::new();
        // inserted directly, bypassing add's sort-on-insert
        model.add_restaurant(restaurant("zam zam", "63987308")).unwrap();
        model.add_restaurant(restaurant("Atlas", "63964466")).unwrap();
        model.add_restaurant(restaurant("birds of paradise", "96788120")).unwrap();
        model
    }

    #[test]
    fn test_execute_orders_case_insensitively() {
        let mut model = unsorted_model();
        SortCommand::new().execute(&mut model).unwrap();
        let names: Vec<_> = model.filtered().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Atlas", "birds of paradise", "zam zam"]);
    }

    #[test]
    fn test_execute_is_idempotent_and_preserves_elements() {
        let mut model = unsorted_model();
        SortCommand::new().execute(&mut model).unwrap();
        let once: Vec<_> = model.filtered().into_iter().cloned().collect();

        SortCommand::new().execute(&mut model).unwrap();
        let twice: Vec<_> = model.filtered().into_iter().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn test_execute_leaves_predicate_unchanged() {
        let mut model = unsorted_model();
        let filter = RestaurantFilter::Keywords(KeywordPredicate::new(["a"]));
        model.set_filter(filter.clone());

        SortCommand::new().execute(&mut model).unwrap();
        assert_eq!(model.filter(), &filter);
    }
}
