//! The in-memory restaurant directory model.
//!
//! Leaves first: validated [`value_objects`], the immutable
//! [`Restaurant`](restaurant::Restaurant) entity, the identity-unique
//! [`UniqueRestaurantList`](unique_list::UniqueRestaurantList), the
//! [`Directory`](directory::Directory) aggregate root, and the
//! [`RestaurantFilter`](filter::RestaurantFilter) predicate. [`Model`] pairs
//! the directory with the active filter and is what commands execute
//! against.

pub mod directory;
pub mod filter;
pub mod restaurant;
pub mod unique_list;
pub mod value_objects;

pub use directory::Directory;
pub use filter::{KeywordPredicate, RestaurantFilter};
pub use restaurant::Restaurant;
pub use unique_list::UniqueRestaurantList;

use crate::error::ModelResult;

/// The directory plus the active filter predicate.
///
/// The filtered view is derived, never stored: [`filtered`](Self::filtered)
/// recomputes the projection from the live sequence on every call, so a view
/// obtained after any mutation is always consistent with the directory.
/// Commands resolve display indices against this projection at execution
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    directory: Directory,
    filter: RestaurantFilter,
}

impl Model {
    /// Create a model with an empty directory, showing all restaurants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model over an existing directory, showing all restaurants.
    pub fn with_directory(directory: Directory) -> Self {
        Self {
            directory,
            filter: RestaurantFilter::All,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn filter(&self) -> &RestaurantFilter {
        &self.filter
    }

    /// The current filtered view, in directory order.
    pub fn filtered(&self) -> Vec<&Restaurant> {
        self.directory
            .restaurants()
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: RestaurantFilter) {
        self.filter = filter;
    }

    /// Reset the filter to show every restaurant.
    pub fn show_all(&mut self) {
        self.filter = RestaurantFilter::All;
    }

    /// Replace the directory wholesale (load, clear).
    pub fn set_directory(&mut self, directory: Directory) {
        self.directory = directory;
    }

    /// Add a restaurant to the directory.
    pub fn add_restaurant(&mut self, restaurant: Restaurant) -> ModelResult<()> {
        self.directory.add(restaurant)
    }

    /// Remove a restaurant from the directory by exact state.
    pub fn remove_restaurant(&mut self, restaurant: &Restaurant) -> ModelResult<()> {
        self.directory.remove(restaurant)
    }

    /// Replace a restaurant in the directory.
    pub fn replace_restaurant(
        &mut self,
        target: &Restaurant,
        replacement: Restaurant,
    ) -> ModelResult<()> {
        self.directory.replace(target, replacement)
    }

    /// Sort the directory by name.
    pub fn sort_by_name(&mut self) {
        self.directory.sort_by_name();
    }
}
