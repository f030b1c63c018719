//! The directory aggregate root.

use crate::error::ModelResult;
use crate::model::restaurant::Restaurant;
use crate::model::unique_list::UniqueRestaurantList;

/// The aggregate root owning the identity-unique restaurant collection.
///
/// A `Directory` is created empty, replaced wholesale on load and on `clear`,
/// and mutated incrementally by commands. All mutation is delegated to the
/// [`UniqueRestaurantList`], so the uniqueness invariant holds for every path
/// through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    restaurants: UniqueRestaurantList,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory from a full list of restaurants.
    ///
    /// # Errors
    ///
    /// `ModelError::DuplicateRestaurant` if the list holds two
    /// weakly-identical entries.
    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> ModelResult<Self> {
        let mut directory = Self::new();
        directory.restaurants.set_all(restaurants)?;
        Ok(directory)
    }

    /// The backing collection, in display order.
    pub fn restaurants(&self) -> &UniqueRestaurantList {
        &self.restaurants
    }

    /// Whether a weakly-identical restaurant is already present.
    pub fn contains_same(&self, restaurant: &Restaurant) -> bool {
        self.restaurants.contains_same(restaurant)
    }

    /// Add a restaurant. See [`UniqueRestaurantList::add`].
    pub fn add(&mut self, restaurant: Restaurant) -> ModelResult<()> {
        self.restaurants.add(restaurant)
    }

    /// Remove a restaurant by exact state. See [`UniqueRestaurantList::remove`].
    pub fn remove(&mut self, restaurant: &Restaurant) -> ModelResult<()> {
        self.restaurants.remove(restaurant)
    }

    /// Replace a restaurant. See [`UniqueRestaurantList::replace`].
    pub fn replace(&mut self, target: &Restaurant, replacement: Restaurant) -> ModelResult<()> {
        self.restaurants.replace(target, replacement)
    }

    /// Replace the whole contents. See [`UniqueRestaurantList::set_all`].
    pub fn set_restaurants(&mut self, restaurants: Vec<Restaurant>) -> ModelResult<()> {
        self.restaurants.set_all(restaurants)
    }

    /// Sort the collection by name, case-insensitive, stable.
    pub fn sort_by_name(&mut self) {
        self.restaurants.sort_by_name();
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::value_objects::{Address, Name, Phone, Visited};
    use std::collections::BTreeSet;

    fn restaurant(name: &str) -> Restaurant {
        Restaurant::new(
            Name::new(name).unwrap(),
            Phone::new("67773777").unwrap(),
            Address::new("200 Victoria St, Singapore 188021").unwrap(),
            BTreeSet::new(),
            None,
            Visited::default(),
        )
    }

    #[test]
    fn test_new_directory_is_empty() {
        assert!(Directory::new().is_empty());
    }

    #[test]
    fn test_with_restaurants_validates_uniqueness() {
        let a = restaurant("KFC");
        assert!(Directory::with_restaurants(vec![a.clone()]).is_ok());
        assert_eq!(
            Directory::with_restaurants(vec![a.clone(), a]),
            Err(ModelError::DuplicateRestaurant)
        );
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut directory = Directory::new();
        let kfc = restaurant("KFC");
        directory.add(kfc.clone()).unwrap();
        assert_eq!(directory.len(), 1);
        directory.remove(&kfc).unwrap();
        assert!(directory.is_empty());
    }
}
