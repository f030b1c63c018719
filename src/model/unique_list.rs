//! An ordered restaurant collection that enforces identity uniqueness.

use crate::error::{ModelError, ModelResult};
use crate::model::restaurant::Restaurant;

/// An ordered list of restaurants with at most one entry per weak identity.
///
/// Insertion order is the default display order until a sort is applied.
/// Every mutation re-checks the invariant: the list never holds two
/// restaurants that are the same by
/// [`is_same_restaurant`](Restaurant::is_same_restaurant). Lookups for
/// `replace` and `remove` use strong equality, so callers must pass the exact
/// current state of the entry they resolved, not a stale or edited copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueRestaurantList {
    restaurants: Vec<Restaurant>,
}

impl UniqueRestaurantList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the list holds an entry weakly-identical to `restaurant`.
    pub fn contains_same(&self, restaurant: &Restaurant) -> bool {
        self.restaurants
            .iter()
            .any(|r| r.is_same_restaurant(restaurant))
    }

    /// Whether the list holds an entry strongly equal to `restaurant`.
    pub fn contains(&self, restaurant: &Restaurant) -> bool {
        self.restaurants.iter().any(|r| r == restaurant)
    }

    /// Append a restaurant.
    ///
    /// # Errors
    ///
    /// `ModelError::DuplicateRestaurant` if an entry with the same weak
    /// identity already exists.
    pub fn add(&mut self, restaurant: Restaurant) -> ModelResult<()> {
        if self.contains_same(&restaurant) {
            return Err(ModelError::DuplicateRestaurant);
        }
        self.restaurants.push(restaurant);
        Ok(())
    }

    /// Replace `target` with `replacement`, in place.
    ///
    /// Self-replacement is allowed: `replacement` may share `target`'s weak
    /// identity. It must not share identity with any *other* entry.
    ///
    /// # Errors
    ///
    /// * `ModelError::RestaurantNotFound` - no entry strongly equals `target`
    /// * `ModelError::DuplicateRestaurant` - `replacement` collides with a
    ///   different entry
    pub fn replace(&mut self, target: &Restaurant, replacement: Restaurant) -> ModelResult<()> {
        let index = self
            .restaurants
            .iter()
            .position(|r| r == target)
            .ok_or(ModelError::RestaurantNotFound)?;

        let collides = self
            .restaurants
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.is_same_restaurant(&replacement));
        if collides {
            return Err(ModelError::DuplicateRestaurant);
        }

        self.restaurants[index] = replacement;
        Ok(())
    }

    /// Remove the entry strongly equal to `restaurant`.
    ///
    /// # Errors
    ///
    /// `ModelError::RestaurantNotFound` if no entry matches exactly.
    pub fn remove(&mut self, restaurant: &Restaurant) -> ModelResult<()> {
        let index = self
            .restaurants
            .iter()
            .position(|r| r == restaurant)
            .ok_or(ModelError::RestaurantNotFound)?;
        self.restaurants.remove(index);
        Ok(())
    }

    /// Replace the whole contents.
    ///
    /// # Errors
    ///
    /// `ModelError::DuplicateRestaurant` if `restaurants` contains two
    /// weakly-identical entries; the list is left unchanged in that case.
    pub fn set_all(&mut self, restaurants: Vec<Restaurant>) -> ModelResult<()> {
        for (i, a) in restaurants.iter().enumerate() {
            if restaurants[i + 1..].iter().any(|b| a.is_same_restaurant(b)) {
                return Err(ModelError::DuplicateRestaurant);
            }
        }
        self.restaurants = restaurants;
        Ok(())
    }

    /// Sort by name, case-insensitive ascending. Stable for ties.
    pub fn sort_by_name(&mut self) {
        self.restaurants
            .sort_by_key(|r| r.name().to_lowercase());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl<'a> IntoIterator for &'a UniqueRestaurantList {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.restaurants.iter()
    }
}
