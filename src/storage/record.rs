//! The serialized shape of the directory.
//!
//! Records are plain strings and scalars: what the model accepts from and
//! hands to the storage collaborator. Decoding a record back into the model
//! re-runs every value object validator and re-establishes the uniqueness
//! invariant — a file edited by hand does not get to bypass the rules the
//! parser enforces.

use crate::model::value_objects::{Address, Name, Phone, Rating, Tag, Visited};
use crate::model::{Directory, Restaurant};
use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One restaurant, flattened for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    name: String,
    phone: String,
    address: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<u8>,
    #[serde(default)]
    visited: bool,
}

impl RestaurantRecord {
    /// Flatten a model restaurant into its stored form.
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name().as_str().to_string(),
            phone: restaurant.phone().as_str().to_string(),
            address: restaurant.address().as_str().to_string(),
            tags: restaurant
                .tags()
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
            rating: restaurant.rating().map(|rating| rating.value()),
            visited: restaurant.visited().is_visited(),
        }
    }

    /// Rebuild the model restaurant, re-validating every field.
    ///
    /// # Errors
    ///
    /// `StorageError::InvalidRecord` carrying the violated constraint.
    pub fn to_restaurant(&self) -> Result<Restaurant, StorageError> {
        let name =
            Name::new(self.name.clone()).map_err(|e| StorageError::invalid_record(e.to_string()))?;
        let phone = Phone::new(self.phone.clone())
            .map_err(|e| StorageError::invalid_record(e.to_string()))?;
        let address = Address::new(self.address.clone())
            .map_err(|e| StorageError::invalid_record(e.to_string()))?;

        let mut tags = BTreeSet::new();
        for label in &self.tags {
            tags.insert(
                Tag::new(label.clone())
                    .map_err(|e| StorageError::invalid_record(e.to_string()))?,
            );
        }

        let rating = self
            .rating
            .map(Rating::new)
            .transpose()
            .map_err(|e| StorageError::invalid_record(e.to_string()))?;

        Ok(Restaurant::new(
            name,
            phone,
            address,
            tags,
            rating,
            Visited::new(self.visited),
        ))
    }
}

/// The whole directory, flattened for persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    restaurants: Vec<RestaurantRecord>,
}

impl DirectoryRecord {
    /// Flatten a directory, preserving its display order.
    pub fn from_directory(directory: &Directory) -> Self {
        Self {
            restaurants: directory
                .restaurants()
                .iter()
                .map(RestaurantRecord::from_restaurant)
                .collect(),
        }
    }

    /// Rebuild the directory, re-validating records and uniqueness.
    ///
    /// # Errors
    ///
    /// `StorageError::InvalidRecord` for a bad field or for two records
    /// sharing the same name+phone+address identity.
    pub fn to_directory(&self) -> Result<Directory, StorageError> {
        let restaurants = self
            .restaurants
            .iter()
            .map(RestaurantRecord::to_restaurant)
            .collect::<Result<Vec<_>, _>>()?;
        Directory::with_restaurants(restaurants)
            .map_err(|e| StorageError::invalid_record(e.to_string()))
    }

    pub fn restaurants(&self) -> &[RestaurantRecord] {
        &self.restaurants
    }
}
