//! The restaurant entity: an immutable aggregate of validated value objects.

use crate::model::value_objects::{Address, Name, Phone, Rating, Tag, Visited};
use std::collections::BTreeSet;
use std::fmt;

/// A restaurant in the directory.
///
/// All fields are immutable; "editing" a restaurant means building a new
/// `Restaurant` and replacing the old one in the directory. The copy methods
/// (`with_rating`, `with_visited`, ...) exist for exactly that purpose.
///
/// Two equality notions apply:
///
/// - **Weak identity** ([`is_same_restaurant`](Self::is_same_restaurant)):
///   same name, phone and address. This is what duplicate detection uses —
///   two entries for the same place differing only in tags or rating are
///   still "the same restaurant".
/// - **Strong equality** (`==`): every field equal. Used for exact removal
///   and state comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Restaurant {
    name: Name,
    phone: Phone,
    address: Address,
    tags: BTreeSet<Tag>,
    rating: Option<Rating>,
    visited: Visited,
}

impl Restaurant {
    /// Create a restaurant from already-validated parts.
    pub fn new(
        name: Name,
        phone: Phone,
        address: Address,
        tags: BTreeSet<Tag>,
        rating: Option<Rating>,
        visited: Visited,
    ) -> Self {
        Self {
            name,
            phone,
            address,
            tags,
            rating,
            visited,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn visited(&self) -> Visited {
        self.visited
    }

    /// Weak identity: same name, phone and address.
    ///
    /// The directory never holds two restaurants for which this is true.
    pub fn is_same_restaurant(&self, other: &Restaurant) -> bool {
        self.name == other.name && self.phone == other.phone && self.address == other.address
    }

    /// Copy with a different tag set.
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }

    /// Copy with the given rating set.
    pub fn with_rating(&self, rating: Rating) -> Self {
        Self {
            rating: Some(rating),
            ..self.clone()
        }
    }

    /// Copy with the rating cleared to absent.
    pub fn without_rating(&self) -> Self {
        Self {
            rating: None,
            ..self.clone()
        }
    }

    /// Copy with a different visited flag.
    pub fn with_visited(&self, visited: Visited) -> Self {
        Self {
            visited,
            ..self.clone()
        }
    }
}

impl fmt::Display for Restaurant {
    /// The single-line card used in command result messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Address: {}; Rating: ",
            self.name, self.phone, self.address
        )?;
        match self.rating {
            Some(rating) => write!(f, "{rating}")?,
            None => f.write_str("Unrated")?,
        }
        write!(f, "; Visited: {}", self.visited)?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationResult;

    fn restaurant(name: &str, phone: &str, address: &str) -> Restaurant {
        fn build(name: &str, phone: &str, address: &str) -> ValidationResult<Restaurant> {
            Ok(Restaurant::new(
                Name::new(name)?,
                Phone::new(phone)?,
                Address::new(address)?,
                BTreeSet::new(),
                None,
                Visited::default(),
            ))
        }
        build(name, phone, address).unwrap()
    }

    #[test]
    fn test_weak_identity_ignores_tags_rating_visited() {
        let base = restaurant("KFC", "67773777", "200 Victoria St, Singapore 188021");
        let decorated = base
            .with_rating(Rating::new(4).unwrap())
            .with_visited(Visited::yes())
            .with_tags([Tag::new("fast food").unwrap()].into_iter().collect());

        assert!(base.is_same_restaurant(&decorated));
        assert_ne!(base, decorated);
    }

    #[test]
    fn test_weak_identity_differs_on_any_identity_field() {
        let base = restaurant("KFC", "67773777", "200 Victoria St, Singapore 188021");
        let other_name = restaurant("KFC Bugis", "67773777", "200 Victoria St, Singapore 188021");
        let other_phone = restaurant("KFC", "68884888", "200 Victoria St, Singapore 188021");
        let other_address = restaurant("KFC", "67773777", "1 Beach Rd, Singapore 189673");

        assert!(!base.is_same_restaurant(&other_name));
        assert!(!base.is_same_restaurant(&other_phone));
        assert!(!base.is_same_restaurant(&other_address));
    }

    #[test]
    fn test_strong_equality_covers_all_fields() {
        let base = restaurant("KFC", "67773777", "200 Victoria St, Singapore 188021");
        assert_eq!(
            base,
            restaurant("KFC", "67773777", "200 Victoria St, Singapore 188021")
        );
        assert_ne!(base, base.with_visited(Visited::yes()));
        assert_ne!(base, base.with_rating(Rating::new(0).unwrap()));
    }

    #[test]
    fn test_copy_methods_leave_original_untouched() {
        let base = restaurant("KFC", "67773777", "200 Victoria St, Singapore 188021");
        let rated = base.with_rating(Rating::new(5).unwrap());

        assert_eq!(base.rating(), None);
        assert_eq!(rated.rating(), Some(Rating::new(5).unwrap()));
        assert_eq!(rated.without_rating(), base);
    }

    #[test]
    fn test_display_without_optionals() {
        let base = restaurant(
            "McDonald's",
            "67773777",
            "200 Victoria St, Singapore 188021",
        );
        assert_eq!(
            base.to_string(),
            "McDonald's; Phone: 67773777; Address: 200 Victoria St, Singapore 188021; \
             Rating: Unrated; Visited: No"
        );
    }

    #[test]
    fn test_display_with_rating_and_tags() {
        let base = restaurant("KFC", "67773777", "200 Victoria St, Singapore 188021")
            .with_rating(Rating::new(4).unwrap())
            .with_tags(
                [Tag::new("halal").unwrap(), Tag::new("fast food").unwrap()]
                    .into_iter()
                    .collect(),
            );
        assert_eq!(
            base.to_string(),
            "KFC; Phone: 67773777; Address: 200 Victoria St, Singapore 188021; \
             Rating: 4; Visited: No; Tags: [fast food][halal]"
        );
    }
}
