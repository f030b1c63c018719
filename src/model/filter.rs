//! The predicate side of the filtered view.
//!
//! The filtered view is not a stored structure: it is the pure function
//! `(sequence, predicate) -> sequence`, recomputed by the caller whenever it
//! is needed. This module holds the predicate half.

use crate::model::restaurant::Restaurant;

/// A keyword search predicate.
///
/// Matches a restaurant when ANY keyword is a case-insensitive substring of
/// the name, the phone, the address, or any tag. Keywords are lowercased and
/// blank entries dropped at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPredicate {
    keywords: Vec<String>,
}

impl KeywordPredicate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Whether no usable keyword survived construction.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.keywords.iter().any(|keyword| {
            restaurant.name().to_lowercase().contains(keyword)
                || restaurant.phone().as_str().contains(keyword)
                || restaurant
                    .address()
                    .as_str()
                    .to_lowercase()
                    .contains(keyword)
                || restaurant
                    .tags()
                    .iter()
                    .any(|tag| tag.as_str().to_lowercase().contains(keyword))
        })
    }
}

/// The active filter over the directory's sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RestaurantFilter {
    /// Show every restaurant.
    #[default]
    All,
    /// Show restaurants matching a keyword search.
    Keywords(KeywordPredicate),
}

impl RestaurantFilter {
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        match self {
            RestaurantFilter::All => true,
            RestaurantFilter::Keywords(predicate) => predicate.matches(restaurant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::value_objects::{Address, Name, Phone, Tag, Visited};
    use std::collections::BTreeSet;

    fn restaurant() -> Restaurant {
        Restaurant::new(
            Name::new("Tian Tian Hainanese Chicken Rice").unwrap(),
            Phone::new("96914892").unwrap(),
            Address::new("1 Kadayanallur St, #01-10, Singapore 069184").unwrap(),
            [Tag::new("hawker").unwrap()].into_iter().collect::<BTreeSet<_>>(),
            None,
            Visited::default(),
        )
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        assert!(KeywordPredicate::new(["TIAN"]).matches(&restaurant()));
        assert!(KeywordPredicate::new(["chicken"]).matches(&restaurant()));
    }

    #[test]
    fn test_matches_phone_substring() {
        assert!(KeywordPredicate::new(["9691"]).matches(&restaurant()));
    }

    #[test]
    fn test_matches_address_substring() {
        assert!(KeywordPredicate::new(["kadayanallur"]).matches(&restaurant()));
    }

    #[test]
    fn test_matches_any_tag() {
        assert!(KeywordPredicate::new(["hawk"]).matches(&restaurant()));
    }

    #[test]
    fn test_or_across_keywords() {
        assert!(KeywordPredicate::new(["zzz", "tian"]).matches(&restaurant()));
        assert!(!KeywordPredicate::new(["zzz", "yyy"]).matches(&restaurant()));
    }

    #[test]
    fn test_blank_keywords_dropped() {
        let predicate = KeywordPredicate::new(["  ", "", "laksa"]);
        assert_eq!(predicate.keywords(), ["laksa"]);
        assert!(KeywordPredicate::new([" ", ""]).is_empty());
    }

    #[test]
    fn test_show_all_matches_everything() {
        assert!(RestaurantFilter::All.matches(&restaurant()));
    }
}
