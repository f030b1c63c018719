//! Shared fixtures and builders for the integration suite.

use makanlist::storage::InMemoryStorage;
use makanlist::{Address, Engine, Model, Name, Phone, Rating, Restaurant, Tag, Visited};
use std::collections::BTreeSet;

/// Fluent builder for test restaurants.
///
/// Defaults to a valid entry so tests only state what they care about.
pub struct RestaurantBuilder {
    name: String,
    phone: String,
    address: String,
    tags: Vec<String>,
    rating: Option<u8>,
    visited: bool,
}

impl Default for RestaurantBuilder {
    fn default() -> Self {
        Self {
            name: "Tian Tian Hainanese Chicken Rice".into(),
            phone: "96914892".into(),
            address: "1 Kadayanallur St, Singapore 069184".into(),
            tags: Vec::new(),
            rating: None,
            visited: false,
        }
    }
}

#[allow(dead_code)]
impl RestaurantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.into();
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn visited(mut self) -> Self {
        self.visited = true;
        self
    }

    pub fn build(self) -> Restaurant {
        let tags: BTreeSet<Tag> = self
            .tags
            .iter()
            .map(|label| Tag::new(label.clone()).expect("builder tag must be valid"))
            .collect();
        Restaurant::new(
            Name::new(self.name).expect("builder name must be valid"),
            Phone::new(self.phone).expect("builder phone must be valid"),
            Address::new(self.address).expect("builder address must be valid"),
            tags,
            self.rating
                .map(|value| Rating::new(value).expect("builder rating must be valid")),
            Visited::new(self.visited),
        )
    }
}

/// Route engine logs through env_logger when RUST_LOG is set.
#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An engine over an empty model and in-memory storage.
#[allow(dead_code)]
pub fn fresh_engine() -> Engine<InMemoryStorage> {
    init_test_logging();
    Engine::new(Model::new(), InMemoryStorage::new())
}

/// The add command line for a (name, phone, address) triple.
#[allow(dead_code)]
pub fn add_line(name: &str, phone: &str, address: &str) -> String {
    format!("add n/{name} p/{phone} a/{address}")
}
