//! Validated value objects for the restaurant domain.
//!
//! Each type wraps a single primitive, validates at construction, and is
//! immutable afterwards; equality and hashing are by value. Constructing one
//! of these is the only way field data enters the model, so everything past
//! this boundary is known valid.

pub mod address;
pub mod name;
pub mod phone;
pub mod rating;
pub mod tag;
pub mod visited;

pub use address::Address;
pub use name::Name;
pub use phone::Phone;
pub use rating::{MAX_RATING, MIN_RATING, Rating};
pub use tag::Tag;
pub use visited::Visited;
