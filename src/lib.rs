//! Command-driven restaurant directory engine.
//!
//! Maintains a directory of restaurants (name, phone, address, tags,
//! optional rating, visited flag) through single-line text commands,
//! persisting the directory between runs through a pluggable storage
//! collaborator.
//!
//! # Core Components
//!
//! - [`Engine`] - the execution façade: parse → execute → persist
//! - [`Model`] - the directory plus the active filter predicate
//! - [`parser`] - turns raw lines into typed [`Command`] values
//! - [`DirectoryStorage`] - trait for persistence backends
//!
//! # Quick Start
//!
//! ```rust
//! use makanlist::{Engine, Model};
//! use makanlist::storage::InMemoryStorage;
//!
//! # fn example() -> Result<(), makanlist::error::EngineError> {
//! let mut engine = Engine::new(Model::new(), InMemoryStorage::new());
//! let outcome =
//!     engine.execute("add n/McDonald's p/67773777 a/200 Victoria St, Singapore 188021")?;
//! assert!(outcome.message().contains("McDonald's"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! The presentation layer is an external collaborator: commands hand back a
//! plain result string plus structured signals (show help, exit) through
//! [`CommandOutcome`], and this crate never depends on how they are
//! rendered.

pub mod command;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod storage;

// Re-export commonly used types for convenience
pub use command::{Command, CommandOutcome, DisplayIndex};
pub use engine::Engine;
pub use error::{CommandError, EngineError, ParseError, ValidationError};
pub use model::{Directory, KeywordPredicate, Model, Restaurant, RestaurantFilter};
pub use model::value_objects::{Address, Name, Phone, Rating, Tag, Visited};
pub use storage::{DirectoryRecord, DirectoryStorage, InMemoryStorage, JsonFileStorage};
