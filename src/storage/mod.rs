//! Persistence for the restaurant directory.
//!
//! The storage layer moves [`DirectoryRecord`] values — plain serializable
//! shapes — in and out of a backing store. It knows nothing about commands
//! or filtering; conversely, the model never touches files. Decoding a
//! record re-validates everything (see [`record`]), so storage cannot smuggle
//! invalid data into the model.
//!
//! Two adapters ship with the crate: [`JsonFileStorage`] for the real data
//! file and [`InMemoryStorage`] for tests and embedding.

pub mod errors;
pub mod in_memory;
pub mod json_file;
pub mod record;

pub use errors::StorageError;
pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;
pub use record::{DirectoryRecord, RestaurantRecord};

/// A place the directory can be loaded from and saved to.
///
/// Operations are synchronous and blocking: the engine processes one command
/// to completion, including its write-through, before accepting the next.
///
/// `load` distinguishes "no data yet" (`Ok(None)`) from a real failure;
/// whether to start empty or seed sample data on `None` is the caller's
/// policy, not the storage layer's.
pub trait DirectoryStorage {
    /// Read the stored directory, if one exists.
    fn load(&self) -> Result<Option<DirectoryRecord>, StorageError>;

    /// Write the directory, replacing whatever was stored before.
    fn save(&self, record: &DirectoryRecord) -> Result<(), StorageError>;
}
