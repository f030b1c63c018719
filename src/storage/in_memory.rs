//! In-memory storage adapter.

use crate::storage::{DirectoryRecord, DirectoryStorage, StorageError};
use std::sync::Mutex;

/// Keeps the last saved record in memory.
///
/// Useful for tests and for embedding the engine where persistence is not
/// wanted. "Not found" is simply "nothing saved yet".
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    record: Mutex<Option<DirectoryRecord>>,
}

impl InMemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of whatever was last saved, if anything.
    pub fn stored(&self) -> Option<DirectoryRecord> {
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DirectoryStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<DirectoryRecord>, StorageError> {
        Ok(self.stored())
    }

    fn save(&self, record: &DirectoryRecord) -> Result<(), StorageError> {
        let mut guard = self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_found() {
        let storage = InMemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_returns_the_record() {
        let storage = InMemoryStorage::new();
        let record = DirectoryRecord::default();
        storage.save(&record).unwrap();
        assert_eq!(storage.load().unwrap(), Some(record));
    }

    #[test]
    fn test_save_overwrites() {
        let storage = InMemoryStorage::new();
        storage.save(&DirectoryRecord::default()).unwrap();

        let other: DirectoryRecord = serde_json::from_str(
            r#"{"restaurants": [{
                "name": "Atlas",
                "phone": "63964466",
                "address": "600 North Bridge Rd, Singapore 188778"
            }]}"#,
        )
        .unwrap();
        storage.save(&other).unwrap();
        assert_eq!(storage.stored(), Some(other));
    }
}
