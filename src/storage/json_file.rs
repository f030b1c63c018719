//! JSON file storage adapter.

use crate::storage::{DirectoryRecord, DirectoryStorage, StorageError};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores the directory as pretty-printed JSON at a fixed path.
///
/// A missing file on load is reported as "not found" (`Ok(None)`), never as
/// an error; what to do about it is the caller's decision. Saving creates
/// missing parent directories and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage adapter for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<DirectoryRecord>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no data file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let record: DirectoryRecord = serde_json::from_str(&text)
            .map_err(|e| StorageError::serialization(&self.path, e))?;
        debug!(
            "loaded {} restaurants from {}",
            record.restaurants().len(),
            self.path.display()
        );
        Ok(Some(record))
    }

    fn save(&self, record: &DirectoryRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(&self.path, e))?;
            }
        }

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::serialization(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;
        debug!(
            "saved {} restaurants to {}",
            record.restaurants().len(),
            self.path.display()
        );
        Ok(())
    }
}
