//! The execution façade: parse, execute, persist.

use crate::command::CommandOutcome;
use crate::error::{EngineError, EngineResult};
use crate::model::Model;
use crate::parser;
use crate::storage::{DirectoryRecord, DirectoryStorage};
use log::{debug, info, warn};

/// Sequences each command line through parse → execute → persist.
///
/// The engine owns the model exclusively: one command runs to completion,
/// including its blocking write-through, before the next is accepted. There
/// is no background mutation and no overlap between executions.
pub struct Engine<S: DirectoryStorage> {
    model: Model,
    storage: S,
}

impl<S: DirectoryStorage> Engine<S> {
    /// Create an engine over a model and a storage collaborator.
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Read access for the presentation layer.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The storage collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Execute one raw command line.
    ///
    /// Failure ordering:
    ///
    /// 1. a parse error propagates unchanged and nothing is executed or
    ///    saved;
    /// 2. a command error propagates unchanged and nothing is saved;
    /// 3. after a successful execution the directory is written through to
    ///    storage. A failed write is reported as
    ///    [`EngineError::SavePermissionDenied`] or
    ///    [`EngineError::SaveFailed`], but the in-memory mutation is NOT
    ///    rolled back — the command's effect on the live model stands and
    ///    a later successful command will persist it.
    pub fn execute(&mut self, line: &str) -> EngineResult<CommandOutcome> {
        info!("processing command line: {:?}", line.trim());

        let command = parser::parse(line).inspect_err(|e| warn!("parse failed: {e}"))?;
        let outcome = command
            .execute(&mut self.model)
            .inspect_err(|e| warn!("command failed: {e}"))?;

        self.persist()?;
        debug!("command completed: {}", outcome.message());
        Ok(outcome)
    }

    fn persist(&self) -> EngineResult<()> {
        let record = DirectoryRecord::from_directory(self.model.directory());
        match self.storage.save(&record) {
            Ok(()) => Ok(()),
            Err(e) if e.is_permission_denied() => {
                warn!("write-through refused: {e}");
                Err(EngineError::SavePermissionDenied {
                    path: e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                })
            }
            Err(e) => {
                warn!("write-through failed: {e}");
                Err(EngineError::SaveFailed {
                    detail: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, ParseError};
    use crate::storage::{InMemoryStorage, StorageError};
    use std::io;

    const ADD_MCD: &str = "add n/McDonald's p/67773777 a/200 Victoria St, Singapore 188021";

    /// A storage stub whose save always fails with a chosen I/O error kind.
    struct FailingStorage(io::ErrorKind);

    impl DirectoryStorage for FailingStorage {
        fn load(&self) -> Result<Option<DirectoryRecord>, StorageError> {
            Ok(None)
        }

        fn save(&self, _record: &DirectoryRecord) -> Result<(), StorageError> {
            Err(StorageError::io(
                "/data/makanlist.json",
                io::Error::new(self.0, "nope"),
            ))
        }
    }

    #[test]
    fn test_successful_command_is_persisted() {
        let mut engine = Engine::new(Model::new(), InMemoryStorage::new());
        let outcome = engine.execute(ADD_MCD).unwrap();
        assert!(outcome.message().contains("McDonald's"));

        let stored = engine.storage().stored().expect("a save should have run");
        assert_eq!(stored.restaurants().len(), 1);
    }

    #[test]
    fn test_parse_error_propagates_and_skips_persistence() {
        let mut engine = Engine::new(Model::new(), InMemoryStorage::new());
        let error = engine.execute("add n/OnlyName").unwrap_err();
        assert!(matches!(error, EngineError::Parse(ParseError::InvalidFormat { .. })));
        assert!(engine.storage().stored().is_none());
    }

    #[test]
    fn test_command_error_propagates_and_skips_persistence() {
        let mut engine = Engine::new(Model::new(), InMemoryStorage::new());
        let error = engine.execute("delete 1").unwrap_err();
        assert!(matches!(
            error,
            EngineError::Command(CommandError::InvalidDisplayedIndex)
        ));
        assert!(engine.storage().stored().is_none());
    }

    #[test]
    fn test_save_failure_keeps_the_mutation() {
        let mut engine = Engine::new(
            Model::new(),
            FailingStorage(io::ErrorKind::UnexpectedEof),
        );
        let error = engine.execute(ADD_MCD).unwrap_err();
        assert!(matches!(error, EngineError::SaveFailed { .. }));
        // deliberate non-atomicity: the restaurant is in the live model
        assert_eq!(engine.model().directory().len(), 1);
    }

    #[test]
    fn test_permission_denied_gets_its_own_message() {
        let mut engine = Engine::new(
            Model::new(),
            FailingStorage(io::ErrorKind::PermissionDenied),
        );
        let error = engine.execute(ADD_MCD).unwrap_err();
        match &error {
            EngineError::SavePermissionDenied { path } => {
                assert_eq!(path, "/data/makanlist.json");
            }
            other => panic!("expected SavePermissionDenied, got {other:?}"),
        }
        assert!(error.to_string().contains("permission denied"));
        assert_eq!(engine.model().directory().len(), 1);
    }

    #[test]
    fn test_exit_and_help_flow_through_the_facade() {
        let mut engine = Engine::new(Model::new(), InMemoryStorage::new());
        assert!(engine.execute("help").unwrap().is_show_help());
        assert!(engine.execute("exit").unwrap().is_exit());
    }
}
