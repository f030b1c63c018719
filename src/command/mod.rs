//! Command objects, one per user intent.
//!
//! Each command is an immutable value built by the parser, carrying
//! everything needed to run: validated field values and display indices.
//! Execution validates its preconditions against the *current* model state —
//! indices resolve against the filtered view as it stands at execution time,
//! never against a snapshot taken at parse time — so sequential commands
//! compose safely without any synchronization.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod mark;
pub mod rate;
pub mod sort;
pub mod tag;
pub mod unmark;
pub mod unrate;
pub mod untag;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use mark::MarkCommand;
pub use rate::RateCommand;
pub use sort::SortCommand;
pub use tag::TagCommand;
pub use unmark::UnmarkCommand;
pub use unrate::UnrateCommand;
pub use untag::UntagCommand;

use crate::error::{CommandError, CommandResult};
use crate::model::{Model, Restaurant};

/// A 1-based position in the currently displayed (filtered) list.
///
/// User-facing numbering starts at 1; the conversion to 0-based happens in
/// exactly one place, [`zero_based`](Self::zero_based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Wrap a 1-based index. The parser guarantees `index >= 1`.
    pub fn from_one_based(index: usize) -> Self {
        debug_assert!(index >= 1);
        Self(index)
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

/// What a command hands back to the caller: a result message plus the
/// structured signals the presentation layer reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    message: String,
    show_help: bool,
    exit: bool,
}

impl CommandOutcome {
    /// A plain result message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            show_help: false,
            exit: false,
        }
    }

    /// A message plus the show-help signal.
    pub fn with_help(message: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(message)
        }
    }

    /// A message plus the exit signal.
    pub fn with_exit(message: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(message)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the UI should show its help surface.
    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the application should terminate.
    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Find(FindCommand),
    Tag(TagCommand),
    Untag(UntagCommand),
    Mark(MarkCommand),
    Unmark(UnmarkCommand),
    Rate(RateCommand),
    Unrate(UnrateCommand),
    Sort(SortCommand),
    Clear(ClearCommand),
    List(ListCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Run the command against the model.
    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::Tag(command) => command.execute(model),
            Command::Untag(command) => command.execute(model),
            Command::Mark(command) => command.execute(model),
            Command::Unmark(command) => command.execute(model),
            Command::Rate(command) => command.execute(model),
            Command::Unrate(command) => command.execute(model),
            Command::Sort(command) => command.execute(model),
            Command::Clear(command) => command.execute(model),
            Command::List(command) => command.execute(model),
            Command::Help(command) => command.execute(model),
            Command::Exit(command) => command.execute(model),
        }
    }
}

/// Resolve a display index against the current filtered view.
///
/// Returns an owned copy of the resolved restaurant so the caller can go on
/// to mutate the model.
pub(crate) fn shown_restaurant(
    model: &Model,
    index: DisplayIndex,
) -> CommandResult<Restaurant> {
    model
        .filtered()
        .get(index.zero_based())
        .map(|r| (*r).clone())
        .ok_or(CommandError::InvalidDisplayedIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index_conversion() {
        let index = DisplayIndex::from_one_based(1);
        assert_eq!(index.one_based(), 1);
        assert_eq!(index.zero_based(), 0);
    }

    #[test]
    fn test_outcome_signals() {
        let plain = CommandOutcome::new("done");
        assert!(!plain.is_show_help() && !plain.is_exit());

        let help = CommandOutcome::with_help("help");
        assert!(help.is_show_help() && !help.is_exit());

        let exit = CommandOutcome::with_exit("bye");
        assert!(!exit.is_show_help() && exit.is_exit());
    }

    #[test]
    fn test_shown_restaurant_out_of_range() {
        let model = Model::new();
        assert_eq!(
            shown_restaurant(&model, DisplayIndex::from_one_based(1)),
            Err(CommandError::InvalidDisplayedIndex)
        );
    }
}
