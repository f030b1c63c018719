//! Turns raw command lines into typed [`Command`] values.
//!
//! Parsing is stateless and reentrant: the top-level [`parse`] splits the
//! line into a command word and an argument string, lowercases the word, and
//! dispatches to that command's argument parser. Two distinct failure modes
//! exist at this level — a line with no command word at all is a format
//! error carrying the help usage text, while an unrecognized word is an
//! unknown-command error — so callers can tell them apart.

pub mod fields;
pub mod tokenizer;

use crate::command::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand, FindCommand,
    HelpCommand, ListCommand, MarkCommand, RateCommand, SortCommand, TagCommand, UnmarkCommand,
    UnrateCommand, UntagCommand,
};
use crate::error::{ParseError, ParseResult};

/// Parse one raw input line into a command.
///
/// Leading and trailing whitespace is ignored. The command word is matched
/// case-insensitively; arguments are passed through verbatim (including the
/// separating whitespace, which the tokenizer relies on).
pub fn parse(line: &str) -> ParseResult<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(HelpCommand::USAGE));
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(at) => (&trimmed[..at], &trimmed[at..]),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        AddCommand::COMMAND_WORD => AddCommand::parse(args).map(Command::Add),
        DeleteCommand::COMMAND_WORD => DeleteCommand::parse(args).map(Command::Delete),
        EditCommand::COMMAND_WORD => EditCommand::parse(args).map(Command::Edit),
        FindCommand::COMMAND_WORD => FindCommand::parse(args).map(Command::Find),
        TagCommand::COMMAND_WORD => TagCommand::parse(args).map(Command::Tag),
        UntagCommand::COMMAND_WORD => UntagCommand::parse(args).map(Command::Untag),
        MarkCommand::COMMAND_WORD => MarkCommand::parse(args).map(Command::Mark),
        UnmarkCommand::COMMAND_WORD => UnmarkCommand::parse(args).map(Command::Unmark),
        RateCommand::COMMAND_WORD => RateCommand::parse(args).map(Command::Rate),
        UnrateCommand::COMMAND_WORD => UnrateCommand::parse(args).map(Command::Unrate),
        SortCommand::COMMAND_WORD => Ok(Command::Sort(SortCommand::new())),
        ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand::new())),
        ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand::new())),
        HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand::new())),
        ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand::new())),
        _ => Err(ParseError::UnknownCommand),
    }
}
