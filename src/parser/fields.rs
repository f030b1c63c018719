//! Shared field parsers used by the per-command argument parsers.
//!
//! Everything here returns a [`ParseError`] whose message is canonical for
//! the field kind, independent of which command the field appeared in.

use crate::command::DisplayIndex;
use crate::error::{ParseError, ParseResult};
use crate::model::value_objects::{Rating, Tag};
use std::collections::BTreeSet;

/// Parse a 1-based display index token.
///
/// Only a plain run of ASCII digits with value >= 1 is accepted. Zero,
/// negatives, signs, fractions and non-numeric tokens all fail with the one
/// canonical [`ParseError::InvalidIndex`].
pub fn parse_index(token: &str) -> ParseResult<DisplayIndex> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    let value: usize = token.parse().map_err(|_| ParseError::InvalidIndex)?;
    if value == 0 {
        return Err(ParseError::InvalidIndex);
    }
    Ok(DisplayIndex::from_one_based(value))
}

/// Parse a rating payload (a bare integer token or the text after `r/`).
///
/// Delegates to [`Rating::parse`]; non-numeric and out-of-range payloads
/// produce the same rating constraint message.
pub fn parse_rating(token: &str) -> ParseResult<Rating> {
    Ok(Rating::parse(token)?)
}

/// Parse a set of tags from the raw values of every `t/` occurrence.
///
/// Duplicate labels collapse naturally; an empty value fails with the tag
/// constraint message.
pub fn parse_tags<'a, I>(raw_values: I) -> ParseResult<BTreeSet<Tag>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = BTreeSet::new();
    for raw in raw_values {
        tags.insert(Tag::new(raw)?);
    }
    Ok(tags)
}

/// Split a find argument into keywords on commas, dropping blanks.
pub fn parse_keywords(args: &str) -> Vec<String> {
    args.split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}
