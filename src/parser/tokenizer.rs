//! Prefix-based argument tokenizer.
//!
//! Command arguments are a preamble followed by prefixed fields, e.g.
//! `1 n/KFC t/fast food t/halal`. The tokenizer splits such a string into
//! the preamble and a multimap of prefix occurrences, preserving every
//! occurrence in order. It does no validation; the per-command parsers
//! decide which prefixes are required, which may repeat, and what the raw
//! values must look like.

use crate::error::{ParseError, ParseResult};
use std::fmt;

/// A field prefix such as `n/` or `t/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// `n/` - restaurant name.
    pub const NAME: Prefix = Prefix("n/");
    /// `p/` - phone number.
    pub const PHONE: Prefix = Prefix("p/");
    /// `a/` - address.
    pub const ADDRESS: Prefix = Prefix("a/");
    /// `t/` - tag; may repeat.
    pub const TAG: Prefix = Prefix("t/");
    /// `r/` - rating.
    pub const RATING: Prefix = Prefix("r/");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The result of tokenizing an argument string.
///
/// Holds the preamble (text before the first recognized prefix, used for
/// positional arguments like indices) and every `(prefix, value)` pair in
/// order of appearance. Values are whitespace-trimmed; empty values are kept
/// so validators can reject them with a field-specific message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTokens {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

/// Split `args` into a preamble and prefixed values.
///
/// A prefix occurrence only counts when it sits at the start of the string
/// or directly after whitespace, so `Paya Lebar/t` or `chap/chye` inside a
/// value never starts a new field.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentTokens {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let pattern = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(pattern) {
            let at = from + found;
            let preceded_by_space =
                at == 0 || args.as_bytes()[at - 1].is_ascii_whitespace();
            if preceded_by_space {
                positions.push((at, prefix));
            }
            from = at + pattern.len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let preamble = args[..preamble_end].trim().to_string();

    let values = positions
        .iter()
        .enumerate()
        .map(|(i, (at, prefix))| {
            let start = at + prefix.as_str().len();
            let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
            (*prefix, args[start..end].trim().to_string())
        })
        .collect();

    ArgumentTokens { preamble, values }
}

impl ArgumentTokens {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The value of the last occurrence of `prefix`, if any.
    pub fn value_of(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether `prefix` appeared at least once.
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// Fail if any of the given single-valued prefixes appeared twice.
    pub fn ensure_no_duplicates(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let repeated: Vec<&'static str> = prefixes
            .iter()
            .filter(|&&p| self.all_values(p).len() > 1)
            .map(|p| p.as_str())
            .collect();
        if repeated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::duplicate_prefixes(repeated))
        }
    }
}
