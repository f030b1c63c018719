//! Tag value object for free-form restaurant labels.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated restaurant tag.
///
/// Tags are free-form, case-sensitive labels (`halal` and `Halal` are
/// different tags). The only rule is that a tag cannot be blank. Restaurants
/// hold tags in an ordered set, so duplicates collapse naturally and display
/// order is deterministic.
///
/// ## Examples
///
/// ```rust
/// use makanlist::model::value_objects::Tag;
///
/// let tag = Tag::new("halal")?;
/// assert_eq!(tag.to_string(), "[halal]");
/// assert!(Tag::new("").is_err());
/// # Ok::<(), makanlist::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag from untrusted input.
    ///
    /// # Returns
    ///
    /// * `Ok(Tag)` - If the label is non-blank
    /// * `Err(ValidationError::EmptyTag)` - If the label is empty or all whitespace
    pub fn new(label: impl Into<String>) -> ValidationResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        Ok(Self(label))
    }

    /// Create a Tag without validation, for data known to be valid.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the tag label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
