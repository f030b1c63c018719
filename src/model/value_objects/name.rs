//! Name value object for restaurant display names.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated restaurant name.
///
/// Name enforces its validation rule at construction time, ensuring that only
/// valid names can exist in the system. The rule is deliberately loose: any
/// non-blank string is a name, with no character set restriction, so
/// `"McDonald's"`, `"天天海南鸡饭"` and `"Two Chefs @ Commonwealth"` are all
/// accepted as typed.
///
/// ## Examples
///
/// ```rust
/// use makanlist::model::value_objects::Name;
///
/// let name = Name::new("McDonald's")?;
/// assert_eq!(name.as_str(), "McDonald's");
/// assert!(Name::new("   ").is_err());
/// # Ok::<(), makanlist::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Create a new Name from untrusted input.
    ///
    /// # Returns
    ///
    /// * `Ok(Name)` - If the name is non-blank
    /// * `Err(ValidationError::EmptyName)` - If the name is empty or all whitespace
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    /// Create a Name without validation, for data known to be valid.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name lowercased, used for case-insensitive ordering and search.
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
