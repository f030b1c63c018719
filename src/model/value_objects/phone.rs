//! Phone value object for Singapore phone numbers.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated Singapore phone number.
///
/// Phone enforces validation at construction time: exactly 8 ASCII digits,
/// starting with 6 (landline), 8 or 9 (mobile). No separators, spaces or
/// country prefix are accepted; the value is stored exactly as entered.
///
/// ## Examples
///
/// ```rust
/// use makanlist::model::value_objects::Phone;
///
/// let phone = Phone::new("67773777")?;
/// assert_eq!(phone.as_str(), "67773777");
/// assert!(Phone::new("12345678").is_err());
/// assert!(Phone::new("6777377").is_err());
/// # Ok::<(), makanlist::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone from untrusted input.
    ///
    /// # Returns
    ///
    /// * `Ok(Phone)` - If the value is 8 digits starting with 6, 8 or 9
    /// * `Err(ValidationError::InvalidPhone)` - Otherwise
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self(value))
    }

    /// Create a Phone without validation, for data known to be valid.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() != 8 {
            return false;
        }
        if !matches!(bytes[0], b'6' | b'8' | b'9') {
            return false;
        }
        bytes.iter().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
