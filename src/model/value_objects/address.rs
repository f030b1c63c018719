//! Address value object for Singapore street addresses.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the street part and the postal code.
const SEPARATOR: &str = ", Singapore ";

/// Maximum accepted address length, in characters.
const MAX_LEN: usize = 100;

/// A validated Singapore street address.
///
/// Address enforces validation at construction time. The accepted shape is
/// `STREET, Singapore POSTAL`:
///
/// - the whole address is at most 100 characters;
/// - `STREET` is non-empty and uses letters, digits, the characters
///   `#'/.+-,` and spaces (so unit numbers like `#01-56` and comma-separated
///   street fragments are fine);
/// - the `, Singapore ` separator is matched at its **last** occurrence,
///   because the street part may itself contain commas;
/// - `POSTAL` is a 6-digit postal code. Embedded spaces in the postal digits
///   (`"188 021"`) are stripped before the 6-digit check.
///
/// ## Examples
///
/// ```rust
/// use makanlist::model::value_objects::Address;
///
/// let address = Address::new("200 Victoria St, Singapore 188021")?;
/// assert_eq!(address.as_str(), "200 Victoria St, Singapore 188021");
///
/// // spaced postal digits are accepted
/// assert!(Address::new("1 Kadayanallur St, Singapore 069 184").is_ok());
/// // missing separator is not
/// assert!(Address::new("200 Victoria St 188021").is_err());
/// # Ok::<(), makanlist::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create a new Address from untrusted input.
    ///
    /// # Returns
    ///
    /// * `Ok(Address)` - If the value matches the shape described above
    /// * `Err(ValidationError::InvalidAddress)` - Otherwise
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(Self(value))
    }

    /// Create an Address without validation, for data known to be valid.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    fn is_valid(value: &str) -> bool {
        if value.chars().count() > MAX_LEN {
            return false;
        }
        // The street part may contain commas, so split on the last separator.
        let Some(sep_at) = value.rfind(SEPARATOR) else {
            return false;
        };
        let street = &value[..sep_at];
        let postal = &value[sep_at + SEPARATOR.len()..];
        Self::is_valid_street(street) && Self::is_valid_postal(postal)
    }

    fn is_valid_street(street: &str) -> bool {
        !street.is_empty()
            && street
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || "#'/.+-,".contains(c))
    }

    fn is_valid_postal(postal: &str) -> bool {
        let digits: String = postal.chars().filter(|c| *c != ' ').collect();
        digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
