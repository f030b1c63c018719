//! Rating value object for 0-to-5 restaurant ratings.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted rating.
pub const MIN_RATING: u8 = 0;

/// Largest accepted rating.
pub const MAX_RATING: u8 = 5;

/// A validated restaurant rating in `[0, 5]`.
///
/// A restaurant that has never been rated carries no Rating at all
/// (`Option<Rating>` on the entity); there is no sentinel value for
/// "unrated".
///
/// ## Examples
///
/// ```rust
/// use makanlist::model::value_objects::Rating;
///
/// let rating = Rating::new(4)?;
/// assert_eq!(rating.value(), 4);
/// assert!(Rating::new(6).is_err());
/// # Ok::<(), makanlist::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    /// Create a new Rating from untrusted input.
    ///
    /// # Returns
    ///
    /// * `Ok(Rating)` - If the value is between 0 and 5 inclusive
    /// * `Err(ValidationError::InvalidRating)` - Otherwise
    pub fn new(value: u8) -> ValidationResult<Self> {
        if value > MAX_RATING {
            return Err(ValidationError::InvalidRating);
        }
        Ok(Self(value))
    }

    /// Parse a Rating from a raw text token.
    ///
    /// Non-numeric payloads and out-of-range numbers produce the same
    /// constraint error, so `rate 1 six` and `rate 1 6` fail identically.
    pub fn parse(token: &str) -> ValidationResult<Self> {
        let value: u8 = token
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidRating)?;
        Self::new(value)
    }

    /// Get the numeric rating value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
