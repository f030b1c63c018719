//! Visited flag value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the user has visited a restaurant.
///
/// Defaults to not visited. Displays as `Yes`/`No` in the restaurant card.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Visited(bool);

impl Visited {
    /// Construct from a boolean.
    pub fn new(visited: bool) -> Self {
        Self(visited)
    }

    /// The flag for a visited restaurant.
    pub fn yes() -> Self {
        Self(true)
    }

    /// The flag for a restaurant not yet visited.
    pub fn no() -> Self {
        Self(false)
    }

    /// Whether the flag is set.
    pub fn is_visited(&self) -> bool {
        self.0
    }
}

impl fmt::Display for Visited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "Yes" } else { "No" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_visited() {
        assert!(!Visited::default().is_visited());
    }

    #[test]
    fn test_display() {
        assert_eq!(Visited::yes().to_string(), "Yes");
        assert_eq!(Visited::no().to_string(), "No");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Visited::yes()).unwrap();
        assert_eq!(json, "true");
        let back: Visited = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Visited::yes());
    }
}
