//! User identity type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated account identity.
///
/// Parsing is strict: the text must be decimal digits, optionally led by a
/// single `+`, and the value must fit in a `u64`. Negative numbers, fractions,
/// surrounding whitespace, and overflowing values are rejected.
///
/// # Example
///
/// ```
/// use gamepass_core::UserId;
///
/// let user: UserId = "42".parse().unwrap();
/// assert_eq!(user.get(), 42);
/// assert!("4.2".parse::<UserId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    /// Wrap an already-numeric identity.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse an identity from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a non-negative decimal integer
    /// (with an optional leading `+`) that fits in 64 bits.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(InvalidInputError::UserId {
                value: String::new(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        s.parse::<u64>().map(Self).map_err(|e| {
            InvalidInputError::UserId {
                value: s.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Returns the numeric identity.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        assert_eq!(UserId::parse("0").unwrap().get(), 0);
        assert_eq!(UserId::parse("42").unwrap().get(), 42);
        assert_eq!(
            UserId::parse("18446744073709551615").unwrap().get(),
            u64::MAX
        );
    }

    #[test]
    fn rejects_empty() {
        assert!(UserId::parse("").is_err());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(UserId::parse("abc").is_err());
        assert!(UserId::parse("12abc").is_err());
        assert!(UserId::parse(" 12").is_err());
    }

    #[test]
    fn rejects_float() {
        assert!(UserId::parse("1.5").is_err());
        assert!(UserId::parse("1e3").is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(UserId::parse("-5").is_err());
    }

    #[test]
    fn rejects_overflow() {
        assert!(UserId::parse("18446744073709551616").is_err());
    }

    #[test]
    fn error_names_the_value() {
        let err = UserId::parse("nope").unwrap_err().to_string();
        assert!(err.contains("'nope'"), "{err}");
    }

    #[test]
    fn accepts_leading_plus() {
        assert_eq!(UserId::parse("+42").unwrap().get(), 42);
        assert!(UserId::parse("+").is_err());
        assert!(UserId::parse("++42").is_err());
        assert!(UserId::parse("+-42").is_err());
    }
}
