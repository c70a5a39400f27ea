//! Pagination cursor type.

use std::fmt;

/// An opaque, non-empty continuation token issued by the inventory API.
///
/// The upstream signals the last page with either a `null` or an empty
/// string; both normalize to "no cursor" through [`PageCursor::from_next`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageCursor(String);

impl PageCursor {
    /// Normalize an upstream `nextPageCursor` value.
    ///
    /// Returns `None` when the value is absent or empty.
    pub fn from_next(next: Option<String>) -> Option<Self> {
        next.filter(|c| !c.is_empty()).map(Self)
    }

    /// Returns the cursor string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
