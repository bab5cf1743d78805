use std::fmt;

/// Discriminant used by the native tagged forms of an [`Outcome`](crate::Outcome).
///
/// A tagged pair or tagged sequence carries a `Tag` in its first slot; the
/// remaining slots are the payload. The textual rendering of the vocabulary is
/// `"ok"` for [`Tag::Success`] and `"error"` for [`Tag::Failure`].
///
/// # Examples
///
/// ```rust
/// use outcome::{coerce, Outcome, Tag};
///
/// let good = coerce((Tag::Success, 7));
/// assert_eq!(good, Outcome::Success(7));
///
/// let bad = coerce((Tag::Failure, 7));
/// assert_eq!(bad, Outcome::Failure(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// The success tag, rendered as `"ok"`.
    #[cfg_attr(feature = "serde", serde(rename = "ok"))]
    Success,
    /// The failure tag, rendered as `"error"`.
    #[cfg_attr(feature = "serde", serde(rename = "error"))]
    Failure,
}

impl Tag {
    /// Returns `true` for [`Tag::Success`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Tag;
    ///
    /// assert!(Tag::Success.is_success());
    /// assert!(!Tag::Failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Tag::Success)
    }

    /// Returns `true` for [`Tag::Failure`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Tag;
    ///
    /// assert!(Tag::Failure.is_failure());
    /// assert!(!Tag::Success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(self) -> bool {
        matches!(self, Tag::Failure)
    }

    /// Returns the opposite tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Tag;
    ///
    /// assert_eq!(Tag::Success.flip(), Tag::Failure);
    /// assert_eq!(Tag::Failure.flip(), Tag::Success);
    /// ```
    #[inline]
    pub const fn flip(self) -> Tag {
        match self {
            Tag::Success => Tag::Failure,
            Tag::Failure => Tag::Success,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Success => f.write_str("ok"),
            Tag::Failure => f.write_str("error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_and_is_failure() {
        assert!(Tag::Success.is_success());
        assert!(!Tag::Success.is_failure());
        assert!(Tag::Failure.is_failure());
        assert!(!Tag::Failure.is_success());
    }

    #[test]
    fn test_flip() {
        assert_eq!(Tag::Success.flip(), Tag::Failure);
        assert_eq!(Tag::Failure.flip(), Tag::Success);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tag::Success.to_string(), "ok");
        assert_eq!(Tag::Failure.to_string(), "error");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rendering() {
        assert_eq!(serde_json::to_string(&Tag::Success).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&Tag::Failure).unwrap(), "\"error\"");
    }
}
