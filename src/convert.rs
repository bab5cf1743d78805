//! Conversion of native success/failure encodings into [`Outcome`].
//!
//! This module defines the [`Coerce`] trait, the entry point for adapting the
//! tagged forms of an outcome (bare [`Tag`] markers, `(Tag, value)` pairs, and
//! the longer tagged sequences from [`tuple`](crate::tuple)) as well as the
//! native Rust idioms [`Result`] and [`Either`]. Coercion is total: every
//! impl maps every input to some `Outcome` and none can fail.
//!
//! Each input shape has its own impl and the compiler selects the match.
//! A bare untagged value has no impl of its own: wrapping an implicitly
//! successful plain value is exactly what [`success`](crate::success) does.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{coerce, Outcome, Tag};
//!
//! assert_eq!(coerce((Tag::Success, 7)), Outcome::Success(7));
//! assert_eq!(coerce((Tag::Failure, "oops")), Outcome::Failure("oops"));
//! assert_eq!(coerce(Tag::Success), Outcome::<(), ()>::Success(()));
//! ```
//!
//! Foreign outcome-shaped types convert structurally through [`OutcomeLike`]:
//! a type only has to expose its success flag and surrender its two payload
//! slots, no nominal relationship to `Outcome` required.

use either::Either;

use crate::outcome::Outcome;
use crate::tag::Tag;

/// Adapts a native success/failure encoding into an [`Outcome`].
///
/// Implemented for `Outcome` itself (identity), bare [`Tag`] markers, tagged
/// pairs and sequences, [`Result`], and [`Either`]. Every impl is total.
///
/// # Examples
///
/// ```rust
/// use outcome::{Coerce, Outcome, Tag};
///
/// let pair = (Tag::Failure, "oops");
/// assert_eq!(pair.coerce(), Outcome::Failure("oops"));
/// ```
pub trait Coerce {
    /// Payload type of the success branch.
    type Success;
    /// Payload type of the failure branch.
    type Failure;

    /// Convert `self` into the canonical outcome form.
    fn coerce(self) -> Outcome<Self::Success, Self::Failure>;
}

/// Convert any [`Coerce`] input into an [`Outcome`].
///
/// Free-function form of [`Coerce::coerce`].
///
/// # Examples
///
/// ```rust
/// use outcome::{coerce, success, Outcome, Tag};
///
/// let summed = coerce((Tag::Success, 1, 2))
///     .and_then(|(a, b)| success(a + b));
/// assert_eq!(summed, Outcome::Success(3));
/// ```
#[inline]
pub fn coerce<C: Coerce>(input: C) -> Outcome<C::Success, C::Failure> {
    input.coerce()
}

/// An outcome is already canonical; coercion returns it unchanged.
impl<T, E> Coerce for Outcome<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn coerce(self) -> Outcome<T, E> {
        self
    }
}

/// A bare tag marker carries no payload; both branches hold the empty `()`.
impl Coerce for Tag {
    type Success = ();
    type Failure = ();

    #[inline]
    fn coerce(self) -> Outcome<(), ()> {
        match self {
            Tag::Success => Outcome::Success(()),
            Tag::Failure => Outcome::Failure(()),
        }
    }
}

/// A tagged pair: the second slot is the payload of whichever branch the tag
/// names. Both branches share the slot's type.
impl<V> Coerce for (Tag, V) {
    type Success = V;
    type Failure = V;

    #[inline]
    fn coerce(self) -> Outcome<V, V> {
        match self.0 {
            Tag::Success => Outcome::Success(self.1),
            Tag::Failure => Outcome::Failure(self.1),
        }
    }
}

impl<T, E> Coerce for Result<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn coerce(self) -> Outcome<T, E> {
        match self {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e),
        }
    }
}

/// `Left` is the success branch, matching [`Outcome::into_either`].
impl<T, E> Coerce for Either<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn coerce(self) -> Outcome<T, E> {
        match self {
            Either::Left(v) => Outcome::Success(v),
            Either::Right(e) => Outcome::Failure(e),
        }
    }
}

/// Structural view of an outcome-shaped type.
///
/// Any type exposing a success flag and two payload slots can convert into
/// [`Outcome`] via [`Outcome::from_like`], without a nominal relationship to
/// this crate's type. The contract mirrors the outcome invariant: when
/// [`is_success`](OutcomeLike::is_success) returns `true`,
/// [`into_either`](OutcomeLike::into_either) must return `Left`, otherwise
/// `Right`.
///
/// # Examples
///
/// ```rust
/// use either::Either;
/// use outcome::{Outcome, OutcomeLike};
///
/// struct Reply {
///     succeeded: bool,
///     body: String,
/// }
///
/// impl OutcomeLike for Reply {
///     type Success = String;
///     type Failure = String;
///
///     fn is_success(&self) -> bool {
///         self.succeeded
///     }
///
///     fn into_either(self) -> Either<String, String> {
///         if self.succeeded {
///             Either::Left(self.body)
///         } else {
///             Either::Right(self.body)
///         }
///     }
/// }
///
/// let reply = Reply { succeeded: false, body: "timeout".into() };
/// assert_eq!(Outcome::from_like(reply), Outcome::Failure("timeout".to_string()));
/// ```
pub trait OutcomeLike {
    /// Payload type of the success slot.
    type Success;
    /// Payload type of the failure slot.
    type Failure;

    /// Whether the success slot is the occupied one.
    fn is_success(&self) -> bool;

    /// Surrender the occupied slot, success on the left.
    fn into_either(self) -> Either<Self::Success, Self::Failure>;
}

impl<T, E> OutcomeLike for Outcome<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }

    #[inline]
    fn into_either(self) -> Either<T, E> {
        Outcome::into_either(self)
    }
}

impl<T, E> OutcomeLike for Result<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn into_either(self) -> Either<T, E> {
        match self {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        }
    }
}

impl<T, E> OutcomeLike for Either<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn into_either(self) -> Either<T, E> {
        self
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts any [`OutcomeLike`] value into an `Outcome`, structurally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let from_result: Outcome<i32, &str> = Outcome::from_like(Ok(2));
    /// assert_eq!(from_result, Outcome::Success(2));
    /// ```
    #[inline]
    pub fn from_like<L>(like: L) -> Self
    where
        L: OutcomeLike<Success = T, Failure = E>,
    {
        match like.into_either() {
            Either::Left(v) => Outcome::Success(v),
            Either::Right(e) => Outcome::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_is_idempotent_on_outcomes() {
        let s: Outcome<i32, &str> = Outcome::success(1);
        let f: Outcome<i32, &str> = Outcome::failure("e");

        assert_eq!(coerce(s), s);
        assert_eq!(coerce(f), f);
        assert_eq!(coerce(coerce(s)), s);
    }

    #[test]
    fn test_coerce_tagged_pair() {
        assert_eq!(coerce((Tag::Success, 7)), Outcome::Success(7));
        assert_eq!(coerce((Tag::Failure, 7)), Outcome::Failure(7));
    }

    #[test]
    fn test_coerce_bare_tag() {
        assert_eq!(coerce(Tag::Success), Outcome::<(), ()>::Success(()));
        assert_eq!(coerce(Tag::Failure), Outcome::<(), ()>::Failure(()));
    }

    #[test]
    fn test_coerce_result_and_either() {
        assert_eq!(coerce(Result::<i32, &str>::Ok(2)), Outcome::Success(2));
        assert_eq!(coerce(Result::<i32, &str>::Err("e")), Outcome::Failure("e"));
        assert_eq!(coerce(Either::<i32, &str>::Left(2)), Outcome::Success(2));
        assert_eq!(coerce(Either::<i32, &str>::Right("e")), Outcome::Failure("e"));
    }

    #[test]
    fn test_coerce_preserves_mutual_exclusivity() {
        assert_ne!(coerce((Tag::Success, 1)).is_success(), coerce((Tag::Success, 1)).is_failure());
        assert_ne!(coerce((Tag::Failure, 1)).is_success(), coerce((Tag::Failure, 1)).is_failure());
        assert_ne!(coerce(Tag::Success).is_success(), coerce(Tag::Success).is_failure());
        assert_ne!(coerce(Tag::Failure).is_success(), coerce(Tag::Failure).is_failure());
    }

    struct ForeignOutcome {
        succeeded: bool,
        value: Option<i32>,
        error: Option<String>,
    }

    impl OutcomeLike for ForeignOutcome {
        type Success = i32;
        type Failure = String;

        fn is_success(&self) -> bool {
            self.succeeded
        }

        fn into_either(self) -> Either<i32, String> {
            if self.succeeded {
                Either::Left(self.value.unwrap_or_default())
            } else {
                Either::Right(self.error.unwrap_or_default())
            }
        }
    }

    #[test]
    fn test_from_like_accepts_foreign_shape() {
        let good = ForeignOutcome { succeeded: true, value: Some(5), error: None };
        let bad = ForeignOutcome { succeeded: false, value: None, error: Some("down".into()) };

        assert_eq!(Outcome::from_like(good), Outcome::Success(5));
        assert_eq!(Outcome::from_like(bad), Outcome::Failure("down".to_string()));
    }

    #[test]
    fn test_from_like_round_trips_through_either() {
        let s: Outcome<i32, String> = Outcome::success(3);
        assert_eq!(Outcome::from_like(s.clone().into_either()), s);

        let f: Outcome<i32, String> = Outcome::failure("e".to_string());
        assert_eq!(Outcome::from_like(f.clone().into_either()), f);
    }
}
