//! Tuple encoding of outcomes into native tagged sequences, and back.
//!
//! An outcome has two native encodings:
//!
//! - **[`Outcome::into_pair`]**: the nesting form, always `(tag, value)`
//!   whatever the payload's shape
//! - **[`Outcome::into_tuple`]**: the flattening form, merging a tuple
//!   payload's elements into the enclosing sequence with the tag prepended,
//!   so `Success((a, b))` becomes `(Tag::Success, a, b)`
//!
//! Flattening changes the result type, so the two forms are separate methods
//! rather than a boolean option; `into_tuple` is the default convention and
//! the exact structural inverse of coercing a tagged sequence.
//!
//! Single-element convention: `(a,)` flattens to `(tag, a)`, and a `(tag, a)`
//! pair coerces by the pair rule to the bare element `a`, never a 1-tuple.
//! The 1-tuple round trip therefore lands on the bare element.
//!
//! # Examples
//!
//! ```rust
//! use either::Either;
//! use outcome::{coerce, success, Outcome, Tag};
//!
//! let flat = success::<_, ()>((1, 2)).into_tuple();
//! assert_eq!(flat, Either::Left((Tag::Success, 1, 2)));
//!
//! let back = coerce((Tag::Success, 1, 2));
//! assert_eq!(back, Outcome::Success((1, 2)));
//! ```

use either::Either;

use crate::convert::Coerce;
use crate::outcome::Outcome;
use crate::tag::Tag;

/// An ordered tuple payload that can absorb a [`Tag`] as its first slot.
///
/// Implemented for tuples of one through eight elements. `Tagged` is the
/// sequence type with the tag prepended and the element order preserved.
///
/// # Examples
///
/// ```rust
/// use outcome::{Sequence, Tag};
///
/// assert_eq!((1, "a").prepend(Tag::Failure), (Tag::Failure, 1, "a"));
/// assert_eq!((1,).prepend(Tag::Success), (Tag::Success, 1));
/// ```
pub trait Sequence: Sized {
    /// The sequence with the tag in front.
    type Tagged;

    /// Prepend `tag` to the tuple's elements.
    fn prepend(self, tag: Tag) -> Self::Tagged;
}

macro_rules! sequence_impls {
    ($(($($t:ident),+)),+ $(,)?) => {
        $(
            impl<$($t),+> Sequence for ($($t,)+) {
                type Tagged = (Tag, $($t),+);

                #[inline]
                #[allow(non_snake_case)]
                fn prepend(self, tag: Tag) -> Self::Tagged {
                    let ($($t,)+) = self;
                    (tag, $($t),+)
                }
            }
        )+
    };
}

/// The empty payload flattens to the bare tag marker, inverting the
/// bare-[`Tag`] coercion rule.
impl Sequence for () {
    type Tagged = Tag;

    #[inline]
    fn prepend(self, tag: Tag) -> Tag {
        tag
    }
}

sequence_impls!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);

// Tagged sequences of two or more payload slots coerce to an outcome holding
// the remainder, in order, as a tuple. The single-slot case is the pair rule
// in `convert`, which yields the bare value.
macro_rules! tagged_sequence_impls {
    ($(($($t:ident),+)),+ $(,)?) => {
        $(
            impl<$($t),+> Coerce for (Tag, $($t),+) {
                type Success = ($($t,)+);
                type Failure = ($($t,)+);

                #[inline]
                #[allow(non_snake_case)]
                fn coerce(self) -> Outcome<Self::Success, Self::Failure> {
                    let (tag, $($t),+) = self;
                    match tag {
                        Tag::Success => Outcome::Success(($($t,)+)),
                        Tag::Failure => Outcome::Failure(($($t,)+)),
                    }
                }
            }
        )+
    };
}

tagged_sequence_impls!(
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);

impl<T, E> Outcome<T, E> {
    /// Encodes the outcome as a `(tag, value)` pair without flattening.
    ///
    /// The payload is nested unchanged, tuple or not; the [`Either`] carries
    /// the occupied slot, success on the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use either::Either;
    /// use outcome::{success, Outcome, Tag};
    ///
    /// let x = success::<_, ()>((1, 2)).into_pair();
    /// assert_eq!(x, (Tag::Success, Either::Left((1, 2))));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.into_pair(), (Tag::Failure, Either::Right("bad")));
    /// ```
    #[inline]
    pub fn into_pair(self) -> (Tag, Either<T, E>) {
        match self {
            Outcome::Success(v) => (Tag::Success, Either::Left(v)),
            Outcome::Failure(e) => (Tag::Failure, Either::Right(e)),
        }
    }

    /// Encodes the outcome as a flat tagged sequence.
    ///
    /// The tuple payload's elements are merged into the enclosing sequence
    /// with the tag prepended; [`into_pair`](Outcome::into_pair) is the
    /// non-flattening form for payloads that are not tuples.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use either::Either;
    /// use outcome::{success, Tag};
    ///
    /// let flat = success::<_, ()>((1, 2)).into_tuple();
    /// assert_eq!(flat, Either::Left((Tag::Success, 1, 2)));
    /// ```
    #[inline]
    pub fn into_tuple(self) -> Either<T::Tagged, E::Tagged>
    where
        T: Sequence,
        E: Sequence,
    {
        match self {
            Outcome::Success(v) => Either::Left(v.prepend(Tag::Success)),
            Outcome::Failure(e) => Either::Right(e.prepend(Tag::Failure)),
        }
    }
}
