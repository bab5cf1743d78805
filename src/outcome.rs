use either::Either;

use crate::tag::Tag;

/// Outcome of an operation, either succeeding with a value or failing with an error.
///
/// `Outcome` is an immutable two-variant value: every combinator consumes or
/// borrows the receiver and produces a new value, so an `Outcome` never changes
/// after construction. The payload and error types are opaque; no combinator
/// inspects them beyond handing them to caller-supplied closures.
///
/// # Examples
///
/// ```rust
/// use outcome::{success, Outcome};
///
/// let x: Outcome<i32, &str> = success(2);
/// let doubled = x.map(|v| v * 2);
/// assert_eq!(doubled, Outcome::Success(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation succeeded with a payload value.
    Success(T),
    /// The operation failed with an error value.
    Failure(E),
}

/// Create a successful outcome holding `value`.
///
/// # Examples
///
/// ```rust
/// use outcome::{success, Outcome};
///
/// let x: Outcome<i32, &str> = success(7);
/// assert_eq!(x, Outcome::Success(7));
/// ```
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Create a failed outcome holding `error`.
///
/// # Examples
///
/// ```rust
/// use outcome::{failure, Outcome};
///
/// let x: Outcome<i32, &str> = failure("nope");
/// assert_eq!(x, Outcome::Failure("nope"));
/// ```
#[inline]
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Builds a successful outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(7);
    /// assert!(x.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Builds a failed outcome holding `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert!(x.is_failure());
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Returns `true` if the outcome is `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(-3);
    /// assert!(x.is_success());
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("some error");
    /// assert!(!y.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("some error");
    /// assert!(x.is_failure());
    ///
    /// let y: Outcome<i32, &str> = Outcome::success(-3);
    /// assert!(!y.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the [`Tag`] naming the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, Tag};
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(x.tag(), Tag::Success);
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.tag(), Tag::Failure);
    /// ```
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            Outcome::Success(_) => Tag::Success,
            Outcome::Failure(_) => Tag::Failure,
        }
    }

    /// Converts from `Outcome<T, E>` to `Option<T>`, discarding the error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("nothing here");
    /// assert_eq!(y.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts from `Outcome<T, E>` to `Option<E>`, discarding the payload, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("nothing here");
    /// assert_eq!(x.err(), Some("nothing here"));
    ///
    /// let y: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(y.err(), None);
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(x.as_ref(), Outcome::Success(&42));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut x: Outcome<i32, String> = Outcome::success(42);
    /// if let Outcome::Success(v) = x.as_mut() {
    ///     *v = 100;
    /// }
    /// assert_eq!(x, Outcome::Success(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying a function to the payload.
    ///
    /// The closure returns a bare value which is rewrapped in `Success`; a
    /// `Failure` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(x.map(|v| v * 2), Outcome::Success(10));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.map(|v| v * 2), Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<T, F>` by applying a function to the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("ERR");
    /// assert_eq!(x.map_err(|e| e.len()), Outcome::Failure(3));
    ///
    /// let y: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(y.map_err(|e: &str| e.len()), Outcome::Success(5));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Applies a function to the payload, or returns `default` on failure.
    ///
    /// Both branches produce a bare value, not an `Outcome`. The default is
    /// eagerly evaluated; use [`map_or_else`](Outcome::map_or_else) for a lazy
    /// failure branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(x.map_or(0, |v| v * 2), 10);
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.map_or(0, |v| v * 2), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(_) => default,
        }
    }

    /// Applies a function to the error, or returns `default` on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("ERR");
    /// assert_eq!(x.map_err_or(0, |e| e.len()), 3);
    ///
    /// let y: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(y.map_err_or(0, |e| e.len()), 0);
    /// ```
    #[inline]
    pub fn map_err_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(_) => default,
            Outcome::Failure(e) => f(e),
        }
    }

    /// Folds the outcome into a bare value by applying one of two functions.
    ///
    /// `err_f` handles the failure branch, `ok_f` the success branch; exactly
    /// one of them runs, exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(x.map_or_else(|e| e.len() as i32, |v| v * 2), 10);
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("ERR");
    /// assert_eq!(y.map_or_else(|e| e.len() as i32, |v| v * 2), 3);
    /// ```
    #[inline]
    pub fn map_or_else<U, FE, FT>(self, err_f: FE, ok_f: FT) -> U
    where
        FE: FnOnce(E) -> U,
        FT: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => ok_f(v),
            Outcome::Failure(e) => err_f(e),
        }
    }

    /// Chains a fallible computation on the payload, short-circuiting on failure.
    ///
    /// The closure must itself return an `Outcome`; it is never invoked on a
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, failure, Outcome};
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 { success(n / 2) } else { failure("odd") }
    /// }
    ///
    /// assert_eq!(success::<_, &str>(4).and_then(halve), Outcome::Success(2));
    /// assert_eq!(success::<_, &str>(3).and_then(halve), Outcome::Failure("odd"));
    /// assert_eq!(failure("bad").and_then(halve), Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Chains a recovery computation on the error, short-circuiting on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, Outcome};
    ///
    /// fn recover(e: &str) -> Outcome<i32, usize> {
    ///     Outcome::failure(e.len())
    /// }
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("ERR");
    /// assert_eq!(x.or_else(recover), Outcome::Failure(3));
    ///
    /// let y: Outcome<i32, &str> = success(5);
    /// assert_eq!(y.or_else(recover), Outcome::Success(5));
    /// ```
    #[inline]
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => f(e),
        }
    }

    /// Returns the receiver on success, `other` on failure.
    ///
    /// `other` is a plain value, eagerly evaluated; use
    /// [`or_else`](Outcome::or_else) for a lazy alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// let fallback: Outcome<i32, &str> = Outcome::success(0);
    /// assert_eq!(x.or(fallback), Outcome::Success(2));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.or(fallback), Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(_) => other,
        }
    }

    /// Returns `other` on success, the receiver on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// let next: Outcome<&str, &str> = Outcome::success("late");
    /// assert_eq!(x.and(next), Outcome::Success("late"));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.and(next), Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Returns the payload or `default` on failure.
    ///
    /// `default` is eagerly evaluated and no closure is ever invoked; use
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) for a lazy fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(9);
    /// assert_eq!(x.unwrap_or(0), 9);
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the error or `default` on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(x.unwrap_err_or("none"), "bad");
    ///
    /// let y: Outcome<i32, &str> = Outcome::success(9);
    /// assert_eq!(y.unwrap_err_or("none"), "none");
    /// ```
    #[inline]
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Outcome::Success(_) => default,
            Outcome::Failure(e) => e,
        }
    }

    /// Returns the payload or computes a fallback from the error.
    ///
    /// The closure runs exactly once, and only on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<usize, &str> = Outcome::success(9);
    /// assert_eq!(x.unwrap_or_else(|e| e.len()), 9);
    ///
    /// let y: Outcome<usize, &str> = Outcome::failure("bad");
    /// assert_eq!(y.unwrap_or_else(|e| e.len()), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => f(e),
        }
    }

    /// Returns the error or computes a fallback from the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<&str, usize> = Outcome::failure(7);
    /// assert_eq!(x.unwrap_err_or_else(|v| v.len()), 7);
    ///
    /// let y: Outcome<&str, usize> = Outcome::success("fine");
    /// assert_eq!(y.unwrap_err_or_else(|v| v.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_err_or_else<F>(self, f: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(e) => e,
        }
    }

    /// Returns the contained payload, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Failure`, with a custom panic message
    /// provided by `msg`. The error value is not rendered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(42);
    /// assert_eq!(x.expect("was a failure"), 42);
    /// ```
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("bad");
    /// x.expect("the world is ending"); // panics with "the world is ending"
    /// ```
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => panic!("{}", msg),
        }
    }

    /// Returns the contained error, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Success`, with a custom panic message
    /// provided by `msg`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(x.expect_err("was a success"), "bad");
    /// ```
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(42);
    /// x.expect_err("the world is ending"); // panics with "the world is ending"
    /// ```
    #[inline]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Outcome::Success(_) => panic!("{}", msg),
            Outcome::Failure(e) => e,
        }
    }

    /// Converts the outcome into an [`Either`], success on the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use either::Either;
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(x.into_either(), Either::Left(2));
    ///
    /// let y: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(y.into_either(), Either::Right("bad"));
    /// ```
    #[inline]
    pub fn into_either(self) -> Either<T, E> {
        match self {
            Outcome::Success(v) => Either::Left(v),
            Outcome::Failure(e) => Either::Right(e),
        }
    }

    /// Converts the outcome into a standard [`Result`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(x.into_result(), Ok(2));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Converts from `Outcome<T, E>` to `Outcome<E, T>` by swapping variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(x.flip(), Outcome::Failure(2));
    /// ```
    #[inline]
    pub fn flip(self) -> Outcome<E, T> {
        match self {
            Outcome::Success(v) => Outcome::Failure(v),
            Outcome::Failure(e) => Outcome::Success(e),
        }
    }

    /// Returns `true` if the outcome is a `Success` containing the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(2);
    /// assert!(x.contains(&2));
    /// assert!(!x.contains(&3));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Outcome::Success(v) if value == v)
    }

    /// Returns `true` if the outcome is a `Failure` containing the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert!(x.contains_err(&"bad"));
    /// assert!(!x.contains_err(&"worse"));
    /// ```
    #[inline]
    pub fn contains_err<U>(&self, error: &U) -> bool
    where
        U: PartialEq<E>,
    {
        matches!(self, Outcome::Failure(e) if error == e)
    }
}

impl<T, E> Outcome<T, E>
where
    E: std::fmt::Debug,
{
    /// Returns the contained payload, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Failure`, with a message embedding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(123);
    /// assert_eq!(x.unwrap(), 123);
    /// ```
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("x");
    /// x.unwrap(); // panics, message contains `"x"`
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {:?}", e)
            }
        }
    }
}

impl<T, E> Outcome<T, E>
where
    T: std::fmt::Debug,
{
    /// Returns the contained error, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Success`, with a message embedding the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(x.unwrap_err(), "bad");
    /// ```
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::success(42);
    /// x.unwrap_err(); // panics, message contains `42`
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Success(v) => {
                panic!("called `Outcome::unwrap_err()` on a `Success` value: {:?}", v)
            }
            Outcome::Failure(e) => e,
        }
    }
}

impl<E> Outcome<(), E> {
    /// Builds a successful outcome with the empty payload `()`.
    ///
    /// The zero-argument form of [`Outcome::success`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let x: Outcome<(), &str> = Outcome::success_unit();
    /// assert_eq!(x, Outcome::Success(()));
    /// ```
    #[inline]
    pub const fn success_unit() -> Self {
        Outcome::Success(())
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    #[inline]
    fn default() -> Self {
        Outcome::Success(T::default())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
