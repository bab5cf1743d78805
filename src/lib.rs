//! # Outcome: Two-Variant Success/Failure Values
//!
//! An immutable outcome value that either succeeded with a payload or failed
//! with an error, plus a fixed algebra of pure combinators for transforming
//! and extracting it without exceptions as control flow.
//!
//! ## Core Types
//!
//! - **[`Outcome<T, E>`]**: the two-variant value, `Success(T)` or `Failure(E)`
//! - **[`Tag`]**: the `ok` / `error` vocabulary carried by the native tagged forms
//!
//! ## Key Features
//!
//! - **Composable**: chain fallible steps with `.and_then()`, recover with `.or_else()`
//! - **Transformable**: rewrap payloads and errors with `.map()` / `.map_err()`
//! - **Convertible**: adapt tagged pairs, tagged sequences, [`Result`], and
//!   foreign outcome-shaped types with [`coerce`] and [`OutcomeLike`]
//!
//! ## Example
//!
//! ```
//! use outcome::*;
//!
//! // Decode a tagged sequence, combine its slots, and re-encode.
//! let summed = coerce((Tag::Success, 1, 2))
//!     .and_then(|(a, b)| success(a + b))
//!     .into_pair();
//! assert_eq!(summed, (Tag::Success, either::Either::Left(3)));
//! ```
//!
//! ## Common Functions
//!
//! **Building Outcomes:**
//! - [`success(value)`](success) / [`failure(error)`](failure) - the two constructors
//! - [`coerce(input)`](coerce) - adapt any native tagged encoding
//!
//! **Extraction:**
//! - [`Outcome::unwrap`] / [`Outcome::expect`] - payload or panic
//! - [`Outcome::unwrap_or`] / [`Outcome::unwrap_or_else`] - payload or fallback
//! - [`Outcome::into_pair`] / [`Outcome::into_tuple`] - native tagged encodings

mod convert;
mod outcome;
pub mod prelude;
mod tag;
mod tuple;

pub use convert::*;
pub use outcome::*;
pub use tag::*;
pub use tuple::*;
