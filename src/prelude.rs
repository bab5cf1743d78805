//! Commonly used imports
//!
//! Use `use outcome::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Outcome, Tag};

// Constructors
pub use crate::{failure, success};

// Conversion
pub use crate::{coerce, Coerce, OutcomeLike};

// Tuple codec
pub use crate::Sequence;
