//! Domain models for depex
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Exclusion`] - A group ID / artifact ID pair to leave out of resolution
//! - [`Exclusions`] - Exclusions declared per dependency

mod exclusion;
mod exclusions;

pub use exclusion::{Exclusion, ParseError, WILDCARD};
pub use exclusions::Exclusions;
