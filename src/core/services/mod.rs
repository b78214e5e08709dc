//! Business logic services
//!
//! Pure logic over domain models. No I/O.
//!
//! - [`matcher`] - Decide whether a candidate artifact is excluded

pub mod matcher;

pub use matcher::{find_exclusion, is_excluded};
