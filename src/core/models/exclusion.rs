//! Exclusion model
//!
//! An exclusion names a group ID / artifact ID pair that a resolver must omit
//! from a dependency graph, even when it would be pulled in transitively.
//!
//! Absent inputs are normalized to the empty string once, at construction, so
//! both fields are always present afterwards. Values are immutable and compare
//! structurally.
//!
//! # Examples
//!
//! ```
//! use depex::core::models::Exclusion;
//!
//! let a = Exclusion::new("org.springframework", "spring-core");
//! let b: Exclusion = "org.springframework:spring-core".parse().unwrap();
//! assert_eq!(a, b);
//!
//! let missing_group = Exclusion::from_optional(None, Some("spring-core"));
//! assert_eq!(missing_group.group_id(), "");
//! assert_eq!(missing_group, Exclusion::new("", "spring-core"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value that matches any group or artifact ID
pub const WILDCARD: &str = "*";

/// Errors that can occur when parsing a `group:artifact` coordinate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Coordinate string was empty
    #[error("empty coordinate")]
    Empty,

    /// No `:` between group and artifact
    #[error("missing ':' separator in coordinate: {0}")]
    MissingSeparator(String),

    /// More than one `:` in the coordinate
    #[error("too many ':' separated segments in coordinate: {0}")]
    TooManySegments(String),
}

/// An exclusion of an artifact by group ID and artifact ID
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawExclusion")]
pub struct Exclusion {
    group_id: String,
    artifact_id: String,
}

/// Deserialization shape where either field may be missing or null
#[derive(Deserialize)]
struct RawExclusion {
    #[serde(default, alias = "group")]
    group_id: Option<String>,
    #[serde(default, alias = "artifact")]
    artifact_id: Option<String>,
}

impl From<RawExclusion> for Exclusion {
    fn from(raw: RawExclusion) -> Self {
        Self {
            group_id: raw.group_id.unwrap_or_default(),
            artifact_id: raw.artifact_id.unwrap_or_default(),
        }
    }
}

impl Exclusion {
    /// Create an exclusion from two present identifiers
    ///
    /// Inputs are stored verbatim: no trimming, case folding or validation.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Create an exclusion from possibly absent identifiers
    ///
    /// An absent identifier is stored as the empty string.
    #[must_use]
    pub fn from_optional(group_id: Option<&str>, artifact_id: Option<&str>) -> Self {
        Self::new(group_id.unwrap_or_default(), artifact_id.unwrap_or_default())
    }

    /// The excluded group ID
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The excluded artifact ID
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Whether either field is the `*` wildcard
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.group_id == WILDCARD || self.artifact_id == WILDCARD
    }

    /// Check if this exclusion covers the given group and artifact
    ///
    /// A `*` field matches any value; other fields compare exactly.
    #[must_use]
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        field_matches(&self.group_id, group_id) && field_matches(&self.artifact_id, artifact_id)
    }

    /// 32-bit hash compatible with existing persisted hash tables
    ///
    /// Mixes the artifact ID first, then the group ID:
    /// `31 * (31 * 1 + h(artifact_id)) + h(group_id)`, where `h` is the
    /// 31-polynomial hash over UTF-16 code units. All arithmetic wraps.
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        let mut result: i32 = 1;
        result = result.wrapping_mul(31).wrapping_add(string_hash_code(&self.artifact_id));
        result = result.wrapping_mul(31).wrapping_add(string_hash_code(&self.group_id));
        result
    }
}

fn field_matches(pattern: &str, value: &str) -> bool {
    pattern == WILDCARD || pattern == value
}

fn string_hash_code(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

// Same field order as hash_code; equal values feed identical bytes.
impl Hash for Exclusion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.artifact_id.hash(state);
        self.group_id.hash(state);
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for Exclusion {
    type Err = ParseError;

    /// Parse a `group:artifact` coordinate
    ///
    /// Surrounding whitespace is trimmed; an empty segment yields an empty field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let (group, artifact) =
            s.split_once(':').ok_or_else(|| ParseError::MissingSeparator(s.to_string()))?;

        if artifact.contains(':') {
            return Err(ParseError::TooManySegments(s.to_string()));
        }

        Ok(Self::new(group, artifact))
    }
}
