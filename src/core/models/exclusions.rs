//! Per-dependency exclusion sets
//!
//! Maps a dependency id (`group:artifact`) to the exclusions declared on it.
//! Adding an exclusion a dependency already has is a no-op.

use std::collections::{HashMap, HashSet};

use super::Exclusion;

/// Exclusions declared on dependencies, keyed by dependency id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    by_dependency: HashMap<String, HashSet<Exclusion>>,
}

impl Exclusions {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add exclusions for a dependency, merging with any already present
    pub fn add(
        &mut self,
        dependency: impl Into<String>,
        exclusions: impl IntoIterator<Item = Exclusion>,
    ) {
        let dependency = dependency.into();
        let set = self.by_dependency.entry(dependency.clone()).or_default();
        for exclusion in exclusions {
            log::trace!("{dependency}: excluding {exclusion}");
            set.insert(exclusion);
        }
    }

    /// Merge every dependency's exclusions from `other` into this collection
    pub fn add_all(&mut self, other: &Self) {
        for (dependency, exclusions) in &other.by_dependency {
            self.add(dependency.as_str(), exclusions.iter().cloned());
        }
    }

    /// Exclusions declared on a dependency, if any were added
    #[must_use]
    pub fn for_dependency(&self, dependency: &str) -> Option<&HashSet<Exclusion>> {
        self.by_dependency.get(dependency)
    }

    /// Dependency ids that have exclusions, in no particular order
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.by_dependency.keys().map(String::as_str)
    }

    /// Number of dependencies with exclusions
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_dependency.len()
    }

    /// Whether no dependency has exclusions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_dependency.is_empty()
    }
}
