//! Exclusion matcher service - decides whether a candidate is excluded
//!
//! This module contains pure matching logic with no I/O dependencies.

use crate::core::models::{Exclusion, Exclusions};

/// Find the exclusion on `dependency` that covers a candidate artifact
///
/// An exact match wins over a wildcard match, so callers reporting the
/// matching exclusion show the most specific one.
///
/// # Arguments
///
/// * `exclusions` - Exclusions declared per dependency
/// * `dependency` - Dependency id (`group:artifact`) the candidate is reached through
/// * `group_id` - Candidate group ID
/// * `artifact_id` - Candidate artifact ID
///
/// # Returns
///
/// The matching exclusion, or `None` if the candidate is not excluded
#[must_use]
pub fn find_exclusion<'a>(
    exclusions: &'a Exclusions,
    dependency: &str,
    group_id: &str,
    artifact_id: &str,
) -> Option<&'a Exclusion> {
    let declared = exclusions.for_dependency(dependency)?;

    let exact = Exclusion::new(group_id, artifact_id);
    let found = declared.get(&exact).or_else(|| {
        // Sort wildcard candidates so the result does not depend on set order
        let mut wildcards: Vec<&Exclusion> = declared
            .iter()
            .filter(|e| e.is_wildcard() && e.matches(group_id, artifact_id))
            .collect();
        wildcards.sort();
        wildcards.into_iter().next()
    });

    if let Some(exclusion) = found {
        log::debug!("{group_id}:{artifact_id} excluded from {dependency} by {exclusion}");
    }
    found
}

/// Check if a candidate artifact is excluded for a dependency
#[must_use]
pub fn is_excluded(
    exclusions: &Exclusions,
    dependency: &str,
    group_id: &str,
    artifact_id: &str,
) -> bool {
    find_exclusion(exclusions, dependency, group_id, artifact_id).is_some()
}
