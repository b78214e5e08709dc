//! Check command - is a candidate excluded for a dependency?

use std::path::Path;

use anyhow::Context;

use depex::config::ExclusionConfig;
use depex::core::models::Exclusion;
use depex::core::services::find_exclusion;
use depex::output::{CheckResult, OutputMode};

/// Check `candidate` against the exclusions declared on `dependency`
pub fn check(
    dependency: &str,
    candidate: &str,
    config_path: &Path,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let candidate: Exclusion =
        candidate.parse().with_context(|| format!("invalid candidate '{candidate}'"))?;

    let exclusions = ExclusionConfig::load(config_path)?.to_exclusions()?;
    if exclusions.for_dependency(dependency).is_none() {
        log::info!("no exclusions declared on {dependency}");
    }

    let matched =
        find_exclusion(&exclusions, dependency, candidate.group_id(), candidate.artifact_id());

    let result = CheckResult {
        dependency: dependency.to_string(),
        candidate: candidate.to_string(),
        excluded: matched.is_some(),
        matched_by: matched.map(ToString::to_string),
    };
    result.render(output_mode);
    Ok(())
}
