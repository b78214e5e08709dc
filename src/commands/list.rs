//! List command - show configured exclusions

use std::path::Path;

use depex::config::ExclusionConfig;
use depex::output::{ListResult, OutputMode};

/// List the exclusions declared in the config file
pub fn list(config_path: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let exclusions = ExclusionConfig::load(config_path)?.to_exclusions()?;
    log::debug!("{} dependencies with exclusions", exclusions.len());

    ListResult::from(&exclusions).render(output_mode);
    Ok(())
}
