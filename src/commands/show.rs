//! Show command - parse a coordinate and print its normalized form

use anyhow::Context;

use depex::core::models::Exclusion;
use depex::output::{OutputMode, ShowResult};

/// Parse `coordinate` and render the resulting exclusion
pub fn show(coordinate: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let exclusion: Exclusion =
        coordinate.parse().with_context(|| format!("cannot parse '{coordinate}'"))?;

    ShowResult::from(&exclusion).render(output_mode);
    Ok(())
}
