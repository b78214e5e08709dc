//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{Exclusion, Exclusions};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A parsed and normalized coordinate
#[derive(Debug, Serialize)]
pub struct ShowResult {
    /// Normalized `group:artifact` form
    pub coordinate: String,
    /// Group ID
    pub group_id: String,
    /// Artifact ID
    pub artifact_id: String,
    /// Persisted-table compatible hash
    pub hash_code: i32,
    /// Whether either field is `*`
    pub wildcard: bool,
}

/// Result of checking one candidate against a dependency's exclusions
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Dependency id the candidate is reached through
    pub dependency: String,
    /// Candidate `group:artifact`
    pub candidate: String,
    /// Whether the candidate is excluded
    pub excluded: bool,
    /// The exclusion that matched, if any
    pub matched_by: Option<String>,
}

/// Result of listing configured exclusions
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Dependencies, sorted by id
    pub dependencies: Vec<DependencyExclusions>,
}

/// Exclusions of one dependency
#[derive(Debug, Serialize)]
pub struct DependencyExclusions {
    /// Dependency id
    pub dependency: String,
    /// Excluded coordinates, sorted
    pub exclusions: Vec<String>,
}

impl From<&Exclusion> for ShowResult {
    fn from(exclusion: &Exclusion) -> Self {
        Self {
            coordinate: exclusion.to_string(),
            group_id: exclusion.group_id().to_string(),
            artifact_id: exclusion.artifact_id().to_string(),
            hash_code: exclusion.hash_code(),
            wildcard: exclusion.is_wildcard(),
        }
    }
}

impl From<&Exclusions> for ListResult {
    fn from(exclusions: &Exclusions) -> Self {
        let mut dependencies: Vec<DependencyExclusions> = exclusions
            .dependencies()
            .map(|dependency| {
                let mut declared: Vec<&Exclusion> = exclusions
                    .for_dependency(dependency)
                    .map(|set| set.iter().collect())
                    .unwrap_or_default();
                declared.sort();
                DependencyExclusions {
                    dependency: dependency.to_string(),
                    exclusions: declared.iter().map(ToString::to_string).collect(),
                }
            })
            .collect();
        dependencies.sort_by(|a, b| a.dependency.cmp(&b.dependency));
        Self { dependencies }
    }
}

impl ShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Coordinate: {}", self.coordinate);
        println!("  Group:     {}", display_field(&self.group_id));
        println!("  Artifact:  {}", display_field(&self.artifact_id));
        println!("  Hash code: {}", self.hash_code);
        if self.wildcard {
            println!("  (wildcard)");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.matched_by {
            Some(exclusion) => {
                println!("EXCLUDED: {} via {}", self.candidate, self.dependency);
                println!("  matched by {exclusion}");
            },
            None => println!("Not excluded: {} via {}", self.candidate, self.dependency),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.dependencies.is_empty() {
            println!("No exclusions configured.");
            return;
        }

        println!("Exclusions:\n");
        for d in &self.dependencies {
            println!("  {}", d.dependency);
            for e in &d.exclusions {
                println!("    - {e}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn display_field(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}
