//! Version Stamper
//!
//! Collects a repository metadata snapshot, renders the declarations and
//! definitions artifacts, and writes each to disk only when its content
//! changed. One linear operation per build invocation; errors abort before
//! any file is touched.

pub mod error;
pub mod render;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

use crate::git::MetadataProvider;
use colored::Colorize;
use error::StampResult;
use std::path::Path;
use types::{BuildTarget, GeneratedArtifact, WriteOutcome};

/// Fixed relative name of the declarations artifact
pub const DECLARATIONS_FILE: &str = "version_data.h";
/// Fixed relative name of the definitions artifact
pub const DEFINITIONS_FILE: &str = "version_data.c";

/// Collect metadata, render both artifacts and write whichever changed.
///
/// The two artifacts are written or skipped independently; a one-line
/// notice is printed for each file actually written. Metadata and
/// configuration errors surface before any write happens.
pub fn run(
    provider: &dyn MetadataProvider,
    target: &BuildTarget,
    output_dir: &Path,
) -> StampResult<Vec<(GeneratedArtifact, WriteOutcome)>> {
    let metadata = provider.collect()?;
    log::debug!(
        "Collected metadata: commit {}, branch {}, describe {}, {} status line(s)",
        metadata.commit_hash,
        metadata.branch_name,
        metadata.describe,
        metadata.status_lines.len()
    );

    let artifacts = vec![
        GeneratedArtifact {
            path: output_dir.join(DECLARATIONS_FILE),
            content: render::render_declarations(target),
        },
        GeneratedArtifact {
            path: output_dir.join(DEFINITIONS_FILE),
            content: render::render_definitions(&metadata, target),
        },
    ];

    let mut results = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let outcome = writer::write_if_changed(&artifact.path, &artifact.content)?;
        match outcome {
            WriteOutcome::Updated => {
                println!("{} {}", "updated".green(), artifact.path.display());
            }
            WriteOutcome::Unchanged => {
                log::debug!("{} unchanged, skipping write", artifact.path.display());
            }
        }
        results.push((artifact, outcome));
    }
    Ok(results)
}
