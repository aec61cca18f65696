//! Version Stamper Data Types

use crate::stamp::error::{StampError, StampResult};
use std::path::PathBuf;

/// Snapshot of repository state, collected once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Full hex id of HEAD
    pub commit_hash: String,
    /// Short name of the checked-out branch
    pub branch_name: String,
    /// Human-readable describe string, dirty marker included
    pub describe: String,
    /// Short-form status listing, one entry per changed/untracked file
    pub status_lines: Vec<String>,
}

/// Build-identification tokens supplied by the caller.
///
/// Original case is preserved for the emitted string values; guard tokens
/// are derived upper-cased on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    platform: String,
    target: String,
}

impl BuildTarget {
    pub fn new(platform: &str, target: &str) -> StampResult<Self> {
        validate_token("platform", platform)?;
        validate_token("target", target)?;
        Ok(Self {
            platform: platform.to_string(),
            target: target.to_string(),
        })
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Guard token for the platform existence assertion, e.g. `PLATFORM_ESP32`
    pub fn platform_guard(&self) -> String {
        format!("PLATFORM_{}", guard_token(&self.platform))
    }

    /// Guard token for the target existence assertion, e.g. `TARGET_RELEASE`
    pub fn target_guard(&self) -> String {
        format!("TARGET_{}", guard_token(&self.target))
    }

    /// Include-guard name for the declarations artifact
    pub fn include_guard(&self) -> String {
        format!(
            "VERSION_DATA_{}_{}_H",
            guard_token(&self.platform),
            guard_token(&self.target)
        )
    }
}

fn validate_token(name: &str, value: &str) -> StampResult<()> {
    if value.is_empty() {
        return Err(StampError::MissingConfiguration {
            message: format!("{} token is empty", name),
        });
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StampError::MissingConfiguration {
            message: format!("{} token '{}' is not identifier-safe", name, value),
        });
    }
    Ok(())
}

/// Upper-case a token for use in a preprocessor identifier
fn guard_token(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// A fully rendered output file, compared against disk before writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub content: String,
}

/// Result of a write-if-changed attempt for a single artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content differed (or the file was missing) and was replaced wholesale
    Updated,
    /// Content was byte-identical, no I/O performed
    Unchanged,
}
