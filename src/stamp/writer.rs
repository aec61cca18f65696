//! Conditional File Writing
//!
//! Whole-file replacement guarded by a byte-for-byte comparison against the
//! existing content, so builds that did not change any stamped value leave
//! the output files (and their timestamps) alone.

use crate::stamp::error::{StampError, StampResult};
use crate::stamp::types::WriteOutcome;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Decision for a single artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Write,
    Skip,
}

/// Pure comparison: a missing file is unequal to any content.
pub fn write_action(existing: Option<&[u8]>, content: &str) -> WriteAction {
    match existing {
        Some(bytes) if bytes == content.as_bytes() => WriteAction::Skip,
        _ => WriteAction::Write,
    }
}

/// Compare `content` against the file at `path` and replace the file only
/// on mismatch. No partial writes: the content is fully rendered before
/// this is called and is written in one replacement.
pub fn write_if_changed(path: &Path, content: &str) -> StampResult<WriteOutcome> {
    let existing = match fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(StampError::WriteFailure {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    match write_action(existing.as_deref(), content) {
        WriteAction::Skip => Ok(WriteOutcome::Unchanged),
        WriteAction::Write => {
            fs::write(path, content).map_err(|e| StampError::WriteFailure {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(WriteOutcome::Updated)
        }
    }
}
