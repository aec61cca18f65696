//! Shared fixtures for stamper unit tests

use crate::stamp::types::{BuildMetadata, BuildTarget};

pub fn sample_metadata() -> BuildMetadata {
    BuildMetadata {
        commit_hash: "abc1234567890abc1234567890abc1234567890a".to_string(),
        branch_name: "main".to_string(),
        describe: "v1.2.0-dirty".to_string(),
        status_lines: vec![" M foo.c".to_string(), "?? notes.txt".to_string()],
    }
}

pub fn sample_target() -> BuildTarget {
    BuildTarget::new("esp32", "release").expect("valid tokens")
}
