//! Repository Metadata Access
//!
//! The stamper core talks to version control through the
//! [`MetadataProvider`] trait so rendering and writing stay testable with
//! synthetic metadata. [`GitRepository`] is the real implementation.

mod repository;

pub use repository::GitRepository;

use crate::stamp::error::StampResult;
use crate::stamp::types::BuildMetadata;

/// Source of the one-shot repository metadata snapshot
pub trait MetadataProvider {
    fn collect(&self) -> StampResult<BuildMetadata>;
}
