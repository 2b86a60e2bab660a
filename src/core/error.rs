use thiserror::Error;

use super::{DropTarget, PageId};

/// Failures of sequence mutations. Every failed call leaves the sequence untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("page {0} not found")]
    NotFound(PageId),

    #[error("cannot remove the last page")]
    LastItem,

    #[error("page name is empty")]
    InvalidName,

    #[error("page {0} already exists")]
    DuplicateId(PageId),

    #[error("a strip needs at least one page")]
    Empty,
}

/// Failures while resolving a drag source or drop target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("drag source {0} not found")]
    SourceNotFound(PageId),

    #[error("drop target {0:?} not found")]
    TargetNotFound(DropTarget),
}
