//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Failure raised while walking a view hierarchy.
///
/// Inside a scan these never reach the caller: they are caught at the
/// per-root boundary and written into that root's section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("view is detached: {0}")]
    Detached(String),

    #[error("cannot access child {index}: {reason}")]
    ChildAccess { index: usize, reason: String },

    #[error("{renderer} failed: {reason}")]
    Attribute {
        renderer: &'static str,
        reason: String,
    },

    #[error("cannot enumerate root views: {0}")]
    Discovery(String),

    #[error("{0}")]
    Panicked(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Failure loading a JSON hierarchy snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("view at {0} has an empty type name")]
    EmptyTypeName(String),
}
