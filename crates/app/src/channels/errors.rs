//! Channel errors.

use thiserror::Error;

use crate::paths::DataPath;

/// Failure reported by the store for a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("write to {path} was rejected: {reason}")]
    Rejected { path: DataPath, reason: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
