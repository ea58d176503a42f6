//! View synchronization errors.

use thiserror::Error;
use tokio::runtime::TryCurrentError;

use crate::{
    channels::ChannelError,
    domain::products::ValidationError,
    paths::{DataPath, PathError},
};

/// Raised when a view cannot be pointed at its data path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("route parameter {0:?} is missing")]
    MissingRouteParam(String),

    #[error("invalid data path")]
    InvalidPath(#[from] PathError),

    #[error("view is no longer mounted")]
    Unmounted,
}

/// Raised by `submit` before any write is attempted.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid product")]
    Validation(#[from] ValidationError),

    #[error("view does not accept submissions")]
    ReadOnlyView,

    #[error("view is no longer mounted")]
    Unmounted,

    #[error("store allocated an unusable location: {0}")]
    InvalidAllocation(DataPath),

    #[error("failed to encode product")]
    Encode(#[source] serde_json::Error),

    #[error("no async runtime to issue the write on")]
    NoRuntime(#[from] TryCurrentError),
}

/// The store failed a submitted write. Not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write {path}")]
pub struct WriteFailure {
    pub path: DataPath,

    #[source]
    pub source: ChannelError,
}
