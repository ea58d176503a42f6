//! Console errors.

use std::{io, path::PathBuf};

use marketplace_app::sync::{MountError, SubmitError, WriteFailure};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
pub(crate) enum ConsoleError {
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    #[error("failed to read fixture {}: {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse fixture: {0}")]
    FixtureParse(#[source] serde_norway::Error),

    #[error("failed to open page: {0}")]
    Mount(#[from] MountError),

    #[error("product not submitted: {0}")]
    Submit(#[from] SubmitError),

    #[error("{0}")]
    Write(#[from] WriteFailure),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
