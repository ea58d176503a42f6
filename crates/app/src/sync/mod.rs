//! View synchronization core.

pub mod config;
pub mod controller;
pub mod errors;
pub mod state;
pub mod token;

pub use config::{AuthPolicy, DataSource, ViewConfig};
pub use controller::{PendingWrite, ViewData, ViewHandle, ViewSyncController};
pub use errors::{MountError, SubmitError, WriteFailure};
pub use state::{AuthState, ViewEvent, ViewPhase, ViewState, reduce};
pub use token::{LivenessToken, TokenSource};
