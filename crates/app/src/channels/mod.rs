//! Capabilities the view core consumes from the outside world.
//!
//! The realtime store, the identity provider and the router are all
//! collaborators owned elsewhere; views only see them through these traits
//! so they can be swapped for the in-memory store or for mocks.

mod auth;
mod data;
mod errors;
mod navigation;

pub use auth::*;
pub use data::*;
pub use errors::ChannelError;
pub use navigation::*;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Registration handle returned by a channel's `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wrap a channel-assigned registration number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "sub-{}", self.0)
    }
}
