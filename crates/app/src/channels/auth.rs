//! Identity provider capability.

use std::sync::Arc;

use mockall::automock;

use crate::channels::SubscriptionId;

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub uid: String,
}

impl Identity {
    /// Identity for user `uid`.
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

/// Callback invoked on every auth-state change; `None` means signed out.
pub type AuthListener = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

/// Identity provider that reports sign-in and sign-out.
#[automock]
pub trait AuthChannel: Send + Sync {
    /// Start delivering auth state to `listener`, beginning with the current state.
    fn subscribe(&self, listener: AuthListener) -> SubscriptionId;

    /// Stop delivering to a subscription. Unknown ids are ignored.
    fn unsubscribe(&self, subscription: SubscriptionId);
}
