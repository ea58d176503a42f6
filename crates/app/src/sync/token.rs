//! Liveness tokens guarding subscription callbacks.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Issues [`LivenessToken`]s and revokes all of them at once.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    epoch: Arc<AtomicU64>,
}

impl TokenSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that stays live until the next [`revoke`](Self::revoke).
    #[must_use]
    pub fn issue(&self) -> LivenessToken {
        LivenessToken {
            epoch: Arc::clone(&self.epoch),
            issued_at: self.epoch.load(Ordering::Acquire),
        }
    }

    /// Invalidate every token issued so far.
    pub fn revoke(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

/// Checked by a callback before it touches view state.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    epoch: Arc<AtomicU64>,
    issued_at: u64,
}

impl LivenessToken {
    /// False once the issuing source has been revoked.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.epoch.load(Ordering::Acquire) == self.issued_at
    }
}
