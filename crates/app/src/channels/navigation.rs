//! Router capability.

use mockall::automock;

use crate::paths::Route;

/// Router that owns the current route.
#[automock]
pub trait Navigator: Send + Sync {
    /// Ask the router to show `target`. Fire-and-forget; requesting the
    /// route already shown is a no-op for the router.
    fn request_navigation(&self, target: &Route);
}
