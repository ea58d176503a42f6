//! Navigator that records requested routes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{channels::Navigator, paths::Route};

/// Keeps a history of routes. A request for the route already at the top of
/// the history is ignored.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    history: Arc<Mutex<Vec<Route>>>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(route: Route) -> Self {
        Self {
            history: Arc::new(Mutex::new(vec![route])),
        }
    }

    /// Route shown now.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.lock().last().cloned()
    }

    /// Every route shown, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Route> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Route>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for HistoryNavigator {
    fn request_navigation(&self, target: &Route) {
        let mut history = self.lock();

        if history.last() != Some(target) {
            history.push(target.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_requests_are_idempotent() {
        let navigator = HistoryNavigator::starting_at(Route::new("/products/p1"));

        navigator.request_navigation(&Route::new("/login"));
        navigator.request_navigation(&Route::new("/login"));

        assert_eq!(
            navigator.history(),
            vec![Route::new("/products/p1"), Route::new("/login")]
        );
        assert_eq!(navigator.current(), Some(Route::new("/login")));
    }
}
