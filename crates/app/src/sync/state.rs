//! View state and the reducer that folds channel events into it.

use crate::{channels::Identity, sync::config::AuthPolicy};

/// Latest identity observed by a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// No auth event has arrived yet.
    #[default]
    Unknown,

    /// The last auth event carried an identity.
    SignedIn(Identity),

    /// The last auth event carried no identity.
    SignedOut,
}

impl AuthState {
    /// The signed-in identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::Unknown | Self::SignedOut => None,
        }
    }
}

impl From<Option<Identity>> for AuthState {
    fn from(identity: Option<Identity>) -> Self {
        identity.map_or(Self::SignedOut, Self::SignedIn)
    }
}

/// Everything a renderer needs for one view instance.
///
/// `loading` stays true until the first snapshot for the current data path
/// arrives and is raised again whenever that path changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    /// Latest identity seen by the auth subscription.
    pub identity: AuthState,

    /// Data from the latest snapshot, `None` until one arrives.
    pub data: Option<T>,

    pub loading: bool,
}

impl<T> ViewState<T> {
    /// Initial state; `awaiting_data` is false for views without a data source.
    #[must_use]
    pub const fn new(awaiting_data: bool) -> Self {
        Self {
            identity: AuthState::Unknown,
            data: None,
            loading: awaiting_data,
        }
    }

    /// Where the view stands under `policy`.
    #[must_use]
    pub fn phase(&self, policy: &AuthPolicy) -> ViewPhase {
        let required = policy.is_required();

        match self.identity {
            AuthState::SignedOut if required => ViewPhase::Unauthenticated,
            AuthState::Unknown if required => ViewPhase::AwaitingAuthAndData,
            _ if self.loading => ViewPhase::AwaitingAuthAndData,
            _ => ViewPhase::Ready,
        }
    }
}

/// Coarse lifecycle position of a mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Identity or first snapshot still outstanding.
    AwaitingAuthAndData,

    /// Data is present and the identity satisfies the policy.
    Ready,

    /// Signed out on a view that requires sign-in.
    Unauthenticated,
}

/// Partial update delivered to [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent<T> {
    /// The identity provider reported a change.
    Auth(Option<Identity>),

    /// Snapshot decoded for the current path. Replaces, never merges.
    Data(T),

    /// The data path changed; previous data no longer applies.
    Rekeyed { awaiting_data: bool },
}

/// Fold one event into the view state.
pub fn reduce<T>(state: &mut ViewState<T>, event: ViewEvent<T>) {
    match event {
        ViewEvent::Auth(identity) => state.identity = identity.into(),
        ViewEvent::Data(data) => {
            state.data = Some(data);
            state.loading = false;
        }
        ViewEvent::Rekeyed { awaiting_data } => {
            state.data = None;
            state.loading = awaiting_data;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::paths::Route;

    use super::*;

    fn required() -> AuthPolicy {
        AuthPolicy::Required {
            redirect: Route::new("/login"),
        }
    }

    #[test]
    fn data_replaces_and_clears_loading() {
        let mut state = ViewState::new(true);

        for value in [1, 2, 3] {
            reduce(&mut state, ViewEvent::Data(value));
        }

        assert_eq!(state.data, Some(3), "last snapshot should win");
        assert!(!state.loading, "loading should clear on data");
    }

    #[test]
    fn rekey_resets_loading_and_data() {
        let mut state = ViewState::new(true);

        reduce(&mut state, ViewEvent::Data("a"));
        reduce(&mut state, ViewEvent::Rekeyed { awaiting_data: true });

        assert_eq!(state.data, None);
        assert!(state.loading, "loading should be raised after rekey");
    }

    #[test]
    fn auth_events_update_identity() {
        let mut state: ViewState<()> = ViewState::new(false);

        reduce(&mut state, ViewEvent::Auth(Some(Identity::new("u1"))));
        assert_eq!(state.identity.identity(), Some(&Identity::new("u1")));

        reduce(&mut state, ViewEvent::Auth(None));
        assert_eq!(state.identity, AuthState::SignedOut);
    }

    #[test]
    fn phase_tracks_auth_and_loading() {
        let mut state = ViewState::new(true);

        assert_eq!(state.phase(&required()), ViewPhase::AwaitingAuthAndData);

        reduce(&mut state, ViewEvent::Data(1));
        assert_eq!(
            state.phase(&required()),
            ViewPhase::AwaitingAuthAndData,
            "required auth has not resolved yet"
        );
        assert_eq!(state.phase(&AuthPolicy::Optional), ViewPhase::Ready);

        reduce(&mut state, ViewEvent::Auth(None));
        assert_eq!(state.phase(&required()), ViewPhase::Unauthenticated);
        assert_eq!(
            state.phase(&AuthPolicy::Optional),
            ViewPhase::Ready,
            "optional views ignore sign-out"
        );

        reduce(&mut state, ViewEvent::Auth(Some(Identity::new("u1"))));
        assert_eq!(state.phase(&required()), ViewPhase::Ready);
    }

    #[test]
    fn signed_out_wins_over_loading() {
        let mut state: ViewState<u8> = ViewState::new(true);

        reduce(&mut state, ViewEvent::Auth(None));

        assert_eq!(state.phase(&required()), ViewPhase::Unauthenticated);
    }
}
