//! View synchronization controller.
//!
//! A mounted view owns one auth subscription and at most one data
//! subscription. Both feed [`reduce`] through a `watch` channel that
//! renderers observe. The two streams are unordered relative to each other;
//! every callback checks a [`LivenessToken`] before touching state, so a
//! callback that fires after its subscription was cancelled is a no-op.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    future::Future,
    pin::Pin,
    sync::Arc,
};

use jiff::Timestamp;
use tokio::{runtime::Handle, sync::watch};
use tracing::{debug, info, warn};

use crate::{
    channels::{
        AuthChannel, AuthListener, ChannelError, Identity, Navigator, RemoteDataChannel,
        Snapshot, SnapshotListener, SubscriptionId,
    },
    domain::products::{ProductDraft, ProductId},
    paths::{DataPath, Route, RouteParams},
    sync::{
        config::{AuthPolicy, ViewConfig},
        errors::{MountError, SubmitError, WriteFailure},
        state::{ViewEvent, ViewPhase, ViewState, reduce},
        token::{LivenessToken, TokenSource},
    },
};

/// Data a view derives from each snapshot of its path.
pub trait ViewData: Send + Sync + 'static {
    /// Build the view's data from the full value at its path.
    fn from_snapshot(snapshot: &Snapshot) -> Self;
}

impl ViewData for () {
    fn from_snapshot(_snapshot: &Snapshot) -> Self {}
}

/// Outcome of a submitted write, resolved when the store answers.
///
/// The write is already in flight when `submit` returns; dropping this
/// future only discards the outcome.
pub type PendingWrite = Pin<Box<dyn Future<Output = Result<ProductId, WriteFailure>> + Send>>;

/// Mounts views against injected channels.
#[derive(Clone)]
pub struct ViewSyncController {
    data: Arc<dyn RemoteDataChannel>,
    auth: Arc<dyn AuthChannel>,
    navigator: Arc<dyn Navigator>,
}

impl Debug for ViewSyncController {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ViewSyncController").finish_non_exhaustive()
    }
}

impl ViewSyncController {
    /// Controller over the given store, identity provider and router.
    #[must_use]
    pub fn new(
        data: Arc<dyn RemoteDataChannel>,
        auth: Arc<dyn AuthChannel>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            data,
            auth,
            navigator,
        }
    }

    /// Mount a view and open its subscriptions.
    ///
    /// The auth subscription and the data subscription are opened
    /// immediately and independently; authentication is not a precondition
    /// for reading.
    ///
    /// # Errors
    ///
    /// Returns an error when the data path cannot be resolved from `params`.
    /// No subscription is opened in that case.
    pub fn mount<T: ViewData>(
        &self,
        config: ViewConfig,
        params: &RouteParams,
    ) -> Result<ViewHandle<T>, MountError> {
        let path = config.data.resolve(params)?;
        let (state, _) = watch::channel(ViewState::new(path.is_some()));

        let mut handle = ViewHandle {
            config,
            data: Arc::clone(&self.data),
            auth: Arc::clone(&self.auth),
            navigator: Arc::clone(&self.navigator),
            state: Arc::new(state),
            auth_tokens: TokenSource::new(),
            data_tokens: TokenSource::new(),
            auth_subscription: None,
            data_subscription: None,
            mounted: true,
        };

        let listener = handle.auth_listener();
        handle.auth_subscription = Some(self.auth.subscribe(listener));

        if let Some(path) = path {
            handle.subscribe_data(path);
        }

        info!(view = handle.config.name, "mounted view");

        Ok(handle)
    }
}

/// One mounted view instance. Dropping the handle unmounts the view.
pub struct ViewHandle<T: ViewData> {
    config: ViewConfig,
    data: Arc<dyn RemoteDataChannel>,
    auth: Arc<dyn AuthChannel>,
    navigator: Arc<dyn Navigator>,
    state: Arc<watch::Sender<ViewState<T>>>,
    auth_tokens: TokenSource,
    data_tokens: TokenSource,
    auth_subscription: Option<SubscriptionId>,
    data_subscription: Option<(SubscriptionId, DataPath)>,
    mounted: bool,
}

impl<T: ViewData> Debug for ViewHandle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ViewHandle")
            .field("view", &self.config.name)
            .field("auth_subscription", &self.auth_subscription)
            .field("data_subscription", &self.data_subscription)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<T: ViewData> ViewHandle<T> {
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Path of the live data subscription, if any.
    #[must_use]
    pub fn data_path(&self) -> Option<&DataPath> {
        self.data_subscription.as_ref().map(|(_, path)| path)
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.state.borrow().clone()
    }

    /// Receiver that wakes whenever the state changes.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }

    /// Lifecycle phase under the view's auth policy.
    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.state.borrow().phase(&self.config.auth)
    }

    /// Point the view at the data path for a new route.
    ///
    /// The old subscription is cancelled before the new one opens and the
    /// view goes back to loading until the new path delivers. Resolving to
    /// the current path changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error when the view is unmounted or the new path cannot be
    /// resolved. On a resolution error the current subscription is kept.
    pub fn set_route(&mut self, params: &RouteParams) -> Result<(), MountError> {
        if !self.mounted {
            return Err(MountError::Unmounted);
        }

        let path = self.config.data.resolve(params)?;

        if self.data_path() == path.as_ref() {
            return Ok(());
        }

        self.cancel_data();

        let awaiting_data = path.is_some();
        self.state
            .send_modify(|state| reduce(state, ViewEvent::Rekeyed { awaiting_data }));

        if let Some(path) = path {
            debug!(view = self.config.name, %path, "rekeyed view");
            self.subscribe_data(path);
        }

        Ok(())
    }

    /// Validate `draft` and write it to a fresh child of the configured
    /// collection. The write is spawned on the current tokio runtime before
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns an error, without writing anything, when the draft is invalid,
    /// the view cannot accept submissions or no runtime is available.
    pub fn submit(&self, draft: ProductDraft) -> Result<PendingWrite, SubmitError> {
        if !self.mounted {
            return Err(SubmitError::Unmounted);
        }

        let collection = self.config.writes.as_ref().ok_or(SubmitError::ReadOnlyView)?;

        let record = draft.validate()?.into_record(Timestamp::now());
        let value = serde_json::to_value(&record).map_err(SubmitError::Encode)?;
        let runtime = Handle::try_current()?;

        let path = self.data.allocate_child(collection);
        let id = match path.last_key() {
            Some(key)
                if collection.is_ancestor_of(&path)
                    && path.segments().len() == collection.segments().len() + 1 =>
            {
                ProductId::new(key)
            }
            _ => return Err(SubmitError::InvalidAllocation(path)),
        };

        let data = Arc::clone(&self.data);
        let target = path.clone();
        let view = self.config.name;

        let task = runtime.spawn(async move {
            let outcome = data.write(&target, value).await;

            match &outcome {
                Ok(()) => info!(view, path = %target, "created product"),
                Err(error) => warn!(view, path = %target, %error, "failed to create product"),
            }

            outcome
        });

        debug!(view, %path, "issued product write");

        Ok(Box::pin(async move {
            let source = match task.await {
                Ok(Ok(())) => return Ok(id),
                Ok(Err(source)) => source,
                Err(error) => ChannelError::Unavailable(error.to_string()),
            };

            Err(WriteFailure { path, source })
        }))
    }

    /// Ask the router to show `target`.
    pub fn navigate(&self, target: &Route) {
        self.navigator.request_navigation(target);
    }

    /// Cancel both subscriptions. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        self.mounted = false;
        self.auth_tokens.revoke();
        self.cancel_data();

        if let Some(subscription) = self.auth_subscription.take() {
            self.auth.unsubscribe(subscription);
        }

        info!(view = self.config.name, "unmounted view");
    }

    fn cancel_data(&mut self) {
        self.data_tokens.revoke();

        if let Some((subscription, path)) = self.data_subscription.take() {
            debug!(view = self.config.name, %path, "cancelled data subscription");
            self.data.unsubscribe(subscription);
        }
    }

    fn subscribe_data(&mut self, path: DataPath) {
        let listener = data_listener(
            self.config.name,
            self.data_tokens.issue(),
            Arc::clone(&self.state),
        );

        let subscription = self.data.subscribe(&path, listener);
        self.data_subscription = Some((subscription, path));
    }

    fn auth_listener(&self) -> AuthListener {
        let view = self.config.name;
        let token = self.auth_tokens.issue();
        let state = Arc::clone(&self.state);
        let navigator = Arc::clone(&self.navigator);
        let policy = self.config.auth.clone();

        Arc::new(move |identity: Option<Identity>| {
            let signed_out = identity.is_none();

            // Checked under the watch lock so an unmount cannot interleave.
            let applied = state.send_if_modified(|state| {
                if !token.is_live() {
                    return false;
                }

                reduce(state, ViewEvent::Auth(identity));

                true
            });

            if !applied {
                debug!(view, "dropped auth event for unmounted view");
                return;
            }

            // Issued on every signed-out event, not only on transitions.
            if signed_out && let AuthPolicy::Required { redirect } = &policy {
                debug!(view, %redirect, "redirecting signed-out visitor");
                navigator.request_navigation(redirect);
            }
        })
    }
}

fn data_listener<T: ViewData>(
    view: &'static str,
    token: LivenessToken,
    state: Arc<watch::Sender<ViewState<T>>>,
) -> SnapshotListener {
    Arc::new(move |snapshot: Snapshot| {
        let data = T::from_snapshot(&snapshot);

        let applied = state.send_if_modified(|state| {
            if !token.is_live() {
                return false;
            }

            reduce(state, ViewEvent::Data(data));

            true
        });

        if !applied {
            debug!(view, path = %snapshot.path, "dropped stale snapshot");
        }
    })
}

impl<T: ViewData> Drop for ViewHandle<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
