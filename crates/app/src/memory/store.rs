//! In-memory realtime store and identity provider.

use std::{
    collections::VecDeque,
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::{
    channels::{
        AuthChannel, AuthListener, ChannelError, Identity, RemoteDataChannel, Snapshot,
        SnapshotListener, SubscriptionId,
    },
    memory::tree,
    paths::DataPath,
};

/// JSON document tree with realtime subscriptions and a signed-in identity.
///
/// Callbacks never run inside `subscribe`, `set` or `set_identity`. They are
/// queued and run by [`drain`](Self::drain), one event-loop tick at a time,
/// in the order the store produced them. Each subscription receives the
/// current value when it registers and a fresh snapshot whenever the value
/// at its path changes. Unsubscribing does not recall deliveries that are
/// already queued.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    root: Value,
    next_subscription: u64,
    data_listeners: FxHashMap<SubscriptionId, DataRegistration>,
    auth_listeners: FxHashMap<SubscriptionId, AuthListener>,
    identity: Option<Identity>,
    queue: VecDeque<Delivery>,
}

struct DataRegistration {
    path: DataPath,
    listener: SnapshotListener,
}

enum Delivery {
    Data {
        listener: SnapshotListener,
        snapshot: Snapshot,
    },
    Auth {
        listener: AuthListener,
        identity: Option<Identity>,
    },
}

impl StoreState {
    fn next_subscription(&mut self) -> SubscriptionId {
        self.next_subscription += 1;

        SubscriptionId::new(self.next_subscription)
    }

    fn snapshot(&self, path: &DataPath) -> Snapshot {
        Snapshot::new(path.clone(), tree::get(&self.root, path).cloned())
    }
}

impl Debug for MemoryStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let state = self.lock();

        f.debug_struct("MemoryStore")
            .field("root", &state.root)
            .field("identity", &state.identity)
            .field("data_listeners", &state.data_listeners.len())
            .field("auth_listeners", &state.auth_listeners.len())
            .field("queued", &state.queue.len())
            .finish_non_exhaustive()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value at `path`, queueing snapshots for every subscription
    /// whose value changed. `null` removes the node.
    pub fn set(&self, path: &DataPath, value: Value) {
        let mut state = self.lock();

        let watched: Vec<(DataPath, SnapshotListener, Option<Value>)> = state
            .data_listeners
            .values()
            .filter(|registration| registration.path.is_related(path))
            .map(|registration| {
                (
                    registration.path.clone(),
                    Arc::clone(&registration.listener),
                    tree::get(&state.root, &registration.path).cloned(),
                )
            })
            .collect();

        tree::set(&mut state.root, path, value);

        for (watched_path, listener, before) in watched {
            let snapshot = state.snapshot(&watched_path);

            if snapshot.value != before {
                state.queue.push_back(Delivery::Data { listener, snapshot });
            }
        }
    }

    /// Current value at `path`.
    #[must_use]
    pub fn value_at(&self, path: &DataPath) -> Option<Value> {
        tree::get(&self.lock().root, path).cloned()
    }

    /// Sign a user in (`Some`) or out (`None`). Every call is delivered to
    /// every auth subscription, even when the identity is unchanged.
    pub fn set_identity(&self, identity: Option<Identity>) {
        let mut state = self.lock();

        state.identity.clone_from(&identity);

        let listeners: Vec<AuthListener> = state.auth_listeners.values().cloned().collect();

        for listener in listeners {
            state.queue.push_back(Delivery::Auth {
                listener,
                identity: identity.clone(),
            });
        }
    }

    /// Run the oldest queued callback. Returns false when the queue is empty.
    pub fn run_next(&self) -> bool {
        // Release the lock before the callback runs; callbacks may call back
        // into the store.
        let next = self.lock().queue.pop_front();

        match next {
            Some(Delivery::Data { listener, snapshot }) => listener(snapshot),
            Some(Delivery::Auth { listener, identity }) => listener(identity),
            None => return false,
        }

        true
    }

    /// Run queued callbacks until the queue is empty, including any queued
    /// by the callbacks themselves. Returns how many ran.
    pub fn drain(&self) -> usize {
        let mut delivered = 0;

        while self.run_next() {
            delivered += 1;
        }

        delivered
    }

    /// Number of live data subscriptions.
    #[must_use]
    pub fn data_subscriptions(&self) -> usize {
        self.lock().data_listeners.len()
    }

    /// Number of live auth subscriptions.
    #[must_use]
    pub fn auth_subscriptions(&self) -> usize {
        self.lock().auth_listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RemoteDataChannel for MemoryStore {
    fn subscribe(&self, path: &DataPath, listener: SnapshotListener) -> SubscriptionId {
        let mut state = self.lock();
        let subscription = state.next_subscription();
        let snapshot = state.snapshot(path);

        state.data_listeners.insert(
            subscription,
            DataRegistration {
                path: path.clone(),
                listener: Arc::clone(&listener),
            },
        );
        state.queue.push_back(Delivery::Data { listener, snapshot });

        debug!(%subscription, %path, "subscribed to data");

        subscription
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        if self.lock().data_listeners.remove(&subscription).is_some() {
            debug!(%subscription, "unsubscribed from data");
        }
    }

    async fn write(&self, path: &DataPath, value: Value) -> Result<(), ChannelError> {
        self.set(path, value);

        Ok(())
    }

    fn allocate_child(&self, collection: &DataPath) -> DataPath {
        collection.generated_child(Uuid::now_v7())
    }
}

impl AuthChannel for MemoryStore {
    fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let mut state = self.lock();
        let subscription = state.next_subscription();
        let identity = state.identity.clone();

        state
            .auth_listeners
            .insert(subscription, Arc::clone(&listener));
        state.queue.push_back(Delivery::Auth { listener, identity });

        debug!(%subscription, "subscribed to auth");

        subscription
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        if self.lock().auth_listeners.remove(&subscription).is_some() {
            debug!(%subscription, "unsubscribed from auth");
        }
    }
}
