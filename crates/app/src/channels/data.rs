//! Realtime document store capability.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::{
    channels::{ChannelError, SubscriptionId},
    paths::DataPath,
};

/// Full current value at a subscribed path.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub path: DataPath,

    /// `None` when nothing is stored at `path`.
    pub value: Option<Value>,
}

impl Snapshot {
    /// Build a snapshot, folding JSON `null` into absence.
    #[must_use]
    pub fn new(path: DataPath, value: Option<Value>) -> Self {
        Self {
            path,
            value: value.filter(|value| !value.is_null()),
        }
    }

    /// True when something is stored at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }
}

/// Callback invoked with every snapshot delivered for a subscription.
pub type SnapshotListener = Arc<dyn Fn(Snapshot) + Send + Sync>;

/// Realtime document store reachable by path.
#[automock]
#[async_trait]
pub trait RemoteDataChannel: Send + Sync {
    /// Start delivering snapshots of `path` to `listener`, beginning with the
    /// current value.
    fn subscribe(&self, path: &DataPath, listener: SnapshotListener) -> SubscriptionId;

    /// Stop delivering to a subscription. Unknown ids are ignored.
    fn unsubscribe(&self, subscription: SubscriptionId);

    /// Replace the value at `path`.
    async fn write(&self, path: &DataPath, value: Value) -> Result<(), ChannelError>;

    /// Reserve a fresh, unique child location below `collection`.
    fn allocate_child(&self, collection: &DataPath) -> DataPath;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_snapshot_is_absent() {
        let snapshot = Snapshot::new(DataPath::root(), Some(Value::Null));

        assert!(!snapshot.exists(), "null should read as absent");
    }

    #[test]
    fn value_snapshot_exists() {
        let snapshot = Snapshot::new(DataPath::root(), Some(json!({ "a": 1 })));

        assert!(snapshot.exists(), "object should read as present");
    }
}
