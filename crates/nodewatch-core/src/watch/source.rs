use crate::errors::Result;
use crate::model::{NodeId, NodeState};
use async_trait::async_trait;
use serde::Serialize;

/// One entry of a snapshot, keyed by node and fingerprinted whole
pub trait ObservedState: Serialize + Send {
    fn node_id(&self) -> &NodeId;
}

impl ObservedState for NodeState {
    fn node_id(&self) -> &NodeId {
        self.id()
    }
}

/// Produces the complete current set of node states
///
/// Implementations return a full, consistent snapshot or fail; there is no
/// partial result.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    type State: ObservedState;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;

    /// Fetch the current snapshot
    ///
    /// # Errors
    ///
    /// `Fetch` when no snapshot could be obtained, `InvalidSnapshot` when the
    /// payload is not a usable node list.
    async fn fetch(&self) -> Result<Vec<Self::State>>;
}

#[async_trait]
impl<T: SnapshotSource + ?Sized> SnapshotSource for Box<T> {
    type State = T::State;

    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn fetch(&self) -> Result<Vec<Self::State>> {
        (**self).fetch().await
    }
}
