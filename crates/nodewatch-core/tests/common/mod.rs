use async_trait::async_trait;
use nodewatch_core::errors::{ExError, ExErrorKind, Result};
use nodewatch_core::{NodeState, SnapshotSource};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Snapshot source that replays a fixed script of fetch results
///
/// Fetching past the end of the script fails with `Fetch`.
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<NodeState>>>>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<NodeState>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }

    /// A script of successful snapshots only
    pub fn snapshots(snapshots: Vec<Vec<NodeState>>) -> Self {
        Self::new(snapshots.into_iter().map(Ok).collect())
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    type State = NodeState;

    fn describe(&self) -> String {
        "scripted".to_string()
    }

    async fn fetch(&self) -> Result<Vec<NodeState>> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ExError::new(ExErrorKind::Fetch).with_message("script exhausted")))
    }
}

/// Node object with a name and an arbitrary `status.phase`-like marker
#[allow(dead_code)]
pub fn node(name: &str, state: &str) -> NodeState {
    NodeState::new(name, node_object(name, state))
}

#[allow(dead_code)]
pub fn node_object(name: &str, state: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Node",
        "metadata": {"name": name, "labels": {"kubernetes.io/hostname": name}},
        "status": {"state": state}
    })
}

/// The detail line a node is expected to produce
#[allow(dead_code)]
pub fn detail(name: &str, state: &str) -> String {
    nodewatch_core::fingerprint::fingerprint(&node_object(name, state)).unwrap()
}
