//! Snapshot source that re-reads a saved `NodeList` document.
//!
//! Useful for replaying `kubectl get nodes -o json > nodes.json` captures;
//! editing the file between cycles shows up as changes.

use crate::errors::{fetch_error, SourceError};
use async_trait::async_trait;
use nodewatch_core::errors::Result;
use nodewatch_core::model::parse_node_list;
use nodewatch_core::{NodeState, SnapshotSource};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn list(&self) -> std::result::Result<Vec<NodeState>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(parse_node_list(&bytes)?)
    }
}

#[async_trait]
impl SnapshotSource for FileSource {
    type State = NodeState;

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<NodeState>> {
        let nodes = self
            .list()
            .await
            .map_err(|e| fetch_error(&self.describe(), e))?;
        tracing::debug!(
            component = module_path!(),
            op = "fetch",
            source = %self.path.display(),
            fetched = nodes.len(),
        );
        Ok(nodes)
    }
}
