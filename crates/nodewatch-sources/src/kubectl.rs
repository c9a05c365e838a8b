//! `kubectl get nodes -o json` snapshot source.

use crate::errors::{fetch_error, SourceError};
use async_trait::async_trait;
use nodewatch_core::errors::Result;
use nodewatch_core::model::parse_node_list;
use nodewatch_core::{NodeState, SnapshotSource};
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct KubectlSource {
    program: String,
    kubeconfig: Option<PathBuf>,
    context: Option<String>,
}

impl KubectlSource {
    pub fn new(
        program: impl Into<String>,
        kubeconfig: Option<PathBuf>,
        context: Option<String>,
    ) -> Self {
        Self {
            program: program.into(),
            kubeconfig,
            context,
        }
    }

    /// Arguments passed to the program, global flags first
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(path) = &self.kubeconfig {
            args.push("--kubeconfig".into());
            args.push(path.clone().into_os_string());
        }
        if let Some(context) = &self.context {
            args.push("--context".into());
            args.push(context.into());
        }
        args.extend(["get", "nodes", "-o", "json"].map(OsString::from));
        args
    }

    async fn list(&self) -> std::result::Result<Vec<NodeState>, SourceError> {
        let output = Command::new(&self.program)
            .args(self.args())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_node_list(&output.stdout)?)
    }
}

#[async_trait]
impl SnapshotSource for KubectlSource {
    type State = NodeState;

    fn describe(&self) -> String {
        match &self.context {
            Some(context) => format!("{} (context {})", self.program, context),
            None => self.program.clone(),
        }
    }

    async fn fetch(&self) -> Result<Vec<NodeState>> {
        let nodes = self
            .list()
            .await
            .map_err(|e| fetch_error(&self.describe(), e))?;
        tracing::debug!(
            component = module_path!(),
            op = "fetch",
            source = %self.describe(),
            fetched = nodes.len(),
        );
        Ok(nodes)
    }
}
