//! nodewatch sources - snapshot source adapters
//!
//! Implementations of [`SnapshotSource`] that list cluster nodes:
//!
//! - [`KubectlSource`]: shells out to `kubectl get nodes -o json`
//! - [`ProxySource`]: reads `/api/v1/nodes` over HTTP (e.g. behind `kubectl proxy`)
//! - [`FileSource`]: re-reads a saved `NodeList` document on every fetch

pub mod errors;
pub mod file;
pub mod kubeconfig;
pub mod kubectl;
pub mod proxy;

pub use errors::SourceError;
pub use file::FileSource;
pub use kubeconfig::{default_kubeconfig_path, resolve_kubeconfig};
pub use kubectl::KubectlSource;
pub use proxy::{ProxySource, DEFAULT_PROXY_URL};

use nodewatch_core::errors::{ExError, ExErrorKind, Result};
use nodewatch_core::{NodeState, SnapshotSource};
use nodewatch_core_types::Sensitive;
use std::path::PathBuf;

/// Which adapter to build and how to reach the cluster with it
#[derive(Debug, Clone)]
pub enum SourceConfig {
    Kubectl {
        program: String,
        kubeconfig: Option<PathBuf>,
        context: Option<String>,
    },
    Proxy {
        base_url: String,
        token: Option<Sensitive<String>>,
    },
    File {
        path: PathBuf,
    },
}

/// Any adapter, boxed
pub type DynSource = Box<dyn SnapshotSource<State = NodeState>>;

/// Build the configured snapshot source
///
/// # Errors
///
/// Returns a `Config` error if the HTTP client for a proxy source cannot be
/// constructed.
pub fn build_source(config: SourceConfig) -> Result<DynSource> {
    let source: DynSource = match config {
        SourceConfig::Kubectl {
            program,
            kubeconfig,
            context,
        } => Box::new(KubectlSource::new(program, kubeconfig, context)),
        SourceConfig::Proxy { base_url, token } => {
            Box::new(ProxySource::new(base_url, token).map_err(|e| {
                ExError::new(ExErrorKind::Config)
                    .with_op("build_source")
                    .with_message(format!("cannot build HTTP client: {}", e))
            })?)
        }
        SourceConfig::File { path } => Box::new(FileSource::new(path)),
    };
    Ok(source)
}
