//! Watch command
//!
//! Usage: nodewatch watch [--source kubectl|proxy|file] [--interval-ms <MS>]

use clap::{Args, ValueEnum};
use nodewatch_core::errors::{ExError, ExErrorKind, Result};
use nodewatch_core::watch::cancel::listen_for_interrupt;
use nodewatch_core::watch::emitter::WriterSink;
use nodewatch_core::{log_op_error, log_op_start, DiffLoop};
use nodewatch_core_types::Sensitive;
use nodewatch_sources::{
    build_source, default_kubeconfig_path, resolve_kubeconfig, SourceConfig, DEFAULT_PROXY_URL,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Run `kubectl get nodes -o json`
    Kubectl,
    /// GET /api/v1/nodes through `kubectl proxy`
    Proxy,
    /// Re-read a NodeList JSON file every cycle
    File,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Kubeconfig path (default: $KUBECONFIG, then $HOME/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Where node snapshots come from
    #[arg(long, value_enum, default_value_t = SourceKind::Kubectl)]
    pub source: SourceKind,

    /// kubectl binary
    #[arg(long, default_value = "kubectl")]
    pub kubectl: String,

    /// Base URL of the API proxy
    #[arg(long, default_value = DEFAULT_PROXY_URL)]
    pub proxy_url: String,

    /// Bearer token for the proxy source
    #[arg(long, env = "NODEWATCH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// NodeList JSON file for the file source
    #[arg(long, required_if_eq("source", "file"))]
    pub file: Option<PathBuf>,

    /// Pause between cycles in milliseconds
    #[arg(long, default_value_t = 250)]
    pub interval_ms: u64,
}

/// Execute watch command
///
/// Runs until interrupted; only returns on a fatal error.
pub fn execute(args: WatchArgs) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let period = Duration::from_millis(args.interval_ms);
    let config = source_config(args)?;

    runtime()?.block_on(watch(config, period))?;

    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(runtime_error)
}

fn runtime_error(err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("watch")
        .with_message(format!("cannot start async runtime: {}", err))
}

fn source_config(args: WatchArgs) -> Result<SourceConfig> {
    match args.source {
        SourceKind::Kubectl => Ok(SourceConfig::Kubectl {
            program: args.kubectl,
            kubeconfig: resolve_kubeconfig(
                args.kubeconfig,
                std::env::var_os("KUBECONFIG"),
                default_kubeconfig_path(),
            ),
            context: args.context,
        }),
        SourceKind::Proxy => Ok(SourceConfig::Proxy {
            base_url: args.proxy_url,
            token: args.token.map(Sensitive::new),
        }),
        SourceKind::File => {
            let path = args.file.ok_or_else(|| {
                ExError::new(ExErrorKind::Config)
                    .with_op("watch")
                    .with_message("--file is required with --source file")
            })?;
            Ok(SourceConfig::File { path })
        }
    }
}

async fn watch(config: SourceConfig, period: Duration) -> Result<()> {
    let started = Instant::now();
    listen_for_interrupt();

    let source = build_source(config)?;
    log_op_start!(
        "watch",
        source = %source.describe(),
        interval_ms = period.as_millis() as u64,
    );

    let mut diff_loop = DiffLoop::new(source, WriterSink::stdout()).with_period(period);
    match diff_loop.run().await {
        Ok(never) => match never {},
        Err(err) => {
            log_op_error!(
                "watch",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64,
                cycle = diff_loop.cycles_completed(),
            );
            Err(err)
        }
    }
}
