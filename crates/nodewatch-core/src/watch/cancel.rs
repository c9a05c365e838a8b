//! Interrupt handling.
//!
//! Cancellation is a hard stop: the listener ends the process from its own
//! task. The watch loop never polls for it, and no cycle gets to finish.

use std::future::Future;
use tokio::task::JoinHandle;

/// Spawn a task that runs `terminate` once `signal` resolves
///
/// If listening for the signal fails, the failure is logged and `terminate`
/// is never called.
pub fn spawn_cancellation_listener<F, T>(signal: F, terminate: T) -> JoinHandle<()>
where
    F: Future<Output = std::io::Result<()>> + Send + 'static,
    T: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(()) => {
                tracing::info!(
                    component = module_path!(),
                    op = "cancel",
                    event = crate::schema::EVENT_END,
                    "interrupt received, terminating"
                );
                terminate();
            }
            Err(err) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "cancel",
                    error = %err,
                    "unable to listen for interrupt"
                );
            }
        }
    })
}

/// Exit the process with status 0 on Ctrl-C
///
/// Must be called from within a tokio runtime.
pub fn listen_for_interrupt() -> JoinHandle<()> {
    spawn_cancellation_listener(tokio::signal::ctrl_c(), || std::process::exit(0))
}
