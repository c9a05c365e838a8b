//! Kubeconfig location.
//!
//! Resolution order: an explicit path, then `KUBECONFIG` (left for the
//! client to interpret, since it may list several files), then
//! `$HOME/.kube/config`.

use std::ffi::OsString;
use std::path::PathBuf;

/// `<home>/.kube/config`, if the platform knows a home directory
pub fn default_kubeconfig_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}

/// Pick the kubeconfig path to hand to the client explicitly
///
/// `None` means "pass nothing": either `KUBECONFIG` is set and the client
/// reads it from the inherited environment, or there is no home directory
/// and the client falls back to its own defaults.
pub fn resolve_kubeconfig(
    explicit: Option<PathBuf>,
    env_kubeconfig: Option<OsString>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    if env_kubeconfig.is_some_and(|v| !v.is_empty()) {
        return None;
    }
    default
}
