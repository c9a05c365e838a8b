//! KubectlSource against stand-in lister scripts.

#![cfg(unix)]

use nodewatch_core::errors::ExErrorKind;
use nodewatch_core::SnapshotSource;
use nodewatch_sources::KubectlSource;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[tokio::test]
async fn test_parses_lister_output() {
    let dir = TempDir::new().unwrap();
    let program = script(
        dir.path(),
        "fake-kubectl",
        r#"echo '{"items": [{"metadata": {"name": "n1"}}]}'"#,
    );
    let source = KubectlSource::new(program.to_string_lossy(), None, None);

    let nodes = source.fetch().await.unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id().as_str(), "n1");
}

#[tokio::test]
async fn test_passes_kubeconfig_and_context() {
    let dir = TempDir::new().unwrap();
    let args_file = dir.path().join("args");
    let program = script(
        dir.path(),
        "fake-kubectl",
        &format!(
            "echo \"$@\" > {}\necho '{{\"items\": []}}'",
            args_file.display()
        ),
    );
    let source = KubectlSource::new(
        program.to_string_lossy(),
        Some(PathBuf::from("/tmp/kubeconfig")),
        Some("staging".to_string()),
    );

    source.fetch().await.unwrap();

    let args = fs::read_to_string(&args_file).unwrap();
    assert_eq!(
        args.trim(),
        "--kubeconfig /tmp/kubeconfig --context staging get nodes -o json"
    );
}

#[tokio::test]
async fn test_non_zero_exit_is_fetch_error_with_stderr() {
    let dir = TempDir::new().unwrap();
    let program = script(
        dir.path(),
        "fake-kubectl",
        "echo 'error: You must be logged in to the server (Unauthorized)' >&2\nexit 1",
    );
    let source = KubectlSource::new(program.to_string_lossy(), None, None);

    let err = source.fetch().await.unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Fetch);
    assert!(err.message().contains("Unauthorized"));
}

#[tokio::test]
async fn test_missing_program_is_fetch_error() {
    let source = KubectlSource::new("/nonexistent/kubectl-for-nodewatch-tests", None, None);

    let err = source.fetch().await.unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Fetch);
    assert!(err.message().contains("failed to run"));
}
