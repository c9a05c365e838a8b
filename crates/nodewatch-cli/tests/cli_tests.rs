use std::io::Write;
use std::process::{Command, Stdio};
use std::thread::sleep;
use std::time::Duration;
use tempfile::TempDir;

const NODE_LIST: &str = r#"{
  "kind": "NodeList",
  "items": [
    {"metadata": {"name": "worker-b", "labels": {"zone": "b"}}, "status": {"capacity": {"cpu": "4"}}},
    {"metadata": {"name": "master-0", "labels": {"node-role.kubernetes.io/master": ""}}},
    {"metadata": {"name": "worker-a", "labels": {"zone": "a"}}, "status": {"capacity": {"cpu": "8"}}}
  ]
}"#;

fn nodewatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nodewatch"));
    cmd.env("RUST_LOG", "nodewatch=info");
    cmd
}

fn write_atomically(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let staged = dir.path().join(format!(".{}.tmp", name));
    let target = dir.path().join(name);
    std::fs::write(&staged, contents).unwrap();
    std::fs::rename(&staged, &target).unwrap();
    target
}

#[test]
fn test_compare_renders_workers_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_atomically(&dir, "nodes.json", NODE_LIST);

    let output = nodewatch().args(["compare", "--input"]).arg(&input).output().unwrap();

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(!html.contains("master-0"));
    let a = html.find("worker-a").unwrap();
    let b = html.find("worker-b").unwrap();
    assert!(a < b, "columns should be sorted by name");
}

#[test]
fn test_compare_reads_stdin_and_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("compare.html");

    let mut child = nodewatch()
        .args(["compare", "--output"])
        .arg(&out_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(NODE_LIST.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let html = std::fs::read_to_string(&out_path).unwrap();
    assert!(html.contains("zone: a<br/>"));
}

#[test]
fn test_compare_rejects_non_node_list() {
    let dir = TempDir::new().unwrap();
    let input = write_atomically(&dir, "bad.json", r#"{"items": 7}"#);

    let output = nodewatch().args(["compare", "--input"]).arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_INVALID_SNAPSHOT]"));
}

#[test]
fn test_watch_missing_file_exits_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    let output = nodewatch()
        .args(["watch", "--source", "file", "--file"])
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no separator before a failed fetch");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_FETCH"));
}

#[test]
fn test_watch_file_source_streams_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_atomically(
        &dir,
        "nodes.json",
        r#"{"items": [{"metadata": {"name": "n1"}, "ready": true}]}"#,
    );

    let mut child = nodewatch()
        .args(["watch", "--source", "file", "--interval-ms", "50", "--file"])
        .arg(&path)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    sleep(Duration::from_millis(800));
    write_atomically(
        &dir,
        "nodes.json",
        r#"{"items": [{"metadata": {"name": "n1"}, "ready": false}]}"#,
    );
    sleep(Duration::from_millis(800));
    child.kill().unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"---"));
    assert!(lines.contains(&r#"{"metadata":{"name":"n1"},"ready":true}"#));
    assert!(lines.contains(&r#"{"metadata":{"name":"n1"},"ready":false}"#));
}
