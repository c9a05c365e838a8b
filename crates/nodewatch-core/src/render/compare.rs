//! Node balance comparison.
//!
//! Lays worker nodes out side by side (one column per node) so operators can
//! spot why an autoscaler does not consider two node groups similar: the
//! machine a node belongs to, its labels and its capacity.

use crate::model::node::ANNOTATION_MACHINE;
use crate::model::NodeState;
use serde_json::Value;
use std::collections::BTreeMap;

const NO_NAME: &str = "no name specified";

/// Select the nodes worth comparing: control-plane nodes are dropped and the
/// rest are ordered by name. Objects without a name are kept and sort under
/// a placeholder.
pub fn comparable_nodes(objects: Vec<Value>) -> Vec<NodeState> {
    let mut nodes: Vec<NodeState> = objects
        .into_iter()
        .map(|object| {
            let name = object
                .pointer("/metadata/name")
                .and_then(Value::as_str)
                .unwrap_or(NO_NAME)
                .to_string();
            NodeState::new(name, object)
        })
        .filter(|node| !node.is_control_plane())
        .collect();
    nodes.sort_by(|a, b| a.id().cmp(b.id()));
    nodes
}

/// Render the comparison table as a standalone HTML document
pub fn render_node_comparison(nodes: &[NodeState]) -> String {
    let mut rows = String::new();

    push_row(&mut rows, "name", nodes.iter().map(|n| escape(n.id().as_str())));
    push_row(
        &mut rows,
        "machine",
        nodes
            .iter()
            .map(|n| escape(n.annotation(ANNOTATION_MACHINE).unwrap_or_default())),
    );
    push_row(&mut rows, "labels", nodes.iter().map(|n| key_values(&n.labels())));
    push_row(
        &mut rows,
        "capacity",
        nodes.iter().map(|n| key_values(&n.capacity())),
    );

    format!(
        "<!doctype html>\n<html>\n  <body>\n    <table>\n        {}\n    </table>\n  </body>\n</html>\n",
        rows
    )
}

fn push_row(rows: &mut String, header: &str, cells: impl Iterator<Item = String>) {
    rows.push_str("<tr><th>");
    rows.push_str(header);
    rows.push_str("</th>");
    for cell in cells {
        rows.push_str("<td>");
        rows.push_str(&cell);
        rows.push_str("</td>");
    }
    rows.push_str("</tr>");
}

fn key_values(map: &BTreeMap<&str, &Value>) -> String {
    map.iter()
        .map(|(k, v)| format!("{}: {}<br/>", escape(k), escape(&display_value(v))))
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
