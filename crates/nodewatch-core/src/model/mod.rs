//! Node data model
//!
//! A node is held as the full JSON object the cluster API returned, keyed by
//! its `metadata.name`.

pub mod node;

pub use node::{parse_node_list, parse_node_objects, NodeId, NodeState};
