//! Rendering of node listings for human review

pub mod compare;

pub use compare::{comparable_nodes, render_node_comparison};
