//! nodewatch core - snapshot-diff engine for cluster node state
//!
//! This crate provides:
//! - The node model (`NodeId`, `NodeState`) and `NodeList` parsing
//! - Deterministic fingerprinting of node state
//! - The change ledger
//! - The diff loop with cycle framing, line sinks and the interrupt listener
//! - The `SnapshotSource` seam implemented by `nodewatch-sources`
//! - HTML rendering of a node balance comparison
//! - The structured error and logging facilities

pub mod errors;
pub mod fingerprint;
pub mod ledger;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod watch;

pub use nodewatch_core_types::schema;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, NodeError, Result};
pub use ledger::{ChangeLedger, NodeRecord};
pub use model::{NodeId, NodeState};
pub use watch::{CycleReport, DiffLoop, LineSink, ObservedState, SnapshotSource};
