//! Change ledger.
//!
//! Remembers the last detail seen for every node identifier and whether that
//! detail changed in the most recent observation. The ledger only grows:
//! a node that disappears from later snapshots keeps its last record.

use crate::model::NodeId;
use std::collections::HashMap;

/// Ledger entry for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    detail: String,
    changed: bool,
}

impl NodeRecord {
    /// Detail of the most recent observation
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// True if the most recent observation was a first sighting or differed
    /// from the detail held before it
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Mapping from node identifier to its last observed record
///
/// Iteration order is unspecified.
#[derive(Debug, Default)]
pub struct ChangeLedger {
    records: HashMap<NodeId, NodeRecord>,
}

impl ChangeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation and return whether it counts as a change
    ///
    /// Absent identifiers are inserted as changed. For known identifiers the
    /// flag is recomputed against the stored detail, then the record is
    /// overwritten.
    pub fn observe(&mut self, id: NodeId, detail: String) -> bool {
        let changed = self
            .records
            .get(&id)
            .map_or(true, |previous| previous.detail != detail);
        self.records.insert(id, NodeRecord { detail, changed });
        changed
    }

    pub fn get(&self, id: &str) -> Option<&NodeRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.records.keys()
    }

    /// Every entry whose `changed` flag is set, across the whole ledger
    pub fn changed(&self) -> impl Iterator<Item = (&NodeId, &NodeRecord)> {
        self.records.iter().filter(|(_, record)| record.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    #[test]
    fn test_first_sighting_is_changed() {
        let mut ledger = ChangeLedger::new();
        assert!(ledger.observe(id("n1"), "a".to_string()));
        assert!(ledger.get("n1").unwrap().changed());
    }

    #[test]
    fn test_same_detail_is_unchanged() {
        let mut ledger = ChangeLedger::new();
        ledger.observe(id("n1"), "a".to_string());
        assert!(!ledger.observe(id("n1"), "a".to_string()));
        assert_eq!(ledger.changed().count(), 0);
    }

    #[test]
    fn test_different_detail_is_changed_and_overwrites() {
        let mut ledger = ChangeLedger::new();
        ledger.observe(id("n1"), "a".to_string());
        assert!(ledger.observe(id("n1"), "b".to_string()));
        assert_eq!(ledger.get("n1").unwrap().detail(), "b");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_unobserved_entry_keeps_flag() {
        let mut ledger = ChangeLedger::new();
        ledger.observe(id("gone"), "a".to_string());
        ledger.observe(id("stays"), "x".to_string());
        assert!(ledger.get("gone").unwrap().changed());
        assert!(ledger.contains("gone"));
    }
}
