use crate::errors::NodeError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Label marking a control-plane node on older clusters
pub const LABEL_ROLE_MASTER: &str = "node-role.kubernetes.io/master";
/// Label marking a control-plane node
pub const LABEL_ROLE_CONTROL_PLANE: &str = "node-role.kubernetes.io/control-plane";
/// Annotation linking an OpenShift node to its Machine
pub const ANNOTATION_MACHINE: &str = "machine.openshift.io/machine";

/// Unique, stable name of a node (`metadata.name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of one node as observed in one snapshot
///
/// Serializes as the raw node object; the identifier is derived from it and
/// is not serialized separately.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    id: NodeId,
    object: Value,
}

impl NodeState {
    /// Build a state from an explicit identifier and object
    pub fn new(id: impl Into<String>, object: Value) -> Self {
        Self {
            id: NodeId::new(id),
            object,
        }
    }

    /// Build a state from a node object, reading the identifier from
    /// `metadata.name`
    ///
    /// # Errors
    ///
    /// Returns `NodeError::MissingName` if the object has no string
    /// `metadata.name`.
    pub fn from_object(index: usize, object: Value) -> Result<Self, NodeError> {
        let name = object
            .pointer("/metadata/name")
            .and_then(Value::as_str)
            .ok_or(NodeError::MissingName { index })?
            .to_string();
        Ok(Self {
            id: NodeId(name),
            object,
        })
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn object(&self) -> &Value {
        &self.object
    }

    /// `metadata.labels`, empty when absent
    pub fn labels(&self) -> BTreeMap<&str, &Value> {
        string_keyed(&self.object, "/metadata/labels")
    }

    /// `status.capacity`, empty when absent
    pub fn capacity(&self) -> BTreeMap<&str, &Value> {
        string_keyed(&self.object, "/status/capacity")
    }

    /// Value of an annotation, if present and a string
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.object
            .pointer("/metadata/annotations")
            .and_then(|a| a.get(key))
            .and_then(Value::as_str)
    }

    /// Whether the node carries a control-plane role label
    pub fn is_control_plane(&self) -> bool {
        let labels = self.labels();
        [LABEL_ROLE_MASTER, LABEL_ROLE_CONTROL_PLANE]
            .iter()
            .any(|key| labels.get(key).is_some_and(|v| !v.is_null()))
    }
}

impl Serialize for NodeState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.object.serialize(serializer)
    }
}

fn string_keyed<'a>(object: &'a Value, pointer: &str) -> BTreeMap<&'a str, &'a Value> {
    object
        .pointer(pointer)
        .and_then(Value::as_object)
        .map(|map| map.iter().map(|(k, v)| (k.as_str(), v)).collect())
        .unwrap_or_default()
}

/// Parse a `NodeList` document into its raw item objects
///
/// A missing or `null` `items` field is an empty list.
///
/// # Errors
///
/// Returns `NodeError::NotANodeList` if the bytes are not JSON, the root is
/// not an object, or `items` is not an array.
pub fn parse_node_objects(bytes: &[u8]) -> Result<Vec<Value>, NodeError> {
    let root: Value = serde_json::from_slice(bytes).map_err(|e| NodeError::NotANodeList {
        reason: format!("invalid JSON: {}", e),
    })?;

    let Value::Object(mut map) = root else {
        return Err(NodeError::NotANodeList {
            reason: "root must be an object".to_string(),
        });
    };

    match map.remove("items") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(NodeError::NotANodeList {
            reason: format!("`items` must be an array, got {}", json_type(&other)),
        }),
    }
}

/// Parse a `NodeList` document into node states
///
/// # Errors
///
/// Returns `NodeError::NotANodeList` for a malformed document and
/// `NodeError::MissingName` for an item without `metadata.name`.
pub fn parse_node_list(bytes: &[u8]) -> Result<Vec<NodeState>, NodeError> {
    parse_node_objects(bytes)?
        .into_iter()
        .enumerate()
        .map(|(index, object)| NodeState::from_object(index, object))
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
