use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that can end a nodewatch process is classified by one of
/// these kinds. Each kind maps to a stable error code that is logged with
/// the fatal `end_error` event and can be matched on in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Snapshot acquisition
    /// The snapshot source could not produce a snapshot
    Fetch,
    /// The source answered, but the payload is not a usable node list
    InvalidSnapshot,

    // Fingerprinting
    Serialization,

    // Bootstrap
    Config,

    // Integration/IO
    Io,

    /// The process could not set itself up (e.g. no async runtime)
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Fetch => "ERR_FETCH",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context
/// (operation, node, source, free-form message) for the single fatal report.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<String>,
    source_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            source_name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node identifier context
    pub fn with_node_id(mut self, id: impl Into<String>) -> Self {
        self.node_id = Some(id.into());
        self
    }

    /// Name the snapshot source that produced the error
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the node identifier context, if any
    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    /// Get the snapshot source name, if any
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = &self.node_id {
            write!(f, " (node_id: {})", node_id)?;
        }
        if let Some(source_name) = &self.source_name {
            write!(f, " (source: {})", source_name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised while turning fetched data into node states
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    /// The payload is not a JSON object with an `items` array
    #[error("Snapshot is not a node list: {reason}")]
    NotANodeList { reason: String },

    /// A node object has no string `metadata.name`
    #[error("Node at index {index} has no metadata.name")]
    MissingName { index: usize },

    /// A node state could not be encoded deterministically
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<NodeError> for ExError {
    fn from(err: NodeError) -> Self {
        match err {
            NodeError::NotANodeList { reason } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("parse_node_list")
                .with_message(format!("Snapshot is not a node list: {}", reason)),

            NodeError::MissingName { index } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("parse_node_list")
                .with_message(format!("Node at index {} has no metadata.name", index)),

            NodeError::Serialization { message } => ExError::new(ExErrorKind::Serialization)
                .with_op("fingerprint")
                .with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to NodeError
impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from serde_json::Error to ExError
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Fetch, "ERR_FETCH"),
            (ExErrorKind::InvalidSnapshot, "ERR_INVALID_SNAPSHOT"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::Config, "ERR_CONFIG"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Fetch)
            .with_op("fetch")
            .with_source_name("kubectl")
            .with_message("exit status 1");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_FETCH]"));
        assert!(rendered.contains("in operation 'fetch'"));
        assert!(rendered.contains("exit status 1"));
        assert!(rendered.contains("(source: kubectl)"));
    }

    #[test]
    fn test_missing_name_maps_to_invalid_snapshot() {
        let err: ExError = NodeError::MissingName { index: 3 }.into();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
        assert!(err.message().contains("index 3"));
    }

    #[test]
    fn test_serde_json_error_maps_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ExError = json_err.into();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.op(), Some("fingerprint"));
    }
}
