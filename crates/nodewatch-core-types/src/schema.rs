//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the diff loop, the
//! snapshot sources and the error reporting path.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_SOURCE: &str = "source";

// Cycle accounting
pub const FIELD_CYCLE: &str = "cycle";
pub const FIELD_FETCHED: &str = "fetched";
pub const FIELD_EMITTED: &str = "emitted";
pub const FIELD_LEDGER_LEN: &str = "ledger_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
