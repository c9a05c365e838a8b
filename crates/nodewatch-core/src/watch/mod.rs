//! Snapshot-diff watch loop.
//!
//! ```ignore
//! use nodewatch_core::watch::{listen_for_interrupt, DiffLoop, WriterSink};
//!
//! listen_for_interrupt();
//! let mut diff_loop = DiffLoop::new(source, WriterSink::stdout());
//! let err = diff_loop.run().await.unwrap_err();
//! ```
//!
//! ## Guarantees
//!
//! - One cycle at a time; all ledger writes of a cycle happen before any of
//!   its output.
//! - A failed fetch or fingerprint ends the loop before the cycle writes
//!   anything, leaving the ledger as of the last completed cycle.
//! - A `---` separator opens the first cycle, and opens every later cycle
//!   whose predecessor emitted at least one record.

pub mod cancel;
pub mod diff_loop;
pub mod emitter;
pub mod source;

pub use cancel::{listen_for_interrupt, spawn_cancellation_listener};
pub use diff_loop::{CycleReport, DiffLoop, DEFAULT_CYCLE_PERIOD, SEPARATOR};
pub use emitter::{LineSink, MemorySink, WriterSink};
pub use source::{ObservedState, SnapshotSource};
