//! Core types shared across nodewatch facilities
//!
//! This crate provides foundational types used by the error handling and
//! logging facilities and by the snapshot source adapters:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
