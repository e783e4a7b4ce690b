//! Utility modules.

/// Date/time serialization helpers shared by the wire models.
pub mod datetime;

/// Log sanitization utilities to keep response bodies out of full debug logs.
pub mod log_sanitizer;
