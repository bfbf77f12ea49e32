//! HTTP middleware for request processing.
//!
//! Provides observability and request deadline layers.

pub mod timeout;
pub mod tracing;
