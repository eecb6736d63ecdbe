//! # recap-session
//!
//! Request lifecycle bookkeeping: which request ids were cancelled by their
//! client, and a cancellation predicate bound to one request id.

pub mod cleanup;
pub mod registry;

pub use cleanup::{cleanup_stale_marks, cleanup_with_ttl_secs, DEFAULT_MARK_TTL};
pub use registry::{CancellationRegistry, RequestCancellation};
