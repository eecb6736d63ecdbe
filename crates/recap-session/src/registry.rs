//! CancellationRegistry — concurrent per-request cancellation marks via DashMap.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use recap_core::traits::ICancellation;
use tracing::debug;

/// Thread-safe set of cancelled request ids, each with the time it was marked.
///
/// One registry per process, shared by every in-flight request. Cloning is
/// cheap and shares the underlying map.
#[derive(Clone, Default)]
pub struct CancellationRegistry {
    marks: Arc<DashMap<String, DateTime<Utc>>>,
}

impl CancellationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as cancelled. Marking twice keeps the first timestamp.
    pub fn mark_cancelled(&self, request_id: &str) {
        self.marks
            .entry(request_id.to_string())
            .or_insert_with(Utc::now);
        debug!(request_id, "request marked cancelled");
    }

    pub fn is_cancelled(&self, request_id: &str) -> bool {
        self.marks.contains_key(request_id)
    }

    /// Forget a request's mark. Returns whether a mark existed.
    pub fn clear(&self, request_id: &str) -> bool {
        self.marks.remove(request_id).is_some()
    }

    /// Atomically test and remove a mark. Exactly one caller observes `true`
    /// for each mark, however many race on the same id.
    pub fn take_cancelled(&self, request_id: &str) -> bool {
        self.clear(request_id)
    }

    /// When the request was marked, if it is.
    pub fn marked_at(&self, request_id: &str) -> Option<DateTime<Utc>> {
        self.marks.get(request_id).map(|r| *r.value())
    }

    /// Number of outstanding marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// All marked request ids.
    pub fn request_ids(&self) -> Vec<String> {
        self.marks.iter().map(|r| r.key().clone()).collect()
    }

    /// Cancellation predicate for a single request.
    pub fn for_request(&self, request_id: impl Into<String>) -> RequestCancellation {
        RequestCancellation {
            registry: self.clone(),
            request_id: request_id.into(),
        }
    }

    pub(crate) fn remove_if_older(&self, request_id: &str, cutoff: DateTime<Utc>) -> bool {
        self.marks
            .remove_if(request_id, |_, marked| *marked < cutoff)
            .is_some()
    }
}

impl std::fmt::Debug for CancellationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationRegistry")
            .field("marks", &self.marks.len())
            .finish()
    }
}

/// [`ICancellation`] bound to one request id in a shared registry.
#[derive(Debug, Clone)]
pub struct RequestCancellation {
    registry: CancellationRegistry,
    request_id: String,
}

impl RequestCancellation {
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl ICancellation for RequestCancellation {
    fn is_cancelled(&self) -> bool {
        self.registry.is_cancelled(&self.request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_then_clear() {
        let registry = CancellationRegistry::new();
        assert!(!registry.is_cancelled("r1"));
        registry.mark_cancelled("r1");
        assert!(registry.is_cancelled("r1"));
        assert!(registry.clear("r1"));
        assert!(!registry.is_cancelled("r1"));
        assert!(!registry.clear("r1"));
    }

    #[test]
    fn remarking_keeps_first_timestamp() {
        let registry = CancellationRegistry::new();
        registry.mark_cancelled("r1");
        let first = registry.marked_at("r1");
        registry.mark_cancelled("r1");
        assert_eq!(registry.marked_at("r1"), first);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn request_predicate_tracks_registry() {
        let registry = CancellationRegistry::new();
        let cancel = registry.for_request("r7");
        assert_eq!(cancel.request_id(), "r7");
        assert!(!cancel.is_cancelled());
        registry.mark_cancelled("r7");
        assert!(cancel.is_cancelled());
        registry.clear("r7");
        assert!(!cancel.is_cancelled());
    }
}
