//! Sweeping of cancellation marks whose request has long finished.

use chrono::{Duration, Utc};
use tracing::info;

use crate::registry::CancellationRegistry;

/// Default lifetime of a cancellation mark: 1 hour.
pub const DEFAULT_MARK_TTL: Duration = Duration::hours(1);

/// Remove marks older than `ttl`. Returns the number of marks removed.
pub fn cleanup_stale_marks(registry: &CancellationRegistry, ttl: Duration) -> usize {
    let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
        return 0;
    };
    let removed = registry
        .request_ids()
        .into_iter()
        .filter(|id| registry.remove_if_older(id, cutoff))
        .count();

    if removed > 0 {
        info!(removed, "swept stale cancellation marks");
    }
    removed
}

/// Sweep using a TTL in seconds (as configured).
pub fn cleanup_with_ttl_secs(registry: &CancellationRegistry, ttl_secs: u64) -> usize {
    let secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX).min(i64::MAX / 1_000);
    cleanup_stale_marks(registry, Duration::seconds(secs))
}
