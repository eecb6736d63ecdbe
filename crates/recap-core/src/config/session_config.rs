use serde::{Deserialize, Serialize};

use super::defaults;

/// Request lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cancellation marks older than this are swept by cleanup.
    pub cancelled_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cancelled_ttl_secs: defaults::DEFAULT_CANCELLED_TTL_SECS,
        }
    }
}
