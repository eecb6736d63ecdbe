use std::sync::atomic::{AtomicUsize, Ordering};

use recap_core::traits::ICancellation;

/// Reports cancellation from the `n`-th check onwards (1-based); `n = 0`
/// never fires.
#[derive(Debug)]
pub struct CountdownCancellation {
    fire_at: usize,
    checks: AtomicUsize,
}

impl CountdownCancellation {
    pub fn fire_at(n: usize) -> Self {
        Self {
            fire_at: n,
            checks: AtomicUsize::new(0),
        }
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl ICancellation for CountdownCancellation {
    fn is_cancelled(&self) -> bool {
        let n = self.checks.fetch_add(1, Ordering::SeqCst) + 1;
        self.fire_at != 0 && n >= self.fire_at
    }
}
