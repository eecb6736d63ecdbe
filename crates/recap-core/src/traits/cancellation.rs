/// Cooperative cancellation predicate polled at stage checkpoints.
pub trait ICancellation: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// A predicate that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl ICancellation for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> ICancellation for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_cancelled(&self) -> bool {
        self()
    }
}
