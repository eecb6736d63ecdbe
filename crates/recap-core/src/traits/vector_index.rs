use crate::errors::RecapResult;
use crate::models::Neighbor;

/// Nearest-neighbour search over fixed-dimension vectors.
pub trait IVectorIndex: Send + Sync {
    /// Up to `k` neighbours of `query`, ascending by distance.
    fn search(&self, query: &[f32], k: usize) -> RecapResult<Vec<Neighbor>>;

    /// Dimension fixed when the index was built.
    fn dimensions(&self) -> usize;

    /// Number of indexed vectors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
