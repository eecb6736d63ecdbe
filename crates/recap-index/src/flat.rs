//! Exact nearest-neighbour search by squared Euclidean distance.

use rayon::prelude::*;
use recap_core::errors::{IndexError, RecapResult};
use recap_core::models::{Neighbor, SceneId};
use recap_core::traits::IVectorIndex;

/// Brute-force index storing rows contiguously. Row `i` belongs to `ids[i]`.
#[derive(Debug, Clone, Default)]
pub struct FlatL2Index {
    dims: usize,
    ids: Vec<SceneId>,
    data: Vec<f32>,
}

impl FlatL2Index {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            ids: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Append one vector for `id`.
    pub fn add(&mut self, id: SceneId, vector: &[f32]) -> RecapResult<()> {
        if vector.len() != self.dims {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims,
                actual: vector.len(),
            }
            .into());
        }
        self.ids.push(id);
        self.data.extend_from_slice(vector);
        Ok(())
    }

    pub fn ids(&self) -> &[SceneId] {
        &self.ids
    }

    /// Row-major vector data, `len() * dimensions()` values.
    pub fn raw(&self) -> &[f32] {
        &self.data
    }

    pub fn row(&self, position: usize) -> Option<&[f32]> {
        let start = position.checked_mul(self.dims)?;
        self.data.get(start..start + self.dims)
    }

    pub(crate) fn from_parts(dims: usize, ids: Vec<SceneId>, data: Vec<f32>) -> Self {
        Self { dims, ids, data }
    }
}

impl IVectorIndex for FlatL2Index {
    fn search(&self, query: &[f32], k: usize) -> RecapResult<Vec<Neighbor>> {
        if query.len() != self.dims {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims,
                actual: query.len(),
            }
            .into());
        }
        if k == 0 || self.ids.is_empty() || self.dims == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, f32)> = self
            .data
            .par_chunks_exact(self.dims)
            .enumerate()
            .map(|(pos, row)| (pos, squared_l2(row, query)))
            .collect();

        // Stable on ties: earlier rows win.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(pos, distance)| Neighbor {
                id: self.ids[pos],
                distance,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

pub(crate) fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> FlatL2Index {
        let mut idx = FlatL2Index::new(2);
        idx.add(10, &[0.0, 0.0]).unwrap();
        idx.add(11, &[1.0, 0.0]).unwrap();
        idx.add(12, &[3.0, 4.0]).unwrap();
        idx
    }

    #[test]
    fn search_returns_ascending_squared_distances() {
        let hits = index().search(&[0.0, 0.0], 3).unwrap();
        let ids: Vec<_> = hits.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert_eq!(hits[2].distance, 25.0);
    }

    #[test]
    fn k_larger_than_index_returns_everything() {
        assert_eq!(index().search(&[0.0, 0.0], 50).unwrap().len(), 3);
    }

    #[test]
    fn k_zero_is_empty() {
        assert!(index().search(&[0.0, 0.0], 0).unwrap().is_empty());
    }

    #[test]
    fn wrong_dimension_query_fails() {
        let err = index().search(&[0.0, 0.0, 0.0], 1).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }

    #[test]
    fn wrong_dimension_add_fails() {
        let mut idx = FlatL2Index::new(2);
        assert!(idx.add(1, &[1.0]).is_err());
        assert!(idx.is_empty());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut idx = FlatL2Index::new(1);
        idx.add(5, &[1.0]).unwrap();
        idx.add(3, &[-1.0]).unwrap();
        let ids: Vec<_> = idx.search(&[0.0], 2).unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![5, 3]);
    }
}
