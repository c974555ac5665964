use crate::UnionFindError;
use num_traits::PrimInt;

/// Checks vertices against the size of a disjoint-set structure, converting them to positions in
/// its backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VertexValidator {
    size: usize,
}

impl VertexValidator {
    pub(crate) fn new(size: usize) -> Self {
        Self { size }
    }

    pub(crate) fn validate_vertex<T: PrimInt>(&self, vertex: T) -> Result<usize, UnionFindError> {
        if vertex < T::zero() {
            return Err(UnionFindError::OutOfRange(format!(
                "vertex {} is negative, must be within 0..{}",
                vertex.to_i128().unwrap_or(i128::MIN),
                self.size
            )));
        }
        // Non-negative primitive integers always fit in a u128
        let index = vertex.to_u128().unwrap_or(u128::MAX);
        if index >= self.size as u128 {
            return Err(UnionFindError::OutOfRange(format!(
                "vertex {index} exceeds the size of the structure ({})",
                self.size
            )));
        }
        Ok(index as usize)
    }
}

/// Builds the initial backing array in which every vertex is its own root, rejecting sizes that
/// are zero or that the index type can't represent.
pub(crate) fn singletons<T: PrimInt>(size: usize) -> Result<Vec<T>, UnionFindError> {
    if size == 0 {
        return Err(UnionFindError::InvalidSize(String::from(
            "a disjoint-set structure must contain at least one vertex",
        )));
    }
    if T::from(size - 1).is_none() {
        return Err(UnionFindError::InvalidSize(format!(
            "size {size} has vertices that can't be represented by the index type"
        )));
    }
    (0..size)
        .map(|vertex| {
            T::from(vertex).ok_or_else(|| {
                UnionFindError::InvalidSize(format!("vertex {vertex} can't be represented"))
            })
        })
        .collect()
}
