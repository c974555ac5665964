use thiserror::Error;

/// Possible errors that arise from constructing or querying a disjoint-set structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionFindError {
    /// A vertex was negative or not smaller than the size of the structure.
    #[error("Out of range: {0}")]
    OutOfRange(String),
    /// The structure was constructed with a size of zero, or a size the index type can't hold.
    #[error("Invalid size: {0}")]
    InvalidSize(String),
}
