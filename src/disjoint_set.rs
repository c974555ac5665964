use crate::UnionFindError;
use num_traits::PrimInt;

/// The operations shared by every disjoint-set ("union-find") variant in this crate. Generic over
/// primitive integer vertex types.
///
/// Implementations partition a fixed universe of vertices `0..size` into disjoint components.
/// Components only ever merge; nothing splits them again. The variants differ in their cost
/// profile only, so any consumer that just needs membership queries can use them
/// interchangeably.
///
/// Mutation requires `&mut self`. The structures hold no internal synchronisation, so sharing one
/// between threads means wrapping it in a lock.
pub trait DisjointSet<T: PrimInt> {
    /// Creates a structure of `size` singleton components, one per vertex.
    ///
    /// # Parameters
    /// * `size` - the number of vertices. Must be at least one and representable by `T`.
    ///
    /// # Returns
    /// * A result that, if successful, contains the new structure. An `InvalidSize` error is
    ///   returned for a size of zero or a size whose vertices don't fit in `T`.
    fn with_size(size: usize) -> Result<Self, UnionFindError>
    where
        Self: Sized;

    /// Finds the root, or representative, of the component containing `vertex`.
    ///
    /// # Returns
    /// * A result that, if successful, contains the root vertex. An `OutOfRange` error is returned
    ///   if `vertex` is negative or not smaller than the size of the structure.
    fn find_root(&self, vertex: T) -> Result<T, UnionFindError>;

    /// Merges the components containing `a` and `b`. Does nothing if they are already connected.
    ///
    /// Both vertices are validated before anything is mutated, so a failed union leaves the
    /// structure untouched.
    fn union(&mut self, a: T, b: T) -> Result<(), UnionFindError>;

    /// Whether `a` and `b` are in the same component.
    fn connected(&self, a: T, b: T) -> Result<bool, UnionFindError> {
        Ok(self.find_root(a)? == self.find_root(b)?)
    }

    /// The number of vertices, fixed at construction.
    fn size(&self) -> usize;

    /// The number of disjoint components currently in the structure.
    fn components(&self) -> usize;
}
