use crate::validation::{self, VertexValidator};
use crate::{DisjointSet, UnionFindError};
use num_traits::PrimInt;

/// The "quick find" disjoint-set. Every vertex records the root of its component directly, so
/// finding a root or checking connectivity is a single lookup, O(1). A union has to relabel every
/// vertex of the absorbed component, which means a scan of the whole array, O(n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind<T = usize> {
    root_of: Vec<T>,
    components: usize,
    validator: VertexValidator,
}

impl<T: PrimInt> QuickFind<T> {
    /// Creates a quick find structure in which every vertex is its own component.
    ///
    /// # Parameters
    /// * `size` - the number of vertices. Must be at least one and representable by `T`.
    ///
    /// # Returns
    /// * A result that, if successful, contains the new structure. An `InvalidSize` error is
    ///   returned for a size of zero or a size whose vertices don't fit in `T`.
    ///
    /// # Examples
    /// ```
    ///use union_find_basics::{DisjointSet, QuickFind};
    ///
    ///let mut quick_find = QuickFind::<u32>::new(4).unwrap();
    ///quick_find.union(0, 3).unwrap();
    ///assert_eq!(quick_find.roots(), &[0, 1, 2, 0]);
    ///assert_eq!(quick_find.components(), 3);
    /// ```
    pub fn new(size: usize) -> Result<Self, UnionFindError> {
        let root_of = validation::singletons(size)?;
        Ok(QuickFind {
            root_of,
            components: size,
            validator: VertexValidator::new(size),
        })
    }

    /// The root recorded for each vertex, indexed by vertex.
    pub fn roots(&self) -> &[T] {
        &self.root_of
    }
}

impl<T: PrimInt> DisjointSet<T> for QuickFind<T> {
    fn with_size(size: usize) -> Result<Self, UnionFindError> {
        QuickFind::new(size)
    }

    fn find_root(&self, vertex: T) -> Result<T, UnionFindError> {
        let index = self.validator.validate_vertex(vertex)?;
        Ok(self.root_of[index])
    }

    fn union(&mut self, a: T, b: T) -> Result<(), UnionFindError> {
        let root_a = self.find_root(a)?;
        let root_b = self.find_root(b)?;
        if root_a == root_b {
            return Ok(());
        }
        // Relabel the whole of b's component, wherever its members sit in the array
        for root in self.root_of.iter_mut().filter(|root| **root == root_b) {
            *root = root_a;
        }
        self.components -= 1;
        Ok(())
    }

    fn size(&self) -> usize {
        self.root_of.len()
    }

    fn components(&self) -> usize {
        self.components
    }
}
