use crate::validation::{self, VertexValidator};
use crate::{DisjointSet, UnionFindError};
use num_traits::PrimInt;

/// The "quick union" disjoint-set. Every vertex records its parent in a forest, and a root is its
/// own parent. A union links one root under the other in a single write, but finding a root walks
/// the tree, O(height). Trees are neither compressed nor balanced, so a chain of unions can
/// degrade the height, and with it every find, to O(n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickUnion<T = usize> {
    parent_of: Vec<T>,
    components: usize,
    validator: VertexValidator,
}

impl<T: PrimInt> QuickUnion<T> {
    /// Creates a quick union structure in which every vertex is its own root.
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
    ///use union_find_basics::{DisjointSet, QuickUnion};
    ///
    ///let mut quick_union = QuickUnion::<u32>::new(4).unwrap();
    ///quick_union.union(0, 3).unwrap();
    ///quick_union.union(3, 2).unwrap();
    ///assert_eq!(quick_union.parents(), &[0, 1, 0, 0]);
    ///assert_eq!(quick_union.find_root(2).unwrap(), 0);
    /// ```
    pub fn new(size: usize) -> Result<Self, UnionFindError> {
        let parent_of = validation::singletons(size)?;
        Ok(QuickUnion {
            parent_of,
            components: size,
            validator: VertexValidator::new(size),
        })
    }

    /// The parent recorded for each vertex, indexed by vertex.
    pub fn parents(&self) -> &[T] {
        &self.parent_of
    }
}

impl<T: PrimInt> DisjointSet<T> for QuickUnion<T> {
    fn with_size(size: usize) -> Result<Self, UnionFindError> {
        QuickUnion::new(size)
    }

    fn find_root(&self, vertex: T) -> Result<T, UnionFindError> {
        let mut current = vertex;
        let mut index = self.validator.validate_vertex(current)?;
        while self.parent_of[index] != current {
            current = self.parent_of[index];
            index = self.validator.validate_vertex(current)?;
        }
        Ok(current)
    }

    fn union(&mut self, a: T, b: T) -> Result<(), UnionFindError> {
        let root_a = self.find_root(a)?;
        let root_b = self.find_root(b)?;
        if root_a == root_b {
            return Ok(());
        }
        let index_b = self.validator.validate_vertex(root_b)?;
        self.parent_of[index_b] = root_a;
        self.components -= 1;
        Ok(())
    }

    fn size(&self) -> usize {
        self.parent_of.len()
    }

    fn components(&self) -> usize {
        self.components
    }
}
