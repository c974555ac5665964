//! The two textbook variants of the disjoint-set, or union-find, data structure in Rust. Generic
//! over primitive integer vertex types.
//!
//! A disjoint-set tracks a partition of the vertices `0..size` into components, supporting merges
//! ("union") and same-component queries ("connected"). The two variants trade costs against each
//! other:
//!  1. [`QuickFind`] records the root of every vertex directly. Finding a root and checking
//!     connectivity are O(1), but a union scans the whole array, O(n); and
//!  2. [`QuickUnion`] records the parent of every vertex in a forest. A union is a single link
//!     after two finds, but a find walks the tree, which degrades to O(n) for a chain.
//!
//! Neither compresses paths nor balances trees, so those cost profiles hold exactly. Both
//! implement [`DisjointSet`] and can be swapped for one another behind it.
//!
//! # Examples
//! ```
//!use union_find_basics::{DisjointSet, QuickUnion};
//!
//!let mut quick_union = QuickUnion::<usize>::new(10).unwrap();
//!for (a, b) in [(1, 2), (2, 5), (5, 6), (6, 7), (3, 8), (8, 9)] {
//!    quick_union.union(a, b).unwrap();
//!}
//!assert!(quick_union.connected(1, 5).unwrap());
//!assert!(quick_union.connected(5, 7).unwrap());
//!assert!(!quick_union.connected(4, 9).unwrap());
//!
//!quick_union.union(9, 4).unwrap();
//!assert!(quick_union.connected(4, 9).unwrap());
//! ```
//!
//! # References
//! * [Sedgewick, R.; Wayne, K. Algorithms, 4th Edition, Section 1.5: Case Study: Union-Find.](https://algs4.cs.princeton.edu/15uf/)

pub use crate::disjoint_set::DisjointSet;
pub use crate::error::UnionFindError;
pub use crate::quick_find::QuickFind;
pub use crate::quick_union::QuickUnion;

mod disjoint_set;
mod error;
mod quick_find;
mod quick_union;
mod validation;
