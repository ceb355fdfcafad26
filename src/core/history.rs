//! The history DAG used by the randomised-incremental construction.
//!
//! Nodes are arena-allocated in a [`SlotMap`]; each node stores the triangle
//! it was created for and the keys of its immediate replacements. A triangle
//! destroyed by a split or an edge flip gains the replacement triangles as
//! children; the leaves are exactly the current triangulation. Point
//! location descends from the root in expected `O(log n)` time under a
//! random insertion order.

use crate::core::collections::{FastHashMap, SmallBuffer};
use crate::core::triangle::Triangle;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use thiserror::Error;

slotmap::new_key_type! {
    /// Arena key of a history-DAG node.
    pub struct HistoryNodeKey;
}

/// Errors from history-DAG bookkeeping.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryError {
    /// A replacement named a triangle that is not a current leaf.
    #[error("triangle {triangle} is not a current leaf of the history DAG")]
    NotALeaf {
        /// The triangle that was expected to be a leaf.
        triangle: Triangle,
    },
}

/// One node of the history DAG.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryNode {
    triangle: Triangle,
    children: SmallBuffer<HistoryNodeKey, 4>,
}

/// The history DAG.
///
/// # Examples
///
/// ```
/// use deltri::core::history::HistoryDag;
/// use deltri::core::triangle::Triangle;
///
/// let root = Triangle::new(1, 2, 3);
/// let mut dag = HistoryDag::new(root);
/// assert!(dag.is_leaf(dag.root()));
///
/// let replacements = [Triangle::new(1, 2, 4), Triangle::new(2, 3, 4), Triangle::new(3, 1, 4)];
/// dag.record_replacement(&[root], &replacements).unwrap();
/// assert!(!dag.is_leaf(dag.root()));
/// assert_eq!(dag.children(dag.root()).len(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryDag {
    nodes: SlotMap<HistoryNodeKey, HistoryNode>,
    leaves: FastHashMap<Triangle, HistoryNodeKey>,
    root: HistoryNodeKey,
}

impl HistoryDag {
    /// Creates a DAG whose root is `root` (the seed triangle of the
    /// construction).
    #[must_use]
    pub fn new(root: Triangle) -> Self {
        let mut nodes = SlotMap::with_key();
        let key = nodes.insert(HistoryNode {
            triangle: root,
            children: SmallBuffer::new(),
        });
        let mut leaves = FastHashMap::default();
        leaves.insert(root, key);
        Self { nodes, leaves, root: key }
    }

    /// Key of the root node.
    #[inline]
    #[must_use]
    pub fn root(&self) -> HistoryNodeKey {
        self.root
    }

    /// The triangle stored at `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this DAG.
    #[must_use]
    pub fn triangle(&self, key: HistoryNodeKey) -> Triangle {
        self.nodes[key].triangle
    }

    /// The children of `key` (empty for leaves).
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this DAG.
    #[must_use]
    pub fn children(&self, key: HistoryNodeKey) -> &[HistoryNodeKey] {
        &self.nodes[key].children
    }

    /// Returns `true` when `key` has no children, i.e. its triangle belongs
    /// to the current triangulation.
    #[must_use]
    pub fn is_leaf(&self, key: HistoryNodeKey) -> bool {
        self.nodes[key].children.is_empty()
    }

    /// Returns `true` when `triangle` is a current leaf.
    #[must_use]
    pub fn is_current(&self, triangle: &Triangle) -> bool {
        self.leaves.contains_key(triangle)
    }

    /// Records that the triangles in `dead` were destroyed and replaced by
    /// the triangles in `born`.
    ///
    /// Every dead triangle gains every born triangle as a child; each born
    /// triangle gets a single shared node and becomes a current leaf.
    ///
    /// # Errors
    ///
    /// [`HistoryError::NotALeaf`] when a dead triangle is not a current
    /// leaf; the DAG is left unchanged in that case.
    pub fn record_replacement(
        &mut self,
        dead: &[Triangle],
        born: &[Triangle],
    ) -> Result<(), HistoryError> {
        let mut dead_keys: SmallBuffer<HistoryNodeKey, 4> = SmallBuffer::new();
        for triangle in dead {
            let key = self
                .leaves
                .get(triangle)
                .copied()
                .ok_or(HistoryError::NotALeaf { triangle: *triangle })?;
            dead_keys.push(key);
        }

        let mut born_keys: SmallBuffer<HistoryNodeKey, 4> = SmallBuffer::new();
        for triangle in born {
            let key = self.nodes.insert(HistoryNode {
                triangle: *triangle,
                children: SmallBuffer::new(),
            });
            born_keys.push(key);
            self.leaves.insert(*triangle, key);
        }

        for (triangle, key) in dead.iter().zip(&dead_keys) {
            self.leaves.remove(triangle);
            self.nodes[*key].children.extend(born_keys.iter().copied());
        }
        Ok(())
    }

    /// Number of nodes ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the DAG holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of current leaves.
    #[must_use]
    pub fn number_of_leaves(&self) -> usize {
        self.leaves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_starts_as_the_only_leaf() {
        let dag = HistoryDag::new(Triangle::new(1, 2, 3));
        assert_eq!(dag.len(), 1);
        assert_eq!(dag.number_of_leaves(), 1);
        assert!(dag.is_current(&Triangle::new(2, 3, 1)));
    }

    #[test]
    fn split_replaces_a_leaf_by_three() {
        let root = Triangle::new(1, 2, 3);
        let mut dag = HistoryDag::new(root);
        let born = [
            Triangle::new(1, 2, 4),
            Triangle::new(2, 3, 4),
            Triangle::new(3, 1, 4),
        ];
        dag.record_replacement(&[root], &born).unwrap();

        assert_eq!(dag.len(), 4);
        assert_eq!(dag.number_of_leaves(), 3);
        assert!(!dag.is_current(&root));
        for t in &born {
            assert!(dag.is_current(t));
        }
        assert_eq!(dag.children(dag.root()).len(), 3);
    }

    #[test]
    fn flip_shares_children_between_both_parents() {
        let root = Triangle::new(1, 2, 3);
        let mut dag = HistoryDag::new(root);
        let split = [
            Triangle::new(1, 2, 4),
            Triangle::new(2, 3, 4),
            Triangle::new(3, 1, 4),
        ];
        dag.record_replacement(&[root], &split).unwrap();

        let flipped = [Triangle::new(4, 1, 5), Triangle::new(4, 5, 2)];
        dag.record_replacement(&[split[0], split[1]], &flipped)
            .unwrap();

        let first = dag
            .children(dag.root())
            .iter()
            .copied()
            .find(|&k| dag.triangle(k) == split[0])
            .unwrap();
        let second = dag
            .children(dag.root())
            .iter()
            .copied()
            .find(|&k| dag.triangle(k) == split[1])
            .unwrap();
        assert_eq!(dag.children(first), dag.children(second));
        assert_eq!(dag.number_of_leaves(), 3);
    }

    #[test]
    fn replacing_a_non_leaf_fails_and_leaves_the_dag_intact() {
        let root = Triangle::new(1, 2, 3);
        let mut dag = HistoryDag::new(root);
        let err = dag
            .record_replacement(&[Triangle::new(7, 8, 9)], &[Triangle::new(1, 2, 9)])
            .unwrap_err();
        assert!(matches!(err, HistoryError::NotALeaf { .. }));
        assert_eq!(dag.len(), 1);
        assert_eq!(dag.number_of_leaves(), 1);
    }
}
