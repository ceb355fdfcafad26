//! Undirected graph over the vertices of the triangulation.
//!
//! Nodes are the vertex indices that belong to at least one stored triangle;
//! edges are the triangles' 1-skeletons. The graph answers neighbour
//! enumeration queries and drives termination of the cavity walk.

use crate::core::collections::{FastHashMap, FastHashSet};
use crate::core::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// Undirected vertex graph.
///
/// # Examples
///
/// ```
/// use deltri::core::graph::VertexGraph;
///
/// let mut graph = VertexGraph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
/// assert!(graph.contains_edge(2, 1));
/// assert_eq!(graph.degree(2), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexGraph {
    neighbours: FastHashMap<VertexId, FastHashSet<VertexId>>,
}

impl VertexGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `v` exists as a node.
    pub fn add_point(&mut self, v: VertexId) {
        self.neighbours.entry(v).or_default();
    }

    /// Inserts the undirected edge `{u, v}`, creating both nodes if needed.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.neighbours.entry(u).or_default().insert(v);
        self.neighbours.entry(v).or_default().insert(u);
    }

    /// Removes the undirected edge `{u, v}`. Nodes stay, possibly isolated.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        if let Some(set) = self.neighbours.get_mut(&u) {
            set.remove(&v);
        }
        if let Some(set) = self.neighbours.get_mut(&v) {
            set.remove(&u);
        }
    }

    /// Removes `v` and every edge incident to it.
    pub fn remove_point(&mut self, v: VertexId) {
        if let Some(others) = self.neighbours.remove(&v) {
            for other in others {
                if let Some(set) = self.neighbours.get_mut(&other) {
                    set.remove(&v);
                }
            }
        }
    }

    /// Returns `true` when `v` is a node of the graph.
    #[must_use]
    pub fn contains_point(&self, v: VertexId) -> bool {
        self.neighbours.contains_key(&v)
    }

    /// Returns `true` when the undirected edge `{u, v}` is present.
    #[must_use]
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbours
            .get(&u)
            .is_some_and(|set| set.contains(&v))
    }

    /// Iterates over the neighbours of `v`.
    pub fn neighbours(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours
            .get(&v)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of neighbours of `v`.
    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbours.get(&v).map_or(0, FastHashSet::len)
    }

    /// Iterates over all nodes.
    pub fn points(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours.keys().copied()
    }

    /// Number of nodes.
    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.neighbours.len()
    }

    /// Removes isolated nodes. Idempotent.
    pub fn clear_empty_points(&mut self) {
        self.neighbours.retain(|_, set| !set.is_empty());
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }
}
