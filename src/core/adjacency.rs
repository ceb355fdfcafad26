//! The adjacency map and its reverse: the two halves of the edge index.
//!
//! [`AdjacencyMap`] sends every directed edge `(i, j)` of every stored
//! triangle to the opposite vertex `k`, so that `(i, j, k)` is that triangle.
//! [`ReverseAdjacencyMap`] sends each vertex `k` to the set of directed edges
//! `(i, j)` it opposes. The two maps are mutual inverses on their non-empty
//! entries; [`crate::core::triangulation::Triangulation`] keeps them in sync.
//!
//! Deleting a triangle does not remove its adjacency keys: the entries are
//! overwritten with [`DEFAULT_ADJACENT_VALUE`], which lookups report as
//! "no entry". [`AdjacencyMap::clear_empty_keys`] sweeps those defaulted
//! entries out.

use crate::core::collections::{FastHashMap, FastHashSet};
use crate::core::vertex::{BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE, Edge, VertexId};
use serde::{Deserialize, Serialize};

/// Map from directed edges to the vertex that completes them into a stored
/// triangle.
///
/// # Examples
///
/// ```
/// use deltri::core::adjacency::AdjacencyMap;
/// use deltri::core::vertex::DEFAULT_ADJACENT_VALUE;
///
/// let mut adjacent = AdjacencyMap::new();
/// adjacent.set_edge(1, 2, 3);
/// assert_eq!(adjacent.get_edge(1, 2), 3);
/// assert_eq!(adjacent.get_edge(2, 1), DEFAULT_ADJACENT_VALUE);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMap {
    edges: FastHashMap<Edge, VertexId>,
}

impl AdjacencyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The vertex opposite the directed edge `(i, j)`, or
    /// [`DEFAULT_ADJACENT_VALUE`] when there is none.
    ///
    /// Never inserts a key.
    #[inline]
    #[must_use]
    pub fn get_edge(&self, i: VertexId, j: VertexId) -> VertexId {
        self.edges
            .get(&(i, j))
            .copied()
            .unwrap_or(DEFAULT_ADJACENT_VALUE)
    }

    /// Records that `(i, j, k)` is a stored triangle.
    #[inline]
    pub fn set_edge(&mut self, i: VertexId, j: VertexId, k: VertexId) {
        self.edges.insert((i, j), k);
    }

    /// Clears the entry for `(i, j)` by overwriting it with
    /// [`DEFAULT_ADJACENT_VALUE`]. The key stays in the map until
    /// [`Self::clear_empty_keys`] runs.
    #[inline]
    pub fn unset_edge(&mut self, i: VertexId, j: VertexId) {
        if let Some(value) = self.edges.get_mut(&(i, j)) {
            *value = DEFAULT_ADJACENT_VALUE;
        }
    }

    /// Returns `true` when the directed edge `(i, j)` belongs to a stored
    /// triangle or carries a boundary mark.
    #[inline]
    #[must_use]
    pub fn edge_exists(&self, i: VertexId, j: VertexId) -> bool {
        self.get_edge(i, j) != DEFAULT_ADJACENT_VALUE
    }

    /// Returns `true` when `(i, j)` is marked as a hull edge, i.e. its entry
    /// is [`BOUNDARY_INDEX`].
    #[inline]
    #[must_use]
    pub fn is_boundary_edge(&self, i: VertexId, j: VertexId) -> bool {
        self.get_edge(i, j) == BOUNDARY_INDEX
    }

    /// Removes every entry whose value is [`DEFAULT_ADJACENT_VALUE`].
    /// Idempotent.
    pub fn clear_empty_keys(&mut self) {
        self.edges.retain(|_, value| *value != DEFAULT_ADJACENT_VALUE);
    }

    /// Iterates over `(edge, opposite vertex)` entries, defaulted entries
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, VertexId)> + '_ {
        self.edges.iter().map(|(edge, value)| (*edge, *value))
    }

    /// Number of entries, defaulted entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the map holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Map from a vertex to the directed edges it opposes.
///
/// `(i, j) ∈ V[k]` exactly when `(i, j, k)` is a stored triangle (or, for
/// `k = BOUNDARY_INDEX`, when `(i, j)` is the outward side of a hull edge).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReverseAdjacencyMap {
    vertices: FastHashMap<VertexId, FastHashSet<Edge>>,
}

impl ReverseAdjacencyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that vertex `k` opposes the directed edge `(i, j)`.
    pub fn add_edge(&mut self, k: VertexId, edge: Edge) {
        self.vertices.entry(k).or_default().insert(edge);
    }

    /// Removes the record that `k` opposes `(i, j)`. The vertex key stays,
    /// possibly with an empty set, until [`Self::clear_empty_keys`] runs.
    pub fn remove_edge(&mut self, k: VertexId, edge: Edge) {
        if let Some(edges) = self.vertices.get_mut(&k) {
            edges.remove(&edge);
        }
    }

    /// Returns `true` when `k` opposes `(i, j)`.
    #[must_use]
    pub fn contains_edge(&self, k: VertexId, edge: Edge) -> bool {
        self.vertices
            .get(&k)
            .is_some_and(|edges| edges.contains(&edge))
    }

    /// Iterates over the edges opposed by `k`.
    pub fn edges(&self, k: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .get(&k)
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }

    /// Number of edges opposed by `k`.
    #[must_use]
    pub fn degree(&self, k: VertexId) -> usize {
        self.vertices.get(&k).map_or(0, FastHashSet::len)
    }

    /// Iterates over the vertices that currently have an entry (possibly an
    /// empty one).
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Removes every vertex entry whose edge set is empty. Idempotent.
    pub fn clear_empty_keys(&mut self) {
        self.vertices.retain(|_, edges| !edges.is_empty());
    }

    /// Returns `true` when the map holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Returns `true` when the directed edge `(i, j)` lies on the hull: either
/// its adjacency entry is [`BOUNDARY_INDEX`] or the ghost vertex opposes it.
#[must_use]
pub fn is_boundary_edge(
    edge: Edge,
    adjacent: &AdjacencyMap,
    adjacent_to_vertex: &ReverseAdjacencyMap,
) -> bool {
    adjacent.is_boundary_edge(edge.0, edge.1)
        || adjacent_to_vertex.contains_edge(BOUNDARY_INDEX, edge)
}
