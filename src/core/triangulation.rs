//! The triangulation data structure: triangle set, adjacency maps, and
//! vertex graph, mutated in lockstep.
//!
//! # Ghost triangles
//!
//! For every hull edge `(u, v)` (a directed edge of a solid triangle whose
//! outward side `(v, u)` is mapped to [`BOUNDARY_INDEX`]) the triangulation
//! can *materialise* the ghost triangle `(v, u, BOUNDARY_INDEX)`. With
//! ghosts in place, point location terminates on some triangle for every
//! query — solid for interior points, ghost for exterior ones — and the
//! Bowyer–Watson cavity machinery extends the hull with no special cases.
//! [`Triangulation::add_ghost_triangles`] and
//! [`Triangulation::remove_ghost_triangles`] switch between the two phases;
//! the hull marks in the adjacency maps survive either way.

use crate::core::adjacency::{AdjacencyMap, ReverseAdjacencyMap};
use crate::core::graph::VertexGraph;
use crate::core::triangle::{Triangle, TriangleSet};
use crate::core::vertex::{
    BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE, Edge, PointLookupError, VertexId, get_point,
    is_input_index,
};
use crate::geometry::point::Point;
use crate::geometry::predicates::{InCircle, in_circle};
use crate::geometry::traits::coordinate::Coord2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the verification helpers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TriangulationValidationError {
    /// The adjacency map and the reverse map disagree.
    #[error("adjacency maps are not mutual inverses: {message}")]
    AdjacencyMapsNotInverse {
        /// Description of the first disagreement found.
        message: String,
    },
    /// A stored triangle is missing one of its adjacency entries.
    #[error("triangle {triangle} has an inconsistent adjacency entry for edge ({i}, {j})")]
    MissingAdjacencyEntry {
        /// The inconsistent triangle.
        triangle: Triangle,
        /// Tail of the offending edge.
        i: VertexId,
        /// Head of the offending edge.
        j: VertexId,
    },
}

/// A planar triangulation: solid (and optionally ghost) triangles plus the
/// adjacency index and vertex graph over them.
///
/// All four structures are owned together and every mutation goes through
/// [`Triangulation::add_triangle`] / [`Triangulation::delete_triangle`], so
/// they stay mutually consistent.
///
/// # Examples
///
/// ```
/// use deltri::core::triangle::Triangle;
/// use deltri::core::triangulation::Triangulation;
///
/// let mut tri = Triangulation::new();
/// tri.add_triangle(Triangle::new(1, 2, 3));
/// assert_eq!(tri.adjacent().get_edge(1, 2), 3);
/// assert_eq!(tri.adjacent().get_edge(2, 3), 1);
/// assert_eq!(tri.adjacent().get_edge(3, 1), 2);
/// assert!(tri.graph().contains_edge(1, 3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangulation {
    triangles: TriangleSet,
    adjacent: AdjacencyMap,
    adjacent_to_vertex: ReverseAdjacencyMap,
    graph: VertexGraph,
}

impl Triangulation {
    /// Creates an empty triangulation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the seed triangulation used by both construction engines: the
    /// bounding triangle, with its outward sides marked as boundary.
    #[must_use]
    pub fn with_bounding_triangle() -> Self {
        let mut tri = Self::new();
        tri.add_triangle(Triangle::bounding());
        for (u, v) in Triangle::bounding().edges() {
            tri.mark_boundary_edge((v, u));
        }
        tri
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The triangle set.
    #[inline]
    #[must_use]
    pub const fn triangles(&self) -> &TriangleSet {
        &self.triangles
    }

    /// The edge → opposite-vertex adjacency map.
    #[inline]
    #[must_use]
    pub const fn adjacent(&self) -> &AdjacencyMap {
        &self.adjacent
    }

    /// The vertex → opposed-edges reverse map.
    #[inline]
    #[must_use]
    pub const fn adjacent_to_vertex(&self) -> &ReverseAdjacencyMap {
        &self.adjacent_to_vertex
    }

    /// Mutable access to the reverse map, for verification experiments.
    /// Normal mutation goes through the triangle operations.
    #[inline]
    pub fn adjacent_to_vertex_mut(&mut self) -> &mut ReverseAdjacencyMap {
        &mut self.adjacent_to_vertex
    }

    /// The vertex graph.
    #[inline]
    #[must_use]
    pub const fn graph(&self) -> &VertexGraph {
        &self.graph
    }

    /// Number of stored triangles, ghosts included.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Membership modulo rotation.
    #[must_use]
    pub fn contains_triangle(&self, triangle: &Triangle) -> bool {
        self.triangles.contains(triangle)
    }

    /// Iterates over the solid (non-ghost) triangles.
    pub fn solid_triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter().filter(|t| !t.is_ghost())
    }

    // =========================================================================
    // TRIANGLE OPERATIONS
    // =========================================================================

    /// Inserts the triangle `(i, j, k)`: adds it to the triangle set, writes
    /// its three adjacency entries, its three reverse entries, and its three
    /// graph edges.
    pub fn add_triangle(&mut self, triangle: Triangle) {
        let (i, j, k) = triangle.indices();
        self.triangles.insert(triangle);

        self.adjacent.set_edge(i, j, k);
        self.adjacent.set_edge(j, k, i);
        self.adjacent.set_edge(k, i, j);

        self.adjacent_to_vertex.add_edge(k, (i, j));
        self.adjacent_to_vertex.add_edge(i, (j, k));
        self.adjacent_to_vertex.add_edge(j, (k, i));

        self.graph.add_edge(i, j);
        self.graph.add_edge(j, k);
        self.graph.add_edge(k, i);
    }

    /// Inserts a solid triangle and materialises the ghost across any of its
    /// edges that lie on the hull (outward side mapped to
    /// [`BOUNDARY_INDEX`] with no ghost present yet).
    pub fn add_triangle_with_ghosts(&mut self, triangle: Triangle) {
        self.add_triangle(triangle);
        for (u, v) in triangle.edges() {
            let ghost = Triangle::new(v, u, BOUNDARY_INDEX);
            if self.adjacent.is_boundary_edge(v, u) && !self.triangles.contains(&ghost) {
                self.add_triangle(ghost);
            }
        }
    }

    /// Deletes a triangle (any rotation).
    ///
    /// Its adjacency entries are overwritten with the default value (the keys
    /// remain until [`Triangulation::clear_empty_keys`]), the reverse entries
    /// are dropped, and each graph edge is dropped only when no surviving
    /// triangle supports it. Returns whether the triangle was present.
    pub fn delete_triangle(&mut self, triangle: Triangle) -> bool {
        if !self.triangles.remove(&triangle) {
            return false;
        }
        let (i, j, k) = triangle.indices();

        self.adjacent.unset_edge(i, j);
        self.adjacent.unset_edge(j, k);
        self.adjacent.unset_edge(k, i);

        self.adjacent_to_vertex.remove_edge(k, (i, j));
        self.adjacent_to_vertex.remove_edge(i, (j, k));
        self.adjacent_to_vertex.remove_edge(j, (k, i));

        for (u, v) in triangle.edges() {
            if !self.edge_supported(u, v) && !self.edge_supported(v, u) {
                self.graph.remove_edge(u, v);
            }
        }
        true
    }

    /// Returns `true` when the directed edge `(u, v)` belongs to a stored
    /// triangle. A boundary mark alone does not count: it only supports the
    /// edge once the corresponding ghost is materialised.
    fn edge_supported(&self, u: VertexId, v: VertexId) -> bool {
        let w = self.adjacent.get_edge(u, v);
        if w == DEFAULT_ADJACENT_VALUE {
            false
        } else if w == BOUNDARY_INDEX {
            self.triangles.contains(&Triangle::new(u, v, BOUNDARY_INDEX))
        } else {
            true
        }
    }

    /// The triangle on the other side of the directed edge `(u, v)`, i.e.
    /// the stored triangle containing `(v, u)`. `None` when there is none
    /// (hull side without a materialised ghost, or no entry at all).
    #[must_use]
    pub fn triangle_across(&self, u: VertexId, v: VertexId) -> Option<Triangle> {
        let w = self.adjacent.get_edge(v, u);
        if w == DEFAULT_ADJACENT_VALUE {
            return None;
        }
        let neighbour = Triangle::new(v, u, w);
        self.triangles.contains(&neighbour).then_some(neighbour)
    }

    /// Marks the directed edge `(i, j)` as the outward side of a hull edge.
    pub(crate) fn mark_boundary_edge(&mut self, edge: Edge) {
        self.adjacent.set_edge(edge.0, edge.1, BOUNDARY_INDEX);
        self.adjacent_to_vertex.add_edge(BOUNDARY_INDEX, edge);
    }

    /// Removes a hull mark without touching triangles.
    pub(crate) fn unmark_boundary_edge(&mut self, edge: Edge) {
        self.adjacent.unset_edge(edge.0, edge.1);
        self.adjacent_to_vertex.remove_edge(BOUNDARY_INDEX, edge);
    }

    // =========================================================================
    // GHOST LAYER
    // =========================================================================

    /// Materialises the ghost triangle `(u, v, BOUNDARY_INDEX)` for every
    /// boundary-marked edge `(u, v)`.
    pub fn add_ghost_triangles(&mut self) {
        let marked: Vec<Edge> = self.adjacent_to_vertex.edges(BOUNDARY_INDEX).collect();
        for (u, v) in marked {
            let ghost = Triangle::new(u, v, BOUNDARY_INDEX);
            if !self.triangles.contains(&ghost) {
                self.add_triangle(ghost);
            }
        }
    }

    /// Removes every materialised ghost triangle, keeping the hull marks
    /// (`A(u, v) = BOUNDARY_INDEX` and the mirrored entries under the ghost
    /// vertex) intact.
    pub fn remove_ghost_triangles(&mut self) {
        let ghosts: Vec<Triangle> = self
            .triangles
            .iter()
            .filter(|t| t.is_ghost())
            .copied()
            .collect();
        for ghost in ghosts {
            let rotated = ghost.ghost_rotation().unwrap_or(ghost);
            let (u, v, _) = rotated.indices();
            self.triangles.remove(&rotated);

            // Drop the two ghost-only entries; (u, v) keeps its hull mark.
            self.adjacent.unset_edge(v, BOUNDARY_INDEX);
            self.adjacent.unset_edge(BOUNDARY_INDEX, u);
            self.adjacent_to_vertex.remove_edge(u, (v, BOUNDARY_INDEX));
            self.adjacent_to_vertex.remove_edge(v, (BOUNDARY_INDEX, u));

            for (a, b) in rotated.edges() {
                if !self.edge_supported(a, b) && !self.edge_supported(b, a) {
                    self.graph.remove_edge(a, b);
                }
            }
        }
        self.graph.remove_point(BOUNDARY_INDEX);
    }

    /// Returns `true` when at least one ghost triangle is materialised.
    #[must_use]
    pub fn has_ghost_triangles(&self) -> bool {
        self.triangles.iter().any(Triangle::is_ghost)
    }

    /// The hull edges `(u, v)`, read off the boundary marks (each mark is
    /// the outward side `(v, u)`). Unordered.
    #[must_use]
    pub fn hull_edges(&self) -> Vec<Edge> {
        self.adjacent_to_vertex
            .edges(BOUNDARY_INDEX)
            .map(|(v, u)| (u, v))
            .collect()
    }

    // =========================================================================
    // MAINTENANCE
    // =========================================================================

    /// Sweeps out defaulted adjacency entries, empty reverse entries, and
    /// isolated graph nodes. Idempotent.
    pub fn clear_empty_keys(&mut self) {
        self.adjacent.clear_empty_keys();
        self.adjacent_to_vertex.clear_empty_keys();
        self.graph.clear_empty_points();
    }

    // =========================================================================
    // VERIFICATION
    // =========================================================================

    /// Checks that the adjacency map and the reverse map are mutual inverses
    /// on their non-empty entries.
    #[must_use]
    pub fn adjacent_maps_are_mutual_inverses(&self) -> bool {
        self.check_adjacent_maps_inverse().is_ok()
    }

    fn check_adjacent_maps_inverse(&self) -> Result<(), TriangulationValidationError> {
        for ((i, j), k) in self.adjacent.iter() {
            if k == DEFAULT_ADJACENT_VALUE {
                continue;
            }
            if !self.adjacent_to_vertex.contains_edge(k, (i, j)) {
                return Err(TriangulationValidationError::AdjacencyMapsNotInverse {
                    message: format!("A({i}, {j}) = {k} but ({i}, {j}) ∉ V[{k}]"),
                });
            }
        }
        for k in self.adjacent_to_vertex.vertices() {
            for (i, j) in self.adjacent_to_vertex.edges(k) {
                if self.adjacent.get_edge(i, j) != k {
                    return Err(TriangulationValidationError::AdjacencyMapsNotInverse {
                        message: format!(
                            "({i}, {j}) ∈ V[{k}] but A({i}, {j}) = {}",
                            self.adjacent.get_edge(i, j)
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Runs the structural checks: A↔V mutual inversion and per-triangle
    /// adjacency consistency.
    ///
    /// # Errors
    ///
    /// The first [`TriangulationValidationError`] found.
    pub fn is_valid(&self) -> Result<(), TriangulationValidationError> {
        self.check_adjacent_maps_inverse()?;
        for triangle in self.triangles.iter() {
            let (i, j, k) = triangle.indices();
            for ((u, v), w) in [((i, j), k), ((j, k), i), ((k, i), j)] {
                if self.adjacent.get_edge(u, v) != w {
                    return Err(TriangulationValidationError::MissingAdjacencyEntry {
                        triangle: *triangle,
                        i: u,
                        j: v,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks the empty-circumcircle property of every solid triangle
    /// against every input vertex of the triangulation. `O(t · n)`;
    /// intended for tests and debugging.
    ///
    /// # Errors
    ///
    /// Propagates [`PointLookupError`] when the triangulation references a
    /// vertex that `points` does not contain.
    pub fn is_delaunay<P: Coord2>(&self, points: &[P]) -> Result<bool, PointLookupError> {
        let vertices: Vec<VertexId> = self
            .graph
            .points()
            .filter(|&v| is_input_index(v))
            .collect();
        for triangle in self.solid_triangles() {
            let (i, j, k) = triangle.indices();
            let pi = get_point(points, i)?;
            let pj = get_point(points, j)?;
            let pk = get_point(points, k)?;
            for &v in &vertices {
                if triangle.contains_vertex(v) {
                    continue;
                }
                let p = get_point(points, v)?;
                if in_circle(&pi, &pj, &pk, &p) == InCircle::INSIDE {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Centroid of the input vertices currently in the triangulation: an
    /// interior witness for the (single, convex) boundary region. `None`
    /// when no input vertex is present.
    ///
    /// # Errors
    ///
    /// Propagates [`PointLookupError`] when the triangulation references a
    /// vertex that `points` does not contain.
    pub fn representative_point<P: Coord2>(
        &self,
        points: &[P],
    ) -> Result<Option<Point<f64>>, PointLookupError> {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut count = 0usize;
        for v in self.graph.points().filter(|&v| is_input_index(v)) {
            let p = get_point(points, v)?;
            sum_x += p.x();
            sum_y += p.y();
            count += 1;
        }
        if count == 0 {
            return Ok(None);
        }
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        Ok(Some(Point::new(sum_x / n, sum_y / n)))
    }
}

/// Returns `true` when two triangulations are equal after normalisation:
/// both sides are swept by [`Triangulation::clear_empty_keys`] (on clones)
/// and the four structures are compared pointwise, triangle equality being
/// modulo rotation throughout.
///
/// # Examples
///
/// ```
/// use deltri::core::triangle::Triangle;
/// use deltri::core::triangulation::{Triangulation, compare_unconstrained_triangulations};
///
/// let mut a = Triangulation::new();
/// a.add_triangle(Triangle::new(1, 2, 3));
/// a.add_triangle(Triangle::new(2, 1, 4));
/// a.delete_triangle(Triangle::new(2, 1, 4)); // leaves defaulted keys behind
///
/// let mut b = Triangulation::new();
/// b.add_triangle(Triangle::new(2, 3, 1));
///
/// assert!(compare_unconstrained_triangulations(&a, &b));
/// ```
#[must_use]
pub fn compare_unconstrained_triangulations(a: &Triangulation, b: &Triangulation) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    a.clear_empty_keys();
    b.clear_empty_keys();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vertex::{BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE};

    /// Fan of six triangles around vertex 7, hull 1-2-3-4-5-6 (a hexagon).
    fn hexagon_fan() -> Triangulation {
        let mut tri = Triangulation::new();
        for n in 0..6 {
            let u = n + 1;
            let v = (n + 1) % 6 + 1;
            tri.add_triangle(Triangle::new(u, v, 7));
        }
        for n in 0..6 {
            let u = n + 1;
            let v = (n + 1) % 6 + 1;
            tri.mark_boundary_edge((v, u));
        }
        tri
    }

    #[test]
    fn add_triangle_writes_all_three_structures() {
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));

        assert_eq!(tri.adjacent().get_edge(1, 2), 3);
        assert_eq!(tri.adjacent().get_edge(2, 3), 1);
        assert_eq!(tri.adjacent().get_edge(3, 1), 2);

        assert!(tri.adjacent_to_vertex().contains_edge(3, (1, 2)));
        assert!(tri.adjacent_to_vertex().contains_edge(1, (2, 3)));
        assert!(tri.adjacent_to_vertex().contains_edge(2, (3, 1)));

        assert!(tri.graph().contains_edge(1, 2));
        assert!(tri.graph().contains_edge(2, 3));
        assert!(tri.graph().contains_edge(3, 1));

        tri.is_valid().unwrap();
    }

    #[test]
    fn delete_triangle_keeps_shared_graph_edges() {
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));
        tri.add_triangle(Triangle::new(2, 1, 4));

        assert!(tri.delete_triangle(Triangle::new(3, 1, 2)));
        // (1, 2) is still supported by (2, 1, 4).
        assert!(tri.graph().contains_edge(1, 2));
        assert!(!tri.graph().contains_edge(2, 3));
        assert!(!tri.graph().contains_edge(3, 1));

        assert_eq!(tri.adjacent().get_edge(1, 2), DEFAULT_ADJACENT_VALUE);
        assert_eq!(tri.adjacent().get_edge(2, 1), 4);

        assert!(!tri.delete_triangle(Triangle::new(1, 2, 3)));
    }

    #[test]
    fn clear_empty_keys_is_idempotent() {
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));
        tri.add_triangle(Triangle::new(2, 1, 4));
        tri.delete_triangle(Triangle::new(2, 1, 4));

        tri.clear_empty_keys();
        let once = tri.clone();
        tri.clear_empty_keys();
        assert_eq!(tri, once);
        assert_eq!(tri.adjacent().len(), 3);
        assert!(!tri.graph().contains_point(4));
    }

    #[test]
    fn triangle_across_respects_materialisation() {
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));
        tri.add_triangle(Triangle::new(2, 1, 4));
        tri.mark_boundary_edge((3, 2));

        assert_eq!(tri.triangle_across(1, 2), Some(Triangle::new(2, 1, 4)));
        assert_eq!(tri.triangle_across(2, 1), Some(Triangle::new(1, 2, 3)));
        // Boundary mark without a materialised ghost: no triangle across.
        assert_eq!(tri.triangle_across(2, 3), None);

        tri.add_triangle(Triangle::new(3, 2, BOUNDARY_INDEX));
        assert_eq!(
            tri.triangle_across(2, 3),
            Some(Triangle::new(3, 2, BOUNDARY_INDEX))
        );
    }

    #[test]
    fn ghost_roundtrip_restores_the_solid_state() {
        let mut tri = hexagon_fan();
        let before = tri.clone();

        tri.add_ghost_triangles();
        assert!(tri.has_ghost_triangles());
        assert_eq!(tri.number_of_triangles(), 12);
        assert!(tri.graph().contains_point(BOUNDARY_INDEX));
        tri.is_valid().unwrap();

        tri.remove_ghost_triangles();
        assert!(!tri.has_ghost_triangles());
        assert!(compare_unconstrained_triangulations(&tri, &before));
    }

    #[test]
    fn ghost_triangles_are_adjacent_around_the_hull() {
        let mut tri = hexagon_fan();
        tri.add_ghost_triangles();

        // Each ghost's ring neighbours are the adjacent ghosts.
        for (u, v) in tri.hull_edges() {
            let ghost = Triangle::new(v, u, BOUNDARY_INDEX);
            assert!(tri.contains_triangle(&ghost));
            let across_hull = tri.triangle_across(v, u).unwrap();
            assert!(!across_hull.is_ghost());
            let ring = tri.triangle_across(u, BOUNDARY_INDEX);
            assert!(ring.is_some_and(|t| t.is_ghost()));
        }
    }

    #[test]
    fn hexagon_adjacency_maps_are_mutual_inverses() {
        let tri = hexagon_fan();
        assert!(tri.adjacent_maps_are_mutual_inverses());

        // A spurious boundary pair breaks the inversion.
        let mut broken = tri.clone();
        broken
            .adjacent_to_vertex_mut()
            .add_edge(BOUNDARY_INDEX, (10, 11));
        assert!(!broken.adjacent_maps_are_mutual_inverses());
        assert!(matches!(
            broken.is_valid(),
            Err(TriangulationValidationError::AdjacencyMapsNotInverse { .. })
        ));
    }

    #[test]
    fn comparison_ignores_rotation_and_defaulted_keys() {
        let mut a = Triangulation::new();
        a.add_triangle(Triangle::new(1, 2, 3));
        a.add_triangle(Triangle::new(2, 1, 4));
        a.delete_triangle(Triangle::new(2, 1, 4));

        let mut b = Triangulation::new();
        b.add_triangle(Triangle::new(3, 1, 2));

        assert!(compare_unconstrained_triangulations(&a, &b));
        assert_ne!(a, b);

        b.add_triangle(Triangle::new(2, 1, 5));
        assert!(!compare_unconstrained_triangulations(&a, &b));
    }

    #[test]
    fn adding_a_triangle_with_ghost_updates_materialises_hull_ghosts() {
        let mut tri = hexagon_fan();
        tri.delete_triangle(Triangle::new(1, 2, 7));

        // The hull mark on (2, 1) survives the deletion, so re-adding with
        // ghost updates materialises the ghost on that side only.
        tri.add_triangle_with_ghosts(Triangle::new(1, 2, 7));
        assert!(tri.contains_triangle(&Triangle::new(2, 1, BOUNDARY_INDEX)));
        assert_eq!(
            tri.triangles().iter().filter(|t| t.is_ghost()).count(),
            1
        );
        tri.is_valid().unwrap();
    }

    #[test]
    fn representative_point_is_the_vertex_centroid() {
        let points = vec![
            crate::geometry::point::Point::new(0.0, 0.0),
            crate::geometry::point::Point::new(2.0, 0.0),
            crate::geometry::point::Point::new(0.0, 2.0),
        ];
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));

        let witness = tri.representative_point(&points).unwrap().unwrap();
        assert!((witness.x() - 2.0 / 3.0).abs() < 1e-12);
        assert!((witness.y() - 2.0 / 3.0).abs() < 1e-12);

        let empty = Triangulation::new();
        assert_eq!(empty.representative_point(&points).unwrap(), None);
    }

    #[test]
    fn bounding_seed_is_consistent() {
        let tri = Triangulation::with_bounding_triangle();
        assert_eq!(tri.number_of_triangles(), 1);
        tri.is_valid().unwrap();
        assert_eq!(tri.hull_edges().len(), 3);
    }
}
