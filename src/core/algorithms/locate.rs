//! Point location: adjacency walk and history-DAG descent.
//!
//! Both variants return a triangle whose counter-clockwise triple encloses
//! the query point under the orientation predicate. The walk may return a
//! ghost triangle (possibly a *virtual* one, when ghosts are not
//! materialised) to signal that the query lies outside the hull; the DAG
//! descent only ever sees solid triangles because the randomised engine runs
//! entirely inside the bounding triangle.

use crate::core::history::{HistoryDag, HistoryNodeKey};
use crate::core::triangle::Triangle;
use crate::core::triangulation::Triangulation;
use crate::core::vertex::{DEFAULT_ADJACENT_VALUE, PointLookupError, VertexId, get_point};
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, orient};
use crate::geometry::traits::coordinate::Coord2;
use thiserror::Error;

/// Errors from point location.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum LocateError {
    /// There is no triangle to start from.
    #[error("cannot locate in an empty triangulation")]
    EmptyTriangulation,

    /// A triangle with three collinear orientations was reached; the
    /// triangulation is geometrically degenerate and location cannot
    /// proceed.
    #[error("triangle {triangle} is degenerate at query point ({x}, {y})")]
    DegenerateTriangle {
        /// The degenerate triangle.
        triangle: Triangle,
        /// Query abscissa.
        x: f64,
        /// Query ordinate.
        y: f64,
    },

    /// The walk crossed an edge with no adjacency entry on the far side.
    #[error("adjacency walk escaped the triangulation across edge ({u}, {v})")]
    BrokenAdjacency {
        /// Tail of the crossed edge.
        u: VertexId,
        /// Head of the crossed edge.
        v: VertexId,
    },

    /// History descent reached an internal node none of whose children
    /// contain the query point.
    #[error("history descent stuck below triangle {triangle}")]
    HistoryDescentStuck {
        /// The internal node's triangle.
        triangle: Triangle,
    },

    /// A vertex of a visited triangle had no coordinates.
    #[error(transparent)]
    PointLookup(#[from] PointLookupError),
}

/// Orientations of a query point against the three directed edges of a
/// triangle. `None` when all three are degenerate.
fn edge_orientations<P: Coord2>(
    points: &[P],
    triangle: &Triangle,
    p: &Point<f64>,
) -> Result<Option<[Orientation; 3]>, PointLookupError> {
    let (i, j, k) = triangle.indices();
    let pi = get_point(points, i)?;
    let pj = get_point(points, j)?;
    let pk = get_point(points, k)?;
    let orientations = [
        orient(&pi, &pj, p),
        orient(&pj, &pk, p),
        orient(&pk, &pi, p),
    ];
    if orientations
        .iter()
        .all(|&o| o == Orientation::DEGENERATE)
    {
        return Ok(None);
    }
    Ok(Some(orientations))
}

/// Returns `true` when `p` lies inside or on the boundary of the (solid,
/// CCW) triangle.
pub(crate) fn triangle_contains<P: Coord2>(
    points: &[P],
    triangle: &Triangle,
    p: &Point<f64>,
) -> Result<bool, LocateError> {
    let Some(orientations) = edge_orientations(points, triangle, p)? else {
        return Err(LocateError::DegenerateTriangle {
            triangle: *triangle,
            x: p.x(),
            y: p.y(),
        });
    };
    Ok(orientations.iter().all(|&o| o != Orientation::NEGATIVE))
}

/// Locates `p` by walking across shared edges from `start`.
///
/// At each solid triangle, the first directed edge with `p` strictly on its
/// right is crossed; when no edge points away, the triangle contains `p`
/// (ties count as inside, so the first containing triangle encountered
/// wins). Crossing a hull edge yields the ghost triangle on the far side —
/// the returned ghost is *virtual* when ghosts are not materialised, which
/// callers detect via [`Triangulation::contains_triangle`].
///
/// # Errors
///
/// - [`LocateError::EmptyTriangulation`] when `start` is a ghost with no
///   solid neighbour or the triangulation has no triangles.
/// - [`LocateError::DegenerateTriangle`] when a fully collinear triangle is
///   reached (fatal; no recovery is attempted).
/// - [`LocateError::BrokenAdjacency`] when the walk crosses an edge with no
///   far-side entry.
pub fn locate_triangle<P: Coord2>(
    tri: &Triangulation,
    points: &[P],
    p: &Point<f64>,
    start: Triangle,
) -> Result<Triangle, LocateError> {
    let mut current = start;
    if let Some(rotated) = current.ghost_rotation() {
        let (u, v, _) = rotated.indices();
        current = tri
            .triangle_across(u, v)
            .ok_or(LocateError::EmptyTriangulation)?;
    }

    loop {
        if current.is_ghost() {
            return Ok(current);
        }

        let Some(orientations) = edge_orientations(points, &current, p)? else {
            return Err(LocateError::DegenerateTriangle {
                triangle: current,
                x: p.x(),
                y: p.y(),
            });
        };

        let crossed = current
            .edges()
            .into_iter()
            .zip(orientations)
            .find(|&(_, o)| o == Orientation::NEGATIVE);

        match crossed {
            None => return Ok(current),
            Some(((u, v), _)) => {
                let w = tri.adjacent().get_edge(v, u);
                if w == DEFAULT_ADJACENT_VALUE {
                    return Err(LocateError::BrokenAdjacency { u, v });
                }
                current = Triangle::new(v, u, w);
            }
        }
    }
}

/// Locates `p` by descending the history DAG from its root.
///
/// At each internal node the descent moves to a child containing `p`; ties
/// on shared edges resolve to the lexicographically smallest child triangle,
/// so the result is deterministic. Terminates at a leaf, which is a triangle
/// of the current triangulation.
///
/// # Errors
///
/// - [`LocateError::DegenerateTriangle`] when a fully collinear triangle is
///   visited.
/// - [`LocateError::HistoryDescentStuck`] when no child contains `p` (the
///   DAG does not cover the query; in particular, `p` must lie inside the
///   root triangle).
pub fn locate_with_history<P: Coord2>(
    dag: &HistoryDag,
    points: &[P],
    p: &Point<f64>,
) -> Result<Triangle, LocateError> {
    let mut node: HistoryNodeKey = dag.root();

    if !triangle_contains(points, &dag.triangle(node), p)? {
        return Err(LocateError::HistoryDescentStuck {
            triangle: dag.triangle(node),
        });
    }

    loop {
        let children = dag.children(node);
        if children.is_empty() {
            return Ok(dag.triangle(node));
        }

        let mut next: Option<HistoryNodeKey> = None;
        for &child in children {
            let t = dag.triangle(child);
            if triangle_contains(points, &t, p)? {
                let better = match next {
                    None => true,
                    Some(best) => t.indices() < dag.triangle(best).indices(),
                };
                if better {
                    next = Some(child);
                }
            }
        }

        match next {
            Some(child) => node = child,
            None => {
                return Err(LocateError::HistoryDescentStuck {
                    triangle: dag.triangle(node),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::HistoryDag;
    use crate::core::vertex::BOUNDARY_INDEX;
    use crate::geometry::point::Point;

    /// Two triangles over a unit square: (1, 2, 3) and (3, 2, 4)
    /// with 1 = (0,0), 2 = (1,0), 3 = (0,1), 4 = (1,1).
    fn square() -> (Triangulation, Vec<Point<f64>>) {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));
        tri.add_triangle(Triangle::new(3, 2, 4));
        for (u, v) in [(1, 2), (2, 4), (4, 3), (3, 1)] {
            tri.mark_boundary_edge((v, u));
        }
        (tri, points)
    }

    #[test]
    fn walk_finds_the_containing_triangle() {
        let (tri, points) = square();
        let lower = Point::new(0.25, 0.25);
        let upper = Point::new(0.75, 0.75);

        let from_lower = locate_triangle(&tri, &points, &upper, Triangle::new(1, 2, 3)).unwrap();
        assert_eq!(from_lower, Triangle::new(3, 2, 4));

        let from_upper = locate_triangle(&tri, &points, &lower, Triangle::new(3, 2, 4)).unwrap();
        assert_eq!(from_upper, Triangle::new(1, 2, 3));
    }

    #[test]
    fn walk_accepts_points_on_shared_edges() {
        let (tri, points) = square();
        let on_diagonal = Point::new(0.5, 0.5);
        let found =
            locate_triangle(&tri, &points, &on_diagonal, Triangle::new(1, 2, 3)).unwrap();
        assert!(found == Triangle::new(1, 2, 3) || found == Triangle::new(3, 2, 4));
    }

    #[test]
    fn walk_exits_through_the_hull_as_a_virtual_ghost() {
        let (tri, points) = square();
        let outside = Point::new(0.5, -1.0);
        let found = locate_triangle(&tri, &points, &outside, Triangle::new(3, 2, 4)).unwrap();
        assert!(found.is_ghost());
        assert_eq!(found, Triangle::new(2, 1, BOUNDARY_INDEX));
        assert!(!tri.contains_triangle(&found));
    }

    #[test]
    fn walk_from_a_ghost_start_steps_back_inside() {
        let (mut tri, points) = square();
        tri.add_ghost_triangles();
        let inside = Point::new(0.25, 0.25);
        let ghost = Triangle::new(2, 1, BOUNDARY_INDEX);
        let found = locate_triangle(&tri, &points, &inside, ghost).unwrap();
        assert_eq!(found, Triangle::new(1, 2, 3));
    }

    #[test]
    fn history_descent_reaches_the_current_leaf() {
        // Root split into three at an interior vertex.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(1.0, 1.0),
        ];
        let root = Triangle::new(1, 2, 3);
        let mut dag = HistoryDag::new(root);
        dag.record_replacement(
            &[root],
            &[
                Triangle::new(1, 2, 4),
                Triangle::new(2, 3, 4),
                Triangle::new(3, 1, 4),
            ],
        )
        .unwrap();

        let near_edge_12 = Point::new(2.0, 0.25);
        let found = locate_with_history(&dag, &points, &near_edge_12).unwrap();
        assert_eq!(found, Triangle::new(1, 2, 4));

        let near_origin = Point::new(0.25, 1.0);
        let found = locate_with_history(&dag, &points, &near_origin).unwrap();
        assert_eq!(found, Triangle::new(3, 1, 4));
    }

    #[test]
    fn history_descent_rejects_points_outside_the_root() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let dag = HistoryDag::new(Triangle::new(1, 2, 3));
        let outside = Point::new(5.0, 5.0);
        assert!(matches!(
            locate_with_history(&dag, &points, &outside),
            Err(LocateError::HistoryDescentStuck { .. })
        ));
    }

    #[test]
    fn degenerate_triangles_are_fatal() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let mut tri = Triangulation::new();
        tri.add_triangle(Triangle::new(1, 2, 3));
        let p = Point::new(0.5, 0.0);
        assert!(matches!(
            locate_triangle(&tri, &points, &p, Triangle::new(1, 2, 3)),
            Err(LocateError::DegenerateTriangle { .. })
        ));
    }
}
