//! Incremental Bowyer–Watson construction.
//!
//! Each insertion locates the containing triangle with the adjacency walk,
//! flood-fills the cavity of triangles whose circumcircle contains the new
//! point, deletes the cavity, and re-triangulates its boundary as a fan
//! around the new vertex. Ghost triangles participate uniformly: a point
//! outside the hull lands in a ghost, the cavity digs through the ghost ring
//! as far as the point can see, and the fan rebuilds both the new solid
//! triangles and the ghosts of the extended hull.
//!
//! # References
//!
//! - **Bowyer, A.** "Computing Dirichlet tessellations." *The Computer
//!   Journal* 24.2 (1981): 162–166.
//! - **Watson, D.F.** "Computing the n-dimensional Delaunay tessellation
//!   with application to Voronoi polytopes." *The Computer Journal* 24.2
//!   (1981): 167–172.

use crate::core::algorithms::insertion::{
    DuplicatePolicy, InsertionError, InsertionInfo, TriangulateOptions,
    TriangulationConstructionError, check_insertable_index, check_point_count, dig_cavity,
    coincident_vertex, insertion_order, remove_bounding_triangle,
};
use crate::core::algorithms::locate::{LocateError, locate_triangle};
use crate::core::triangle::Triangle;
use crate::core::triangulation::Triangulation;
use crate::core::vertex::VertexId;
use crate::geometry::traits::coordinate::Coord2;

/// Builds the Delaunay triangulation of `points` by incremental
/// Bowyer–Watson insertion.
///
/// Construction runs inside the bounding triangle derived from the input's
/// bounding box; the bounding vertices are removed afterwards and the hull
/// edges are marked in the adjacency maps (ghost triangles are *not*
/// materialised — call [`Triangulation::add_ghost_triangles`] if needed).
///
/// With `options.seed` set, points are inserted in a seeded random
/// permutation; the result for a fixed `(points, seed)` pair is
/// bit-identical across runs.
///
/// # Errors
///
/// [`TriangulationConstructionError`] when an insertion fails, e.g. on a
/// duplicate point under [`DuplicatePolicy::Error`].
///
/// # Examples
///
/// ```
/// use deltri::core::algorithms::bowyer_watson::triangulate_bowyer;
/// use deltri::core::algorithms::insertion::TriangulateOptions;
/// use deltri::geometry::point::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
/// assert_eq!(tri.number_of_triangles(), 2);
/// assert_eq!(tri.hull_edges().len(), 4);
/// assert!(tri.is_delaunay(&points).unwrap());
/// ```
pub fn triangulate_bowyer<P: Coord2>(
    points: &[P],
    options: TriangulateOptions,
) -> Result<Triangulation, TriangulationConstructionError> {
    check_point_count(points.len())?;
    let mut tri = Triangulation::with_bounding_triangle();
    let mut hint = Triangle::bounding();

    for r in insertion_order(points.len(), options.seed) {
        insert_point(&mut tri, points, r, options.duplicate_policy, Some(hint)).map_err(
            |source| TriangulationConstructionError::InsertionFailed { index: r, source },
        )?;
        if let Some((i, j)) = tri.adjacent_to_vertex().edges(r).next() {
            hint = Triangle::new(i, j, r);
        }
    }

    remove_bounding_triangle(&mut tri);
    tri.clear_empty_keys();
    Ok(tri)
}

/// Inserts the point with index `r` into an existing triangulation.
///
/// The triangulation may be in either phase: mid-construction (bounding
/// vertices present) or finished (hull marked, ghosts optional). Interior
/// points need no ghosts; inserting a point outside the current hull
/// requires materialised ghost triangles.
///
/// # Errors
///
/// - [`InsertionError::PointLookup`] when `r` does not address a point.
/// - [`InsertionError::DuplicatePoint`] when the point coincides with an
///   existing vertex under [`DuplicatePolicy::Error`].
/// - [`InsertionError::PointOutsideHull`] when the point is outside the
///   hull and no ghosts are materialised.
/// - [`InsertionError::Locate`] when location fails (empty or degenerate
///   triangulation).
pub fn add_point_bowyer<P: Coord2>(
    tri: &mut Triangulation,
    points: &[P],
    r: VertexId,
    policy: DuplicatePolicy,
) -> Result<InsertionInfo, InsertionError> {
    insert_point(tri, points, r, policy, None)
}

fn insert_point<P: Coord2>(
    tri: &mut Triangulation,
    points: &[P],
    r: VertexId,
    policy: DuplicatePolicy,
    hint: Option<Triangle>,
) -> Result<InsertionInfo, InsertionError> {
    let p = check_insertable_index(points, r)?;

    let start = hint
        .filter(|t| tri.contains_triangle(t))
        .or_else(|| tri.triangles().iter().next().copied())
        .ok_or(LocateError::EmptyTriangulation)?;
    let located = locate_triangle(tri, points, &p, start)?;

    if !tri.contains_triangle(&located) {
        // The walk crossed the hull where no ghost is materialised.
        return Err(InsertionError::PointOutsideHull { index: r });
    }

    if let Some(_vertex) = coincident_vertex(points, &located, &p)? {
        return match policy {
            DuplicatePolicy::Skip => Ok(InsertionInfo::DUPLICATE),
            DuplicatePolicy::Error => Err(InsertionError::DuplicatePoint { index: r }),
        };
    }

    let (cavity, boundary) = dig_cavity(tri, points, &p, located)?;
    for triangle in &cavity {
        tri.delete_triangle(*triangle);
    }
    for (u, v) in &boundary {
        tri.add_triangle(Triangle::new(*u, *v, r));
    }

    Ok(InsertionInfo {
        triangles_created: boundary.len(),
        triangles_removed: cavity.len(),
        duplicate: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vertex::FIRST_POINT_INDEX;
    use crate::geometry::point::Point;

    fn unit_square() -> Vec<Point<f64>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn triangulates_a_square_into_two_triangles() {
        let points = unit_square();
        let tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();

        assert_eq!(tri.number_of_triangles(), 2);
        assert_eq!(tri.hull_edges().len(), 4);
        assert!(!tri.has_ghost_triangles());
        tri.is_valid().unwrap();
        assert!(tri.is_delaunay(&points).unwrap());
    }

    #[test]
    fn interior_insertion_splits_locally() {
        let mut points = unit_square();
        let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();

        points.push(Point::new(0.5, 0.5));
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let r = FIRST_POINT_INDEX + (points.len() - 1) as i32;
        let info = add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap();

        assert!(!info.duplicate);
        assert_eq!(tri.number_of_triangles(), 4);
        assert_eq!(tri.hull_edges().len(), 4);
        tri.is_valid().unwrap();
        assert!(tri.is_delaunay(&points).unwrap());
    }

    #[test]
    fn exterior_insertion_requires_ghosts() {
        let mut points = unit_square();
        let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();

        points.push(Point::new(2.0, 0.5));
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let r = FIRST_POINT_INDEX + (points.len() - 1) as i32;

        let err = add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap_err();
        assert!(matches!(err, InsertionError::PointOutsideHull { .. }));

        tri.add_ghost_triangles();
        let info = add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap();
        assert!(!info.duplicate);

        // The hull now reaches the new point.
        assert_eq!(tri.hull_edges().len(), 5);
        assert!(tri.hull_edges().iter().any(|&(u, v)| u == r || v == r));
        tri.is_valid().unwrap();
        assert!(tri.is_delaunay(&points).unwrap());
    }

    #[test]
    fn duplicate_points_follow_the_policy() {
        let mut points = unit_square();
        let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
        let before = tri.clone();

        points.push(Point::new(1.0, 1.0));
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let r = FIRST_POINT_INDEX + (points.len() - 1) as i32;

        let info = add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap();
        assert!(info.duplicate);
        assert_eq!(tri, before);

        let err = add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Error).unwrap_err();
        assert!(matches!(err, InsertionError::DuplicatePoint { index } if index == r));
        assert_eq!(tri, before);
    }

    #[test]
    fn duplicate_inputs_are_skipped_during_construction() {
        let mut points = unit_square();
        points.push(Point::new(1.0, 0.0));
        let tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
        assert_eq!(tri.number_of_triangles(), 2);

        let err = triangulate_bowyer(
            &points,
            TriangulateOptions {
                duplicate_policy: DuplicatePolicy::Error,
                ..TriangulateOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TriangulationConstructionError::InsertionFailed { index: 5, .. }
        ));
    }

    #[test]
    fn collinear_input_yields_no_solid_triangles() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        let tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
        assert_eq!(tri.number_of_triangles(), 0);
        assert!(tri.hull_edges().is_empty());
    }

    #[test]
    fn seeded_construction_is_deterministic() {
        let points = crate::geometry::point_generation::generate_random_points_seeded(
            60,
            (-10.0, 10.0),
            17,
        )
        .unwrap();

        let a = triangulate_bowyer(&points, TriangulateOptions::with_seed(928_881)).unwrap();
        let b = triangulate_bowyer(&points, TriangulateOptions::with_seed(928_881)).unwrap();
        assert_eq!(a, b);
        assert!(a.is_delaunay(&points).unwrap());
    }

    #[test]
    fn out_of_range_insertion_fails() {
        let points = unit_square();
        let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
        let err = add_point_bowyer(&mut tri, &points, 9, DuplicatePolicy::Skip).unwrap_err();
        assert!(matches!(err, InsertionError::PointLookup(_)));
    }
}
