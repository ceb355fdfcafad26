//! Exterior insertion through the ghost layer, checked against full
//! rebuilds by the randomised-incremental oracle.

use deltri::core::algorithms::bowyer_watson::{add_point_bowyer, triangulate_bowyer};
use deltri::core::algorithms::de_berg::triangulate_berg;
use deltri::core::algorithms::insertion::{DuplicatePolicy, InsertionError, TriangulateOptions};
use deltri::core::triangulation::compare_unconstrained_triangulations;
use deltri::core::vertex::{BOUNDARY_INDEX, FIRST_POINT_INDEX, VertexId};
use deltri::geometry::point::Point;

/// Eleven preset points: a ring of ten around one interior vertex.
fn preset_points() -> Vec<Point<f64>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, -1.5),
        Point::new(3.4, 0.2),
        Point::new(2.9, 2.3),
        Point::new(1.0, 3.1),
        Point::new(-1.2, 2.8),
        Point::new(-2.7, 1.1),
        Point::new(-2.9, -1.0),
        Point::new(-1.6, -2.6),
        Point::new(0.4, -3.0),
        Point::new(1.1, 0.9),
    ]
}

fn probes() -> Vec<Point<f64>> {
    vec![
        Point::new(4.382, 3.2599),
        Point::new(-5.253, 4.761),
        Point::new(-9.838, 0.562),
        Point::new(-7.160, -5.99),
        Point::new(4.79, 2.74),
        Point::new(3.77, 2.7689),
    ]
}

fn last_index(points: &[Point<f64>]) -> VertexId {
    VertexId::try_from(points.len()).unwrap() + FIRST_POINT_INDEX - 1
}

#[test]
fn exterior_probes_extend_the_hull_like_a_rebuild_would() {
    let mut points = preset_points();
    let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
    tri.add_ghost_triangles();

    for probe in probes() {
        points.push(probe);
        let r = last_index(&points);
        add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap();
        tri.is_valid().unwrap();
        assert!(tri.is_delaunay(&points).unwrap());

        let (mut rebuilt, _) = triangulate_berg(&points, TriangulateOptions::default()).unwrap();
        rebuilt.add_ghost_triangles();
        assert!(
            compare_unconstrained_triangulations(&tri, &rebuilt),
            "ghost-phase insertion diverged from the oracle at {probe:?}"
        );
    }
}

#[test]
fn removing_ghosts_from_one_side_breaks_the_equivalence() {
    let mut points = preset_points();
    let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
    tri.add_ghost_triangles();

    points.push(probes()[0]);
    let r = last_index(&points);
    add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap();

    let (mut rebuilt, _) = triangulate_berg(&points, TriangulateOptions::default()).unwrap();
    rebuilt.add_ghost_triangles();
    assert!(compare_unconstrained_triangulations(&tri, &rebuilt));

    tri.remove_ghost_triangles();
    assert!(
        !compare_unconstrained_triangulations(&tri, &rebuilt),
        "one side without ghosts must not compare equal"
    );

    rebuilt.remove_ghost_triangles();
    assert!(compare_unconstrained_triangulations(&tri, &rebuilt));
}

#[test]
fn exterior_insertion_without_ghosts_is_rejected_and_harmless() {
    let mut points = preset_points();
    let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
    let before = tri.clone();

    points.push(Point::new(-9.838, 0.562));
    let r = last_index(&points);
    let err = add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap_err();
    assert!(matches!(err, InsertionError::PointOutsideHull { index } if index == r));
    assert_eq!(tri, before);
}

#[test]
fn ghost_ring_stays_closed_while_the_hull_grows() {
    let mut points = preset_points();
    let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
    tri.add_ghost_triangles();

    for probe in probes() {
        points.push(probe);
        let r = last_index(&points);
        add_point_bowyer(&mut tri, &points, r, DuplicatePolicy::Skip).unwrap();

        let hull = tri.hull_edges();
        let ghosts = tri
            .triangles()
            .iter()
            .filter(|t| t.is_ghost())
            .count();
        assert_eq!(hull.len(), ghosts, "one ghost per hull edge");

        // Every hull edge's outward side is mapped to the ghost vertex.
        for &(u, v) in &hull {
            assert!(tri.adjacent().is_boundary_edge(v, u));
            assert!(!tri.adjacent().is_boundary_edge(u, v));
        }
        assert_eq!(tri.graph().degree(BOUNDARY_INDEX), hull.len());
    }
}
