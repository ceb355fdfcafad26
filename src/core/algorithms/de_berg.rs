//! Randomised-incremental construction with a history DAG.
//!
//! The reference engine from de Berg et al.: locate the new point through
//! the history DAG, split the containing triangle (or the two triangles
//! sharing the containing edge), then legalise outward, flipping every edge
//! whose opposite vertex invades a circumcircle. Every split and flip is
//! recorded in the DAG, which doubles as the point-location structure.
//!
//! The whole construction runs strictly inside the bounding triangle, so
//! the DAG only ever holds solid triangles; the bounding vertices are
//! removed at the end exactly as in the Bowyer–Watson engine. For a fixed
//! input and seed the two engines produce the same triangulation, which
//! makes this engine the equivalence oracle for the other.
//!
//! # References
//!
//! - **de Berg, M., Cheong, O., van Kreveld, M., and Overmars, M.**
//!   *Computational Geometry: Algorithms and Applications.* 3rd ed.
//!   Springer-Verlag, 2008. Chapter 9: Delaunay Triangulations.

use crate::core::algorithms::insertion::{
    DuplicatePolicy, InsertionError, InsertionInfo, TriangulateOptions,
    TriangulationConstructionError, check_insertable_index, check_point_count, insertion_order,
    remove_bounding_triangle,
};
use crate::core::algorithms::locate::{LocateError, locate_with_history};
use crate::core::history::HistoryDag;
use crate::core::triangle::{Triangle, choose_uvw};
use crate::core::triangulation::Triangulation;
use crate::core::vertex::{BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE, VertexId, get_point};
use crate::geometry::predicates::{InCircle, Orientation, in_circle, orient};
use crate::geometry::traits::coordinate::Coord2;

/// Builds the Delaunay triangulation of `points` by randomised-incremental
/// insertion, returning the triangulation together with its history DAG.
///
/// The triangulation half of the result is normalised exactly like
/// [`triangulate_bowyer`](crate::core::algorithms::bowyer_watson::triangulate_bowyer)'s
/// output: bounding vertices removed, hull marked, defaulted keys swept. The
/// DAG keeps the full construction history, bounding triangles included.
///
/// # Errors
///
/// [`TriangulationConstructionError`] when an insertion fails.
///
/// # Examples
///
/// ```
/// use deltri::core::algorithms::bowyer_watson::triangulate_bowyer;
/// use deltri::core::algorithms::de_berg::triangulate_berg;
/// use deltri::core::algorithms::insertion::TriangulateOptions;
/// use deltri::core::triangulation::compare_unconstrained_triangulations;
/// use deltri::geometry::point::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.5),
///     Point::new(1.5, 2.5),
///     Point::new(1.0, 1.0),
/// ];
/// let (berg, dag) = triangulate_berg(&points, TriangulateOptions::default()).unwrap();
/// let bowyer = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
/// assert!(compare_unconstrained_triangulations(&bowyer, &berg));
/// assert!(dag.len() > berg.number_of_triangles());
/// ```
pub fn triangulate_berg<P: Coord2>(
    points: &[P],
    options: TriangulateOptions,
) -> Result<(Triangulation, HistoryDag), TriangulationConstructionError> {
    check_point_count(points.len())?;
    let mut tri = Triangulation::with_bounding_triangle();
    let mut dag = HistoryDag::new(Triangle::bounding());

    for r in insertion_order(points.len(), options.seed) {
        add_point_berg(&mut tri, &mut dag, points, r, options.duplicate_policy).map_err(
            |source| TriangulationConstructionError::InsertionFailed { index: r, source },
        )?;
    }

    remove_bounding_triangle(&mut tri);
    tri.clear_empty_keys();
    Ok((tri, dag))
}

/// Inserts the point with index `r`, maintaining the history DAG alongside
/// the triangulation.
///
/// Requires the construction phase: the bounding vertices must still be
/// present so that every query point falls inside a DAG leaf.
///
/// # Errors
///
/// - [`InsertionError::PointLookup`] when `r` does not address a point.
/// - [`InsertionError::DuplicatePoint`] when the point coincides with an
///   existing vertex under [`DuplicatePolicy::Error`].
/// - [`InsertionError::Locate`] when DAG descent fails (point outside the
///   bounding triangle, or degenerate geometry).
pub fn add_point_berg<P: Coord2>(
    tri: &mut Triangulation,
    dag: &mut HistoryDag,
    points: &[P],
    r: VertexId,
    policy: DuplicatePolicy,
) -> Result<InsertionInfo, InsertionError> {
    let p = check_insertable_index(points, r)?;
    let located = locate_with_history(dag, points, &p)?;

    let (i, j, k) = located.indices();
    let pi = get_point(points, i)?;
    let pj = get_point(points, j)?;
    let pk = get_point(points, k)?;
    let on_ij = orient(&pi, &pj, &p) == Orientation::DEGENERATE;
    let on_jk = orient(&pj, &pk, &p) == Orientation::DEGENERATE;
    let on_ki = orient(&pk, &pi, &p) == Orientation::DEGENERATE;

    let degenerate_edges =
        usize::from(on_ij) + usize::from(on_jk) + usize::from(on_ki);

    if degenerate_edges >= 2 {
        // Two incident edges collapse: the point sits on a vertex.
        return match policy {
            DuplicatePolicy::Skip => Ok(InsertionInfo::DUPLICATE),
            DuplicatePolicy::Error => Err(InsertionError::DuplicatePoint { index: r }),
        };
    }

    let mut info = InsertionInfo::default();
    if degenerate_edges == 0 {
        split_interior(tri, dag, located, r, &mut info)?;
        legalise(tri, dag, points, r, (i, j), &mut info)?;
        legalise(tri, dag, points, r, (j, k), &mut info)?;
        legalise(tri, dag, points, r, (k, i), &mut info)?;
    } else {
        let (u, v, w) = choose_uvw(on_ij, on_jk, on_ki, i, j, k);
        let l = tri.adjacent().get_edge(v, u);
        if l == DEFAULT_ADJACENT_VALUE || l == BOUNDARY_INDEX {
            return Err(InsertionError::Locate(LocateError::BrokenAdjacency {
                u: v,
                v: u,
            }));
        }
        split_edge(tri, dag, (u, v), w, l, r, &mut info)?;
        legalise(tri, dag, points, r, (v, w), &mut info)?;
        legalise(tri, dag, points, r, (w, u), &mut info)?;
        legalise(tri, dag, points, r, (u, l), &mut info)?;
        legalise(tri, dag, points, r, (l, v), &mut info)?;
    }
    Ok(info)
}

/// Splits the triangle `(i, j, k)` into three triangles around `r`.
fn split_interior(
    tri: &mut Triangulation,
    dag: &mut HistoryDag,
    located: Triangle,
    r: VertexId,
    info: &mut InsertionInfo,
) -> Result<(), InsertionError> {
    let (i, j, k) = located.indices();
    let born = [
        Triangle::new(i, j, r),
        Triangle::new(j, k, r),
        Triangle::new(k, i, r),
    ];
    tri.delete_triangle(located);
    for t in born {
        tri.add_triangle(t);
    }
    dag.record_replacement(&[located], &born)?;
    info.triangles_removed += 1;
    info.triangles_created += 3;
    Ok(())
}

/// Splits the two triangles sharing the edge `(u, v)` — `(u, v, w)` and
/// `(v, u, l)` — into four triangles around `r`, which lies on that edge.
fn split_edge(
    tri: &mut Triangulation,
    dag: &mut HistoryDag,
    (u, v): (VertexId, VertexId),
    w: VertexId,
    l: VertexId,
    r: VertexId,
    info: &mut InsertionInfo,
) -> Result<(), InsertionError> {
    let first = Triangle::new(u, v, w);
    let second = Triangle::new(v, u, l);

    let first_born = [Triangle::new(r, v, w), Triangle::new(r, w, u)];
    let second_born = [Triangle::new(r, u, l), Triangle::new(r, l, v)];

    tri.delete_triangle(first);
    tri.delete_triangle(second);
    for t in first_born.into_iter().chain(second_born) {
        tri.add_triangle(t);
    }
    dag.record_replacement(&[first], &first_born)?;
    dag.record_replacement(&[second], &second_born)?;
    info.triangles_removed += 2;
    info.triangles_created += 4;
    Ok(())
}

/// Legalises the edge `(u, v)` of the triangle `(u, v, r)`.
///
/// When the opposite vertex `w` across `(u, v)` lies strictly inside the
/// circumcircle of `(u, v, r)`, the edge is flipped to `(r, w)` and the two
/// outer edges of the new pair are legalised recursively. Edges whose far
/// side carries no solid triangle are legal by definition.
fn legalise<P: Coord2>(
    tri: &mut Triangulation,
    dag: &mut HistoryDag,
    points: &[P],
    r: VertexId,
    (u, v): (VertexId, VertexId),
    info: &mut InsertionInfo,
) -> Result<(), InsertionError> {
    let w = tri.adjacent().get_edge(v, u);
    if w == DEFAULT_ADJACENT_VALUE || w == BOUNDARY_INDEX {
        return Ok(());
    }

    let pu = get_point(points, u)?;
    let pv = get_point(points, v)?;
    let pr = get_point(points, r)?;
    let pw = get_point(points, w)?;
    if in_circle(&pu, &pv, &pr, &pw) != InCircle::INSIDE {
        return Ok(());
    }

    let dead = [Triangle::new(u, v, r), Triangle::new(v, u, w)];
    let born = [Triangle::new(r, u, w), Triangle::new(r, w, v)];
    tri.delete_triangle(dead[0]);
    tri.delete_triangle(dead[1]);
    tri.add_triangle(born[0]);
    tri.add_triangle(born[1]);
    dag.record_replacement(&dead, &born)?;
    info.triangles_removed += 2;
    info.triangles_created += 2;

    legalise(tri, dag, points, r, (u, w), info)?;
    legalise(tri, dag, points, r, (w, v), info)
}
