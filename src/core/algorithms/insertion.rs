//! Types and helpers shared by both insertion engines.
//!
//! Both engines follow the same lifecycle: seed the bounding triangle,
//! insert every input point (in input order, or in a caller-seeded random
//! permutation), then remove the bounding vertices and mark the hull. The
//! pieces of that lifecycle that do not depend on the engine live here.

use crate::core::history::HistoryError;
use crate::core::triangle::Triangle;
use crate::core::triangulation::Triangulation;
use crate::core::vertex::{
    BOUNDARY_INDEX, BOUNDING_INDICES, Edge, FIRST_POINT_INDEX, PointLookupError, VertexId,
    get_point, is_input_index,
};
use crate::core::algorithms::locate::LocateError;
use crate::geometry::point::Point;
use crate::geometry::predicates::{InCircle, Orientation, in_circle, orient};
use crate::geometry::traits::coordinate::Coord2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when an inserted point coincides with an existing vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Silently skip the point; the triangulation is unchanged.
    #[default]
    Skip,
    /// Surface [`InsertionError::DuplicatePoint`] to the caller.
    Error,
}

/// Options for the batch construction functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangulateOptions {
    /// When set, points are inserted in a random permutation drawn from a
    /// `StdRng` seeded with this value; `None` inserts in input order.
    /// The same seed yields the same permutation in both engines.
    pub seed: Option<u64>,
    /// Duplicate-point policy applied to every insertion.
    pub duplicate_policy: DuplicatePolicy,
}

impl TriangulateOptions {
    /// Options with a fixed insertion-order seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Outcome of a single point insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionInfo {
    /// Triangles created by this insertion (ghosts included).
    pub triangles_created: usize,
    /// Triangles destroyed by this insertion (ghosts included).
    pub triangles_removed: usize,
    /// `true` when the point coincided with an existing vertex and was
    /// skipped under [`DuplicatePolicy::Skip`].
    pub duplicate: bool,
}

impl InsertionInfo {
    pub(crate) const DUPLICATE: Self = Self {
        triangles_created: 0,
        triangles_removed: 0,
        duplicate: true,
    };
}

/// Errors from single-point insertion.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum InsertionError {
    /// Point location failed.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// A vertex index did not resolve to coordinates.
    #[error(transparent)]
    PointLookup(#[from] PointLookupError),

    /// The point coincides with an existing vertex and the policy is
    /// [`DuplicatePolicy::Error`].
    #[error("point {index} duplicates an existing vertex")]
    DuplicatePoint {
        /// Index of the rejected point.
        index: VertexId,
    },

    /// The point lies outside the hull and no ghost triangles are
    /// materialised, so there is no triangle to insert into.
    #[error("point {index} lies outside the hull and no ghost triangles are present")]
    PointOutsideHull {
        /// Index of the rejected point.
        index: VertexId,
    },

    /// The history DAG disagreed with the triangulation.
    #[error("history DAG inconsistency: {source}")]
    History {
        /// The underlying bookkeeping error.
        #[from]
        source: HistoryError,
    },
}

/// Errors from batch construction.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TriangulationConstructionError {
    /// More points than 32-bit vertex indices can address.
    #[error("too many points for 32-bit vertex indices: {count}")]
    TooManyPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// Inserting one of the points failed.
    #[error("failed to insert point {index}: {source}")]
    InsertionFailed {
        /// Index of the point whose insertion failed.
        index: VertexId,
        /// The underlying insertion error.
        source: InsertionError,
    },
}

/// The order in which to insert `n_points` input points: input order, or a
/// seeded random permutation.
#[must_use]
pub fn insertion_order(n_points: usize, seed: Option<u64>) -> Vec<VertexId> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let mut order: Vec<VertexId> = (0..n_points)
        .map(|n| FIRST_POINT_INDEX + n as VertexId)
        .collect();
    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
    }
    order
}

pub(crate) fn check_point_count(count: usize) -> Result<(), TriangulationConstructionError> {
    #[allow(clippy::cast_sign_loss)]
    if count > (VertexId::MAX - FIRST_POINT_INDEX) as usize {
        return Err(TriangulationConstructionError::TooManyPoints { count });
    }
    Ok(())
}

/// In-circle test extended to ghost triangles.
///
/// For a solid triangle this is the plain circumcircle test. For a ghost
/// `(u, v, BOUNDARY_INDEX)` the "circumcircle" is the outer half-plane of
/// its hull edge: the test holds exactly when `orient(u, v, p)` is
/// [`Orientation::POSITIVE`]; ties count as outside.
pub(crate) fn circumcircle_contains<P: Coord2>(
    points: &[P],
    triangle: &Triangle,
    p: &Point<f64>,
) -> Result<bool, PointLookupError> {
    if let Some(rotated) = triangle.ghost_rotation() {
        let (u, v, _) = rotated.indices();
        let pu = get_point(points, u)?;
        let pv = get_point(points, v)?;
        return Ok(orient(&pu, &pv, p) == Orientation::POSITIVE);
    }
    let (i, j, k) = triangle.indices();
    let pi = get_point(points, i)?;
    let pj = get_point(points, j)?;
    let pk = get_point(points, k)?;
    Ok(in_circle(&pi, &pj, &pk, p) == InCircle::INSIDE)
}

/// The vertex of `triangle` whose coordinates equal `p` exactly, if any.
/// The ghost vertex is skipped.
pub(crate) fn coincident_vertex<P: Coord2>(
    points: &[P],
    triangle: &Triangle,
    p: &Point<f64>,
) -> Result<Option<VertexId>, PointLookupError> {
    let (i, j, k) = triangle.indices();
    for v in [i, j, k] {
        if v == BOUNDARY_INDEX {
            continue;
        }
        let q = get_point(points, v)?;
        if q == *p {
            return Ok(Some(v));
        }
    }
    Ok(None)
}

/// Deletes every triangle incident to a bounding-triangle corner and
/// re-marks the hull of what remains: for each surviving hull edge
/// `(u, v)`, the outward side `(v, u)` is mapped to [`BOUNDARY_INDEX`] and
/// mirrored under the ghost vertex.
///
/// Leaves defaulted adjacency keys behind; callers normally follow up with
/// [`Triangulation::clear_empty_keys`].
pub fn remove_bounding_triangle(tri: &mut Triangulation) {
    for corner in BOUNDING_INDICES {
        let incident: Vec<Edge> = tri.adjacent_to_vertex().edges(corner).collect();
        for (i, j) in incident {
            tri.delete_triangle(Triangle::new(i, j, corner));
        }
    }

    // The seed marks on the bounding triangle's outer sides are stale now.
    let stale: Vec<Edge> = tri.adjacent_to_vertex().edges(BOUNDARY_INDEX).collect();
    for edge in stale {
        tri.unmark_boundary_edge(edge);
    }

    let mut hull_backsides: Vec<Edge> = Vec::new();
    for triangle in tri.triangles().iter() {
        for (u, v) in triangle.edges() {
            if !tri.adjacent().edge_exists(v, u) {
                hull_backsides.push((v, u));
            }
        }
    }
    for edge in hull_backsides {
        tri.mark_boundary_edge(edge);
    }
}

/// Flood-fills the cavity of `p` from `seed` and reports its boundary.
///
/// The cavity is the connected set of triangles around `seed` whose
/// (ghost-extended) circumcircle strictly contains `p`; a boundary edge is a
/// directed edge of a cavity triangle whose far side is not in the cavity.
/// The triangulation is not mutated.
pub(crate) fn dig_cavity<P: Coord2>(
    tri: &Triangulation,
    points: &[P],
    p: &Point<f64>,
    seed: Triangle,
) -> Result<(Vec<Triangle>, Vec<Edge>), PointLookupError> {
    let mut cavity: Vec<Triangle> = Vec::new();
    let mut in_cavity = crate::core::collections::FastHashSet::default();
    let mut stack: Vec<Triangle> = vec![seed];
    in_cavity.insert(seed);

    while let Some(triangle) = stack.pop() {
        cavity.push(triangle);
        for (u, v) in triangle.edges() {
            if let Some(neighbour) = tri.triangle_across(u, v) {
                if !in_cavity.contains(&neighbour)
                    && circumcircle_contains(points, &neighbour, p)?
                {
                    in_cavity.insert(neighbour);
                    stack.push(neighbour);
                }
            }
        }
    }

    let mut boundary: Vec<Edge> = Vec::new();
    for triangle in &cavity {
        for (u, v) in triangle.edges() {
            let interior = tri
                .triangle_across(u, v)
                .is_some_and(|n| in_cavity.contains(&n));
            if !interior {
                boundary.push((u, v));
            }
        }
    }
    Ok((cavity, boundary))
}

/// Validates that `r` addresses a point of `points`.
pub(crate) fn check_insertable_index<P: Coord2>(
    points: &[P],
    r: VertexId,
) -> Result<Point<f64>, PointLookupError> {
    if !is_input_index(r) {
        return Err(PointLookupError::OutOfRange {
            index: r,
            length: points.len(),
        });
    }
    get_point(points, r)
}
