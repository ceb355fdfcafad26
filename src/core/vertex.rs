//! Vertex indexing: input indices, sentinel vertices, and coordinate lookup.
//!
//! Vertices are addressed by signed integers. Indices at or above
//! [`FIRST_POINT_INDEX`] refer to positions in the caller's point collection
//! (index `i` names `points[i - FIRST_POINT_INDEX]`). A handful of negative
//! sentinels name vertices that have no slot in that collection:
//!
//! | Sentinel | Meaning |
//! |---|---|
//! | [`BOUNDARY_INDEX`] | the ghost vertex shared by all ghost triangles |
//! | [`LOWER_RIGHT_BOUNDING_INDEX`] | lower-right bounding-triangle corner |
//! | [`LOWER_LEFT_BOUNDING_INDEX`] | lower-left bounding-triangle corner |
//! | [`UPPER_BOUNDING_INDEX`] | upper bounding-triangle corner |
//! | [`DEFAULT_ADJACENT_VALUE`] | "no entry" value of the adjacency map |
//!
//! The concrete values are stable and part of the public API. Bounding
//! corners have real coordinates (computed from the input's bounding box);
//! the ghost vertex does not, and looking it up is an error.

use crate::geometry::bounding::{BoundingCorner, bounding_triangle_coords};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::{Coord2, scalar_to_f64};
use thiserror::Error;

/// Index type for triangulation vertices.
pub type VertexId = i32;

/// A directed edge between two vertices.
pub type Edge = (VertexId, VertexId);

/// Smallest index referring to the caller's point collection.
pub const FIRST_POINT_INDEX: VertexId = 1;

/// The ghost vertex at infinity. Every ghost triangle contains it; the
/// adjacency map sends the outward side of each hull edge to it.
pub const BOUNDARY_INDEX: VertexId = -1;

/// Lower-right corner of the bounding triangle.
pub const LOWER_RIGHT_BOUNDING_INDEX: VertexId = -2;

/// Lower-left corner of the bounding triangle.
pub const LOWER_LEFT_BOUNDING_INDEX: VertexId = -3;

/// Upper corner of the bounding triangle.
pub const UPPER_BOUNDING_INDEX: VertexId = -4;

/// Sentinel returned by adjacency lookups that have no entry.
pub const DEFAULT_ADJACENT_VALUE: VertexId = -5;

/// The three bounding-triangle sentinels, in counter-clockwise seed order.
pub const BOUNDING_INDICES: [VertexId; 3] = [
    LOWER_LEFT_BOUNDING_INDEX,
    LOWER_RIGHT_BOUNDING_INDEX,
    UPPER_BOUNDING_INDEX,
];

/// Errors from vertex coordinate lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PointLookupError {
    /// The index neither refers to a stored point nor names a vertex with
    /// coordinates.
    #[error("vertex {index} is out of range for a collection of {length} points")]
    OutOfRange {
        /// The offending vertex index.
        index: VertexId,
        /// Length of the point collection that was consulted.
        length: usize,
    },
}

/// Returns `true` when `index` names a bounding-triangle corner.
#[inline]
#[must_use]
pub const fn is_bounding_index(index: VertexId) -> bool {
    matches!(
        index,
        LOWER_RIGHT_BOUNDING_INDEX | LOWER_LEFT_BOUNDING_INDEX | UPPER_BOUNDING_INDEX
    )
}

/// Returns `true` when `index` refers to the caller's point collection.
#[inline]
#[must_use]
pub const fn is_input_index(index: VertexId) -> bool {
    index >= FIRST_POINT_INDEX
}

/// Looks up the coordinates of a vertex.
///
/// Input indices resolve into `points`; bounding sentinels resolve to the
/// deterministic bounding-triangle corners (recomputed from `points`, so this
/// path is `O(n)`). The ghost vertex has no coordinates.
///
/// # Errors
///
/// [`PointLookupError::OutOfRange`] when the index is past the end of
/// `points`, equals [`BOUNDARY_INDEX`], or is an unknown sentinel.
///
/// # Examples
///
/// ```
/// use deltri::core::vertex::{BOUNDARY_INDEX, FIRST_POINT_INDEX, get_point};
///
/// let points = [[0.0, 0.0], [2.0, 1.0]];
/// let p = get_point(&points, FIRST_POINT_INDEX + 1).unwrap();
/// assert_eq!((p.x(), p.y()), (2.0, 1.0));
/// assert!(get_point(&points, BOUNDARY_INDEX).is_err());
/// assert!(get_point(&points, 3).is_err());
/// ```
pub fn get_point<P: Coord2>(points: &[P], index: VertexId) -> Result<Point<f64>, PointLookupError> {
    if is_input_index(index) {
        #[allow(clippy::cast_sign_loss)]
        let position = (index - FIRST_POINT_INDEX) as usize;
        return points
            .get(position)
            .map(|p| Point::new(scalar_to_f64(p.x()), scalar_to_f64(p.y())))
            .ok_or(PointLookupError::OutOfRange {
                index,
                length: points.len(),
            });
    }

    let corner = match index {
        LOWER_RIGHT_BOUNDING_INDEX => BoundingCorner::LowerRight,
        LOWER_LEFT_BOUNDING_INDEX => BoundingCorner::LowerLeft,
        UPPER_BOUNDING_INDEX => BoundingCorner::Upper,
        _ => {
            return Err(PointLookupError::OutOfRange {
                index,
                length: points.len(),
            });
        }
    };
    Ok(bounding_triangle_coords(points, corner))
}
