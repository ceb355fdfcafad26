//! Bounding-box statistics and the coordinates of the bounding triangle.
//!
//! Construction seeds the triangulation with a triangle large enough to
//! strictly contain every input point. Its three corners are *virtual*
//! vertices addressed by negative sentinels (see
//! [`crate::core::vertex`]); their coordinates are derived deterministically
//! from the input's bounding box by the formulas below.

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::{Coord2, scalar_to_f64};
use serde::{Deserialize, Serialize};

/// Lower bound on the bounding-box extent used when the input is empty or
/// fully degenerate (all points coincident, or collinear along an axis).
pub const MIN_WIDTH_HEIGHT: f64 = 1.0;

/// Horizontal shift factor for the bounding-triangle corners, in units of the
/// bounding-box extent. Large enough that all input points lie strictly
/// inside the triangle.
pub const BOUNDING_TRIANGLE_SHIFT: f64 = 10.0;

/// Which corner of the bounding triangle to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundingCorner {
    /// Corner below and to the right of the input.
    LowerRight,
    /// Corner below and to the left of the input.
    LowerLeft,
    /// Corner above the input.
    Upper,
}

/// Bounding-box statistics of a point collection.
///
/// `max_extent` is `max(width, height, MIN_WIDTH_HEIGHT)` of the axis-aligned
/// bounding box, and `(center_x, center_y)` its centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStats {
    /// Abscissa of the bounding-box centre.
    pub center_x: f64,
    /// Ordinate of the bounding-box centre.
    pub center_y: f64,
    /// Largest bounding-box extent, clamped from below by
    /// [`MIN_WIDTH_HEIGHT`].
    pub max_extent: f64,
}

/// Computes the bounding-box statistics of `points`.
///
/// An empty collection yields a unit box centred on the origin so that the
/// bounding triangle is still well defined.
///
/// # Examples
///
/// ```
/// use deltri::geometry::bounding::point_stats;
///
/// let stats = point_stats(&[[0.0, 0.0], [4.0, 2.0]]);
/// assert_eq!(stats.center_x, 2.0);
/// assert_eq!(stats.center_y, 1.0);
/// assert_eq!(stats.max_extent, 4.0);
/// ```
#[must_use]
pub fn point_stats<P: Coord2>(points: &[P]) -> PointStats {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in points {
        let x = scalar_to_f64(p.x());
        let y = scalar_to_f64(p.y());
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if points.is_empty() || !(min_x.is_finite() && max_y.is_finite()) {
        return PointStats {
            center_x: 0.0,
            center_y: 0.0,
            max_extent: MIN_WIDTH_HEIGHT,
        };
    }

    PointStats {
        center_x: 0.5 * (min_x + max_x),
        center_y: 0.5 * (min_y + max_y),
        max_extent: (max_x - min_x).max(max_y - min_y).max(MIN_WIDTH_HEIGHT),
    }
}

/// Coordinates of one bounding-triangle corner given precomputed statistics.
#[must_use]
pub fn bounding_corner_coords(stats: &PointStats, corner: BoundingCorner) -> Point<f64> {
    let shift = BOUNDING_TRIANGLE_SHIFT * stats.max_extent;
    match corner {
        BoundingCorner::LowerRight => Point::new(
            stats.center_x + shift,
            stats.center_y - stats.max_extent,
        ),
        BoundingCorner::LowerLeft => Point::new(
            stats.center_x - shift,
            stats.center_y - stats.max_extent,
        ),
        BoundingCorner::Upper => Point::new(stats.center_x, stats.center_y + shift),
    }
}

/// Coordinates of one bounding-triangle corner computed directly from the
/// point collection.
///
/// Scans the collection to recompute [`point_stats`]; construction code that
/// needs repeated lookups should compute the statistics once and use
/// [`bounding_corner_coords`].
#[must_use]
pub fn bounding_triangle_coords<P: Coord2>(points: &[P], corner: BoundingCorner) -> Point<f64> {
    bounding_corner_coords(&point_stats(points), corner)
}
