//! Geometric predicates for planar triangulations.
//!
//! Both predicates are backed by the adaptive-precision arithmetic of the
//! [`robust`] crate (Shewchuk's `orient2d`/`incircle`), so their signs are
//! exact for `f64` inputs. The triangulation core consumes them as black
//! boxes and only branches on the returned enums.
//!
//! The predicates never fail: coordinates that cannot be converted to `f64`
//! degrade to `NaN`, and any comparison involving `NaN` classifies as
//! [`Orientation::DEGENERATE`] / [`InCircle::BOUNDARY`].

use crate::geometry::traits::coordinate::{Coord2, scalar_to_f64};
use robust::{Coord, incircle, orient2d};
use serde::{Deserialize, Serialize};

/// Position of a query point relative to a triangle's circumcircle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InCircle {
    /// The point is strictly outside the circumcircle.
    OUTSIDE,
    /// The point lies on the circumcircle.
    BOUNDARY,
    /// The point is strictly inside the circumcircle.
    INSIDE,
}

impl std::fmt::Display for InCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Orientation of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// The triple winds clockwise (negative signed area).
    NEGATIVE,
    /// The triple is collinear (zero signed area).
    DEGENERATE,
    /// The triple winds counter-clockwise (positive signed area).
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

#[inline]
fn coord<P: Coord2>(p: &P) -> Coord<f64> {
    Coord {
        x: scalar_to_f64(p.x()),
        y: scalar_to_f64(p.y()),
    }
}

/// Sign of the signed area of the triangle `(p, q, r)`.
///
/// [`Orientation::POSITIVE`] means `r` lies strictly to the left of the
/// directed line `p → q`, i.e. the triple winds counter-clockwise.
///
/// The predicate is antisymmetric under swapping two arguments and invariant
/// under cyclic shifts.
///
/// # Examples
///
/// ```
/// use deltri::geometry::point::Point;
/// use deltri::geometry::predicates::{Orientation, orient};
///
/// let p = Point::new(0.0, 0.0);
/// let q = Point::new(1.0, 0.0);
/// let r = Point::new(0.0, 1.0);
/// assert_eq!(orient(&p, &q, &r), Orientation::POSITIVE);
/// assert_eq!(orient(&q, &p, &r), Orientation::NEGATIVE);
/// assert_eq!(orient(&p, &q, &Point::new(2.0, 0.0)), Orientation::DEGENERATE);
/// ```
#[must_use]
pub fn orient<P: Coord2>(p: &P, q: &P, r: &P) -> Orientation {
    let det = orient2d(coord(p), coord(q), coord(r));
    if det > 0.0 {
        Orientation::POSITIVE
    } else if det < 0.0 {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// Position of `p` relative to the circumcircle of the counter-clockwise
/// triangle `(a, b, c)`.
///
/// [`InCircle::INSIDE`] means `p` lies strictly inside the circumcircle. The
/// result is only meaningful when `(a, b, c)` winds counter-clockwise; a
/// clockwise triple flips the sign.
///
/// # Examples
///
/// ```
/// use deltri::geometry::point::Point;
/// use deltri::geometry::predicates::{InCircle, in_circle};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(2.0, 0.0);
/// let c = Point::new(0.0, 2.0);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new(0.5, 0.5)), InCircle::INSIDE);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new(5.0, 5.0)), InCircle::OUTSIDE);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new(2.0, 2.0)), InCircle::BOUNDARY);
/// ```
#[must_use]
pub fn in_circle<P: Coord2>(a: &P, b: &P, c: &P, p: &P) -> InCircle {
    let det = incircle(coord(a), coord(b), coord(c), coord(p));
    if det > 0.0 {
        InCircle::INSIDE
    } else if det < 0.0 {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}
