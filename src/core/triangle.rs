//! Triangles, rotation-tolerant equality, and the triangle set.

use crate::core::collections::FastHashSet;
use crate::core::vertex::{
    BOUNDARY_INDEX, BOUNDING_INDICES, Edge, VertexId, is_bounding_index,
};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An ordered triple of vertex indices with counter-clockwise orientation by
/// convention.
///
/// A triangle is *rotationally equivalent* to its two cyclic shifts:
/// `(i, j, k)`, `(j, k, i)` and `(k, i, j)` denote the same triangle, and
/// both [`PartialEq`] and [`Hash`] honour that. The stored rotation is
/// preserved — nothing in the crate assumes a canonical one.
///
/// # Examples
///
/// ```
/// use deltri::core::triangle::Triangle;
///
/// let t = Triangle::new(1, 2, 3);
/// assert_eq!(t, Triangle::new(2, 3, 1));
/// assert_eq!(t, Triangle::new(3, 1, 2));
/// assert_ne!(t, Triangle::new(3, 2, 1)); // reflection, not rotation
/// ```
#[derive(Clone, Copy, Debug, Eq, Serialize, Deserialize)]
pub struct Triangle {
    i: VertexId,
    j: VertexId,
    k: VertexId,
}

impl Triangle {
    /// Creates a triangle from its three vertex indices.
    #[inline]
    #[must_use]
    pub const fn new(i: VertexId, j: VertexId, k: VertexId) -> Self {
        Self { i, j, k }
    }

    /// The bounding triangle seeded at the start of construction.
    #[must_use]
    pub const fn bounding() -> Self {
        Self::new(BOUNDING_INDICES[0], BOUNDING_INDICES[1], BOUNDING_INDICES[2])
    }

    /// First vertex of the stored rotation.
    #[inline]
    #[must_use]
    pub const fn i(&self) -> VertexId {
        self.i
    }

    /// Second vertex of the stored rotation.
    #[inline]
    #[must_use]
    pub const fn j(&self) -> VertexId {
        self.j
    }

    /// Third vertex of the stored rotation.
    #[inline]
    #[must_use]
    pub const fn k(&self) -> VertexId {
        self.k
    }

    /// The three vertex indices in stored order.
    #[inline]
    #[must_use]
    pub const fn indices(&self) -> (VertexId, VertexId, VertexId) {
        (self.i, self.j, self.k)
    }

    /// The triangle rotated left by `shift` positions (`shift ∈ {0, 1, 2}`).
    #[inline]
    #[must_use]
    pub const fn shifted(&self, shift: u8) -> Self {
        match shift % 3 {
            1 => Self::new(self.j, self.k, self.i),
            2 => Self::new(self.k, self.i, self.j),
            _ => *self,
        }
    }

    /// The three directed edges of the stored rotation.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> [Edge; 3] {
        [(self.i, self.j), (self.j, self.k), (self.k, self.i)]
    }

    /// Returns `true` when `v` is one of the triangle's vertices.
    #[inline]
    #[must_use]
    pub const fn contains_vertex(&self, v: VertexId) -> bool {
        self.i == v || self.j == v || self.k == v
    }

    /// Returns `true` for ghost triangles, i.e. triangles containing the
    /// ghost vertex [`BOUNDARY_INDEX`].
    #[inline]
    #[must_use]
    pub const fn is_ghost(&self) -> bool {
        self.contains_vertex(BOUNDARY_INDEX)
    }

    /// Returns `true` when any vertex is a bounding-triangle corner.
    #[inline]
    #[must_use]
    pub const fn touches_bounding(&self) -> bool {
        is_bounding_index(self.i) || is_bounding_index(self.j) || is_bounding_index(self.k)
    }

    /// For a ghost triangle, the rotation that puts the ghost vertex last,
    /// so that `(i, j)` is the ghost's hull edge. `None` for solid triangles.
    #[must_use]
    pub fn ghost_rotation(&self) -> Option<Self> {
        if self.k == BOUNDARY_INDEX {
            Some(*self)
        } else if self.i == BOUNDARY_INDEX {
            Some(self.shifted(1))
        } else if self.j == BOUNDARY_INDEX {
            Some(self.shifted(2))
        } else {
            None
        }
    }

    /// The lexicographically smallest rotation; basis for equality and
    /// hashing.
    #[must_use]
    fn canonical(&self) -> (VertexId, VertexId, VertexId) {
        let a = (self.i, self.j, self.k);
        let b = (self.j, self.k, self.i);
        let c = (self.k, self.i, self.j);
        a.min(b).min(c)
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl std::fmt::Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

/// Returns `true` when two triangles are equal modulo cyclic rotation.
///
/// Equivalent to `a == b`; provided as a named operation for call sites that
/// compare raw index triples.
#[inline]
#[must_use]
pub fn circular_equality(a: &Triangle, b: &Triangle) -> bool {
    a == b
}

/// Selects one of the three rotations of `(i, j, k)`.
///
/// Exactly one of the flags must be set: `first` picks `(i, j, k)`, `second`
/// picks `(j, k, i)`, `third` picks `(k, i, j)`.
///
/// # Examples
///
/// ```
/// use deltri::core::triangle::choose_uvw;
///
/// assert_eq!(choose_uvw(true, false, false, 1, 2, 3), (1, 2, 3));
/// assert_eq!(choose_uvw(false, true, false, 1, 2, 3), (2, 3, 1));
/// assert_eq!(choose_uvw(false, false, true, 1, 2, 3), (3, 1, 2));
/// ```
#[must_use]
pub fn choose_uvw(
    first: bool,
    second: bool,
    third: bool,
    i: VertexId,
    j: VertexId,
    k: VertexId,
) -> (VertexId, VertexId, VertexId) {
    debug_assert_eq!(
        usize::from(first) + usize::from(second) + usize::from(third),
        1,
        "exactly one rotation flag must be set"
    );
    if first {
        (i, j, k)
    } else if second {
        (j, k, i)
    } else {
        (k, i, j)
    }
}

/// A set of triangles with rotation-tolerant membership.
///
/// Because [`Triangle`] equality is modulo rotation, inserting `(i, j, k)`
/// and then `(j, k, i)` stores a single element, and removal drops whichever
/// rotation was stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleSet {
    triangles: FastHashSet<Triangle>,
}

impl TriangleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triangle; returns `false` when a rotation of it was already
    /// present.
    pub fn insert(&mut self, triangle: Triangle) -> bool {
        self.triangles.insert(triangle)
    }

    /// Removes a triangle (any rotation); returns whether it was present.
    pub fn remove(&mut self, triangle: &Triangle) -> bool {
        self.triangles.remove(triangle)
    }

    /// Membership modulo rotation.
    #[must_use]
    pub fn contains(&self, triangle: &Triangle) -> bool {
        self.triangles.contains(triangle)
    }

    /// Iterates over the stored triangles in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    /// Number of stored triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` when the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl FromIterator<Triangle> for TriangleSet {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TriangleSet {
    type Item = &'a Triangle;
    type IntoIter = std::collections::hash_set::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// Returns `true` when two collections hold the same triangles modulo cyclic
/// rotation.
///
/// # Examples
///
/// ```
/// use deltri::core::triangle::{Triangle, TriangleSet, compare_triangle_sets};
///
/// let a: TriangleSet = [Triangle::new(1, 2, 3)].into_iter().collect();
/// let b: TriangleSet = [Triangle::new(2, 3, 1)].into_iter().collect();
/// assert!(compare_triangle_sets(&a, &b));
/// ```
#[must_use]
pub fn compare_triangle_sets(a: &TriangleSet, b: &TriangleSet) -> bool {
    a == b
}
