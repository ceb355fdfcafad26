//! # deltri
//!
//! Incremental planar [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
//! built around the Bowyer–Watson algorithm, with a randomised-incremental
//! (history-DAG) construction as an equivalence oracle.
//!
//! # Features
//!
//! - Incremental Bowyer–Watson point insertion, inside or outside the
//!   current hull
//! - Ghost triangles: hull edges are materialised as triangles through a
//!   vertex at infinity, so point location and insertion need no special
//!   cases at the boundary
//! - An adjacency index with `O(1)` neighbour queries, its reverse map, and
//!   a vertex connectivity graph, all mutated in lockstep
//! - Randomised-incremental construction after de Berg et al., with
//!   expected `O(log n)` history-DAG point location
//! - Exact geometric predicates (Shewchuk's adaptive arithmetic via the
//!   [`robust`] crate)
//! - Serialization/deserialization of every structure with [serde](https://serde.rs)
//!
//! # Basic usage
//!
//! ```rust
//! use deltri::prelude::*;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//!     Point::new(2.0, 1.0),
//! ];
//!
//! let tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
//!
//! // Four hull edges, Delaunay everywhere.
//! assert_eq!(tri.hull_edges().len(), 4);
//! assert!(tri.is_delaunay(&points).unwrap());
//! assert!(tri.is_valid().is_ok());
//!
//! // O(1) adjacency: which vertex completes the edge (1, 5) into a triangle?
//! let k = tri.adjacent().get_edge(1, 5);
//! assert!(tri.contains_triangle(&Triangle::new(1, 5, k)));
//! ```
//!
//! # Incremental insertion and ghost triangles
//!
//! ```rust
//! use deltri::prelude::*;
//!
//! let mut points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(1.0, 2.0),
//! ];
//! let mut tri = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
//!
//! // Inserting outside the hull needs the ghost layer.
//! tri.add_ghost_triangles();
//! points.push(Point::new(3.0, 2.0));
//! add_point_bowyer(&mut tri, &points, 4, DuplicatePolicy::Skip).unwrap();
//!
//! assert!(tri.hull_edges().iter().any(|&(u, v)| u == 4 || v == 4));
//! assert!(tri.is_delaunay(&points).unwrap());
//! ```
//!
//! # Engine equivalence
//!
//! The two constructions are interchangeable: for the same input (and the
//! same optional insertion-order seed) they produce equal triangulations
//! under [`compare_unconstrained_triangulations`](core::triangulation::compare_unconstrained_triangulations).
//!
//! ```rust
//! use deltri::prelude::*;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(5.0, 1.0),
//!     Point::new(3.0, 4.0),
//!     Point::new(1.0, 2.0),
//! ];
//! let bowyer = triangulate_bowyer(&points, TriangulateOptions::default()).unwrap();
//! let (berg, _dag) = triangulate_berg(&points, TriangulateOptions::default()).unwrap();
//! assert!(compare_unconstrained_triangulations(&bowyer, &berg));
//! ```
//!
//! # References
//!
//! - Bowyer, A. "Computing Dirichlet tessellations." *The Computer Journal*
//!   24.2 (1981).
//! - Watson, D.F. "Computing the n-dimensional Delaunay tessellation with
//!   application to Voronoi polytopes." *The Computer Journal* 24.2 (1981).
//! - de Berg, M., Cheong, O., van Kreveld, M., and Overmars, M.
//!   *Computational Geometry: Algorithms and Applications.* 3rd ed.
//!   Springer-Verlag, 2008. Chapter 9.
//! - Shewchuk, J.R. "Adaptive precision floating-point arithmetic and fast
//!   robust geometric predicates." *Discrete & Computational Geometry* 18.3
//!   (1997).

/// Primary data structures and algorithms for building and manipulating
/// planar Delaunay triangulations.
pub mod core {
    /// Construction, insertion, and point-location algorithms.
    pub mod algorithms {
        /// Incremental Bowyer–Watson construction.
        pub mod bowyer_watson;
        /// Randomised-incremental construction with a history DAG.
        pub mod de_berg;
        /// Types and helpers shared by both insertion engines.
        pub mod insertion;
        /// Point location: adjacency walk and history-DAG descent.
        pub mod locate;
        pub use bowyer_watson::*;
        pub use de_berg::*;
        pub use insertion::*;
        pub use locate::*;
    }
    pub mod adjacency;
    /// Collection types used throughout the triangulation core.
    pub mod collections;
    pub mod graph;
    pub mod history;
    pub mod triangle;
    pub mod triangulation;
    pub mod vertex;
    pub use adjacency::*;
    pub use graph::*;
    pub use history::*;
    pub use triangle::*;
    pub use triangulation::*;
    pub use vertex::*;
}

/// Geometric types and predicates: points, coordinate traits, exact
/// orientation and in-circle tests, and bounding-triangle arithmetic.
pub mod geometry {
    pub mod bounding;
    pub mod point;
    /// Random point generation for tests and benchmarks.
    pub mod point_generation;
    pub mod predicates;
    /// Coordinate abstractions.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use bounding::*;
    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
}

/// Re-exports of the commonly used types and functions.
pub mod prelude {
    pub use crate::core::{
        adjacency::{AdjacencyMap, ReverseAdjacencyMap, is_boundary_edge},
        algorithms::{
            bowyer_watson::{add_point_bowyer, triangulate_bowyer},
            de_berg::{add_point_berg, triangulate_berg},
            insertion::{
                DuplicatePolicy, InsertionError, InsertionInfo, TriangulateOptions,
                TriangulationConstructionError, insertion_order, remove_bounding_triangle,
            },
            locate::{LocateError, locate_triangle, locate_with_history},
        },
        graph::VertexGraph,
        history::{HistoryDag, HistoryNodeKey},
        triangle::{Triangle, TriangleSet, choose_uvw, circular_equality, compare_triangle_sets},
        triangulation::{
            Triangulation, TriangulationValidationError, compare_unconstrained_triangulations,
        },
        vertex::{
            BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE, Edge, FIRST_POINT_INDEX,
            LOWER_LEFT_BOUNDING_INDEX, LOWER_RIGHT_BOUNDING_INDEX, PointLookupError,
            UPPER_BOUNDING_INDEX, VertexId, get_point,
        },
    };

    pub use crate::core::collections::{FastHashMap, FastHashSet, SmallBuffer};

    pub use crate::geometry::{
        bounding::{
            BOUNDING_TRIANGLE_SHIFT, BoundingCorner, MIN_WIDTH_HEIGHT, PointStats,
            bounding_triangle_coords, point_stats,
        },
        point::Point,
        predicates::{InCircle, Orientation, in_circle, orient},
        traits::coordinate::{Coord2, CoordinateScalar},
    };
}

/// Checks that structs implement `auto` traits. Traits are checked at
/// compile time, so this function is only used for testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}
