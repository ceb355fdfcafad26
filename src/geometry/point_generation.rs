//! Random point generation for tests and benchmarks.

use crate::geometry::point::Point;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Errors from the random point generators.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RandomPointGenerationError {
    /// The requested coordinate range is empty.
    #[error("invalid coordinate range: min {min} must be below max {max}")]
    InvalidRange {
        /// Formatted lower bound.
        min: String,
        /// Formatted upper bound.
        max: String,
    },
}

/// Generates `n_points` uniformly distributed points with both coordinates in
/// `range`, using a seeded RNG for reproducible results.
///
/// # Errors
///
/// Returns [`RandomPointGenerationError::InvalidRange`] if `range.0 >= range.1`.
///
/// # Examples
///
/// ```
/// use deltri::geometry::point_generation::generate_random_points_seeded;
///
/// let a = generate_random_points_seeded(100, (-5.0, 5.0), 42).unwrap();
/// let b = generate_random_points_seeded(100, (-5.0, 5.0), 42).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 100);
/// ```
pub fn generate_random_points_seeded(
    n_points: usize,
    range: (f64, f64),
    seed: u64,
) -> Result<Vec<Point<f64>>, RandomPointGenerationError> {
    if range.0 >= range.1 {
        return Err(RandomPointGenerationError::InvalidRange {
            min: format!("{:?}", range.0),
            max: format!("{:?}", range.1),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        let x = rng.random_range(range.0..range.1);
        let y = rng.random_range(range.0..range.1);
        points.push(Point::new(x, y));
    }
    Ok(points)
}
