//! Uniform sampling of 2D points.
//!
//! Both coordinates of a point are drawn independently from the closed
//! interval `[0, maximum]`.

use crate::Error;
use crate::Point2D;
use crate::Result;
use rand::Rng;

/// Closed sampling interval `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    maximum: f64,
}

impl Range {
    /// Fails when `maximum` is negative, infinite or NaN.
    pub fn new(maximum: f64) -> Result<Self> {
        if !maximum.is_finite() || maximum < 0.0 {
            return Err(Error::InvalidMaximum(maximum));
        }
        Ok(Self { maximum })
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn contains(&self, value: f64) -> bool {
        (0.0..=self.maximum).contains(&value)
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(0.0..=self.maximum)
    }

    fn sample_integer<R: Rng>(&self, rng: &mut R) -> i64 {
        // Integer bounds are floored, the interval stays within `[0, maximum]`.
        rng.gen_range(0..=self.maximum as i64)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self { maximum: 5000.0 }
    }
}

/// Draws `count` points with real coordinates.
pub fn uniform_points<R: Rng>(rng: &mut R, count: usize, range: Range) -> Vec<Point2D> {
    tracing::debug!(count, maximum = range.maximum, "sampling real points");
    (0..count)
        .map(|_| Point2D::new(range.sample(rng), range.sample(rng)))
        .collect()
}

/// Draws `count` points with integer coordinates.
pub fn uniform_integer_points<R: Rng>(rng: &mut R, count: usize, range: Range) -> Vec<[i64; 2]> {
    tracing::debug!(count, maximum = range.maximum, "sampling integer points");
    (0..count)
        .map(|_| [range.sample_integer(rng), range.sample_integer(rng)])
        .collect()
}
