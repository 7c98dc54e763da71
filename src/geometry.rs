//! A few useful geometric types

use itertools::Itertools as _;
use itertools::MinMaxResult::{MinMax, NoElements, OneElement};
use nalgebra::Vector2;

pub type Point2D = Vector2<f64>;

/// Axis-aligned box that contains every point of a set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    p_min: Point2D,
    p_max: Point2D,
}

impl BoundingBox {
    pub fn from_coord(p_min: Point2D, p_max: Point2D) -> Self {
        Self { p_min, p_max }
    }

    /// Returns `None` when `points` is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
        I::IntoIter: Clone,
    {
        let points = points.into_iter();
        let x_minmax = match points.clone().map(|p| p.x).minmax_by(f64::total_cmp) {
            NoElements => return None,
            OneElement(x) => (x, x),
            MinMax(x_min, x_max) => (x_min, x_max),
        };
        let y_minmax = match points.map(|p| p.y).minmax_by(f64::total_cmp) {
            NoElements => return None,
            OneElement(y) => (y, y),
            MinMax(y_min, y_max) => (y_min, y_max),
        };

        Some(Self {
            p_min: Point2D::new(x_minmax.0, y_minmax.0),
            p_max: Point2D::new(x_minmax.1, y_minmax.1),
        })
    }

    pub fn p_min(&self) -> &Point2D {
        &self.p_min
    }

    pub fn p_max(&self) -> &Point2D {
        &self.p_max
    }

    pub fn width(&self) -> f64 {
        self.p_max.x - self.p_min.x
    }

    pub fn height(&self) -> f64 {
        self.p_max.y - self.p_min.y
    }

    pub fn contains(&self, point: &Point2D) -> bool {
        self.p_min.x <= point.x
            && point.x <= self.p_max.x
            && self.p_min.y <= point.y
            && point.y <= self.p_max.y
    }

    /// Whether both corners and both extents are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.p_min.iter().chain(self.p_max.iter()).all(|c| c.is_finite())
            && self.width().is_finite()
            && self.height().is_finite()
    }

    /// Grows the box by `ratio` of its size on every side.
    ///
    /// Flat dimensions (a single point, or aligned points) are grown by one
    /// unit instead, so that the result always has a non-zero area.
    pub fn padded(&self, ratio: f64) -> Self {
        let pad = |extent: f64| {
            if extent.abs() < f64::EPSILON {
                1.0
            } else {
                extent * ratio
            }
        };
        let pad = Point2D::new(pad(self.width()), pad(self.height()));
        Self {
            p_min: self.p_min - pad,
            p_max: self.p_max + pad,
        }
    }
}
