//! Random 2D point sets and the colors of their clusters.
//!
//! # Crate Layout
//!
//! - [`sampling`] draws points uniformly in a square `[0, maximum]²`, either
//!   as reals or as integers.
//! - [`palette`] builds the categorical colors used to tell clusters apart
//!   once an external K-Means program has labeled a point set.
//! - [`BoundingBox`] gives the extent of a point set, for plotting.
//!
//! File formats live in the `point-io` crate and the command-line tools in
//! `kpoints-tools`.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod error;
mod geometry;
pub mod palette;
pub mod sampling;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::geometry::BoundingBox;
pub use crate::geometry::Point2D;
pub use crate::palette::Palette;
pub use crate::palette::Rgb;
pub use crate::sampling::Range;

pub use nalgebra;
pub use rand;
