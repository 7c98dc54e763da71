//! Plain point files: one `x y` record per line.
//!
//! Real coordinates are written with three decimals, right-aligned on ten
//! characters; integer coordinates are written as is.

use crate::coordinate;
use crate::read_records;
use crate::Result;
use std::io;

/// A set of points, with either real or integer coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Points {
    Floats(Vec<[f64; 2]>),
    Integers(Vec<[i64; 2]>),
}

impl Points {
    pub fn len(&self) -> usize {
        match self {
            Points::Floats(points) => points.len(),
            Points::Integers(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
    pub fn write<W>(&self, w: W) -> io::Result<()>
    where
        W: io::Write,
    {
        match self {
            Points::Floats(points) => write_floats(w, points.iter().copied()),
            Points::Integers(points) => write_integers(w, points.iter().copied()),
        }
    }
}

/// Integer coordinates are read as reals.
pub fn read<R>(r: R) -> Result<Vec<[f64; 2]>>
where
    R: io::BufRead,
{
    read_records::<_, _, _, 2>(r, |[x, y]| Ok([coordinate(x)?, coordinate(y)?]))
}

/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
pub fn write_floats<I, W>(mut w: W, points: I) -> io::Result<()>
where
    I: IntoIterator<Item = [f64; 2]>,
    W: io::Write,
{
    for [x, y] in points {
        writeln!(w, "{x:10.3} {y:10.3}")?;
    }
    w.flush()
}

/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
pub fn write_integers<I, W>(mut w: W, points: I) -> io::Result<()>
where
    I: IntoIterator<Item = [i64; 2]>,
    W: io::Write,
{
    for [x, y] in points {
        writeln!(w, "{x} {y}")?;
    }
    w.flush()
}
