//! Labeled point files: one `x y cluster` record per line.

use crate::coordinate;
use crate::read_records;
use crate::Result;
use std::io;

/// A point tagged with the id of the cluster it was assigned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledPoint {
    pub point: [f64; 2],
    pub cluster: usize,
}

/// Cluster ids must be non-negative integers.
pub fn read<R>(r: R) -> Result<Vec<LabeledPoint>>
where
    R: io::BufRead,
{
    read_records::<_, _, _, 3>(r, |[x, y, cluster]| {
        Ok(LabeledPoint {
            point: [coordinate(x)?, coordinate(y)?],
            cluster: cluster.parse()?,
        })
    })
}

/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
///
/// Columns are right-aligned on 12, 12 and 4 characters.
pub fn write<I, W>(mut w: W, points: I) -> io::Result<()>
where
    I: IntoIterator<Item = LabeledPoint>,
    W: io::Write,
{
    for LabeledPoint {
        point: [x, y],
        cluster,
    } in points
    {
        writeln!(w, "{x:12} {y:12} {cluster:4}")?;
    }
    w.flush()
}
