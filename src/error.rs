use std::fmt;

/// Common errors thrown by kpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The upper bound of the sampling range is negative, infinite or NaN.
    InvalidMaximum(f64),

    /// A palette was requested for zero clusters.
    EmptyPalette,

    /// A cluster id has no color in the palette.
    ClusterOutOfPalette {
        /// The offending cluster id.
        cluster: usize,
        /// The number of colors in the palette.
        clusters: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMaximum(maximum) => write!(
                f,
                "invalid coordinate maximum {maximum}, expected a finite non-negative number"
            ),
            Error::EmptyPalette => write!(f, "cannot build a palette for zero clusters"),
            Error::ClusterOutOfPalette { cluster, clusters } => write!(
                f,
                "cluster id {cluster} is out of the palette ({clusters} clusters were declared)"
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
