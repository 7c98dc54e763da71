//! Encoders and decoders for 2D point files.
//!
//! Both formats are ASCII, one record per line, fields separated by any
//! amount of spaces or tabs, with no header:
//!
//! - [`plain`] point files hold `x y` records,
//! - [`labeled`] point files hold `x y cluster` records, as written by a
//!   clustering program for the matching plain file.
//!
//! Blank lines are skipped. Any other deviation (wrong column count, bad
//! number) is an error that carries the 1-based line number.

use std::error;
use std::fmt;
use std::io;
use std::num;

pub mod labeled;
pub mod plain;

pub use labeled::LabeledPoint;

#[derive(Debug)]
pub enum ErrorKind {
    ColumnCount { expected: usize, found: usize },
    NotFinite(String),
    Io(io::Error),
    BadInteger(num::ParseIntError),
    BadFloat(num::ParseFloatError),
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    lineno: usize,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Line at which the error happened, or zero if it is not tied to a
    /// line.
    pub fn lineno(&self) -> usize {
        self.lineno
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ColumnCount { expected, found } => {
                write!(f, "expected {} columns, found {}", expected, found)
            }
            ErrorKind::NotFinite(field) => {
                write!(f, "expected a finite coordinate, found {:?}", field)
            }
            ErrorKind::Io(err) => write!(f, "io error: {}", err),
            ErrorKind::BadInteger(err) => write!(f, "when parsing integer: {}", err),
            ErrorKind::BadFloat(err) => write!(f, "when parsing float: {}", err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lineno == 0 {
            self.kind.fmt(f)
        } else {
            write!(f, "at line {}: {}", self.lineno, self.kind)
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::BadInteger(err) => Some(err),
            ErrorKind::BadFloat(err) => Some(err),
            ErrorKind::ColumnCount { .. } | ErrorKind::NotFinite(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            lineno: 0,
        }
    }
}

impl From<num::ParseIntError> for Error {
    fn from(err: num::ParseIntError) -> Error {
        Error {
            kind: ErrorKind::BadInteger(err),
            lineno: 0,
        }
    }
}

impl From<num::ParseFloatError> for Error {
    fn from(err: num::ParseFloatError) -> Error {
        Error {
            kind: ErrorKind::BadFloat(err),
            lineno: 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn with_lineno<E>(lineno: usize) -> impl Fn(E) -> Error
where
    E: Into<Error>,
{
    move |err: E| {
        let mut err = err.into();
        err.lineno = lineno;
        err
    }
}

/// Parses a coordinate, rejecting infinities and NaN.
fn coordinate(field: &str) -> Result<f64> {
    let value: f64 = field.parse()?;
    if !value.is_finite() {
        return Err(Error {
            kind: ErrorKind::NotFinite(field.to_owned()),
            lineno: 0,
        });
    }
    Ok(value)
}

/// Reads every non-blank line of `r`, splits it into exactly `N` fields and
/// hands them to `parse` along with the line number.
fn read_records<R, T, F, const N: usize>(r: R, mut parse: F) -> Result<Vec<T>>
where
    R: io::BufRead,
    F: FnMut([&str; N]) -> Result<T>,
{
    let mut records = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let lineno = i + 1;
        let line = line.map_err(with_lineno(lineno))?;
        let mut fields = [""; N];
        let mut found = 0;
        for field in line.split_ascii_whitespace() {
            if found < N {
                fields[found] = field;
            }
            found += 1;
        }
        if found == 0 {
            continue;
        }
        if found != N {
            return Err(Error {
                kind: ErrorKind::ColumnCount { expected: N, found },
                lineno,
            });
        }
        records.push(parse(fields).map_err(with_lineno(lineno))?);
    }
    Ok(records)
}
