//! Text formats for 2D point sets and their cluster labels.
//!
//! Both formats are line-based:
//!
//! - point files hold one point per line, as two whitespace-separated
//!   coordinates (`x y`),
//! - label files hold one cluster label per line.
//!
//! Blank lines are ignored when reading.

use std::error;
use std::fmt;
use std::io;
use std::num;

pub mod labels;
pub mod points;

#[derive(Debug)]
pub enum ErrorKind {
    /// A line does not have the expected number of fields.
    FieldCount { expected: usize, found: usize },
    BadInteger(num::ParseIntError),
    BadFloat(num::ParseFloatError),
    Io(io::Error),
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

    /// One-based line number where the error occurred, zero if unknown.
    pub fn lineno(&self) -> usize {
        self.lineno
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            ErrorKind::BadInteger(err) => write!(f, "when parsing integer: {}", err),
            ErrorKind::BadFloat(err) => write!(f, "when parsing float: {}", err),
            ErrorKind::Io(_) => write!(f, "read/write error"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at line {}: {}", self.lineno, self.kind)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::BadInteger(err) => Some(err),
            ErrorKind::BadFloat(err) => Some(err),
            ErrorKind::FieldCount { .. } => None,
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

/// Calls `f` with the fields of every non-blank line.
///
/// Errors returned by `f` are tagged with the current line number.
fn for_each_record<R, F>(r: R, mut f: F) -> Result<()>
where
    R: io::BufRead,
    F: FnMut(&[&str]) -> Result<()>,
{
    for (i, line) in r.lines().enumerate() {
        let lineno = i + 1;
        let line = line.map_err(with_lineno(lineno))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        f(&fields).map_err(with_lineno(lineno))?;
    }
    Ok(())
}
