use crate::types::Triangle;
use core::fmt;

/// Errors reported by the parsing and geometry layers.
///
/// Everything here is fatal for a one-shot viewer; the binary prints the
/// message and exits non-zero.
#[derive(Debug)]
pub enum Error {
    /// The input file could not be opened or read.
    Io(std::io::Error),
    /// A line of the input failed numeric parsing, or the file ended
    /// before the announced number of points. `line` is 1-based.
    Parse { line: usize, what: String },
    /// An edge references a point index outside `0..points`, or both
    /// endpoints are the same point.
    EdgeOutOfRange { edge: (usize, usize), points: usize },
    /// Three collinear points have no circumscribed circle.
    CollinearTriangle(Triangle),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Parse { line, what } => write!(f, "parse error at line {line}: {what}"),
            Self::EdgeOutOfRange { edge, points } => {
                write!(
                    f,
                    "edge ({}, {}) is invalid for a mesh with {} points",
                    edge.0, edge.1, points
                )
            }
            Self::CollinearTriangle([x, y, z]) => {
                write!(f, "triangle ({x}, {y}, {z}) is collinear, no circumcircle exists")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
