//! Error types for grid construction and cell access.

use crate::pos::Pos;
use std::error::Error;
use std::fmt;
use std::io;

/// Errors arising from loading a grid or addressing its cells.
#[derive(Debug)]
pub enum GridError {
    /// The input could not be opened or read.
    Io(io::Error),
    /// A row's length differs from the first row's length.
    ///
    /// Construction aborts; no partial grid is produced.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// `width * height` does not fit in memory addressing.
    DimensionTooLarge {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// The offending coordinate.
        pos: Pos,
        /// Grid width at the time of access.
        width: usize,
        /// Grid height at the time of access.
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "bad line width: row {row} has {found} bytes, expected {expected}"
            ),
            Self::DimensionTooLarge { width, height } => {
                write!(f, "grid of {width} x {height} cells is too large")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "out of bounds: {pos} not in [0, {width}) x [0, {height})")
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
