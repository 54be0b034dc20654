//! Puzzle input fixtures.
//!
//! A [`Fixture`] holds the bytes of one input file and hands them out line
//! by line, either as raw strings, parsed values, or a whole [`Grid`].

use pegboard_core::GridError;
use pegboard_grid::Grid;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Errors from loading or parsing a fixture.
#[derive(Debug)]
pub enum FixtureError {
    /// The fixture file could not be read.
    Io(io::Error),
    /// The fixture is not a well-formed grid.
    Grid(GridError),
    /// A line did not parse as the requested type.
    Parse {
        /// 1-based line number within the fixture.
        line: usize,
        /// The offending text.
        value: String,
    },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Parse { line, value } => write!(f, "line {line}: cannot parse {value:?}"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for FixtureError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for FixtureError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// A named puzzle input, read fully into memory.
///
/// Iterating yields each line without its terminator. A trailing newline
/// does not produce a final empty line.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub data: Vec<u8>,

    cursor: usize,
    line: usize,
}

impl Fixture {
    /// Read `<dir>/<name>.txt`.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self, FixtureError> {
        let path = dir.as_ref().join(format!("{name}.txt"));
        let data = fs::read(path)?;
        Ok(Self::from_bytes(name, data))
    }

    /// Wrap in-memory input.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            cursor: 0,
            line: 0,
        }
    }

    /// Parse every remaining line as `T`, stopping at the first failure.
    pub fn parse<T: FromStr>(&mut self) -> Result<Vec<T>, FixtureError> {
        let mut values = Vec::new();
        while let Some(text) = self.next() {
            let value = text.parse::<T>().map_err(|_| FixtureError::Parse {
                line: self.line,
                value: text,
            })?;
            values.push(value);
        }
        Ok(values)
    }

    /// Parse the whole fixture as a grid, ignoring the line cursor.
    pub fn grid(&self) -> Result<Grid, FixtureError> {
        Ok(Grid::read(&self.data[..])?)
    }
}

impl Iterator for Fixture {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.cursor..];
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        let mut bytes = &rest[..end];
        if let [head @ .., b'\r'] = bytes {
            bytes = head;
        }
        self.cursor += end + 1;
        self.line += 1;
        Some(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_without_trailing_empty() {
        let f = Fixture::from_bytes("t", "a\nbb\r\n\nccc\n");
        let lines: Vec<String> = f.collect();
        assert_eq!(lines, vec!["a", "bb", "", "ccc"]);
    }

    #[test]
    fn last_line_without_newline() {
        let f = Fixture::from_bytes("t", "1\n2");
        assert_eq!(f.collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn empty_fixture_has_no_lines() {
        assert_eq!(Fixture::from_bytes("t", "").count(), 0);
    }

    #[test]
    fn parse_numbers() {
        let mut f = Fixture::from_bytes("t", "1721\n979\n-366\n");
        assert_eq!(f.parse::<i64>().unwrap(), vec![1721, 979, -366]);
    }

    #[test]
    fn parse_reports_line_number() {
        let mut f = Fixture::from_bytes("t", "1\n2\nthree\n4\n");
        match f.parse::<u32>() {
            Err(FixtureError::Parse { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "three");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_continues_from_cursor() {
        let mut f = Fixture::from_bytes("t", "header\n10\n20\n");
        assert_eq!(f.next().as_deref(), Some("header"));
        assert_eq!(f.parse::<u8>().unwrap(), vec![10, 20]);
    }

    #[test]
    fn grid_parses_whole_fixture() {
        let mut f = Fixture::from_bytes("t", "#.\n.#\n");
        f.next();
        let g = f.grid().unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
    }

    #[test]
    fn ragged_grid_is_grid_error() {
        let f = Fixture::from_bytes("t", "##\n#\n");
        assert!(matches!(
            f.grid(),
            Err(FixtureError::Grid(GridError::RaggedRow { .. }))
        ));
    }

    #[test]
    fn open_missing_is_io_error() {
        let err = Fixture::open(env!("CARGO_MANIFEST_DIR"), "no-such-fixture").unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
