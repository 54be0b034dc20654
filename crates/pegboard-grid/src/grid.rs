//! The [`Grid`] type: a rectangular buffer of bytes addressed by [`Pos`].

use crate::hash::sha256_hex;
use pegboard_core::{GridError, Pos};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// A rectangular grid of single-byte cells stored row-major.
///
/// The byte at `(x, y)` lives at offset `y * width + x`, and
/// `data().len() == width * height` holds for the lifetime of the grid.
///
/// Cloning produces an independent deep copy.
///
/// # Examples
///
/// ```
/// use pegboard_core::Pos;
/// use pegboard_grid::Grid;
///
/// let grid: Grid = "ab\ncd\n".parse().unwrap();
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// assert_eq!(grid.get(Pos::new(1, 1)).unwrap(), b'd');
/// assert!(grid.get(Pos::new(2, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a zero-filled grid of `width * height` cells.
    ///
    /// Returns `Err(GridError::DimensionTooLarge)` if the cell count
    /// overflows `usize` or exceeds `isize::MAX`, the largest buffer a
    /// `Vec` can hold.
    ///
    /// ```
    /// use pegboard_grid::Grid;
    ///
    /// let grid = Grid::new(3, 2).unwrap();
    /// assert_eq!(grid.data(), &[0; 6]);
    /// assert!(Grid::new(usize::MAX, 2).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(GridError::DimensionTooLarge { width, height })?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Parse line-delimited text, one row per line.
    ///
    /// Lines end in `\n`, optionally preceded by `\r`. The first line fixes
    /// the width; any later line of a different length fails with
    /// [`GridError::RaggedRow`]. A final trailing newline does not add a row,
    /// and empty input produces a `0 x 0` grid.
    pub fn read<R: Read>(reader: R) -> Result<Self, GridError> {
        let mut data = Vec::new();
        let mut width = None;
        let mut height = 0;
        for line in BufReader::new(reader).split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(GridError::RaggedRow {
                    row: height,
                    expected,
                    found: line.len(),
                });
            }
            data.extend_from_slice(&line);
            height += 1;
        }
        let width = width.unwrap_or(0);
        debug!(width, height, "grid loaded");
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Load a grid from the file at `path`.
    ///
    /// The file handle is closed before returning, on success and on error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw row-major cell bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw cell bytes. The length is fixed.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// True if `pos` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u64) < self.width as u64
            && (pos.y as u64) < self.height as u64
    }

    /// Row-major offset of `pos`, or `None` if it lies outside the grid.
    pub fn index(&self, pos: Pos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.y as usize * self.width + pos.x as usize)
    }

    /// Coordinate of offset `i`; the inverse of [`Grid::index`].
    ///
    /// A zero-width grid has no valid offsets; it maps `i` to `(0, i)`.
    pub fn pos(&self, i: usize) -> Pos {
        let w = self.width.max(1);
        Pos::new((i % w) as i64, (i / w) as i64)
    }

    fn out_of_bounds(&self, pos: Pos) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        }
    }

    /// The byte at `pos`.
    pub fn get(&self, pos: Pos) -> Result<u8, GridError> {
        match self.index(pos) {
            Some(i) => Ok(self.data[i]),
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// The byte at `pos`, or `default` if `pos` is outside the grid.
    pub fn get_or(&self, pos: Pos, default: u8) -> u8 {
        self.index(pos).map_or(default, |i| self.data[i])
    }

    /// Write `b` at `pos`.
    ///
    /// An out-of-bounds write is logged, leaves the grid untouched and
    /// returns [`GridError::OutOfBounds`].
    pub fn set(&mut self, pos: Pos, b: u8) -> Result<(), GridError> {
        let Some(i) = self.index(pos) else {
            warn!(%pos, width = self.width, height = self.height, "out of bounds write skipped");
            return Err(self.out_of_bounds(pos));
        };
        self.data[i] = b;
        Ok(())
    }

    /// Number of cells equal to `b`.
    pub fn count(&self, b: u8) -> usize {
        self.data.iter().filter(|&&a| a == b).count()
    }

    /// Offset of the first cell equal to `b`, in scan order.
    pub fn find_one(&self, b: u8) -> Option<usize> {
        self.data.iter().position(|&a| a == b)
    }

    /// Offsets of every cell equal to `b`, in increasing order.
    pub fn find_all(&self, b: u8) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a == b)
            .map(|(i, _)| i)
            .collect()
    }

    /// Row `y` as a slice borrowed from the grid, or `None` past the last row.
    pub fn line(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.data[start..start + self.width])
    }

    /// Row `y` as a mutable view; writes through it change the grid.
    pub fn line_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&mut self.data[start..start + self.width])
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> Rows<'_> {
        Rows { grid: self, y: 0 }
    }

    /// Write every row followed by `\n`, bytes verbatim.
    pub fn print<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        for row in self.rows() {
            w.write_all(row)?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Lowercase hex SHA-256 of the cell bytes.
    ///
    /// Dimensions are not hashed, so a `2 x 3` and a `3 x 2` grid with the
    /// same bytes share a digest.
    pub fn sha256(&self) -> String {
        sha256_hex(&self.data)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read(s.as_bytes())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

/// Iterator over the rows of a [`Grid`], created by [`Grid::rows`].
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    grid: &'a Grid,
    y: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.grid.line(self.y)?;
        self.y += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.height.saturating_sub(self.y);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rows<'_> {}
