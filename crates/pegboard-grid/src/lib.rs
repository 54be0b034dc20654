//! Flat byte-buffer grids for text puzzles.
//!
//! A [`Grid`] stores one byte per cell in row-major order and is addressed
//! with [`Pos`](pegboard_core::Pos) coordinates. Grids are built zero-filled
//! with [`Grid::new`] or parsed from line-delimited text with
//! [`Grid::read`], [`Grid::open`] or [`str::parse`].
//!
//! # Access policy
//!
//! Both [`Grid::get`] and [`Grid::set`] return
//! [`GridError::OutOfBounds`](pegboard_core::GridError::OutOfBounds) for
//! coordinates outside the grid, so callers decide whether a miss is fatal.
//! [`Grid::get_or`] is the tolerant read.
//!
//! # Regression digests
//!
//! [`Grid::sha256`] hashes the raw cell bytes, which makes it cheap to
//! assert that a transformation reproduces a known grid exactly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hash;

pub use grid::{Grid, Rows};
pub use hash::sha256_hex;
