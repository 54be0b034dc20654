//! Pegboard: helpers for grid-based puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Pegboard sub-crates. For most users, adding `pegboard` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pegboard::prelude::*;
//!
//! let mut grid: Grid = "#..\n.S.\n..#\n".parse().unwrap();
//! let start = grid.pos(grid.find_one(b'S').unwrap());
//! assert_eq!(start, Pos::new(1, 1));
//!
//! // Mark every open neighbour of the start cell.
//! for p in start.urdl() {
//!     if grid.get_or(p, b'#') == b'.' {
//!         grid.set(p, b'o').unwrap();
//!     }
//! }
//! assert_eq!(grid.to_string(), "#o.\noSo\n.o#\n");
//! assert!(grid.set(Pos::new(3, 0), b'x').is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pegboard-core` | `Pos`, `Direction`, `GridError` |
//! | [`grid`] | `pegboard-grid` | `Grid`, row iteration, SHA-256 digests |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions and errors (`pegboard-core`).
pub mod types {
    pub use pegboard_core::*;
}

/// Byte grids and digests (`pegboard-grid`).
pub mod grid {
    pub use pegboard_grid::*;
}

/// The types most puzzle solutions need.
pub mod prelude {
    pub use pegboard_core::{Direction, GridError, Pos};
    pub use pegboard_grid::Grid;
}
