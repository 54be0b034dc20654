//! Core types for the Pegboard puzzle grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! integer coordinate type [`Pos`], the orthogonal [`Direction`]s used to
//! step between cells, and the [`GridError`] type shared by the grid and
//! fixture crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod pos;

pub use direction::Direction;
pub use error::GridError;
pub use pos::Pos;
