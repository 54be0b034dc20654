//! Test utilities for Pegboard puzzles.
//!
//! Provides soft equality checks that record a failure and let the test
//! keep running ([`SoftAsserts`], [`assert_int`] and friends), and a
//! line-oriented [`Fixture`] loader for puzzle inputs. [`capture_logs`]
//! records `tracing` output so tests can check what was logged.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assert;
pub mod fixtures;
pub mod logs;

pub use assert::{assert_byte, assert_bytes, assert_int, assert_pos, Reporter, SoftAsserts};
pub use fixtures::{Fixture, FixtureError};
pub use logs::capture_logs;
