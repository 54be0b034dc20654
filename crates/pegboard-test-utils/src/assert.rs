//! Soft equality checks.
//!
//! Each check compares an expected and an actual value. On a mismatch it
//! hands a formatted message to a [`Reporter`] and returns `false`; it never
//! panics, so one test can report several mismatches in a single run.
//!
//! ```
//! use pegboard_core::Pos;
//! use pegboard_test_utils::{assert_int, assert_pos, SoftAsserts};
//!
//! let mut t = SoftAsserts::new();
//! assert_int(&mut t, 4, 2 + 2, "sum");
//! assert_pos(&mut t, Pos::new(1, 0), Pos::RIGHT, format_args!("step {}", 1));
//! t.finish();
//! ```

use pegboard_core::Pos;
use std::fmt;
use tracing::error;

/// Sink for assertion failure messages.
pub trait Reporter {
    /// Record one failure. Must not halt the caller.
    fn fail(&mut self, message: String);
}

/// Collects messages without ever failing. Handy for inspecting output.
impl Reporter for Vec<String> {
    fn fail(&mut self, message: String) {
        self.push(message);
    }
}

/// Reporter that marks the enclosing test failed once it is done.
///
/// Failures are logged as they happen and the test body keeps running.
/// [`SoftAsserts::finish`], or dropping the value, panics with every
/// recorded message if any check failed.
#[derive(Debug, Default)]
pub struct SoftAsserts {
    failures: Vec<String>,
}

impl SoftAsserts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// True if no check has failed yet.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Panic if any check failed.
    pub fn finish(mut self) {
        let failures = std::mem::take(&mut self.failures);
        if !failures.is_empty() {
            panic!("{}", summary(&failures));
        }
    }

    /// Take the recorded messages without failing the test.
    pub fn into_failures(mut self) -> Vec<String> {
        std::mem::take(&mut self.failures)
    }
}

impl Reporter for SoftAsserts {
    fn fail(&mut self, message: String) {
        error!(failure = %message, "assertion failed");
        self.failures.push(message);
    }
}

impl Drop for SoftAsserts {
    fn drop(&mut self) {
        if !self.failures.is_empty() && !std::thread::panicking() {
            panic!("{}", summary(&self.failures));
        }
    }
}

fn summary(failures: &[String]) -> String {
    format!(
        "{} assertion(s) failed:\n  {}",
        failures.len(),
        failures.join("\n  ")
    )
}

fn mismatch(
    context: impl fmt::Display,
    expect: impl fmt::Display,
    actual: impl fmt::Display,
) -> String {
    format!("{context}. Expected: '{expect}', got: '{actual}'")
}

/// Check two integers, reported in decimal.
pub fn assert_int<R: Reporter + ?Sized>(
    r: &mut R,
    expect: i64,
    actual: i64,
    context: impl fmt::Display,
) -> bool {
    if expect == actual {
        return true;
    }
    r.fail(mismatch(context, expect, actual));
    false
}

/// Check two bytes, reported in uppercase hex.
pub fn assert_byte<R: Reporter + ?Sized>(
    r: &mut R,
    expect: u8,
    actual: u8,
    context: impl fmt::Display,
) -> bool {
    if expect == actual {
        return true;
    }
    r.fail(mismatch(
        context,
        format_args!("{expect:X}"),
        format_args!("{actual:X}"),
    ));
    false
}

/// Check two byte sequences, reported as decimal lists.
pub fn assert_bytes<R: Reporter + ?Sized>(
    r: &mut R,
    expect: &[u8],
    actual: &[u8],
    context: impl fmt::Display,
) -> bool {
    if expect == actual {
        return true;
    }
    r.fail(mismatch(context, Decimal(expect), Decimal(actual)));
    false
}

/// Check two coordinates, reported as `(x, y)`.
pub fn assert_pos<R: Reporter + ?Sized>(
    r: &mut R,
    expect: Pos,
    actual: Pos,
    context: impl fmt::Display,
) -> bool {
    if expect == actual {
        return true;
    }
    r.fail(mismatch(context, expect, actual));
    false
}

/// `[1 2 3]` rendering of a byte slice.
struct Decimal<'a>(&'a [u8]);

impl fmt::Display for Decimal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b}")?;
        }
        f.write_str("]")
    }
}
