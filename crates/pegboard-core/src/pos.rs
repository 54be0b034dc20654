//! Integer 2D coordinates with vector arithmetic.
//!
//! Y grows downward, matching the row order of a text grid: `(0, 1)` is the
//! cell directly below `(0, 0)`.

use crate::direction::Direction;
use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point or vector on the integer plane.
///
/// `Pos` is a plain value: every operation returns a new `Pos` and nothing
/// mutates in place except the compound-assignment operators.
///
/// # Examples
///
/// ```
/// use pegboard_core::Pos;
///
/// let p = Pos::new(3, 4);
/// assert_eq!(p.add(Pos::new(1, -1)), Pos::new(4, 3));
/// assert_eq!(p.distance(), 5.0);
/// assert_eq!(p.to_string(), "(3, 4)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column, growing to the right.
    pub x: i64,
    /// Row, growing downward.
    pub y: i64,
}

impl Pos {
    /// The origin.
    pub const ZERO: Pos = Pos { x: 0, y: 0 };
    /// One step up (`y - 1`).
    pub const UP: Pos = Pos { x: 0, y: -1 };
    /// One step right (`x + 1`).
    pub const RIGHT: Pos = Pos { x: 1, y: 0 };
    /// One step down (`y + 1`).
    pub const DOWN: Pos = Pos { x: 0, y: 1 };
    /// One step left (`x - 1`).
    pub const LEFT: Pos = Pos { x: -1, y: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// True iff both components are zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Componentwise sum. Wraps on overflow.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, v: Pos) -> Pos {
        Pos::new(self.x.wrapping_add(v.x), self.y.wrapping_add(v.y))
    }

    /// Componentwise difference. Wraps on overflow.
    pub fn subtract(self, v: Pos) -> Pos {
        Pos::new(self.x.wrapping_sub(v.x), self.y.wrapping_sub(v.y))
    }

    /// The neighbouring coordinate one step in `dir`.
    pub fn step(self, dir: Direction) -> Pos {
        self.add(dir.offset())
    }

    /// The four orthogonal neighbours, always in up, right, down, left order.
    pub fn urdl(self) -> [Pos; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    /// Angle of this vector from the positive x axis, in degrees.
    ///
    /// The result is in `[0, 360)`. Because y grows downward, `(0, 1)` is
    /// 90° and `(0, -1)` is 270°. The origin maps to 0°.
    pub fn degrees(self) -> f64 {
        let mut theta = (self.y as f64).atan2(self.x as f64);
        if theta < 0.0 {
            theta += TAU;
        }
        let deg = theta.to_degrees();
        // A tiny negative angle can round up to a full turn.
        if deg >= 360.0 {
            deg - 360.0
        } else {
            deg
        }
    }

    /// Euclidean distance from the origin.
    pub fn distance(self) -> f64 {
        let (x, y) = (self.x as f64, self.y as f64);
        (x * x + y * y).sqrt()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Pos {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::add(self, rhs)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        self.subtract(rhs)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Pos) {
        *self = Pos::add(*self, rhs);
    }
}

impl SubAssign for Pos {
    fn sub_assign(&mut self, rhs: Pos) {
        *self = self.subtract(rhs);
    }
}

impl Neg for Pos {
    type Output = Pos;

    fn neg(self) -> Pos {
        Pos::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}
