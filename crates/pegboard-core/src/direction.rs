//! The four orthogonal step directions.

use crate::pos::Pos;
use std::fmt;

/// An orthogonal direction on a y-down grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards higher columns.
    Right,
    /// Towards higher rows.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All directions in clockwise order starting from [`Direction::Up`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for one step in this direction.
    pub const fn offset(self) -> Pos {
        match self {
            Self::Up => Pos::UP,
            Self::Right => Pos::RIGHT,
            Self::Down => Pos::DOWN,
            Self::Left => Pos::LEFT,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}
