//! The six axis-aligned face directions.

use crate::error::SpaceError;
use crate::pos::BlockPos;
use std::fmt;
use std::str::FromStr;

/// One of the six faces of a block.
///
/// The discriminants are stable and double as slot indices: per-side
/// arrays throughout the workspace are indexed by [`Direction::index`].
///
/// # Examples
///
/// ```
/// use sluice_space::Direction;
///
/// assert_eq!(Direction::North.opposite(), Direction::South);
/// assert_eq!(Direction::Up.offset(), (0, 1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `-y`.
    Down = 0,
    /// `+y`.
    Up = 1,
    /// `-z`.
    North = 2,
    /// `+z`.
    South = 3,
    /// `-x`.
    West = 4,
    /// `+x`.
    East = 5,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 6;

    /// All directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Slot index of this direction (`0..6`).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction at slot `index`, or `None` if `index >= 6`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The face pointing the other way.
    ///
    /// `d.opposite().opposite() == d` for every direction.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Unit offset `(dx, dy, dz)` of the neighbour on this face.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    /// Position of the neighbour of `pos` on this face.
    pub fn step(self, pos: BlockPos) -> BlockPos {
        pos.offset(self.offset())
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Direction {
    type Error = SpaceError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index as usize).ok_or(SpaceError::InvalidDirectionIndex { index })
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> Self {
        d as u8
    }
}

impl FromStr for Direction {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpaceError::UnknownDirection { name: s.to_owned() })
    }
}
