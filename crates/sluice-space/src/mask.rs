//! [`ConnectivityMask`]: one connected flag per face.

use crate::direction::Direction;
use crate::set::DirectionSet;
use std::ops::Index;

/// Which faces of a node are connected, in direction index order.
///
/// Masks are snapshots: neighbour state can change between calls, so a
/// mask is recomputed rather than cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConnectivityMask([bool; Direction::COUNT]);

impl ConnectivityMask {
    /// A mask with every face disconnected.
    pub const fn none() -> Self {
        Self([false; Direction::COUNT])
    }

    /// Set the flag for `dir`.
    pub fn set(&mut self, dir: Direction, connected: bool) {
        self.0[dir.index()] = connected;
    }

    /// Mark `dir` connected.
    pub fn connect(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    /// Whether `dir` is connected.
    pub fn is_connected(&self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    /// Number of connected faces.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|c| **c).count()
    }

    /// The raw flags, indexed by [`Direction::index`].
    pub fn as_array(&self) -> [bool; Direction::COUNT] {
        self.0
    }

    /// `(direction, connected)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, bool)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.is_connected(d)))
    }

    /// The connected faces as a set.
    pub fn to_set(&self) -> DirectionSet {
        self.iter().filter(|(_, c)| *c).map(|(d, _)| d).collect()
    }
}

impl From<[bool; Direction::COUNT]> for ConnectivityMask {
    fn from(flags: [bool; Direction::COUNT]) -> Self {
        Self(flags)
    }
}

impl Index<Direction> for ConnectivityMask {
    type Output = bool;

    fn index(&self, dir: Direction) -> &bool {
        &self.0[dir.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_all_false() {
        let m = ConnectivityMask::none();
        assert_eq!(m.as_array(), [false; 6]);
        assert_eq!(m.count(), 0);
        assert!(m.to_set().is_empty());
    }

    #[test]
    fn connect_sets_single_slot() {
        let mut m = ConnectivityMask::none();
        m.connect(Direction::South);
        assert!(m[Direction::South]);
        assert_eq!(m.as_array(), [false, false, false, true, false, false]);
        assert_eq!(m.to_set(), DirectionSet::from(Direction::South));
    }

    #[test]
    fn from_array_round_trips() {
        let flags = [true, false, true, false, false, true];
        let m = ConnectivityMask::from(flags);
        assert_eq!(m.as_array(), flags);
        assert_eq!(m.count(), 3);
        let on: Vec<_> = m.iter().filter(|(_, c)| *c).map(|(d, _)| d).collect();
        assert_eq!(on, vec![Direction::Down, Direction::North, Direction::East]);
    }
}
