//! [`DirectionSet`]: a bitset over the six faces.

use crate::direction::Direction;
use std::fmt;

/// A set of directions, stored as six bits.
///
/// Used to restrict an emission to a subset of a node's faces.
///
/// # Examples
///
/// ```
/// use sluice_space::{Direction, DirectionSet};
///
/// let sides: DirectionSet = [Direction::Up, Direction::East].into_iter().collect();
/// assert!(sides.contains(Direction::East));
/// assert!(!sides.contains(Direction::Down));
/// assert_eq!(sides.len(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    const MASK: u8 = 0b0011_1111;

    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// All six directions.
    pub const fn all() -> Self {
        Self { bits: Self::MASK }
    }

    /// The horizontal faces (north, south, west, east).
    pub const fn horizontal() -> Self {
        Self { bits: 0b0011_1100 }
    }

    /// Add `dir` to the set.
    pub fn insert(&mut self, dir: Direction) {
        self.bits |= 1 << dir.index();
    }

    /// Remove `dir` from the set.
    pub fn remove(&mut self, dir: Direction) {
        self.bits &= !(1 << dir.index());
    }

    /// Check whether the set contains `dir`.
    pub fn contains(&self, dir: Direction) -> bool {
        self.bits & (1 << dir.index()) != 0
    }

    /// Number of directions in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// `true` if the set contains no directions.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Return the union of two sets.
    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Return the intersection of two sets.
    pub fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// The set of directions not in `self`.
    pub fn complement(self) -> Self {
        Self {
            bits: !self.bits & Self::MASK,
        }
    }

    /// Iterate over members in index order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let set = *self;
        Direction::ALL.into_iter().filter(move |d| set.contains(*d))
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Direction> for DirectionSet {
    fn from(dir: Direction) -> Self {
        let mut set = Self::empty();
        set.insert(dir);
        set
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl<'a> FromIterator<&'a Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = &'a Direction>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut s = DirectionSet::empty();
        assert!(s.is_empty());
        s.insert(Direction::West);
        s.insert(Direction::West);
        assert_eq!(s.len(), 1);
        assert!(s.contains(Direction::West));
        s.remove(Direction::West);
        assert!(s.is_empty());
    }

    #[test]
    fn all_contains_every_direction() {
        let all = DirectionSet::all();
        assert_eq!(all.len(), 6);
        assert!(Direction::ALL.iter().all(|d| all.contains(*d)));
    }

    #[test]
    fn complement_of_horizontal_is_vertical() {
        let v = DirectionSet::horizontal().complement();
        let got: Vec<_> = v.iter().collect();
        assert_eq!(got, vec![Direction::Down, Direction::Up]);
    }

    #[test]
    fn union_and_intersection() {
        let a: DirectionSet = [Direction::Up, Direction::North].iter().collect();
        let b: DirectionSet = [Direction::North, Direction::East].iter().collect();
        assert_eq!(a.union(b).len(), 3);
        assert_eq!(a.intersection(b), DirectionSet::from(Direction::North));
    }

    #[test]
    fn debug_lists_members() {
        let s: DirectionSet = [Direction::East, Direction::Down].iter().collect();
        assert_eq!(format!("{s:?}"), "{Down, East}");
    }
}
