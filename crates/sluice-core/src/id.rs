//! Strongly-typed identifiers.

use std::fmt;

/// Handle to an entity owned by the host world.
///
/// A lookup key, not ownership: the world may drop or replace the entity
/// behind an id between calls, so ids are only meaningful for the
/// duration of a single discovery or emission pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a kind of divisible resource (a fluid, a gas, ...).
///
/// Kinds are registered by the host; this crate only compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKind(pub u32);

impl ResourceKind {
    /// Water: the conventional stand-in kind used to probe whether an
    /// acceptor handles fluids at all.
    pub const WATER: ResourceKind = ResourceKind(0);
    /// Lava.
    pub const LAVA: ResourceKind = ResourceKind(1);
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WATER => write!(f, "water"),
            Self::LAVA => write!(f, "lava"),
            Self(n) => write!(f, "resource:{n}"),
        }
    }
}

impl From<u32> for ResourceKind {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The kind of network a transport node belongs to.
///
/// Two transmitters only route to each other when they carry the
/// same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransmissionKind {
    /// Liquid pipes.
    Fluid,
    /// Pressurised gas tubes.
    Gas,
    /// Power cables.
    Energy,
    /// Item conveyors.
    Item,
}

impl fmt::Display for TransmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fluid => write!(f, "fluid"),
            Self::Gas => write!(f, "gas"),
            Self::Energy => write!(f, "energy"),
            Self::Item => write!(f, "item"),
        }
    }
}
