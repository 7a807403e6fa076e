//! Resource stacks and tank capacity descriptors.

use crate::id::ResourceKind;
use smallvec::SmallVec;
use std::fmt;

/// A quantity of a single resource kind.
///
/// Immutable once constructed: distribution builds a fresh stack for each
/// acceptor via [`with_amount`](ResourceStack::with_amount).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceStack {
    kind: ResourceKind,
    amount: u32,
}

impl ResourceStack {
    /// Create a stack of `amount` units of `kind`.
    pub const fn new(kind: ResourceKind, amount: u32) -> Self {
        Self { kind, amount }
    }

    /// The resource kind.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Number of units in the stack.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// `true` if the stack holds no units.
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// A stack of the same kind holding `amount` units.
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            kind: self.kind,
            amount,
        }
    }
}

impl fmt::Display for ResourceStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.kind, self.amount)
    }
}

/// Describes one storage compartment of an acceptor.
///
/// Only its presence matters to connectivity discovery; the contents are
/// carried for hosts that want to display them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityDescriptor {
    /// What the compartment currently holds, if anything.
    pub contents: Option<ResourceStack>,
    /// Maximum number of units the compartment can hold.
    pub capacity: u32,
}

impl CapacityDescriptor {
    /// An empty compartment of the given capacity.
    pub fn empty(capacity: u32) -> Self {
        Self {
            contents: None,
            capacity,
        }
    }

    /// Units that can still be stored.
    pub fn free_space(&self) -> u32 {
        let stored = self.contents.map_or(0, |s| s.amount());
        self.capacity.saturating_sub(stored)
    }
}

/// Result of a tank-info query: zero or more compartments, where `None`
/// stands for an entry the acceptor reported without describing it.
///
/// Most acceptors expose one or two tanks, so up to four stay inline.
pub type TankInfo = SmallVec<[Option<CapacityDescriptor>; 4]>;
