//! The transport node that initiates discovery and emission.

use crate::id::TransmissionKind;
use sluice_space::{BlockPos, Direction};

/// A transport element at a fixed position.
///
/// A node owns none of its neighbours; it only observes them through
/// position queries against the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    /// Where the node sits.
    pub pos: BlockPos,
    /// The network kind the node carries.
    pub kind: TransmissionKind,
}

impl Node {
    /// A node of `kind` at `pos`.
    pub fn new(pos: BlockPos, kind: TransmissionKind) -> Self {
        Self { pos, kind }
    }

    /// A fluid pipe at `pos`.
    pub fn fluid(pos: BlockPos) -> Self {
        Self::new(pos, TransmissionKind::Fluid)
    }

    /// Position of the neighbour on face `dir`.
    pub fn neighbor_pos(&self, dir: Direction) -> BlockPos {
        dir.step(self.pos)
    }
}
