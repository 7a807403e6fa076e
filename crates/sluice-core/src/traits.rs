//! Capability traits implemented by the host world and its entities.
//!
//! The transport layer never owns neighbours. It resolves positions to
//! [`EntityId`] handles through [`World`] and asks the world for the
//! capabilities behind each handle. An entity may expose either
//! capability, both, or neither.

use crate::id::{EntityId, ResourceKind, TransmissionKind};
use crate::stack::{ResourceStack, TankInfo};
use sluice_space::{BlockPos, Direction};

/// A transmitter that is part of a transport network.
///
/// Peers keep routing resource onward rather than storing it, so the
/// transport layer never treats a peer as a terminal sink, even when the
/// same entity also implements [`Acceptor`].
pub trait TransportPeer {
    /// Whether this transmitter carries `kind` and so joins a network of
    /// that kind.
    fn is_peer_for(&self, kind: TransmissionKind) -> bool;
}

/// A terminal sink that can receive and store resource.
///
/// Every method takes the face of the acceptor being addressed: the side
/// that faces the caller, i.e. the opposite of the caller's outgoing
/// direction.
pub trait Acceptor {
    /// Describe the compartments reachable from `side`.
    ///
    /// May be empty, and individual entries may be `None`.
    fn tank_info(&self, side: Direction) -> TankInfo;

    /// Whether `kind` may be inserted through `side`.
    fn can_fill(&self, side: Direction, kind: ResourceKind) -> bool;

    /// Whether `kind` may be extracted through `side`.
    fn can_drain(&self, side: Direction, kind: ResourceKind) -> bool;

    /// Insert up to `stack.amount()` units through `side`.
    ///
    /// Returns the number of units accepted, which must lie in
    /// `0..=stack.amount()`. With `commit == false` the call only reports
    /// what would be accepted and must leave the acceptor unchanged.
    fn fill(&mut self, side: Direction, stack: &ResourceStack, commit: bool) -> u32;
}

/// Position lookup and capability resolution in the host world.
pub trait World {
    /// The entity adjacent to `pos` on face `dir`, if any.
    fn neighbor(&self, pos: BlockPos, dir: Direction) -> Option<EntityId>;

    /// The transport-peer capability of `id`, if it has one.
    fn peer(&self, id: EntityId) -> Option<&dyn TransportPeer>;

    /// The acceptor capability of `id`, if it has one.
    fn acceptor(&self, id: EntityId) -> Option<&dyn Acceptor>;

    /// Mutable access to the acceptor capability of `id`.
    ///
    /// Must return `Some` whenever [`acceptor`](World::acceptor) does.
    fn acceptor_mut(&mut self, id: EntityId) -> Option<&mut dyn Acceptor>;
}
