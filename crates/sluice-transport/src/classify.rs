//! Neighbour classification.
//!
//! Each face of a node resolves to exactly one [`Neighbor`]. A transmitter
//! of the node's own network kind is a [`Neighbor::Peer`]. An acceptor is
//! only a [`Neighbor::Acceptor`] when it is not a transmitter of any kind:
//! a tube that happens to expose a tank keeps routing and is never a sink.

use sluice_core::{EntityId, Node, World};
use sluice_space::Direction;

/// What occupies one face of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Nothing usable: no entity, or one with neither capability.
    Empty,
    /// A transmitter in the same network.
    Peer(EntityId),
    /// A terminal sink.
    Acceptor(EntityId),
}

impl Neighbor {
    /// The entity behind a non-empty classification.
    pub fn entity(&self) -> Option<EntityId> {
        match *self {
            Self::Empty => None,
            Self::Peer(id) | Self::Acceptor(id) => Some(id),
        }
    }

    /// `true` for [`Neighbor::Peer`].
    pub fn is_peer(&self) -> bool {
        matches!(self, Self::Peer(_))
    }

    /// `true` for [`Neighbor::Acceptor`].
    pub fn is_acceptor(&self) -> bool {
        matches!(self, Self::Acceptor(_))
    }

    /// `true` for [`Neighbor::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A classified face, tagged with its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighborSlot {
    /// Direction from the node to the neighbour.
    pub direction: Direction,
    /// What was found there.
    pub neighbor: Neighbor,
}

/// The six classified faces of a node, in direction index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbors {
    slots: [NeighborSlot; Direction::COUNT],
}

impl Neighbors {
    /// The slot for `dir`.
    pub fn get(&self, dir: Direction) -> &NeighborSlot {
        &self.slots[dir.index()]
    }

    /// All six slots.
    pub fn slots(&self) -> &[NeighborSlot; Direction::COUNT] {
        &self.slots
    }

    /// Consume into the slot array.
    pub fn into_slots(self) -> [NeighborSlot; Direction::COUNT] {
        self.slots
    }

    /// Slots in direction index order.
    pub fn iter(&self) -> impl Iterator<Item = &NeighborSlot> {
        self.slots.iter()
    }

    /// `(direction, entity)` for every peer face.
    pub fn peers(&self) -> impl Iterator<Item = (Direction, EntityId)> + '_ {
        self.slots.iter().filter_map(|s| match s.neighbor {
            Neighbor::Peer(id) => Some((s.direction, id)),
            _ => None,
        })
    }

    /// `(direction, entity)` for every acceptor face.
    pub fn acceptors(&self) -> impl Iterator<Item = (Direction, EntityId)> + '_ {
        self.slots.iter().filter_map(|s| match s.neighbor {
            Neighbor::Acceptor(id) => Some((s.direction, id)),
            _ => None,
        })
    }
}

/// Classify the entity behind `id` as seen by `node`.
pub(crate) fn classify_entity<W: World + ?Sized>(
    world: &W,
    node: &Node,
    id: EntityId,
) -> Neighbor {
    match world.peer(id) {
        Some(peer) if peer.is_peer_for(node.kind) => Neighbor::Peer(id),
        // A transmitter of another network is neither peer nor sink.
        Some(_) => Neighbor::Empty,
        None if world.acceptor(id).is_some() => Neighbor::Acceptor(id),
        None => Neighbor::Empty,
    }
}

/// Resolve and classify all six faces of `node`.
///
/// A pure read of `world`: classifying twice without an intervening
/// change yields identical results.
pub fn classify<W: World + ?Sized>(world: &W, node: &Node) -> Neighbors {
    let slots = Direction::ALL.map(|direction| NeighborSlot {
        direction,
        neighbor: world
            .neighbor(node.pos, direction)
            .map_or(Neighbor::Empty, |id| classify_entity(world, node, id)),
    });
    Neighbors { slots }
}

/// Peer entities around `node`, indexed by direction.
pub fn connected_peers<W: World + ?Sized>(
    world: &W,
    node: &Node,
) -> [Option<EntityId>; Direction::COUNT] {
    classify(world, node)
        .into_slots()
        .map(|s| match s.neighbor {
            Neighbor::Peer(id) => Some(id),
            _ => None,
        })
}

/// Acceptor entities around `node`, indexed by direction.
pub fn connected_acceptors<W: World + ?Sized>(
    world: &W,
    node: &Node,
) -> [Option<EntityId>; Direction::COUNT] {
    classify(world, node)
        .into_slots()
        .map(|s| match s.neighbor {
            Neighbor::Acceptor(id) => Some(id),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::TransmissionKind;
    use sluice_space::DirectionSet;
    use sluice_test_utils::fixtures::{fluid_pipe, surround};
    use sluice_test_utils::{MockEntity, MockPipe, MockTank, MockWorld};

    #[test]
    fn empty_world_classifies_all_empty() {
        let world = MockWorld::new();
        let n = classify(&world, &fluid_pipe());
        assert!(n.iter().all(|s| s.neighbor.is_empty()));
        for (i, s) in n.iter().enumerate() {
            assert_eq!(s.direction.index(), i);
        }
    }

    #[test]
    fn pipe_of_same_kind_is_peer() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        let id = world.place_beside(&node, Direction::Up, MockPipe::new(TransmissionKind::Fluid));
        let n = classify(&world, &node);
        assert_eq!(n.get(Direction::Up).neighbor, Neighbor::Peer(id));
    }

    #[test]
    fn pipe_of_other_kind_is_empty() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(&node, Direction::Up, MockPipe::new(TransmissionKind::Gas));
        assert!(classify(&world, &node).get(Direction::Up).neighbor.is_empty());
    }

    #[test]
    fn tank_is_acceptor() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        let id = world.place_beside(&node, Direction::West, MockTank::unlimited());
        let n = classify(&world, &node);
        assert_eq!(n.get(Direction::West).neighbor, Neighbor::Acceptor(id));
        assert_eq!(n.acceptors().collect::<Vec<_>>(), vec![(Direction::West, id)]);
    }

    #[test]
    fn hybrid_is_peer_not_acceptor() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        let id = world.place_beside(
            &node,
            Direction::North,
            MockEntity::hybrid(TransmissionKind::Fluid, MockTank::unlimited()),
        );
        let n = classify(&world, &node);
        assert_eq!(n.get(Direction::North).neighbor, Neighbor::Peer(id));
        assert_eq!(n.acceptors().count(), 0);
    }

    #[test]
    fn foreign_transmitter_with_tank_is_not_acceptor() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(
            &node,
            Direction::East,
            MockEntity::hybrid(TransmissionKind::Gas, MockTank::unlimited()),
        );
        assert!(classify(&world, &node).get(Direction::East).neighbor.is_empty());
    }

    #[test]
    fn inert_block_is_empty() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(&node, Direction::Down, MockEntity::inert());
        assert!(classify(&world, &node).get(Direction::Down).neighbor.is_empty());
    }

    #[test]
    fn equal_tanks_keep_their_own_directions() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        let placed = surround(&mut world, &node, DirectionSet::all(), |_| MockTank::unlimited());
        let n = classify(&world, &node);
        for (dir, id) in placed {
            assert_eq!(n.get(dir).neighbor, Neighbor::Acceptor(id));
        }
    }

    #[test]
    fn derived_views_split_peers_and_acceptors() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        let pipe = world.place_beside(&node, Direction::Up, MockPipe::new(TransmissionKind::Fluid));
        let tank = world.place_beside(&node, Direction::South, MockTank::unlimited());

        let peers = connected_peers(&world, &node);
        let acceptors = connected_acceptors(&world, &node);
        assert_eq!(peers[Direction::Up.index()], Some(pipe));
        assert_eq!(peers.iter().flatten().count(), 1);
        assert_eq!(acceptors[Direction::South.index()], Some(tank));
        assert_eq!(acceptors.iter().flatten().count(), 1);
    }

    #[test]
    fn classification_is_idempotent() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(&node, Direction::Up, MockPipe::new(TransmissionKind::Fluid));
        world.place_beside(&node, Direction::East, MockTank::with_capacity(10));
        assert_eq!(classify(&world, &node), classify(&world, &node));
    }
}
