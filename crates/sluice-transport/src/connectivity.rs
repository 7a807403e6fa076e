//! Per-face connectivity for topology reporting.

use crate::classify::{classify, Neighbor};
use crate::config::ConnectivityConfig;
use sluice_core::{Acceptor, EntityId, Node, World};
use sluice_space::{ConnectivityMask, Direction};

/// Whether `acceptor`, addressed through `face`, handles resource at all.
///
/// Acceptor implementations are inconsistent: some only describe their
/// tanks, some only answer the probes. Either is enough.
fn acceptor_connects(
    acceptor: &dyn Acceptor,
    face: Direction,
    config: &ConnectivityConfig,
) -> bool {
    acceptor.tank_info(face).iter().any(Option::is_some)
        || acceptor.can_drain(face, config.probe)
        || acceptor.can_fill(face, config.probe)
}

/// Whether entity `id`, lying on face `side` of some node, is a usable
/// acceptor from that node's point of view.
///
/// Transmitters of any kind are rejected, as are entities without the
/// acceptor capability.
pub fn is_valid_acceptor_on_side<W: World + ?Sized>(
    world: &W,
    id: EntityId,
    side: Direction,
    config: &ConnectivityConfig,
) -> bool {
    if world.peer(id).is_some() {
        return false;
    }
    world
        .acceptor(id)
        .is_some_and(|a| acceptor_connects(a, side.opposite(), config))
}

/// Compute which faces of `node` are connected.
///
/// Peer faces are connected unconditionally. Acceptor faces are connected
/// when the acceptor, queried through the face pointing back at the node,
/// reports a non-null capacity descriptor or answers either probe.
/// Recomputed from the world on every call.
pub fn connections<W: World + ?Sized>(
    world: &W,
    node: &Node,
    config: &ConnectivityConfig,
) -> ConnectivityMask {
    let mut mask = ConnectivityMask::none();
    for slot in classify(world, node).iter() {
        let connected = match slot.neighbor {
            Neighbor::Empty => false,
            Neighbor::Peer(_) => true,
            Neighbor::Acceptor(id) => world
                .acceptor(id)
                .is_some_and(|a| acceptor_connects(a, slot.direction.opposite(), config)),
        };
        mask.set(slot.direction, connected);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::{ResourceKind, TransmissionKind};
    use sluice_test_utils::fixtures::fluid_pipe;
    use sluice_test_utils::{MockEntity, MockPipe, MockTank, MockWorld, TankReport};

    fn mask_of(world: &MockWorld, node: &Node) -> ConnectivityMask {
        connections(world, node, &ConnectivityConfig::default())
    }

    #[test]
    fn nothing_around_is_disconnected() {
        let world = MockWorld::new();
        assert_eq!(mask_of(&world, &fluid_pipe()), ConnectivityMask::none());
    }

    #[test]
    fn peer_is_connected() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(&node, Direction::Down, MockPipe::new(TransmissionKind::Fluid));
        let m = mask_of(&world, &node);
        assert!(m[Direction::Down]);
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn described_tank_is_connected_without_probe() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        // Only accepts lava, so the water probe fails; the descriptor carries it.
        world.place_beside(
            &node,
            Direction::East,
            MockTank::unlimited().accepting(ResourceKind::LAVA),
        );
        assert!(mask_of(&world, &node)[Direction::East]);
    }

    #[test]
    fn undescribed_tank_is_connected_by_probe() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(
            &node,
            Direction::East,
            MockTank::unlimited().reporting(TankReport::Nothing),
        );
        assert!(mask_of(&world, &node)[Direction::East]);
    }

    #[test]
    fn null_entries_fall_back_to_probe() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(
            &node,
            Direction::South,
            MockTank::unlimited()
                .reporting(TankReport::NullEntry)
                .accepting(ResourceKind::WATER),
        );
        world.place_beside(
            &node,
            Direction::North,
            MockTank::unlimited()
                .reporting(TankReport::NullEntry)
                .accepting(ResourceKind::LAVA),
        );
        let m = mask_of(&world, &node);
        assert!(m[Direction::South]);
        assert!(!m[Direction::North]);
    }

    #[test]
    fn drain_probe_alone_connects() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(
            &node,
            Direction::Up,
            MockTank::unlimited().reporting(TankReport::Nothing).drain_only(),
        );
        assert!(mask_of(&world, &node)[Direction::Up]);
    }

    #[test]
    fn tank_is_queried_through_the_facing_side() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        // The tank east of the node faces it with its west side.
        world.place_beside(
            &node,
            Direction::East,
            MockTank::unlimited().sealed(Direction::West),
        );
        world.place_beside(
            &node,
            Direction::West,
            MockTank::unlimited().sealed(Direction::West),
        );
        let m = mask_of(&world, &node);
        assert!(!m[Direction::East]);
        assert!(m[Direction::West]);
    }

    #[test]
    fn probe_kind_is_configurable() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(
            &node,
            Direction::Up,
            MockTank::unlimited()
                .reporting(TankReport::Nothing)
                .accepting(ResourceKind::LAVA),
        );
        assert!(!mask_of(&world, &node)[Direction::Up]);
        let lava = ConnectivityConfig {
            probe: ResourceKind::LAVA,
        };
        assert!(connections(&world, &node, &lava)[Direction::Up]);
    }

    #[test]
    fn hybrid_connects_through_peer_rule() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        // Its tank is sealed towards the node, so only the peer rule can connect it.
        world.place_beside(
            &node,
            Direction::North,
            MockEntity::hybrid(
                TransmissionKind::Fluid,
                MockTank::unlimited().sealed(Direction::South),
            ),
        );
        let m = mask_of(&world, &node);
        assert!(m[Direction::North]);
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn valid_acceptor_on_side_rejects_transmitters() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        let cfg = ConnectivityConfig::default();
        let tank = world.place_beside(&node, Direction::Up, MockTank::unlimited());
        let hybrid = world.place_beside(
            &node,
            Direction::Down,
            MockEntity::hybrid(TransmissionKind::Gas, MockTank::unlimited()),
        );
        let stone = world.place_beside(&node, Direction::East, MockEntity::inert());
        assert!(is_valid_acceptor_on_side(&world, tank, Direction::Up, &cfg));
        assert!(!is_valid_acceptor_on_side(&world, hybrid, Direction::Down, &cfg));
        assert!(!is_valid_acceptor_on_side(&world, stone, Direction::East, &cfg));
    }

    #[test]
    fn connections_are_idempotent() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(&node, Direction::Up, MockPipe::new(TransmissionKind::Fluid));
        world.place_beside(&node, Direction::West, MockTank::with_capacity(5));
        assert_eq!(mask_of(&world, &node), mask_of(&world, &node));
    }
}
