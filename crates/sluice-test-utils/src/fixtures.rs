//! Reusable neighbourhood fixtures.
//!
//! - [`fluid_pipe`]: a fluid node at a fixed non-origin position.
//! - [`surround`]: populate selected faces of a node from a factory.
//! - [`seeded_rng`]: the deterministic RNG the tests shuffle with.

use crate::{MockEntity, MockTank, MockWorld};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sluice_core::{EntityId, Node};
use sluice_space::{BlockPos, Direction, DirectionSet};

/// A fluid pipe at `(8, 64, -3)`, away from the origin so sign errors in
/// offsets show up.
pub fn fluid_pipe() -> Node {
    Node::fluid(BlockPos::new(8, 64, -3))
}

/// Place one entity from `make` on every face of `node` in `sides`.
///
/// Returns the placed ids in direction order.
pub fn surround<E, F>(
    world: &mut MockWorld,
    node: &Node,
    sides: DirectionSet,
    mut make: F,
) -> Vec<(Direction, EntityId)>
where
    E: Into<MockEntity>,
    F: FnMut(Direction) -> E,
{
    sides
        .iter()
        .map(|dir| (dir, world.place_beside(node, dir, make(dir))))
        .collect()
}

/// A node with an unlimited tank on each of the first `n` faces.
pub fn tanks_around(n: usize) -> (MockWorld, Node, Vec<(Direction, EntityId)>) {
    let mut world = MockWorld::new();
    let node = fluid_pipe();
    let sides: DirectionSet = Direction::ALL.iter().take(n).collect();
    let placed = surround(&mut world, &node, sides, |_| MockTank::unlimited());
    (world, node, placed)
}

/// Deterministic RNG for shuffle-dependent tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
