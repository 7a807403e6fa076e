//! Benchmark profiles for the Sluice transport framework.
//!
//! - [`pipe_run`]: a straight run of fluid pipes, each with a tank above
//!   and below
//! - [`saturated_node`]: a single pipe with an acceptor on every face

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sluice_core::{Node, ResourceKind, ResourceStack, TransmissionKind};
use sluice_space::{BlockPos, Direction};
use sluice_test_utils::{MockPipe, MockTank, MockWorld, TankReport};

/// A run of `len` fluid pipes along +x.
///
/// Every pipe has a described tank above it and a tank below that only
/// answers the probe, so connectivity takes both acceptor paths.
pub fn pipe_run(len: usize) -> (MockWorld, Vec<Node>) {
    let mut world = MockWorld::new();
    let mut nodes = Vec::with_capacity(len);
    for x in 0..len as i32 {
        let node = Node::fluid(BlockPos::new(x, 64, 0));
        world.place(node.pos, MockPipe::new(TransmissionKind::Fluid));
        world.place_beside(&node, Direction::Up, MockTank::unlimited());
        world.place_beside(
            &node,
            Direction::Down,
            MockTank::unlimited()
                .accepting(ResourceKind::WATER)
                .reporting(TankReport::Nothing),
        );
        nodes.push(node);
    }
    (world, nodes)
}

/// One pipe at the origin with an unlimited tank on all six faces.
pub fn saturated_node() -> (MockWorld, Node) {
    let mut world = MockWorld::new();
    let node = Node::fluid(BlockPos::ORIGIN);
    for dir in Direction::ALL {
        world.place_beside(&node, dir, MockTank::unlimited());
    }
    (world, node)
}

/// A water stack of `amount` units.
pub fn water(amount: u32) -> ResourceStack {
    ResourceStack::new(ResourceKind::WATER, amount)
}
