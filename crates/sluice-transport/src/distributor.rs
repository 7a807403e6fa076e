//! [`Distributor`]: discovery and emission with a fixed configuration and
//! a seeded RNG.

use crate::classify::{classify, Neighbors};
use crate::config::DistributorConfig;
use crate::connectivity::connections;
use crate::distribute::{emit_detailed, simulate, EmitReport};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sluice_core::{Node, ResourceStack, World};
use sluice_space::{ConnectivityMask, DirectionSet};

/// Owns the configuration and shuffle RNG for one or more nodes.
///
/// The RNG is ChaCha8 seeded from [`DistributorConfig::seed`], so a
/// recorded sequence of calls replays with identical remainder choices.
///
/// [`plan`](Distributor::plan) and [`emit`](Distributor::emit) form a
/// two-phase protocol: `plan` shuffles with a copy of the RNG, so the
/// next `emit` with the same arguments against an unchanged world makes
/// exactly the offers `plan` reported.
///
/// # Examples
///
/// ```
/// use sluice_transport::{Distributor, DistributorConfig};
///
/// let d = Distributor::new(DistributorConfig::builder().seed(7).build());
/// assert_eq!(d.config().seed, 7);
/// ```
#[derive(Clone, Debug)]
pub struct Distributor {
    config: DistributorConfig,
    rng: ChaCha8Rng,
}

impl Distributor {
    /// Create a distributor from `config`.
    pub fn new(config: DistributorConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &DistributorConfig {
        &self.config
    }

    /// Restart the RNG from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Classify the faces of `node`.
    pub fn neighbors<W: World + ?Sized>(&self, world: &W, node: &Node) -> Neighbors {
        classify(world, node)
    }

    /// Connected faces of `node`, probing with the configured kind.
    pub fn connections<W: World + ?Sized>(&self, world: &W, node: &Node) -> ConnectivityMask {
        connections(world, node, &self.config.connectivity)
    }

    /// Emit `stack` through `directions`, returning the units sent.
    pub fn emit<W: World + ?Sized>(
        &mut self,
        world: &mut W,
        node: &Node,
        directions: DirectionSet,
        stack: impl Into<Option<ResourceStack>>,
    ) -> u32 {
        self.emit_detailed(world, node, directions, stack).sent()
    }

    /// Emit `stack` through `directions`, returning the breakdown.
    pub fn emit_detailed<W: World + ?Sized>(
        &mut self,
        world: &mut W,
        node: &Node,
        directions: DirectionSet,
        stack: impl Into<Option<ResourceStack>>,
    ) -> EmitReport {
        emit_detailed(world, node, directions, stack, &mut self.rng)
    }

    /// Report what [`emit`](Distributor::emit) would do next, without
    /// committing and without advancing the RNG.
    pub fn plan<W: World + ?Sized>(
        &self,
        world: &mut W,
        node: &Node,
        directions: DirectionSet,
        stack: impl Into<Option<ResourceStack>>,
    ) -> EmitReport {
        let mut rng = self.rng.clone();
        simulate(world, node, directions, stack, &mut rng)
    }
}

impl Default for Distributor {
    fn default() -> Self {
        Self::new(DistributorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::ResourceKind;
    use sluice_space::Direction;
    use sluice_test_utils::fixtures::{fluid_pipe, tanks_around};
    use sluice_test_utils::{MockTank, MockWorld, TankReport};

    fn water(amount: u32) -> ResourceStack {
        ResourceStack::new(ResourceKind::WATER, amount)
    }

    #[test]
    fn plan_matches_following_emit() {
        let (mut world, node, _) = tanks_around(5);
        let mut d = Distributor::new(DistributorConfig::builder().seed(11).build());
        let planned = d.plan(&mut world, &node, DirectionSet::all(), water(13));
        let done = d.emit_detailed(&mut world, &node, DirectionSet::all(), water(13));
        assert_eq!(planned, done);
        assert_eq!(done.sent(), 13);
    }

    #[test]
    fn reseed_replays() {
        let run = |d: &mut Distributor| {
            let (mut world, node, _) = tanks_around(4);
            d.emit_detailed(&mut world, &node, DirectionSet::all(), water(3))
        };
        let mut d = Distributor::default();
        let first = run(&mut d);
        d.reseed(0);
        assert_eq!(run(&mut d), first);
    }

    #[test]
    fn connections_use_configured_probe() {
        let mut world = MockWorld::new();
        let node = fluid_pipe();
        world.place_beside(
            &node,
            Direction::Up,
            MockTank::unlimited()
                .reporting(TankReport::Nothing)
                .accepting(ResourceKind::LAVA),
        );
        assert!(!Distributor::default().connections(&world, &node)[Direction::Up]);
        let lava = Distributor::new(
            DistributorConfig::builder()
                .probe(ResourceKind::LAVA)
                .build(),
        );
        assert!(lava.connections(&world, &node)[Direction::Up]);
        assert!(lava.neighbors(&world, &node).get(Direction::Up).neighbor.is_acceptor());
    }

    #[test]
    fn emit_returns_units_sent() {
        let (mut world, node, _) = tanks_around(2);
        let mut d = Distributor::default();
        assert_eq!(d.emit(&mut world, &node, DirectionSet::all(), water(11)), 11);
    }
}
