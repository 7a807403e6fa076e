//! Sluice: neighbour discovery and fair resource distribution for grid
//! transport networks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sluice sub-crates. For most users, adding `sluice` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sluice::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // A world with one unlimited tank east of the origin.
//! struct OneTank {
//!     stored: u32,
//! }
//!
//! impl Acceptor for OneTank {
//!     fn tank_info(&self, _side: Direction) -> TankInfo {
//!         TankInfo::new()
//!     }
//!     fn can_fill(&self, _side: Direction, _kind: ResourceKind) -> bool {
//!         true
//!     }
//!     fn can_drain(&self, _side: Direction, _kind: ResourceKind) -> bool {
//!         false
//!     }
//!     fn fill(&mut self, _side: Direction, stack: &ResourceStack, commit: bool) -> u32 {
//!         if commit {
//!             self.stored += stack.amount();
//!         }
//!         stack.amount()
//!     }
//! }
//!
//! impl World for OneTank {
//!     fn neighbor(&self, pos: BlockPos, dir: Direction) -> Option<EntityId> {
//!         (pos == BlockPos::ORIGIN && dir == Direction::East).then_some(EntityId(1))
//!     }
//!     fn peer(&self, _id: EntityId) -> Option<&dyn TransportPeer> {
//!         None
//!     }
//!     fn acceptor(&self, _id: EntityId) -> Option<&dyn Acceptor> {
//!         Some(self)
//!     }
//!     fn acceptor_mut(&mut self, _id: EntityId) -> Option<&mut dyn Acceptor> {
//!         Some(self)
//!     }
//! }
//!
//! let mut world = OneTank { stored: 0 };
//! let node = Node::fluid(BlockPos::ORIGIN);
//!
//! let mask = connections(&world, &node, &ConnectivityConfig::default());
//! assert!(mask[Direction::East]);
//!
//! let stack = ResourceStack::new(ResourceKind::WATER, 250);
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let sent = emit(&mut world, &node, DirectionSet::all(), stack, &mut rng);
//! assert_eq!(sent, 250);
//! assert_eq!(world.stored, 250);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sluice-core` | IDs, stacks, nodes, errors, capability traits |
//! | [`space`] | `sluice-space` | Positions, directions, direction sets, masks |
//! | [`transport`] | `sluice-transport` | Classification, connectivity, distribution |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`sluice-core`).
///
/// Contains resource stacks, tank descriptors, the [`types::Node`] type,
/// [`types::TransportError`], and the capability traits
/// ([`types::World`], [`types::TransportPeer`], [`types::Acceptor`]).
pub use sluice_core as types;

/// Positions and directions (`sluice-space`).
pub use sluice_space as space;

/// Neighbour classification, connectivity and distribution
/// (`sluice-transport`).
pub use sluice_transport as transport;

/// Common imports for typical Sluice usage.
///
/// ```rust
/// use sluice::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sluice_core::{
        Acceptor, CapacityDescriptor, EntityId, Node, ResourceKind, ResourceStack, TankInfo,
        TransmissionKind, TransportPeer, World,
    };

    // Errors
    pub use sluice_core::TransportError;
    pub use sluice_space::SpaceError;

    // Space
    pub use sluice_space::{BlockPos, ConnectivityMask, Direction, DirectionSet};

    // Transport
    pub use sluice_transport::{
        classify, connections, emit, emit_detailed, simulate, ConnectivityConfig, Distributor,
        DistributorConfig, EmitReport, Neighbor, Neighbors, Offer,
    };
}
