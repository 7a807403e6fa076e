//! Neighbour discovery and fair resource distribution for transport nodes.
//!
//! A node inspects its six faces, classifies what it finds, reports which
//! faces are connected, and splits outgoing resource across the sinks
//! willing to take it.
//!
//! # Data flow
//!
//! 1. [`classify`] resolves each face to a [`Neighbor`]: empty, a network
//!    peer, or a terminal acceptor. Peer classification wins.
//! 2. [`connections`] turns the classification into a
//!    [`ConnectivityMask`](sluice_space::ConnectivityMask) for topology
//!    reporting.
//! 3. [`emit`] filters the acceptors, shuffles them, splits the stack
//!    evenly with the remainder going to the first few, and commits each
//!    share. [`Distributor`] bundles the same operations with a seeded RNG
//!    and a fixed configuration.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod classify;
pub mod config;
pub mod connectivity;
pub mod distribute;
pub mod distributor;

pub use classify::{
    classify, connected_acceptors, connected_peers, Neighbor, NeighborSlot, Neighbors,
};
pub use config::{ConnectivityConfig, DistributorConfig, DistributorConfigBuilder};
pub use connectivity::{connections, is_valid_acceptor_on_side};
pub use distribute::{emit, emit_detailed, simulate, split_shares, EmitReport, Offer};
pub use distributor::Distributor;
