//! Core types and traits for the Sluice grid transport framework.
//!
//! Defines the value types shared across the workspace (entity and
//! resource identifiers, resource stacks, tank descriptors, transport
//! nodes), the error taxonomy, and the capability traits through which
//! the transport layer observes the host world: [`World`],
//! [`TransportPeer`] and [`Acceptor`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod node;
pub mod stack;
pub mod traits;

pub use error::TransportError;
pub use id::{EntityId, ResourceKind, TransmissionKind};
pub use node::Node;
pub use stack::{CapacityDescriptor, ResourceStack, TankInfo};
pub use traits::{Acceptor, TransportPeer, World};
