//! Block positions and axis-aligned neighbour directions for Sluice grids.
//!
//! This is the leaf crate with zero internal dependencies.
//!
//! Every block in the host world has exactly six face neighbours. This
//! crate names them ([`Direction`]), maps each to its opposite face, and
//! provides the two small per-side containers the transport layer works
//! with: [`DirectionSet`] for selecting sides and [`ConnectivityMask`]
//! for reporting which sides are connected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod mask;
pub mod pos;
pub mod set;

pub use direction::Direction;
pub use error::SpaceError;
pub use mask::ConnectivityMask;
pub use pos::BlockPos;
pub use set::DirectionSet;
