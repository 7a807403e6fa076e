//! Error types for the transport layer.
//!
//! Invalid input (an empty stack, no selected faces) and the absence of
//! acceptors are not errors: those paths simply move nothing. The
//! variants here describe host-side misbehaviour that the transport
//! layer detects but cannot repair.

use crate::id::EntityId;
use sluice_space::Direction;
use std::error::Error;
use std::fmt;

/// Misbehaviour detected while distributing resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// An acceptor reported accepting more than it was offered.
    ///
    /// The reported amount is not clamped, so totals built from it are
    /// inconsistent by exactly the excess.
    AcceptorContractViolation {
        /// The misbehaving acceptor.
        entity: EntityId,
        /// Direction from the node to the acceptor.
        direction: Direction,
        /// Units offered.
        offered: u32,
        /// Units the acceptor claimed to accept.
        accepted: u32,
    },
    /// A classified acceptor could no longer be resolved for commit.
    EntityVanished {
        /// The handle that stopped resolving.
        entity: EntityId,
        /// Direction from the node to the entity.
        direction: Direction,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AcceptorContractViolation {
                entity,
                direction,
                offered,
                accepted,
            } => write!(
                f,
                "acceptor {entity} on {direction} accepted {accepted} of {offered} offered"
            ),
            Self::EntityVanished { entity, direction } => {
                write!(f, "acceptor {entity} on {direction} vanished before commit")
            }
        }
    }
}

impl Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_message_names_amounts() {
        let e = TransportError::AcceptorContractViolation {
            entity: EntityId(3),
            direction: Direction::West,
            offered: 4,
            accepted: 9,
        };
        assert_eq!(e.to_string(), "acceptor #3 on west accepted 9 of 4 offered");
    }
}
