//! Error types for direction parsing and conversion.

use std::fmt;

/// Errors arising from converting raw values into directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A numeric index outside `0..6`.
    InvalidDirectionIndex {
        /// The offending index.
        index: u8,
    },
    /// A direction name that is not one of the six faces.
    UnknownDirection {
        /// The name as given.
        name: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectionIndex { index } => {
                write!(f, "direction index {index} out of range 0..6")
            }
            Self::UnknownDirection { name } => {
                write!(f, "unknown direction '{name}'")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
