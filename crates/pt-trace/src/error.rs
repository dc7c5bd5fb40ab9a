use core::fmt;

use pt_core::{Direction, GridPoint};

use crate::cell::CornerMask;

/// Invariant violations surfaced while tracing.
///
/// Each variant means the cell map or the transition table broke its
/// construction contract; the trace that hit one is abandoned rather than
/// allowed to emit a malformed polygon. They are program defects, not
/// recoverable input errors. One practical exception: a shape touching
/// the sampled border leaves an open boundary chain and shows up as
/// `MissingNeighbor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A stored cell admits no boundary path at all.
    NoEntryDirection { point: GridPoint, corners: CornerMask },
    /// A stored cell does not accept the direction the walk arrived with.
    NoExitDirection {
        point: GridPoint,
        corners: CornerMask,
        entered: Direction,
    },
    /// The walk stepped onto a coordinate with no stored cell.
    MissingNeighbor { point: GridPoint, from: GridPoint },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEntryDirection { point, corners } => {
                write!(f, "no boundary path through cell {point} with corners {corners}")
            }
            Self::NoExitDirection {
                point,
                corners,
                entered,
            } => {
                write!(
                    f,
                    "cell {point} with corners {corners} has no exit for a path entering {entered}"
                )
            }
            Self::MissingNeighbor { point, from } => {
                write!(f, "no boundary cell at {point}, stepping from {from}")
            }
        }
    }
}

impl std::error::Error for Error {}
