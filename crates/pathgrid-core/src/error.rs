//! Error types for board edits and occupancy matrices.

use std::fmt;

use crate::cell::CellStatus;
use crate::geom::{Bounds, Pos};

/// Errors returned by [`GridModel`](crate::GridModel) mutators.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The position is not on the board.
    OutOfBounds { pos: Pos, bounds: Bounds },
    /// A wall probability outside `[0, 1]` (or NaN) was supplied.
    InvalidProbability(f64),
    /// Stored board data is not square.
    NotSquare(Bounds),
    /// Stored board data does not describe a valid board.
    Corrupt(MatrixError),
    /// A stored marker position disagrees with the cell carrying that role.
    MarkerMismatch {
        role: CellStatus,
        recorded: Option<Pos>,
        found: Option<Pos>,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside the {bounds} board")
            }
            Self::InvalidProbability(p) => {
                write!(f, "wall probability {p} is not within [0, 1]")
            }
            Self::NotSquare(bounds) => write!(f, "board {bounds} is not square"),
            Self::Corrupt(err) => write!(f, "corrupt board: {err}"),
            Self::MarkerMismatch {
                role,
                recorded,
                found,
            } => write!(
                f,
                "{role:?} recorded at {} but found at {}",
                DisplayOpt(recorded),
                DisplayOpt(found)
            ),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Corrupt(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MatrixError> for GridError {
    fn from(err: MatrixError) -> Self {
        Self::Corrupt(err)
    }
}

struct DisplayOpt<'a>(&'a Option<Pos>);

impl fmt::Display for DisplayOpt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{p}"),
            None => write!(f, "no cell"),
        }
    }
}

/// Errors raised while building or inspecting an
/// [`OccupancyMatrix`](crate::OccupancyMatrix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows or no columns.
    Empty,
    /// Row `row` has `len` codes while the first row has `expected`.
    Ragged { row: usize, len: usize, expected: usize },
    /// A code other than 0–3 was found.
    InvalidCode { pos: Pos, code: u8 },
    /// The number of stored cells does not match the dimensions.
    SizeMismatch { bounds: Bounds, len: usize },
    /// More than one cell carries the same endpoint role.
    DuplicateRole {
        role: CellStatus,
        first: Pos,
        second: Pos,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "occupancy matrix is empty"),
            Self::Ragged { row, len, expected } => write!(
                f,
                "occupancy matrix row {row} has {len} cells, expected {expected}"
            ),
            Self::InvalidCode { pos, code } => {
                write!(f, "invalid occupancy code {code} at {pos}")
            }
            Self::SizeMismatch { bounds, len } => {
                write!(f, "{len} cells stored for a {bounds} grid")
            }
            Self::DuplicateRole {
                role,
                first,
                second,
            } => write!(f, "{role:?} is marked at both {first} and {second}"),
        }
    }
}

impl std::error::Error for MatrixError {}
