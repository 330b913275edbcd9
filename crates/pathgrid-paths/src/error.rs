use std::fmt;

use pathgrid_core::{Bounds, Pos};

/// Which end of the requested route an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors that stop a search before or during expansion.
///
/// A goal that cannot be reached is not an error: see
/// [`PathEngine::find_path`](crate::PathEngine::find_path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint lies outside the matrix.
    OutOfBounds {
        endpoint: Endpoint,
        pos: Pos,
        bounds: Bounds,
    },
    /// An endpoint sits on a wall.
    Blocked { endpoint: Endpoint, pos: Pos },
    /// An endpoint still carries its Start/End role code; the caller must
    /// pass a matrix with both endpoint cells reset to 0.
    UnclearedEndpoint {
        endpoint: Endpoint,
        pos: Pos,
        code: u8,
    },
    /// The configured expansion budget ran out before the goal was reached.
    BudgetExhausted { expanded: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                pos,
                bounds,
            } => write!(f, "{endpoint} {pos} is outside the {bounds} matrix"),
            Self::Blocked { endpoint, pos } => write!(f, "{endpoint} {pos} is a wall"),
            Self::UnclearedEndpoint {
                endpoint,
                pos,
                code,
            } => write!(
                f,
                "{endpoint} {pos} still has occupancy code {code}; reset it to 0 before searching"
            ),
            Self::BudgetExhausted { expanded } => {
                write!(f, "search gave up after expanding {expanded} nodes")
            }
        }
    }
}

impl std::error::Error for PathError {}
