//! Built-in [`Heuristic`] implementations.

use pathgrid_core::Pos;

use crate::distance::{chebyshev, manhattan, squared_euclidean};
use crate::traits::Heuristic;

/// `Δrow² + Δcol²`. The default; inadmissible under unit step cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl Heuristic for SquaredEuclidean {
    #[inline]
    fn estimate(&self, from: Pos, goal: Pos) -> i32 {
        squared_euclidean(from, goal)
    }
}

/// `max(|Δrow|, |Δcol|)`. Exact on an open 8-connected unit-cost grid, and
/// therefore admissible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    #[inline]
    fn estimate(&self, from: Pos, goal: Pos) -> i32 {
        chebyshev(from, goal)
    }
}

/// `|Δrow| + |Δcol|`. Overestimates diagonal moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Pos, goal: Pos) -> i32 {
        manhattan(from, goal)
    }
}

/// Runtime choice among the built-in heuristics, for configuration files.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeuristicKind {
    #[default]
    SquaredEuclidean,
    Chebyshev,
    Manhattan,
}

impl Heuristic for HeuristicKind {
    #[inline]
    fn estimate(&self, from: Pos, goal: Pos) -> i32 {
        match self {
            Self::SquaredEuclidean => squared_euclidean(from, goal),
            Self::Chebyshev => chebyshev(from, goal),
            Self::Manhattan => manhattan(from, goal),
        }
    }
}
