//! Route search over pathgrid occupancy matrices.
//!
//! The engine is a best-first (A\*-style) search on an 8-connected grid
//! where every step, cardinal or diagonal, costs 1:
//!
//! - [`PathEngine::find_path`] returns the route from start to end, both
//!   included, or `None` when the goal cannot be reached.
//! - The frontier is scanned for the smallest `f = g + h`, earliest entry
//!   first on ties, so results are deterministic.
//! - The estimate `h` comes from a [`Heuristic`]. The default,
//!   [`SquaredEuclidean`], overestimates and so trades optimality for a
//!   greedier search; [`Chebyshev`] is admissible.
//! - [`Revisit`] selects between re-adding already discovered positions
//!   unconditionally and skipping them.
//!
//! Every call is self-contained; an engine can be shared freely.

mod astar;
mod distance;
mod error;
mod heuristic;
mod neighbors;
mod node;
mod traits;

pub use astar::{EngineConfig, PathEngine, Revisit, SearchStats, find_path};
pub use distance::{chebyshev, manhattan, squared_euclidean};
pub use error::{Endpoint, PathError};
pub use heuristic::{Chebyshev, HeuristicKind, Manhattan, SquaredEuclidean};
pub use neighbors::{Neighbors, OFFSETS};
pub use node::SearchNode;
pub use traits::Heuristic;
