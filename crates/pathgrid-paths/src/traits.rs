use pathgrid_core::Pos;

/// Estimate of the remaining cost from a position to the goal.
///
/// Admissibility (never overestimating) is not required: the default
/// [`SquaredEuclidean`](crate::SquaredEuclidean) estimate overstates the
/// remaining cost once the goal is more than one step away, so routes are
/// not guaranteed to be globally shortest with it.
pub trait Heuristic {
    /// Estimated cost of reaching `goal` from `from`.
    fn estimate(&self, from: Pos, goal: Pos) -> i32;
}

impl<F: Fn(Pos, Pos) -> i32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Pos, goal: Pos) -> i32 {
        self(from, goal)
    }
}
