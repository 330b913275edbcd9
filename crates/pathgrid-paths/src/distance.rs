use pathgrid_core::Pos;

/// Squared Euclidean distance between two positions.
#[inline]
pub fn squared_euclidean(a: Pos, b: Pos) -> i32 {
    let d = a - b;
    d.row * d.row + d.col * d.col
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}
