//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Positions are addressed as `(row, col)` with row 0 at the top of the
//! board and column 0 at the left, which is the order the occupancy matrix
//! is laid out in.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position on the board. Rows grow downward, columns grow right.
///
/// Coordinates are signed so that neighbour offsets can step off the board
/// and be rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    #[inline]
    pub fn is_adjacent_8(self, other: Pos) -> bool {
        let d = other - self;
        d != Pos::ORIGIN && d.row.abs() <= 1 && d.col.abs() <= 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, rows) × [0, cols)` covered by a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A square `size × size` board.
    #[inline]
    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Row-major index of `p`, or `None` if it is off the board.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.cols + p.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index`](Bounds::index). `idx` must be `< len()`.
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        Pos::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The bottom-right cell, or `None` for an empty board.
    #[inline]
    pub fn last(self) -> Option<Pos> {
        if self.is_empty() {
            None
        } else {
            Some(Pos::new(self.rows as i32 - 1, self.cols as i32 - 1))
        }
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn adjacency() {
        let p = Pos::new(5, 5);
        assert!(p.is_adjacent_8(Pos::new(4, 4)));
        assert!(p.is_adjacent_8(Pos::new(5, 6)));
        assert!(!p.is_adjacent_8(p));
        assert!(!p.is_adjacent_8(Pos::new(7, 5)));
    }

    #[test]
    fn bounds_contains_and_index() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.len(), 12);
        assert!(b.contains(Pos::new(2, 3)));
        assert!(!b.contains(Pos::new(3, 0)));
        assert!(!b.contains(Pos::new(0, -1)));
        assert_eq!(b.index(Pos::new(1, 2)), Some(6));
        assert_eq!(b.pos(6), Pos::new(1, 2));
        assert_eq!(b.index(Pos::new(0, 4)), None);
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let pts: Vec<_> = Bounds::new(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
        assert_eq!(Bounds::square(5).iter().len(), 25);
    }

    #[test]
    fn empty_bounds() {
        let b = Bounds::new(0, 7);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
        assert_eq!(b.last(), None);
        assert_eq!(Bounds::square(3).last(), Some(Pos::new(2, 2)));
    }
}
