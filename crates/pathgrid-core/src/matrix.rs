//! The [`OccupancyMatrix`]: an immutable integer snapshot of a board.
//!
//! Codes are a fixed contract between the board and the search engine:
//! `0` traversable, `1` wall, `2` start, `3` end. The engine treats every
//! non-zero code as impassable, so a caller first discovers the endpoints
//! with [`endpoints`](OccupancyMatrix::endpoints) and then searches on the
//! copy returned by [`cleared`](OccupancyMatrix::cleared).

use std::fmt;

use crate::cell::CellStatus;
use crate::error::MatrixError;
use crate::geom::{Bounds, Pos};

/// Row-major grid of occupancy codes.
///
/// Deserialized matrices are checked the same way as
/// [`from_rows`](OccupancyMatrix::from_rows) input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct OccupancyMatrix {
    bounds: Bounds,
    codes: Vec<u8>,
}

/// Unchecked wire form of an [`OccupancyMatrix`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    bounds: Bounds,
    codes: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for OccupancyMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, MatrixError> {
        check_shape(raw.bounds, raw.codes.len())?;
        if let Some(i) = raw
            .codes
            .iter()
            .position(|&c| CellStatus::from_code(c).is_none())
        {
            return Err(MatrixError::InvalidCode {
                pos: raw.bounds.pos(i),
                code: raw.codes[i],
            });
        }
        Ok(Self::from_codes(raw.bounds, raw.codes))
    }
}

/// Check that `len` stored cells fill `bounds` exactly and that every
/// position is addressable by a [`Pos`].
pub(crate) fn check_shape(bounds: Bounds, len: usize) -> Result<(), MatrixError> {
    if bounds.is_empty() {
        return Err(MatrixError::Empty);
    }
    let addressable = bounds.rows <= i32::MAX as usize && bounds.cols <= i32::MAX as usize;
    if !addressable || bounds.rows.checked_mul(bounds.cols) != Some(len) {
        return Err(MatrixError::SizeMismatch { bounds, len });
    }
    Ok(())
}

impl OccupancyMatrix {
    pub(crate) fn from_codes(bounds: Bounds, codes: Vec<u8>) -> Self {
        debug_assert_eq!(bounds.len(), codes.len());
        Self { bounds, codes }
    }

    /// Build a matrix from rows of codes.
    ///
    /// Every row must have the same, non-zero length and every code must be
    /// one of 0–3.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(MatrixError::Empty);
        }
        let mut codes = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::Ragged {
                    row: r,
                    len: row.len(),
                    expected: cols,
                });
            }
            for (c, &code) in row.iter().enumerate() {
                if CellStatus::from_code(code).is_none() {
                    return Err(MatrixError::InvalidCode {
                        pos: Pos::new(r as i32, c as i32),
                        code,
                    });
                }
            }
            codes.extend_from_slice(row);
        }
        Ok(Self::from_codes(Bounds::new(rows.len(), cols), codes))
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// Code at `p`, or `None` if `p` is off the matrix.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<u8> {
        self.bounds.index(p).map(|i| self.codes[i])
    }

    /// Whether `p` is on the matrix and its code is zero.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.get(p) == Some(CellStatus::Free.code())
    }

    /// The codes of row `r`. Panics if `r >= rows()`.
    pub fn row(&self, r: usize) -> &[u8] {
        let cols = self.bounds.cols;
        &self.codes[r * cols..(r + 1) * cols]
    }

    /// Locate the single cell carrying `role`'s code, scanning row-major.
    pub fn find_role(&self, role: CellStatus) -> Result<Option<Pos>, MatrixError> {
        let code = role.code();
        let mut hits = self
            .codes
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == code)
            .map(|(i, _)| self.bounds.pos(i));
        let first = hits.next();
        if let (Some(first), Some(second)) = (first, hits.next()) {
            return Err(MatrixError::DuplicateRole {
                role,
                first,
                second,
            });
        }
        Ok(first)
    }

    /// Discover the start and end positions.
    ///
    /// A missing Start defaults to the top-left corner and a missing End to
    /// the bottom-right corner.
    pub fn endpoints(&self) -> Result<(Pos, Pos), MatrixError> {
        let last = self.bounds.last().ok_or(MatrixError::Empty)?;
        let start = self.find_role(CellStatus::Start)?.unwrap_or(Pos::ORIGIN);
        let end = self.find_role(CellStatus::End)?.unwrap_or(last);
        Ok((start, end))
    }

    /// Copy of this matrix with the code at each of `positions` reset to 0.
    ///
    /// Positions off the matrix are ignored.
    pub fn cleared(&self, positions: &[Pos]) -> OccupancyMatrix {
        let mut codes = self.codes.clone();
        for &p in positions {
            if let Some(i) = self.bounds.index(p) {
                codes[i] = CellStatus::Free.code();
            }
        }
        Self::from_codes(self.bounds, codes)
    }
}

impl fmt::Display for OccupancyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for &c in self.row(r) {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_matrix() {
        let m = OccupancyMatrix::from_rows(&[[0, 1], [2, 3], [0, 0]]).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(Pos::new(1, 1)), Some(3));
        assert_eq!(m.get(Pos::new(3, 0)), None);
        assert!(m.is_open(Pos::new(2, 1)));
        assert!(!m.is_open(Pos::new(0, 1)));
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(OccupancyMatrix::from_rows(&empty), Err(MatrixError::Empty));
        let ragged: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        assert_eq!(
            OccupancyMatrix::from_rows(&ragged),
            Err(MatrixError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            OccupancyMatrix::from_rows(&[[0, 7]]),
            Err(MatrixError::InvalidCode {
                pos: Pos::new(0, 1),
                code: 7
            })
        );
    }

    #[test]
    fn endpoints_default_to_corners() {
        let m = OccupancyMatrix::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(m.endpoints().unwrap(), (Pos::new(0, 0), Pos::new(2, 2)));
    }

    #[test]
    fn endpoints_are_discovered() {
        let m = OccupancyMatrix::from_rows(&[[0, 0, 3], [0, 1, 0], [2, 0, 0]]).unwrap();
        assert_eq!(m.endpoints().unwrap(), (Pos::new(2, 0), Pos::new(0, 2)));
    }

    #[test]
    fn duplicate_roles_are_invariant_violations() {
        let m = OccupancyMatrix::from_rows(&[[2, 0], [0, 2]]).unwrap();
        assert_eq!(
            m.endpoints(),
            Err(MatrixError::DuplicateRole {
                role: CellStatus::Start,
                first: Pos::new(0, 0),
                second: Pos::new(1, 1),
            })
        );
    }

    #[test]
    fn cleared_returns_new_matrix() {
        let m = OccupancyMatrix::from_rows(&[[2, 1], [1, 3]]).unwrap();
        let z = m.cleared(&[Pos::new(0, 0), Pos::new(1, 1), Pos::new(5, 5)]);
        assert_eq!(z.row(0), &[0, 1]);
        assert_eq!(z.row(1), &[1, 0]);
        // The source snapshot is untouched.
        assert_eq!(m.get(Pos::new(0, 0)), Some(2));
    }

    #[test]
    fn display_prints_codes() {
        let m = OccupancyMatrix::from_rows(&[[0, 1], [2, 3]]).unwrap();
        assert_eq!(m.to_string(), "01\n23\n");
    }
}
