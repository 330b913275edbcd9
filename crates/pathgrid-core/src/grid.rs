//! The [`GridModel`] type: the editable board of [`CellStatus`] values.
//!
//! The model is the single source of truth for which cells are walls and
//! where the start and end markers sit. It owns its cells outright: there
//! is no shared buffer and no way to alias a cell except through the
//! accessor methods below. The search engine never sees the model itself,
//! only the [`OccupancyMatrix`] snapshot produced by
//! [`to_occupancy_matrix`](GridModel::to_occupancy_matrix).

use log::{debug, trace};
use rand::Rng;

use crate::cell::CellStatus;
use crate::error::GridError;
use crate::geom::{Bounds, Pos};
use crate::matrix::{OccupancyMatrix, check_shape};

/// An N×N board of cells with at most one Start and at most one End.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct GridModel {
    bounds: Bounds,
    cells: Vec<CellStatus>,
    start: Option<Pos>,
    end: Option<Pos>,
}

/// Unchecked wire form of a [`GridModel`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Bounds,
    cells: Vec<CellStatus>,
    start: Option<Pos>,
    end: Option<Pos>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for GridModel {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let grid = GridModel {
            bounds: raw.bounds,
            cells: raw.cells,
            start: raw.start,
            end: raw.end,
        };
        grid.check_consistency()?;
        Ok(grid)
    }
}

impl GridModel {
    /// Create a `size × size` board with every cell Free.
    pub fn new(size: usize) -> Self {
        let bounds = Bounds::square(size);
        Self {
            bounds,
            cells: vec![CellStatus::Free; bounds.len()],
            start: None,
            end: None,
        }
    }

    /// The rectangle covered by the board.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.bounds.rows
    }

    /// Whether `p` is on the board.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Status of the cell at `p`, or `None` if `p` is off the board.
    pub fn status(&self, p: Pos) -> Option<CellStatus> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Position of the Start cell, if one is marked.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// Position of the End cell, if one is marked.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    fn index(&self, p: Pos) -> Result<usize, GridError> {
        self.bounds.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// Mark `p` as a wall. No-op if `p` holds Start or End.
    pub fn set_wall(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.set_unless_endpoint(i, CellStatus::Wall);
        Ok(())
    }

    /// Mark `p` as free. No-op if `p` holds Start or End.
    pub fn set_free(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.set_unless_endpoint(i, CellStatus::Free);
        Ok(())
    }

    /// Flip a wall to free, or anything else to a wall, following the
    /// endpoint protection of [`set_wall`](GridModel::set_wall).
    ///
    /// Returns the status of the cell after the edit.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<CellStatus, GridError> {
        let i = self.index(p)?;
        let next = match self.cells[i] {
            CellStatus::Wall => CellStatus::Free,
            _ => CellStatus::Wall,
        };
        self.set_unless_endpoint(i, next);
        Ok(self.cells[i])
    }

    #[inline]
    fn set_unless_endpoint(&mut self, i: usize, status: CellStatus) {
        if !self.cells[i].is_endpoint() {
            self.cells[i] = status;
        }
    }

    /// Move the Start marker to `p`.
    ///
    /// The previous Start cell (if any) becomes Free. Whatever `p` held
    /// before is overwritten, including an End marker.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.clear_start();
        if self.end == Some(p) {
            self.end = None;
        }
        self.cells[i] = CellStatus::Start;
        self.start = Some(p);
        trace!("start moved to {p}");
        Ok(())
    }

    /// Move the End marker to `p`. Symmetric to
    /// [`set_start`](GridModel::set_start).
    pub fn set_end(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.clear_end();
        if self.start == Some(p) {
            self.start = None;
        }
        self.cells[i] = CellStatus::End;
        self.end = Some(p);
        trace!("end moved to {p}");
        Ok(())
    }

    /// Vacate the Start cell, if any, leaving it Free.
    pub fn clear_start(&mut self) {
        if let Some(i) = self.start.take().and_then(|p| self.bounds.index(p)) {
            self.cells[i] = CellStatus::Free;
        }
    }

    /// Vacate the End cell, if any, leaving it Free.
    pub fn clear_end(&mut self) {
        if let Some(i) = self.end.take().and_then(|p| self.bounds.index(p)) {
            self.cells[i] = CellStatus::Free;
        }
    }

    /// Reset every cell except Start and End to Free.
    pub fn clear_all(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.is_endpoint() {
                *c = CellStatus::Free;
            }
        }
        debug!("cleared {} board", self.bounds);
    }

    /// Independently turn each cell into a wall with probability `p`.
    ///
    /// Each cell consumes exactly one uniform draw from `rng`, in row-major
    /// order, whether or not it is protected; Start and End are never
    /// touched. Cells that lose the draw keep their current status.
    ///
    /// Returns the number of cells that won the draw and are now walls.
    pub fn randomize(&mut self, p: f64, rng: &mut impl Rng) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GridError::InvalidProbability(p));
        }
        let mut walls = 0;
        for c in self.cells.iter_mut() {
            let r: f64 = rng.random();
            if r < p && !c.is_endpoint() {
                *c = CellStatus::Wall;
                walls += 1;
            }
        }
        debug!("randomize(p = {p}) placed {walls} walls on {} board", self.bounds);
        Ok(walls)
    }

    /// Count how many cells have the given status.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&c| c == status).count()
    }

    /// Iterate over `(Pos, CellStatus)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellStatus)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Verify that the cells fill a square board and that the recorded
    /// Start and End positions are the only cells carrying those roles.
    pub fn check_consistency(&self) -> Result<(), GridError> {
        if self.bounds.rows != self.bounds.cols {
            return Err(GridError::NotSquare(self.bounds));
        }
        check_shape(self.bounds, self.cells.len())?;
        let matrix = self.to_occupancy_matrix();
        for (role, recorded) in [
            (CellStatus::Start, self.start),
            (CellStatus::End, self.end),
        ] {
            let found = matrix.find_role(role)?;
            if found != recorded {
                return Err(GridError::MarkerMismatch {
                    role,
                    recorded,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Snapshot the board as an occupancy matrix (Free 0, Wall 1, Start 2,
    /// End 3).
    pub fn to_occupancy_matrix(&self) -> OccupancyMatrix {
        OccupancyMatrix::from_codes(self.bounds, self.cells.iter().map(|c| c.code()).collect())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_model_round_trip() {
        let mut g = GridModel::new(3);
        g.set_wall(Pos::new(0, 2)).unwrap();
        g.set_start(Pos::new(1, 1)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: GridModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    fn load(json: &str) -> Result<GridModel, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    #[test]
    fn cell_count_must_match_bounds() {
        let err = load(r#"{"bounds":{"rows":2,"cols":2},"cells":["Free"],"start":null,"end":null}"#)
            .unwrap_err();
        assert!(err.contains("1 cells stored for a 2x2 grid"), "{err}");
    }

    #[test]
    fn non_square_board_is_rejected() {
        let err = load(
            r#"{"bounds":{"rows":1,"cols":2},"cells":["Free","Free"],"start":null,"end":null}"#,
        )
        .unwrap_err();
        assert!(err.contains("not square"), "{err}");
    }

    #[test]
    fn recorded_start_must_match_cells() {
        let err = load(
            r#"{"bounds":{"rows":2,"cols":2},"cells":["Free","Free","Free","Free"],
                "start":{"row":0,"col":0},"end":null}"#,
        )
        .unwrap_err();
        assert!(err.contains("Start recorded at (0, 0) but found at no cell"), "{err}");
    }

    #[test]
    fn duplicate_start_cells_are_rejected() {
        let err = load(
            r#"{"bounds":{"rows":2,"cols":2},"cells":["Start","Free","Free","Start"],
                "start":{"row":0,"col":0},"end":null}"#,
        )
        .unwrap_err();
        assert!(err.contains("Start is marked at both"), "{err}");
    }
}
