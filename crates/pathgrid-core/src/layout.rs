//! Pixel geometry of a drawn board: [`CellLayout`] and [`PixelRect`].
//!
//! Cells are drawn as fixed-size rectangles separated by a uniform margin,
//! with a margin also running around the outside of the board. Pixels that
//! fall on a margin belong to no cell.

use crate::geom::{Bounds, Pos};

/// A drawn cell rectangle in pixels, half-open on the right and bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[inline]
    pub fn contains(self, px: u32, py: u32) -> bool {
        px >= self.x && px - self.x < self.width && py >= self.y && py - self.y < self.height
    }
}

/// Fixed per-cell size and inter-cell margin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    pub margin: u32,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            cell_width: 20,
            cell_height: 20,
            margin: 5,
        }
    }
}

impl CellLayout {
    pub const fn new(cell_width: u32, cell_height: u32, margin: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            margin,
        }
    }

    /// Window size `(width, height)` needed to draw `bounds`, margins
    /// included on every side. Saturates at `u32::MAX`; see
    /// [`checked_window_size`](CellLayout::checked_window_size).
    pub fn window_size(&self, bounds: Bounds) -> (u32, u32) {
        self.checked_window_size(bounds).unwrap_or((u32::MAX, u32::MAX))
    }

    /// Window size, or `None` if either side does not fit in a `u32`.
    pub fn checked_window_size(&self, bounds: Bounds) -> Option<(u32, u32)> {
        Some((
            axis_extent(bounds.cols, self.cell_width, self.margin)?,
            axis_extent(bounds.rows, self.cell_height, self.margin)?,
        ))
    }

    /// Pixel rectangle of the cell at `p`. `p` must be non-negative.
    pub fn cell_rect(&self, p: Pos) -> PixelRect {
        let row = p.row.max(0) as u32;
        let col = p.col.max(0) as u32;
        PixelRect {
            x: axis_offset(col, self.cell_width, self.margin),
            y: axis_offset(row, self.cell_height, self.margin),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Resolve a pixel to the cell drawn under it, or `None` if the pixel
    /// is on a margin or beyond the board.
    pub fn cell_at(&self, bounds: Bounds, px: u32, py: u32) -> Option<Pos> {
        let col = axis_cell(px, self.cell_width, self.margin, bounds.cols)?;
        let row = axis_cell(py, self.cell_height, self.margin, bounds.rows)?;
        Some(Pos::new(row as i32, col as i32))
    }
}

fn axis_extent(count: usize, cell: u32, margin: u32) -> Option<u32> {
    let count = u32::try_from(count).ok()?;
    count
        .checked_mul(cell)?
        .checked_add(count.checked_add(1)?.checked_mul(margin)?)
}

fn axis_offset(idx: u32, cell: u32, margin: u32) -> u32 {
    idx.saturating_add(1)
        .saturating_mul(margin)
        .saturating_add(idx.saturating_mul(cell))
}

/// Index of the cell spanning coordinate `v` along one axis.
fn axis_cell(v: u32, cell: u32, margin: u32, count: usize) -> Option<usize> {
    let stride = cell.saturating_add(margin);
    if cell == 0 || v < margin {
        return None;
    }
    let t = v - margin;
    let idx = (t / stride) as usize;
    if t % stride < cell && idx < count {
        Some(idx)
    } else {
        None
    }
}
