//! The editing [`Session`]: a board, its pixel layout, a search engine and
//! the most recent route.
//!
//! Front ends translate input into session calls (pixel clicks, key
//! presses) and draw [`Session::view`] for each cell. The route found by
//! [`Session::solve`] is kept as an overlay on top of the board and never
//! written into the board itself; any edit discards it.

use std::collections::HashSet;

use log::{debug, info};
use pathgrid_core::{CellLayout, CellStatus, GridModel, Pos};
use pathgrid_paths::{HeuristicKind, PathEngine};
use rand::Rng;

use crate::config::SessionConfig;
use crate::error::SessionError;

/// What a front end should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellView {
    Free,
    Wall,
    Start,
    End,
    /// A free cell on the current route.
    Path,
}

impl CellView {
    /// One-character rendering used by [`Session::render_text`].
    pub const fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
        }
    }
}

impl From<CellStatus> for CellView {
    fn from(s: CellStatus) -> Self {
        match s {
            CellStatus::Free => Self::Free,
            CellStatus::Wall => Self::Wall,
            CellStatus::Start => Self::Start,
            CellStatus::End => Self::End,
        }
    }
}

pub struct Session {
    grid: GridModel,
    layout: CellLayout,
    engine: PathEngine<HeuristicKind>,
    wall_probability: f64,
    route: Vec<Pos>,
}

impl Session {
    /// Build a session from a configuration, placing any configured
    /// start and end markers.
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let mut grid = GridModel::new(config.grid.size);
        if let Some(p) = config.grid.start {
            grid.set_start(p)?;
        }
        if let Some(p) = config.grid.end {
            grid.set_end(p)?;
        }
        Ok(Self {
            grid,
            layout: config.layout,
            engine: PathEngine::with_heuristic(
                config.search.heuristic,
                config.search.engine_config(),
            ),
            wall_probability: config.grid.wall_probability,
            route: Vec::new(),
        })
    }

    #[inline]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    #[inline]
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Window size in pixels needed to draw the board.
    pub fn window_size(&self) -> (u32, u32) {
        self.layout.window_size(self.grid.bounds())
    }

    /// The route from the last successful [`solve`](Session::solve), or an
    /// empty slice.
    #[inline]
    pub fn route(&self) -> &[Pos] {
        &self.route
    }

    /// Flip the wall state of `p`. Start and End cells are left alone.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<CellStatus, SessionError> {
        self.route.clear();
        Ok(self.grid.toggle_wall(p)?)
    }

    pub fn set_start(&mut self, p: Pos) -> Result<(), SessionError> {
        self.route.clear();
        Ok(self.grid.set_start(p)?)
    }

    pub fn set_end(&mut self, p: Pos) -> Result<(), SessionError> {
        self.route.clear();
        Ok(self.grid.set_end(p)?)
    }

    /// Toggle the wall under a pixel. Returns the cell hit, or `None` when
    /// the pixel is on a margin.
    pub fn toggle_at_pixel(&mut self, px: u32, py: u32) -> Result<Option<Pos>, SessionError> {
        let Some(p) = self.cell_at(px, py) else {
            return Ok(None);
        };
        self.toggle_wall(p)?;
        Ok(Some(p))
    }

    /// Move the start marker to the cell under a pixel.
    pub fn start_at_pixel(&mut self, px: u32, py: u32) -> Result<Option<Pos>, SessionError> {
        let Some(p) = self.cell_at(px, py) else {
            return Ok(None);
        };
        self.set_start(p)?;
        Ok(Some(p))
    }

    /// Move the end marker to the cell under a pixel.
    pub fn end_at_pixel(&mut self, px: u32, py: u32) -> Result<Option<Pos>, SessionError> {
        let Some(p) = self.cell_at(px, py) else {
            return Ok(None);
        };
        self.set_end(p)?;
        Ok(Some(p))
    }

    #[inline]
    fn cell_at(&self, px: u32, py: u32) -> Option<Pos> {
        self.layout.cell_at(self.grid.bounds(), px, py)
    }

    /// Turn every wall back to free.
    pub fn clear_walls(&mut self) {
        self.route.clear();
        self.grid.clear_all();
    }

    /// Clear the board and scatter fresh walls with the configured
    /// probability. Returns the number of walls placed.
    pub fn regenerate(&mut self, rng: &mut impl Rng) -> Result<usize, SessionError> {
        self.clear_walls();
        Ok(self.grid.randomize(self.wall_probability, rng)?)
    }

    /// Search for a route between the start and end markers.
    ///
    /// Missing markers default to the top-left and bottom-right corners and
    /// are placed on the board before searching. On success the route is
    /// kept as the display overlay; `Ok(None)` means no route exists.
    pub fn solve(&mut self) -> Result<Option<&[Pos]>, SessionError> {
        self.route.clear();
        let matrix = self.grid.to_occupancy_matrix();
        let (start, end) = matrix.endpoints()?;

        if self.grid.start().is_none() && self.grid.end() != Some(start) {
            self.grid.set_start(start)?;
        }
        if self.grid.end().is_none() && self.grid.start() != Some(end) {
            self.grid.set_end(end)?;
        }

        let cleared = matrix.cleared(&[start, end]);
        match self.engine.find_path(&cleared, start, end)? {
            Some(path) => {
                debug!("route {start} -> {end} has {} cells", path.len());
                self.route = path;
                Ok(Some(self.route.as_slice()))
            }
            None => {
                info!("No path found from {start} to {end}");
                Ok(None)
            }
        }
    }

    /// How the cell at `p` should be drawn, or `None` off the board.
    pub fn view(&self, p: Pos) -> Option<CellView> {
        let status = self.grid.status(p)?;
        if status == CellStatus::Free && self.route.contains(&p) {
            return Some(CellView::Path);
        }
        Some(status.into())
    }

    /// The board as text, one line per row.
    pub fn render_text(&self) -> String {
        let on_route: HashSet<Pos> = self.route.iter().copied().collect();
        let size = self.grid.size();
        let mut out = String::with_capacity(size * (size + 1));
        for (p, status) in self.grid.iter() {
            let view = if status == CellStatus::Free && on_route.contains(&p) {
                CellView::Path
            } else {
                status.into()
            };
            out.push(view.glyph());
            if p.col as usize == size - 1 {
                out.push('\n');
            }
        }
        out
    }
}
