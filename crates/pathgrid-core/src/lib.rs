//! **pathgrid-core**: the editable board behind the pathgrid planner.
//!
//! This crate provides the types shared across the *pathgrid* workspace:
//! geometry primitives, cell roles, the [`GridModel`] that owns the board,
//! the [`OccupancyMatrix`] snapshot consumed by the search engine, and the
//! pixel-to-cell [`CellLayout`] used by front ends.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod matrix;

pub use cell::CellStatus;
pub use error::{GridError, MatrixError};
pub use geom::{Bounds, Pos};
pub use grid::GridModel;
pub use layout::{CellLayout, PixelRect};
pub use matrix::OccupancyMatrix;
