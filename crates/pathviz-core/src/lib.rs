//! Grid state shared by the pathviz search engine.
//!
//! Cells are addressed by a row-major [`CellId`]. The fixed-size [`Grid`]
//! keeps exactly one start and one end, and [`RunToken`] marks which search
//! run is currently allowed to touch it.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod token;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{CellId, Dims, Direction, Point};
pub use grid::Grid;
pub use token::RunToken;
