//! Maze generation and queries

mod cell;
mod generation;
#[allow(clippy::module_inception)]
mod maze;

pub use cell::{Cell, CellGrid, Direction, Walls};
pub use generation::carve_passages;
pub use maze::{Maze, MazeDimensions};
