//! Error types for simulation construction
//!
//! Only construction can fail. Once a `Simulation` exists every tick is a
//! total function over its state.

use thiserror::Error;

/// Invalid maze geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("maze {width}x{height} is smaller than one {cell_size}px cell")]
    SmallerThanCell {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("wall thickness {wall_thickness} leaves no interior in a {cell_size}px cell")]
    WallTooThick { wall_thickness: u32, cell_size: u32 },
}

/// Any error raised while building a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
