//! Maze geometry derived from a carved cell grid

use glam::Vec2;
use mazebots_creature::{MazeAccess, PixelRect, SimRng};
use serde::{Deserialize, Serialize};

use super::cell::{CellGrid, Walls};
use super::generation::carve_passages;
use crate::error::MazeError;

/// Validated physical size of a maze
///
/// The grid is `floor(width / cell_size)` by `floor(height / cell_size)` and
/// always at least 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MazeDimensions {
    width: u32,
    height: u32,
    cell_size: u32,
    wall_thickness: u32,
}

impl MazeDimensions {
    pub fn new(
        width: u32,
        height: u32,
        cell_size: u32,
        wall_thickness: u32,
    ) -> Result<Self, MazeError> {
        if cell_size == 0 {
            return Err(MazeError::ZeroCellSize);
        }
        if width < cell_size || height < cell_size {
            return Err(MazeError::SmallerThanCell {
                width,
                height,
                cell_size,
            });
        }
        if wall_thickness.saturating_mul(2) >= cell_size {
            return Err(MazeError::WallTooThick {
                wall_thickness,
                cell_size,
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
            wall_thickness,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn wall_thickness(&self) -> u32 {
        self.wall_thickness
    }

    pub fn cols(&self) -> u32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> u32 {
        self.height / self.cell_size
    }

    /// Grow both sides by `step` while the height is below `max_height`
    pub fn grown(&self, step: u32, max_height: u32) -> Self {
        if self.height >= max_height {
            return *self;
        }
        Self {
            width: self.width.saturating_add(step),
            height: self.height.saturating_add(step),
            ..*self
        }
    }
}

/// Carved maze with its wall rectangles and exit region
///
/// Immutable after construction; a new generation gets a new maze.
#[derive(Debug, Clone)]
pub struct Maze {
    dimensions: MazeDimensions,
    grid: CellGrid,
    walls: Vec<PixelRect>,
    exit: PixelRect,
}

impl Maze {
    /// Validate the dimensions and generate a maze
    pub fn new(
        width: u32,
        height: u32,
        cell_size: u32,
        wall_thickness: u32,
        rng: &mut impl SimRng,
    ) -> Result<Self, MazeError> {
        let dimensions = MazeDimensions::new(width, height, cell_size, wall_thickness)?;
        Ok(Self::generate(dimensions, rng))
    }

    /// Generate a maze from already validated dimensions
    pub fn generate(dimensions: MazeDimensions, rng: &mut impl SimRng) -> Self {
        let mut grid = CellGrid::new(dimensions.cols(), dimensions.rows());
        let removed = carve_passages(&mut grid, rng);
        let walls = build_walls(&grid, &dimensions);
        let exit = exit_rect(&dimensions);

        log::debug!(
            "Generated {}x{} maze ({}x{} cells, {} passages, {} wall segments)",
            dimensions.width,
            dimensions.height,
            grid.cols(),
            grid.rows(),
            removed,
            walls.len()
        );

        Self {
            dimensions,
            grid,
            walls,
            exit,
        }
    }

    pub fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn cell_size(&self) -> u32 {
        self.dimensions.cell_size
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn walls(&self) -> &[PixelRect] {
        &self.walls
    }

    pub fn exit(&self) -> PixelRect {
        self.exit
    }

    /// Inclusive point-in-exit test
    pub fn is_in_exit(&self, point: Vec2) -> bool {
        self.exit.contains_point(point)
    }

    pub fn cell_center(&self, col: u32, row: u32) -> Vec2 {
        let size = self.dimensions.cell_size as f32;
        Vec2::new(
            col as f32 * size + size / 2.0,
            row as f32 * size + size / 2.0,
        )
    }

    /// Centre of the top-left cell, where every bot starts
    pub fn start_position(&self) -> Vec2 {
        self.cell_center(0, 0)
    }

    /// Centre of a uniformly random cell
    pub fn random_cell_center(&self, rng: &mut impl SimRng) -> Vec2 {
        let col = rng.gen_index(self.cols() as usize) as u32;
        let row = rng.gen_index(self.rows() as usize) as u32;
        self.cell_center(col, row)
    }
}

impl MazeAccess for Maze {
    fn is_in_exit(&self, point: Vec2) -> bool {
        Maze::is_in_exit(self, point)
    }

    fn wall_rects(&self) -> &[PixelRect] {
        &self.walls
    }
}

/// One rectangle per standing wall flag, row by row
fn build_walls(grid: &CellGrid, dimensions: &MazeDimensions) -> Vec<PixelRect> {
    let size = dimensions.cell_size as i32;
    let thickness = dimensions.wall_thickness as i32;
    let mut walls = Vec::new();

    for cell in grid.cells() {
        let x = cell.col as i32 * size;
        let y = cell.row as i32 * size;

        if cell.walls.contains(Walls::TOP) {
            walls.push(PixelRect::new(x, y, size, thickness));
        }
        if cell.walls.contains(Walls::RIGHT) {
            walls.push(PixelRect::new(x + size - thickness, y, thickness, size));
        }
        if cell.walls.contains(Walls::BOTTOM) {
            walls.push(PixelRect::new(x, y + size - thickness, size, thickness));
        }
        if cell.walls.contains(Walls::LEFT) {
            walls.push(PixelRect::new(x, y, thickness, size));
        }
    }

    walls
}

/// Interior of the bottom-right cell, inset by the wall thickness
fn exit_rect(dimensions: &MazeDimensions) -> PixelRect {
    let size = dimensions.cell_size as i32;
    let thickness = dimensions.wall_thickness as i32;
    let col = dimensions.cols() as i32 - 1;
    let row = dimensions.rows() as i32 - 1;

    PixelRect::new(
        col * size + thickness,
        row * size + thickness,
        size - 2 * thickness,
        size - 2 * thickness,
    )
}
