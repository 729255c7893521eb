//! Cell grid with four-sided walls

use std::collections::VecDeque;

use bitflags::bitflags;

bitflags! {
    /// Walls still standing around a cell
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

/// Grid direction, in the order neighbours are considered during carving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Wall on this side of a cell
    pub fn wall(self) -> Walls {
        match self {
            Direction::Up => Walls::TOP,
            Direction::Right => Walls::RIGHT,
            Direction::Down => Walls::BOTTOM,
            Direction::Left => Walls::LEFT,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// (column, row) delta
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Single maze cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    pub walls: Walls,
    /// Only meaningful while carving
    pub visited: bool,
}

impl Cell {
    pub fn new(col: u32, row: u32) -> Self {
        Self {
            col,
            row,
            walls: Walls::all(),
            visited: false,
        }
    }
}

/// Row-major grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a fully walled, unvisited grid
    pub fn new(cols: u32, rows: u32) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(col, row)))
            .collect();
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| (row * self.cols + col) as usize)
    }

    pub fn cell(&self, col: u32, row: u32) -> Option<&Cell> {
        let i = self.index(col, row)?;
        Some(&self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, col: u32, row: u32) -> Option<&mut Cell> {
        let i = self.index(col, row)?;
        Some(&mut self.cells[i])
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinates of the neighbour in `direction`, if inside the grid
    pub fn neighbor(&self, col: u32, row: u32, direction: Direction) -> Option<(u32, u32)> {
        let (dc, dr) = direction.offset();
        let nc = col as i64 + dc;
        let nr = row as i64 + dr;
        if nc < 0 || nr < 0 || nc >= self.cols as i64 || nr >= self.rows as i64 {
            return None;
        }
        Some((nc as u32, nr as u32))
    }

    /// Out-of-grid coordinates count as walled
    pub fn has_wall(&self, col: u32, row: u32, direction: Direction) -> bool {
        self.cell(col, row)
            .is_none_or(|cell| cell.walls.contains(direction.wall()))
    }

    /// Knock down the wall between a cell and its neighbour, on both sides
    ///
    /// Returns false if the neighbour lies outside the grid.
    pub(crate) fn remove_wall(&mut self, col: u32, row: u32, direction: Direction) -> bool {
        let Some((nc, nr)) = self.neighbor(col, row, direction) else {
            return false;
        };
        if let Some(cell) = self.cell_mut(col, row) {
            cell.walls.remove(direction.wall());
        }
        if let Some(cell) = self.cell_mut(nc, nr) {
            cell.walls.remove(direction.opposite().wall());
        }
        true
    }

    /// Number of adjacent cell pairs joined by an open passage
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| {
                        self.neighbor(cell.col, cell.row, dir).is_some()
                            && !cell.walls.contains(dir.wall())
                    })
                    .count()
            })
            .sum()
    }

    /// Number of cells reachable from (col, row) through open passages
    pub fn reachable_from(&self, col: u32, row: u32) -> usize {
        let Some(start) = self.index(col, row) else {
            return 0;
        };

        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([(col, row)]);
        seen[start] = true;
        let mut count = 0;

        while let Some((c, r)) = queue.pop_front() {
            count += 1;
            for dir in Direction::ALL {
                if self.has_wall(c, r, dir) {
                    continue;
                }
                if let Some((nc, nr)) = self.neighbor(c, r, dir)
                    && let Some(i) = self.index(nc, nr)
                    && !seen[i]
                {
                    seen[i] = true;
                    queue.push_back((nc, nr));
                }
            }
        }

        count
    }
}
