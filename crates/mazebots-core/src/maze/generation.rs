//! Randomised depth-first maze carving
//!
//! Iterative backtracking: from the cell on top of the stack pick a random
//! unvisited neighbour, knock down the wall between them and push it; pop
//! when no unvisited neighbour is left. The result is a spanning tree, so
//! every cell is reachable and the path between any two cells is unique.

use mazebots_creature::SimRng;
use smallvec::SmallVec;

use super::cell::{CellGrid, Direction};

/// Carve passages through a fully walled grid, starting at the top-left cell
///
/// Returns the number of wall pairs removed, which is always `cells - 1`.
pub fn carve_passages(grid: &mut CellGrid, rng: &mut impl SimRng) -> usize {
    if grid.is_empty() {
        return 0;
    }

    let mut removed = 0;
    let mut stack: Vec<(u32, u32)> = Vec::with_capacity(grid.len());

    if let Some(start) = grid.cell_mut(0, 0) {
        start.visited = true;
    }
    stack.push((0, 0));

    while let Some(&(col, row)) = stack.last() {
        let candidates: SmallVec<[(Direction, u32, u32); 4]> = Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let (nc, nr) = grid.neighbor(col, row, dir)?;
                let visited = grid.cell(nc, nr)?.visited;
                (!visited).then_some((dir, nc, nr))
            })
            .collect();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (dir, nc, nr) = candidates[rng.gen_index(candidates.len())];
        if let Some(next) = grid.cell_mut(nc, nr) {
            next.visited = true;
        }
        grid.remove_wall(col, row, dir);
        removed += 1;
        stack.push((nc, nr));
    }

    removed
}
