//! Pathing over a grid of terrain symbols.

use waymark_core::{Cost, Grid, Path, Pos, TerrainCosts};

use crate::PathRange;
use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Moves orthogonally between in-bounds cells whose terrain is passable.
/// Entering a cell costs that cell's terrain cost.
///
/// The estimate is the plain Manhattan distance, one unit per step. It is
/// admissible and consistent while every passable symbol costs at least 1;
/// zero-cost symbols can make A* settle for a longer route.
#[derive(Clone, Copy)]
pub struct TerrainPather<'a> {
    grid: &'a Grid<String>,
    costs: &'a TerrainCosts,
}

impl<'a> TerrainPather<'a> {
    pub fn new(grid: &'a Grid<String>, costs: &'a TerrainCosts) -> Self {
        Self { grid, costs }
    }

    /// Terrain cost of the cell at `p`; out of bounds is unreachable.
    pub fn cell_cost(&self, p: Pos) -> Cost {
        self.grid
            .at(p)
            .map_or(Cost::Unreachable, |s| self.costs.cost(s))
    }
}

impl Pather for TerrainPather<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for np in p.neighbors_4() {
            if self.grid.at(np).is_some_and(|s| self.costs.passable(s)) {
                buf.push(np);
            }
        }
    }
}

impl WeightedPather for TerrainPather<'_> {
    fn cost(&self, _from: Pos, to: Pos) -> Cost {
        self.cell_cost(to)
    }
}

impl AstarPather for TerrainPather<'_> {
    fn estimate(&self, from: Pos, to: Pos) -> u64 {
        manhattan(from, to)
    }
}

/// Find a minimum-cost path from `start` to `goal` on a terrain grid.
///
/// Returns `None` when `goal` cannot be reached. When `start == goal` the
/// path is that single cell, costing the cell's own terrain cost.
pub fn find_path(grid: &Grid<String>, costs: &TerrainCosts, start: Pos, goal: Pos) -> Option<Path> {
    let pather = TerrainPather::new(grid, costs);
    let mut pr = PathRange::new(grid.bounds());
    let path = pr.astar_path(&pather, start, goal);
    if path.is_none() {
        log::trace!("no path from {start} to {goal}");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::terrain::{GRASS, WALL};

    fn grid(rows: &[&[&str]]) -> Grid<String> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn neighbors_skip_walls_and_bounds() {
        let g = grid(&[&[GRASS, WALL], &[GRASS, GRASS]]);
        let costs = TerrainCosts::default();
        let pather = TerrainPather::new(&g, &costs);
        let mut buf = Vec::new();
        pather.neighbors(Pos::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Pos::new(1, 0)]);
    }

    #[test]
    fn unknown_symbol_blocks() {
        let g = grid(&[&[GRASS, "?", GRASS]]);
        assert!(find_path(&g, &TerrainCosts::default(), Pos::new(0, 0), Pos::new(0, 2)).is_none());
    }

    #[test]
    fn cost_counts_cells_after_start() {
        let g = grid(&[&["S", "G", "F"]]);
        let p = find_path(&g, &TerrainCosts::default(), Pos::new(0, 0), Pos::new(0, 2)).unwrap();
        assert_eq!(p.cost(), 10 + 100);
        let back = find_path(&g, &TerrainCosts::default(), Pos::new(0, 2), Pos::new(0, 0)).unwrap();
        assert_eq!(back.cost(), 10 + 20);
    }
}
