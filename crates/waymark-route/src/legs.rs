//! Memoized outer-leg pricing on the world grid.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use waymark_core::{Cost, Grid, Path, Pos, TerrainCosts};
use waymark_paths::{PathRange, TerrainPather};

/// Prices legs between world positions, searching each `(from, to)` pair
/// at most once and reusing the node arrays between searches.
pub(crate) struct Legs<'a> {
    pather: TerrainPather<'a>,
    range: PathRange,
    memo: HashMap<(Pos, Pos), Option<Path>>,
    searches: usize,
}

impl<'a> Legs<'a> {
    pub(crate) fn new(grid: &'a Grid<String>, costs: &'a TerrainCosts) -> Self {
        Self {
            pather: TerrainPather::new(grid, costs),
            range: PathRange::new(grid.bounds()),
            memo: HashMap::new(),
            searches: 0,
        }
    }

    /// The minimum-cost path from `from` to `to`, or `None` if unreachable.
    pub(crate) fn leg(&mut self, from: Pos, to: Pos) -> Option<&Path> {
        match self.memo.entry((from, to)) {
            Entry::Occupied(e) => e.into_mut().as_ref(),
            Entry::Vacant(e) => {
                self.searches += 1;
                let path = self.range.astar_path(&self.pather, from, to);
                match &path {
                    Some(p) => log::debug!("leg {from} -> {to}: cost {}", p.cost()),
                    None => log::debug!("leg {from} -> {to}: unreachable"),
                }
                e.insert(path).as_ref()
            }
        }
    }

    pub(crate) fn cost(&mut self, from: Pos, to: Pos) -> Cost {
        self.leg(from, to)
            .map_or(Cost::Unreachable, |p| Cost::Finite(p.cost()))
    }

    /// Number of pathfinder searches run so far.
    pub(crate) fn searches(&self) -> usize {
        self.searches
    }
}
