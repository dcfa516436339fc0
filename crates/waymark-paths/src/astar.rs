use std::collections::BinaryHeap;

use waymark_core::{Cost, Path, Pos};

use crate::PathRange;
use crate::pathrange::{NodeRef, next_generation};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute a minimum-cost path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) with its cost, or
    /// `None` if `to` is unreachable or either endpoint lies outside the
    /// range. When `from == to` the path is that single cell and its cost is
    /// `pather.cost(from, from)`.
    ///
    /// Duplicate frontier entries are allowed; an entry whose cell has
    /// already been finalized is discarded when popped. Equal `f` values pop
    /// in row-major position order.
    pub fn astar_path<P: AstarPather>(&mut self, pather: &P, from: Pos, to: Pos) -> Option<Path> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return pather
                .cost(from, from)
                .finite()
                .map(|c| Path::single(from, c));
        }

        self.astar_generation = next_generation(&mut self.astar_nodes, self.astar_generation);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: pather.estimate(from, to),
            pos: from,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;
            if self.astar_nodes[ci].closed {
                continue;
            }
            self.astar_nodes[ci].closed = true;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.astar_nodes[ci].g;
            let current_pos = current.pos;

            nbuf.clear();
            pather.neighbors(current_pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Cost::Finite(step) = pather.cost(current_pos, np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(step);

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g.saturating_add(pather.estimate(np, to)),
                    pos: np,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(self.pos(ci));
            ci = self.astar_nodes[ci].parent;
        }
        cells.reverse();
        Path::from_cells(cells, self.astar_nodes[goal_idx].g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TerrainPather, find_path};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use waymark_core::{Grid, Range, TerrainCosts};

    fn grid_from(rows: &[&str]) -> Grid<String> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    /// Sum of terrain costs of every cell after the first.
    fn walked_cost(grid: &Grid<String>, costs: &TerrainCosts, path: &Path) -> u64 {
        path.cells()[1..]
            .iter()
            .map(|&p| costs.cost(grid.at(p).unwrap()).finite().unwrap())
            .sum()
    }

    #[test]
    fn routes_around_wall_column() {
        let g = grid_from(&["GGGGG", "GGXGG", "GGXGG", "GGXGG", "GGGGG"]);
        let costs = TerrainCosts::default();
        let p = find_path(&g, &costs, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
        assert_eq!(p.start(), Pos::new(0, 0));
        assert_eq!(p.goal(), Pos::new(4, 4));
        assert!(p.is_connected());
        assert!(
            p.cells()
                .iter()
                .all(|c| !(c.col == 2 && (1..=3).contains(&c.row)))
        );
        assert_eq!(p.steps(), 8);
        assert_eq!(p.cost(), 10 * p.steps() as u64);
        assert_eq!(p.cost(), walked_cost(&g, &costs, &p));
    }

    #[test]
    fn same_cell_costs_its_terrain() {
        let g = grid_from(&["GS", "FM"]);
        let costs = TerrainCosts::default();
        for (pos, expected) in [
            (Pos::new(0, 0), 10),
            (Pos::new(0, 1), 20),
            (Pos::new(1, 0), 100),
            (Pos::new(1, 1), 150),
        ] {
            let p = find_path(&g, &costs, pos, pos).unwrap();
            assert_eq!(p.cells(), &[pos]);
            assert_eq!(p.cost(), expected);
        }
    }

    #[test]
    fn same_cell_on_wall_is_unreachable() {
        let g = grid_from(&["X"]);
        assert!(find_path(&g, &TerrainCosts::default(), Pos::ZERO, Pos::ZERO).is_none());
    }

    #[test]
    fn severed_grid_is_unreachable() {
        let g = grid_from(&["GGXGG", "GGXGG", "GGXGG"]);
        let costs = TerrainCosts::default();
        assert!(find_path(&g, &costs, Pos::new(1, 0), Pos::new(1, 4)).is_none());
        assert!(find_path(&g, &costs, Pos::new(1, 0), Pos::new(1, 2)).is_none());
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let g = grid_from(&["GG"]);
        let costs = TerrainCosts::default();
        assert!(find_path(&g, &costs, Pos::new(0, 0), Pos::new(0, 5)).is_none());
        assert!(find_path(&g, &costs, Pos::new(-1, 0), Pos::new(0, 1)).is_none());
    }

    #[test]
    fn prefers_cheap_detour_over_water() {
        // Straight across costs 180 + 10; the grass detour costs 4 * 10.
        let g = grid_from(&["GAG", "GGG"]);
        let p = find_path(&g, &TerrainCosts::default(), Pos::new(0, 0), Pos::new(0, 2)).unwrap();
        assert_eq!(p.cost(), 40);
        assert_eq!(p.steps(), 4);
    }

    #[test]
    fn tie_break_is_deterministic() {
        let g = grid_from(&["GGG", "GGG", "GGG"]);
        let costs = TerrainCosts::default();
        let a = find_path(&g, &costs, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        let b = find_path(&g, &costs, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cost(), 40);
    }

    #[test]
    fn reused_range_gives_same_answers() {
        let g = grid_from(&["GGGG", "XXXG", "GGGG"]);
        let costs = TerrainCosts::default();
        let pather = TerrainPather::new(&g, &costs);
        let mut pr = PathRange::new(g.bounds());
        let first = pr.astar_path(&pather, Pos::new(0, 0), Pos::new(2, 0)).unwrap();
        let _ = pr.astar_path(&pather, Pos::new(2, 3), Pos::new(0, 3));
        let again = pr.astar_path(&pather, Pos::new(0, 0), Pos::new(2, 0)).unwrap();
        assert_eq!(first, again);
        assert_eq!(first.cost(), 80);
    }

    #[test]
    fn matches_dijkstra_on_random_grids() {
        const SYMBOLS: [&str; 6] = ["G", "G", "S", "F", "A", "X"];
        let costs = TerrainCosts::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let rows = rng.random_range(1..7);
            let cols = rng.random_range(1..7);
            let cells = (0..rows)
                .map(|_| {
                    (0..cols)
                        .map(|_| SYMBOLS[rng.random_range(0..SYMBOLS.len())].to_string())
                        .collect()
                })
                .collect();
            let g = Grid::from_rows(cells).unwrap();
            let start = Pos::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let goal = Pos::new(rng.random_range(0..rows), rng.random_range(0..cols));
            if start == goal {
                continue;
            }

            let pather = TerrainPather::new(&g, &costs);
            let mut pr = PathRange::new(Range::with_size(rows, cols));
            pr.dijkstra_map(&pather, &[start], u64::MAX);
            let oracle = pr.dijkstra_at(goal);

            match find_path(&g, &costs, start, goal) {
                Some(p) => {
                    assert_eq!(Cost::Finite(p.cost()), oracle);
                    assert_eq!(p.cost(), walked_cost(&g, &costs, &p));
                    assert!(p.is_connected());
                    assert_eq!((p.start(), p.goal()), (start, goal));
                }
                None => assert_eq!(oracle, Cost::Unreachable),
            }
        }
    }
}
