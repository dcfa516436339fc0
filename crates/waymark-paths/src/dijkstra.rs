use std::collections::BinaryHeap;

use waymark_core::{Cost, Pos};

use crate::PathRange;
use crate::pathrange::{NodeRef, PathNode, next_generation};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`. Returns all reached nodes in the order they
    /// were finalized (non-decreasing cost).
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Pos],
        max_cost: u64,
    ) -> &[PathNode] {
        for v in self.dijkstra_map.iter_mut() {
            *v = Cost::Unreachable;
        }
        self.dijkstra_results.clear();

        self.dijkstra_generation =
            next_generation(&mut self.dijkstra_nodes, self.dijkstra_generation);
        let cur_gen = self.dijkstra_generation;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                let n = &mut self.dijkstra_nodes[si];
                n.g = 0;
                n.parent = usize::MAX;
                n.generation = cur_gen;
                n.closed = false;
                self.dijkstra_map[si] = Cost::ZERO;
                open.push(NodeRef {
                    idx: si,
                    f: 0,
                    pos: src,
                });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.dijkstra_nodes[ci].closed {
                continue;
            }
            self.dijkstra_nodes[ci].closed = true;
            let current_g = self.dijkstra_nodes[ci].g;

            let cp = current.pos;
            self.dijkstra_results.push(PathNode {
                pos: cp,
                cost: current_g,
            });

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Cost::Finite(step) = pather.cost(cp, np) else {
                    continue;
                };
                let tentative = current_g.saturating_add(step);
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.dijkstra_nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative;
                n.parent = ci;
                self.dijkstra_map[ni] = Cost::Finite(tentative);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                    pos: np,
                });
            }
        }

        self.nbuf = nbuf;
        &self.dijkstra_results
    }

    /// Query the Dijkstra cost at a specific position.
    ///
    /// Returns [`Cost::Unreachable`] if the position is outside the range
    /// or was not reached by the last `dijkstra_map` call.
    pub fn dijkstra_at(&self, p: Pos) -> Cost {
        match self.idx(p) {
            Some(i) => self.dijkstra_map[i],
            None => Cost::Unreachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerrainPather;
    use waymark_core::{Grid, TerrainCosts};

    fn grid_from(rows: &[&str]) -> Grid<String> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_source_costs() {
        let g = grid_from(&["GSG", "XXG"]);
        let costs = TerrainCosts::default();
        let pather = TerrainPather::new(&g, &costs);
        let mut pr = PathRange::new(g.bounds());
        let reached = pr.dijkstra_map(&pather, &[Pos::new(0, 0)], u64::MAX).len();
        assert_eq!(reached, 4);
        assert_eq!(pr.dijkstra_at(Pos::new(0, 0)), Cost::ZERO);
        assert_eq!(pr.dijkstra_at(Pos::new(0, 1)), Cost::Finite(20));
        assert_eq!(pr.dijkstra_at(Pos::new(0, 2)), Cost::Finite(30));
        assert_eq!(pr.dijkstra_at(Pos::new(1, 2)), Cost::Finite(40));
        assert_eq!(pr.dijkstra_at(Pos::new(1, 0)), Cost::Unreachable);
        assert_eq!(pr.dijkstra_at(Pos::new(5, 5)), Cost::Unreachable);
    }

    #[test]
    fn max_cost_limits_expansion() {
        let g = grid_from(&["GGGGG"]);
        let costs = TerrainCosts::default();
        let pather = TerrainPather::new(&g, &costs);
        let mut pr = PathRange::new(g.bounds());
        let nodes = pr.dijkstra_map(&pather, &[Pos::new(0, 0)], 20).to_vec();
        assert_eq!(nodes.len(), 3);
        assert!(nodes.windows(2).all(|w| w[0].cost <= w[1].cost));
        assert_eq!(pr.dijkstra_at(Pos::new(0, 3)), Cost::Unreachable);
    }

    #[test]
    fn multi_source_takes_nearest() {
        let g = grid_from(&["GGGGG"]);
        let costs = TerrainCosts::default();
        let pather = TerrainPather::new(&g, &costs);
        let mut pr = PathRange::new(g.bounds());
        pr.dijkstra_map(&pather, &[Pos::new(0, 0), Pos::new(0, 4)], u64::MAX);
        assert_eq!(pr.dijkstra_at(Pos::new(0, 2)), Cost::Finite(20));
        assert_eq!(pr.dijkstra_at(Pos::new(0, 3)), Cost::Finite(10));
    }
}
