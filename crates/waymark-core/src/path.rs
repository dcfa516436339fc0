//! [`Path`]: a non-empty, orthogonally connected cell sequence with its cost.

use crate::geom::Pos;

/// An ordered sequence of positions from start to goal (inclusive) and the
/// accumulated cost of walking it.
///
/// A path always holds at least one position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    cells: Vec<Pos>,
    cost: u64,
}

impl Path {
    /// A path that starts and ends on `p`.
    pub fn single(p: Pos, cost: u64) -> Self {
        Self {
            cells: vec![p],
            cost,
        }
    }

    /// Build a path from its cells. Returns `None` if `cells` is empty.
    pub fn from_cells(cells: Vec<Pos>, cost: u64) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self { cells, cost })
    }

    /// First position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    /// Last position.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Number of positions (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of steps between consecutive positions.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// Whether every consecutive pair is one orthogonal step apart.
    pub fn is_connected(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Append a following leg. The leg's first position duplicates this
    /// path's last one and is dropped; the costs add up.
    pub fn extend_leg(&mut self, leg: &Path) {
        self.cells.extend_from_slice(&leg.cells[1..]);
        self.cost += leg.cost;
    }
}
