use waymark_core::{Cost, Pos};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` onto adjacent `to`. `cost(p, p)` is the
    /// cost of standing on `p`. [`Cost::Unreachable`] blocks the move.
    fn cost(&self, from: Pos, to: Pos) -> Cost;
}

/// Pather with a heuristic for A*.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `to`.
    ///
    /// The returned path is only guaranteed optimal when the estimate never
    /// overestimates and never drops by more than one step's cost.
    fn estimate(&self, from: Pos, to: Pos) -> u64;
}
