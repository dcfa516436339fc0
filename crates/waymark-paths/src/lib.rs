//! Pathfinding algorithms for weighted tile grids.
//!
//! - **A\*** minimum-cost search ([`PathRange::astar_path`], [`find_path`])
//! - **Dijkstra** multi-source cost maps ([`PathRange::dijkstra_map`])
//!
//! Both run through [`PathRange`], which owns and reuses its node arrays so
//! that repeated queries on same-sized grids do not reallocate.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`TerrainPather`] implements all three over a grid of terrain symbols.

mod astar;
mod dijkstra;
mod distance;
mod pathrange;
mod terrain;
mod traits;

pub use distance::manhattan;
pub use pathrange::{PathNode, PathRange};
pub use terrain::{TerrainPather, find_path};
pub use traits::{AstarPather, Pather, WeightedPather};
