//! **waymark-core**: shared model types for the waymark route planner.
//!
//! This crate provides the foundational types used across the workspace:
//! positions and ranges, rectangular grids, tagged traversal costs, paths,
//! and the terrain symbol table.

pub mod cost;
pub mod geom;
pub mod grid;
pub mod path;
pub mod terrain;

pub use cost::Cost;
pub use geom::{Pos, Range};
pub use grid::{Grid, GridError};
pub use path::Path;
pub use terrain::TerrainCosts;
