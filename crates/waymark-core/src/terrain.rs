//! Terrain symbols and the symbol → traversal cost table.

use std::collections::HashMap;

use crate::cost::Cost;

pub const GRASS: &str = "G";
pub const SAND: &str = "S";
pub const FOREST: &str = "F";
pub const MOUNTAIN: &str = "M";
pub const WATER: &str = "A";
pub const WALL: &str = "X";
/// Plain floor inside a region grid.
pub const EMPTY: &str = "";
pub const OBJECTIVE: &str = "P";
/// Region entry/exit, on the region's own grid.
pub const PORTAL: &str = "E";
pub const START: &str = "L";
pub const DESTINATION: &str = "LW";
pub const REGION_MARKER: &str = "MS";
/// Region entrance, on the world grid.
pub const ENTRANCE: &str = "MA";

/// Cost shared by every marker symbol.
pub const MARKER_COST: u32 = 10;

/// Maps terrain symbols to traversal costs.
///
/// Symbols missing from the table, and the reserved impassable symbol, cost
/// [`Cost::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCosts {
    costs: HashMap<String, u32>,
    impassable: String,
}

impl TerrainCosts {
    /// A table with no passable symbols.
    pub fn empty(impassable: &str) -> Self {
        Self {
            costs: HashMap::new(),
            impassable: impassable.to_string(),
        }
    }

    /// Set the cost of `symbol`. Setting a cost for the reserved impassable
    /// symbol has no effect on lookups.
    pub fn with_cost(mut self, symbol: &str, cost: u32) -> Self {
        self.costs.insert(symbol.to_string(), cost);
        self
    }

    /// Cost of entering a cell carrying `symbol`.
    pub fn cost(&self, symbol: &str) -> Cost {
        if symbol == self.impassable {
            return Cost::Unreachable;
        }
        self.costs
            .get(symbol)
            .map_or(Cost::Unreachable, |&c| Cost::Finite(c as u64))
    }

    /// Whether a cell carrying `symbol` can be entered.
    pub fn passable(&self, symbol: &str) -> bool {
        self.cost(symbol).is_finite()
    }

}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self::empty(WALL)
            .with_cost(GRASS, 10)
            .with_cost(SAND, 20)
            .with_cost(FOREST, 100)
            .with_cost(MOUNTAIN, 150)
            .with_cost(WATER, 180)
            .with_cost(EMPTY, MARKER_COST)
            .with_cost(OBJECTIVE, MARKER_COST)
            .with_cost(PORTAL, MARKER_COST)
            .with_cost(START, MARKER_COST)
            .with_cost(DESTINATION, MARKER_COST)
            .with_cost(REGION_MARKER, MARKER_COST)
            .with_cost(ENTRANCE, MARKER_COST)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_from_json() {
        let json = r##"{ "costs": { ".": 1, "~": 5 }, "impassable": "#" }"##;
        let t: TerrainCosts = serde_json::from_str(json).unwrap();
        assert_eq!(t.cost("~"), Cost::Finite(5));
        assert_eq!(t.cost("#"), Cost::Unreachable);
        assert_eq!(t.cost("G"), Cost::Unreachable);
    }
}
