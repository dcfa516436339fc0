//! Goal regions.

use std::fmt;

use waymark_core::{Cost, Path, Pos};

/// Identifier of a goal region, assigned 1, 2, … in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A goal region as seen by the route optimizer: where to enter it on the
/// world grid and what exploring it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GoalRegion {
    pub id: RegionId,
    pub entrance: Pos,
    /// Entry → objective → entry on the region's own grid.
    /// [`Cost::Unreachable`] makes the region unvisitable.
    pub exploration: Cost,
}

impl GoalRegion {
    pub fn new(id: RegionId, entrance: Pos, exploration: impl Into<Cost>) -> Self {
        Self {
            id,
            entrance,
            exploration: exploration.into(),
        }
    }

    /// Whether the region can be explored at all.
    pub fn is_visitable(&self) -> bool {
        self.exploration.is_finite()
    }
}

/// What was found inside a region grid: its markers and both inner legs.
///
/// The legs are kept so the inner walk can be replayed; only their costs
/// reach the optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegionSurvey {
    pub id: RegionId,
    pub entry: Pos,
    pub objective: Pos,
    /// Entry → objective, `None` if unreachable.
    pub inbound: Option<Path>,
    /// Objective → entry, `None` if unreachable.
    pub outbound: Option<Path>,
}

impl RegionSurvey {
    /// Cost of walking in to the objective and back out.
    pub fn exploration_cost(&self) -> Cost {
        leg_cost(&self.inbound) + leg_cost(&self.outbound)
    }
}

fn leg_cost(leg: &Option<Path>) -> Cost {
    leg.as_ref().map_or(Cost::Unreachable, |p| Cost::Finite(p.cost()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exploration_adds_both_legs() {
        let s = RegionSurvey {
            id: RegionId(1),
            entry: Pos::new(0, 0),
            objective: Pos::new(0, 1),
            inbound: Path::from_cells(vec![Pos::new(0, 0), Pos::new(0, 1)], 10),
            outbound: Path::from_cells(vec![Pos::new(0, 1), Pos::new(0, 0)], 15),
        };
        assert_eq!(s.exploration_cost(), Cost::Finite(25));
    }

    #[test]
    fn missing_leg_is_unreachable() {
        let s = RegionSurvey {
            id: RegionId(1),
            entry: Pos::new(0, 0),
            objective: Pos::new(0, 2),
            inbound: None,
            outbound: Path::from_cells(vec![Pos::new(0, 2)], 10),
        };
        assert_eq!(s.exploration_cost(), Cost::Unreachable);
        let g = GoalRegion::new(s.id, Pos::new(5, 5), s.exploration_cost());
        assert!(!g.is_visitable());
    }
}
