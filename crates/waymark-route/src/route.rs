//! The chosen route and its outer path.

use waymark_core::{Path, Pos};

use crate::legs::Legs;
use crate::region::{GoalRegion, RegionId};
use crate::search::Candidate;

/// A complete plan: the order regions are visited in, the total cost
/// (travel plus exploration), and the outer path on the world grid.
///
/// The path runs start → entrance₁ → … → destination. Inner region walks
/// are charged in `total_cost` but do not appear in `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    pub order: Vec<RegionId>,
    pub total_cost: u64,
    pub path: Path,
}

impl Route {
    /// Cost of the outer walk alone.
    pub fn travel_cost(&self) -> u64 {
        self.path.cost()
    }

    /// Region ids in visiting order, as `3 -> 1 -> 2`; `-` when no region
    /// is visited.
    pub fn order_label(&self) -> String {
        if self.order.is_empty() {
            return "-".to_string();
        }
        self.order
            .iter()
            .map(RegionId::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Stitch the memoized legs of `candidate` into one path.
///
/// Returns `None` if a leg turns out unreachable, which cannot happen for a
/// candidate produced from the same `legs`.
pub(crate) fn assemble(
    start: Pos,
    destination: Pos,
    goals: &[GoalRegion],
    candidate: Candidate,
    legs: &mut Legs<'_>,
) -> Option<Route> {
    let mut path = Path::single(start, 0);
    let mut pos = start;
    for id in &candidate.order {
        let goal = goals.iter().find(|g| g.id == *id)?;
        path.extend_leg(legs.leg(pos, goal.entrance)?);
        pos = goal.entrance;
    }
    path.extend_leg(legs.leg(pos, destination)?);

    Some(Route {
        order: candidate.order,
        total_cost: candidate.total_cost,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::{Grid, TerrainCosts};

    #[test]
    fn legs_join_without_duplicates() {
        let g = Grid::from_rows(vec![vec!["G".to_string(); 4]]).unwrap();
        let costs = TerrainCosts::default();
        let mut legs = Legs::new(&g, &costs);
        let goals = [GoalRegion::new(RegionId(1), Pos::new(0, 2), 9)];
        let candidate = Candidate {
            order: vec![RegionId(1)],
            total_cost: 39,
        };
        let r = assemble(Pos::new(0, 0), Pos::new(0, 3), &goals, candidate, &mut legs).unwrap();
        assert_eq!(
            r.path.cells(),
            &[Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
        );
        assert_eq!(r.travel_cost(), 30);
        assert_eq!(r.total_cost, 39);
        assert!(r.path.is_connected());
        assert_eq!(r.order_label(), "1");
    }

    #[test]
    fn order_label_uses_plain_ids() {
        let route = Route {
            order: vec![RegionId(3), RegionId(1), RegionId(2)],
            total_cost: 0,
            path: Path::single(Pos::ZERO, 0),
        };
        assert_eq!(route.order_label(), "3 -> 1 -> 2");
        let direct = Route {
            order: Vec::new(),
            ..route
        };
        assert_eq!(direct.order_label(), "-");
    }
}
