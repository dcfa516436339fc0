//! Planning from input grids to a finished [`Route`].

use waymark_core::{Grid, Pos, Range, TerrainCosts};
use waymark_paths::PathRange;

use crate::error::PlanError;
use crate::exhaustive::exhaustive;
use crate::legs::Legs;
use crate::region::{GoalRegion, RegionSurvey};
use crate::route::{Route, assemble};
use crate::search::state_search;
use crate::survey::{ScanOrder, World, survey_region_in, survey_world};

/// How the visiting order is chosen. Both strategies find the same minimum
/// total cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Best-first search over (position, visited set) states.
    #[default]
    StateSearch,
    /// Price every permutation of the regions.
    Exhaustive,
}

/// Configuration for a [`Planner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Terrain symbol costs, shared by the world and every region grid.
    pub costs: TerrainCosts,
    pub strategy: Strategy,
    /// Order in which world entrances are numbered.
    pub scan_order: ScanOrder,
}

/// Everything a planning run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlanningResult {
    pub world: World,
    pub surveys: Vec<RegionSurvey>,
    /// Sorted by id.
    pub goals: Vec<GoalRegion>,
    pub route: Route,
}

/// Plans minimum-cost routes. Holds no state between runs.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Survey the world and every region grid, then find the cheapest
    /// route. `regions[i]` is the grid of region `i + 1`.
    ///
    /// Malformed grids and missing markers are reported before any search
    /// runs.
    pub fn plan(
        &self,
        world_grid: &Grid<String>,
        regions: &[Grid<String>],
    ) -> Result<PlanningResult, PlanError> {
        log::info!(
            "surveying {}x{} world with {} regions",
            world_grid.rows(),
            world_grid.cols(),
            regions.len()
        );
        let world = survey_world(world_grid, self.config.scan_order, regions.len())?;

        let mut surveys = Vec::with_capacity(regions.len());
        let mut goals = Vec::with_capacity(regions.len());
        let mut range = PathRange::new(Range::default());
        for ((&id, &entrance), grid) in world.entrances.iter().zip(regions) {
            let survey = survey_region_in(&mut range, id, grid, &self.config.costs)?;
            let goal = GoalRegion::new(id, entrance, survey.exploration_cost());
            if goal.is_visitable() {
                log::debug!(
                    "region {id}: entrance {entrance}, exploration {}",
                    goal.exploration
                );
            } else {
                log::warn!("region {id}: objective unreachable from its entry");
            }
            surveys.push(survey);
            goals.push(goal);
        }

        log::info!("optimizing order with {:?}", self.config.strategy);
        let route = self.optimize(world_grid, world.start, world.destination, &goals)?;
        log::info!(
            "route found: order {}, total cost {}",
            route.order_label(),
            route.total_cost
        );

        Ok(PlanningResult {
            world,
            surveys,
            goals,
            route,
        })
    }

    /// Find the cheapest order visiting every goal between `start` and
    /// `destination` on `world_grid`, using already priced goals.
    pub fn optimize(
        &self,
        world_grid: &Grid<String>,
        start: Pos,
        destination: Pos,
        goals: &[GoalRegion],
    ) -> Result<Route, PlanError> {
        let mut goals = goals.to_vec();
        goals.sort_by_key(|g| g.id);

        let mut legs = Legs::new(world_grid, &self.config.costs);
        let best = match self.config.strategy {
            Strategy::StateSearch => state_search(start, destination, &goals, &mut legs),
            Strategy::Exhaustive => exhaustive(start, destination, &goals, &mut legs),
        }
        .ok_or(PlanError::NoFeasibleRoute)?;

        assemble(start, destination, &goals, best, &mut legs).ok_or(PlanError::NoFeasibleRoute)
    }
}

/// Shorthand for planning with the default configuration but custom costs.
impl From<TerrainCosts> for Planner {
    fn from(costs: TerrainCosts) -> Self {
        Self::new(PlannerConfig {
            costs,
            ..PlannerConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionId;

    fn csv(text: &str) -> Grid<String> {
        Grid::parse_delimited(text, ',').unwrap()
    }

    #[test]
    fn single_region_plan() {
        let world = csv("L,G,MA,G,LW");
        let region = csv("E,G,P");
        let r = Planner::default().plan(&world, &[region]).unwrap();
        // in: G + P, out: G + E
        assert_eq!(r.goals[0].exploration.finite(), Some(40));
        assert_eq!(r.route.order, vec![RegionId(1)]);
        assert_eq!(r.route.travel_cost(), 40);
        assert_eq!(r.route.total_cost, 80);
        assert_eq!(r.route.path.len(), 5);
    }

    #[test]
    fn unreachable_region_is_infeasible() {
        let world = csv("L,MA,LW");
        let region = csv("E,X,P");
        for strategy in [Strategy::StateSearch, Strategy::Exhaustive] {
            let planner = Planner::new(PlannerConfig {
                strategy,
                ..PlannerConfig::default()
            });
            assert_eq!(
                planner.plan(&world, std::slice::from_ref(&region)),
                Err(PlanError::NoFeasibleRoute)
            );
        }
    }

    #[test]
    fn custom_costs_change_the_total() {
        let world = csv("L,F,LW");
        let cheap = TerrainCosts::default().with_cost("F", 1);
        let r = Planner::from(cheap).plan(&world, &[]).unwrap();
        assert_eq!(r.route.total_cost, 11);
    }
}
