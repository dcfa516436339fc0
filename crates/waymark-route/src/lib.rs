//! Route planning across a tile world with goal regions.
//!
//! A world grid holds a start (`L`), a destination (`LW`) and one entrance
//! (`MA`) per goal region. Each region has its own grid with an entry (`E`)
//! and an objective (`P`); visiting a region means walking entry →
//! objective → entry. [`Planner::plan`] finds the visiting order with the
//! lowest total cost and the outer path that realises it.
//!
//! ```no_run
//! use waymark_core::Grid;
//! use waymark_route::Planner;
//!
//! let world = Grid::parse_delimited("L,G,MA,G,LW", ',')?;
//! let region = Grid::parse_delimited("E,G,P", ',')?;
//! let result = Planner::default().plan(&world, &[region])?;
//! println!("{:?} costs {}", result.route.order, result.route.total_cost);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod exhaustive;
mod frontier;
mod legs;
mod planner;
mod region;
mod route;
mod search;
mod survey;
mod worker;

pub use error::{GridName, PlanError};
pub use planner::{PlanningResult, Planner, PlannerConfig, Strategy};
pub use region::{GoalRegion, RegionId, RegionSurvey};
pub use route::Route;
pub use search::VisitState;
pub use survey::{ScanOrder, World, survey_region, survey_world};
pub use worker::PlanWorker;
