//! Locating markers on the world grid and inside region grids, and pricing
//! each region's inner walk.

use std::collections::BTreeMap;

use waymark_core::terrain::{DESTINATION, ENTRANCE, OBJECTIVE, PORTAL, START};
use waymark_core::{Grid, Pos, TerrainCosts};
use waymark_paths::{PathRange, TerrainPather};

use crate::error::{GridName, PlanError};
use crate::region::{RegionId, RegionSurvey};

/// Order in which grid cells are scanned when discovering markers.
///
/// The order decides which entrance receives which [`RegionId`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScanOrder {
    /// Top row first, left to right within a row.
    #[default]
    RowMajor,
    /// Bottom row first, left to right within a row.
    ReverseRows,
}

impl ScanOrder {
    /// Positions of every cell carrying `symbol`, in scan order.
    pub fn find(self, grid: &Grid<String>, symbol: &str) -> Vec<Pos> {
        let mut found = grid.positions(|s| s == symbol);
        if self == ScanOrder::ReverseRows {
            // positions() is row-major; a stable sort on the row alone keeps
            // the left-to-right order within each row.
            found.sort_by_key(|p| std::cmp::Reverse(p.row));
        }
        found
    }
}

/// Marker positions on the world grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct World {
    pub start: Pos,
    pub destination: Pos,
    pub entrances: BTreeMap<RegionId, Pos>,
}

/// Find the start, the destination and every region entrance.
///
/// Entrances get ids 1, 2, … in `scan` order, and there must be exactly
/// `regions` of them.
pub fn survey_world(grid: &Grid<String>, scan: ScanOrder, regions: usize) -> Result<World, PlanError> {
    let start = unique_marker(grid, GridName::World, START, scan)?;
    let destination = unique_marker(grid, GridName::World, DESTINATION, scan)?;

    let found = scan.find(grid, ENTRANCE);
    if found.is_empty() && regions > 0 {
        return Err(PlanError::MissingMarker {
            grid: GridName::World,
            marker: ENTRANCE,
        });
    }
    if found.len() != regions {
        return Err(PlanError::RegionCount {
            entrances: found.len(),
            regions,
        });
    }
    let entrances = found
        .into_iter()
        .enumerate()
        .map(|(i, p)| (RegionId(i as u32 + 1), p))
        .collect();

    Ok(World {
        start,
        destination,
        entrances,
    })
}

/// Find a region's entry and objective and price both inner legs.
///
/// An unreachable leg is recorded as `None`, which makes the region's
/// exploration cost unreachable.
pub fn survey_region(
    id: RegionId,
    grid: &Grid<String>,
    costs: &TerrainCosts,
) -> Result<RegionSurvey, PlanError> {
    survey_region_in(&mut PathRange::new(grid.bounds()), id, grid, costs)
}

/// [`survey_region`] on a caller-owned `PathRange`, resized to `grid`, so
/// one set of node caches serves every region.
pub(crate) fn survey_region_in(
    range: &mut PathRange,
    id: RegionId,
    grid: &Grid<String>,
    costs: &TerrainCosts,
) -> Result<RegionSurvey, PlanError> {
    let name = GridName::Region(id);
    let entry = unique_marker(grid, name, PORTAL, ScanOrder::RowMajor)?;
    let objective = unique_marker(grid, name, OBJECTIVE, ScanOrder::RowMajor)?;

    range.set_range(grid.bounds());
    let pather = TerrainPather::new(grid, costs);
    Ok(RegionSurvey {
        id,
        entry,
        objective,
        inbound: range.astar_path(&pather, entry, objective),
        outbound: range.astar_path(&pather, objective, entry),
    })
}

fn unique_marker(
    grid: &Grid<String>,
    name: GridName,
    marker: &'static str,
    scan: ScanOrder,
) -> Result<Pos, PlanError> {
    match scan.find(grid, marker).as_slice() {
        [] => Err(PlanError::MissingMarker { grid: name, marker }),
        [p] => Ok(*p),
        many => Err(PlanError::MarkerCount {
            grid: name,
            marker,
            found: many.len(),
        }),
    }
}
