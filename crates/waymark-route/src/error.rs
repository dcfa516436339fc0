//! Planning errors.

use std::fmt;

use waymark_core::GridError;

use crate::region::RegionId;

/// Which input grid an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridName {
    World,
    Region(RegionId),
}

impl fmt::Display for GridName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => f.write_str("world grid"),
            Self::Region(id) => write!(f, "region {id} grid"),
        }
    }
}

/// Errors that abort a planning attempt.
///
/// An unreachable leg is not an error by itself: it only makes the orders
/// using it ineligible, and surfaces as [`PlanError::NoFeasibleRoute`] once
/// no order is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A required marker does not appear in its grid.
    MissingMarker {
        grid: GridName,
        marker: &'static str,
    },
    /// Rows of different lengths.
    Jagged { grid: GridName, source: GridError },
    /// A marker that must be unique appears more than once.
    MarkerCount {
        grid: GridName,
        marker: &'static str,
        found: usize,
    },
    /// The world has a different number of region entrances than there are
    /// region grids.
    RegionCount { entrances: usize, regions: usize },
    /// Every visiting order contains an unreachable leg or region.
    NoFeasibleRoute,
    /// The background worker stopped without delivering a result.
    WorkerLost,
}

impl PlanError {
    /// Whether the error reports a malformed input grid.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Jagged { .. } | Self::MarkerCount { .. } | Self::RegionCount { .. }
        )
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker { grid, marker } => {
                write!(f, "missing marker \u{201c}{marker}\u{201d} in {grid}")
            }
            Self::Jagged { grid, source } => write!(f, "malformed {grid}: {source}"),
            Self::MarkerCount {
                grid,
                marker,
                found,
            } => write!(
                f,
                "malformed {grid}: marker \u{201c}{marker}\u{201d} appears {found} times, expected once"
            ),
            Self::RegionCount { entrances, regions } => write!(
                f,
                "malformed world grid: {entrances} region entrances for {regions} region grids"
            ),
            Self::NoFeasibleRoute => f.write_str("no feasible route visits every region"),
            Self::WorkerLost => f.write_str("planning worker stopped without a result"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Jagged { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_grid_and_marker() {
        let e = PlanError::MissingMarker {
            grid: GridName::Region(RegionId(2)),
            marker: "P",
        };
        assert_eq!(e.to_string(), "missing marker \u{201c}P\u{201d} in region 2 grid");
        assert!(!e.is_malformed());
    }

    #[test]
    fn jagged_exposes_source() {
        let e = PlanError::Jagged {
            grid: GridName::World,
            source: GridError::Jagged {
                row: 3,
                expected: 4,
                found: 2,
            },
        };
        assert!(e.is_malformed());
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("malformed world grid"));
    }
}
