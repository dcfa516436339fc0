//! Plain-text rendering of a planned route.

use std::collections::HashSet;
use std::fmt::Write;

use waymark_core::terrain::{DESTINATION, ENTRANCE, START};
use waymark_core::{Grid, Path, Pos};
use waymark_route::PlanningResult;

const TRAIL: &str = "*";

/// The world grid with the route's cells marked. Markers stay visible;
/// empty cells show as `.`.
pub fn overlay(grid: &Grid<String>, path: &Path) -> String {
    let on_path: HashSet<Pos> = path.cells().iter().copied().collect();
    let width = grid
        .iter()
        .map(|(_, s)| s.chars().count())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut row = None;
    for (p, symbol) in grid.iter() {
        if row != Some(p.row) {
            lines.push(String::new());
            row = Some(p.row);
        }
        let is_marker = [START, DESTINATION, ENTRANCE].contains(&symbol.as_str());
        let cell = if on_path.contains(&p) && !is_marker {
            TRAIL
        } else if symbol.is_empty() {
            "."
        } else {
            symbol.as_str()
        };
        if let Some(line) = lines.last_mut() {
            let _ = write!(line, "{cell:<width$} ");
        }
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Human-readable report: order, costs and the overlay.
pub fn summary(grid: &Grid<String>, result: &PlanningResult) -> String {
    let route = &result.route;
    let mut out = String::new();
    let _ = writeln!(out, "order:      {}", route.order_label());
    for goal in &result.goals {
        let _ = writeln!(
            out,
            "region {}:   entrance {}, exploration {}",
            goal.id, goal.entrance, goal.exploration
        );
    }
    let _ = writeln!(out, "travel:     {}", route.travel_cost());
    let _ = writeln!(out, "total cost: {}", route.total_cost);
    out.push('\n');
    out.push_str(&overlay(grid, &route.path));
    out
}
