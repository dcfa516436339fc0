//! Best-first search over visit states.

use std::collections::{BTreeSet, HashMap};

use waymark_core::{Cost, Pos};
use waymark_paths::manhattan;

use crate::frontier::Frontier;
use crate::legs::Legs;
use crate::region::{GoalRegion, RegionId};

/// Where the walker stands and which regions it has finished.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitState {
    pub pos: Pos,
    pub visited: BTreeSet<RegionId>,
}

/// A complete visiting order and what it costs, final leg included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) order: Vec<RegionId>,
    pub(crate) total_cost: u64,
}

struct Item {
    state: VisitState,
    g: u64,
    order: Vec<RegionId>,
}

/// Find the cheapest order visiting every goal between `start` and
/// `destination`.
///
/// States pop by `g + manhattan(pos, destination)`, FIFO on ties. The
/// estimate ignores unvisited goals, so the first complete state popped is
/// not necessarily the best one; the search runs until the frontier is
/// empty. `goals` must be sorted by id.
pub(crate) fn state_search(
    start: Pos,
    destination: Pos,
    goals: &[GoalRegion],
    legs: &mut Legs<'_>,
) -> Option<Candidate> {
    let initial = VisitState {
        pos: start,
        visited: BTreeSet::new(),
    };
    let mut best: HashMap<VisitState, u64> = HashMap::new();
    best.insert(initial.clone(), 0);

    let mut frontier = Frontier::new();
    frontier.push(
        Item {
            state: initial,
            g: 0,
            order: Vec::new(),
        },
        manhattan(start, destination),
    );

    let mut answer: Option<Candidate> = None;

    while let Some((item, f)) = frontier.pop() {
        if best.get(&item.state).is_some_and(|&b| item.g > b) {
            continue;
        }
        log::debug!(
            "pop {} visited {:?} g={} f={}",
            item.state.pos,
            item.state.visited,
            item.g,
            f
        );

        if item.state.visited.len() == goals.len() {
            let Cost::Finite(total) = Cost::Finite(item.g) + legs.cost(item.state.pos, destination)
            else {
                continue;
            };
            if answer.as_ref().is_none_or(|a| total < a.total_cost) {
                answer = Some(Candidate {
                    order: item.order,
                    total_cost: total,
                });
            }
            continue;
        }

        for goal in goals {
            if item.state.visited.contains(&goal.id) || !goal.is_visitable() {
                continue;
            }
            let edge = legs.cost(item.state.pos, goal.entrance) + goal.exploration;
            let Cost::Finite(g) = Cost::Finite(item.g) + edge else {
                continue;
            };

            let mut visited = item.state.visited.clone();
            visited.insert(goal.id);
            let next = VisitState {
                pos: goal.entrance,
                visited,
            };
            if best.get(&next).is_some_and(|&b| g >= b) {
                continue;
            }
            best.insert(next.clone(), g);

            let mut order = item.order.clone();
            order.push(goal.id);
            frontier.push(
                Item {
                    state: next,
                    g,
                    order,
                },
                g.saturating_add(manhattan(goal.entrance, destination)),
            );
        }
    }

    log::debug!(
        "state search done: {} states pushed, {} legs searched",
        frontier.pushed(),
        legs.searches()
    );
    answer
}
