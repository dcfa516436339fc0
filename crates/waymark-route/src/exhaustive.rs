//! Brute-force order search: price every permutation.

use waymark_core::{Cost, Pos};

use crate::legs::Legs;
use crate::region::GoalRegion;
use crate::search::Candidate;

/// Price every visiting order in lexicographic id order and keep the first
/// strictly cheapest. `goals` must be sorted by id.
pub(crate) fn exhaustive(
    start: Pos,
    destination: Pos,
    goals: &[GoalRegion],
    legs: &mut Legs<'_>,
) -> Option<Candidate> {
    let mut perm: Vec<usize> = (0..goals.len()).collect();
    let mut answer: Option<Candidate> = None;
    let mut priced = 0usize;

    loop {
        priced += 1;
        if let Cost::Finite(total) = price(start, destination, goals, &perm, legs) {
            if answer.as_ref().is_none_or(|a| total < a.total_cost) {
                answer = Some(Candidate {
                    order: perm.iter().map(|&i| goals[i].id).collect(),
                    total_cost: total,
                });
            }
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    log::debug!(
        "exhaustive search done: {priced} orders priced, {} legs searched",
        legs.searches()
    );
    answer
}

fn price(
    start: Pos,
    destination: Pos,
    goals: &[GoalRegion],
    perm: &[usize],
    legs: &mut Legs<'_>,
) -> Cost {
    let mut total = Cost::ZERO;
    let mut pos = start;
    for &i in perm {
        let goal = &goals[i];
        total = total + legs.cost(pos, goal.entrance) + goal.exploration;
        if !total.is_finite() {
            return Cost::Unreachable;
        }
        pos = goal.entrance;
    }
    total + legs.cost(pos, destination)
}

/// Advance `v` to the next lexicographic permutation. Returns `false` and
/// leaves `v` untouched when it is already the last one.
fn next_permutation(v: &mut [usize]) -> bool {
    let Some(i) = v.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(j) = v.iter().rposition(|&x| x > v[i]) else {
        return false;
    };
    v.swap(i, j);
    v[i + 1..].reverse();
    true
}
