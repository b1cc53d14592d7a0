//! Generic worklist searches shared by the puzzle solvers.
//!
//! The grid puzzles keep needing the same three traversal shapes, so they
//! live here once, parameterized by closures instead of being re-rolled per
//! puzzle: flood fill over a successor relation, deterministic
//! single-successor walks with loop detection, and depth-first least-cost
//! search with a caller-supplied pruning policy.

use std::collections::HashSet;
use std::hash::Hash;

/// Collect every state reachable from `seed` through `successors`.
///
/// States expand depth-first behind a visited-set guard, so `successors`
/// runs at most once per distinct state. Visit order is unspecified; the
/// result is the order-independent set of reachable states.
pub fn flood_fill<S, F, I>(seed: S, mut successors: F) -> HashSet<S>
where
    S: Copy + Eq + Hash,
    F: FnMut(S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut pending = vec![seed];
    let mut filled = HashSet::new();
    while let Some(state) = pending.pop() {
        if !filled.insert(state) {
            continue;
        }
        pending.extend(successors(state));
    }
    filled
}

/// Follow a deterministic walk from `start` until it either leaves the state
/// space (`step` returns `None`) or revisits a state.
///
/// # Returns
///
/// The visited states in walk order when the walk terminates, or `None` as
/// soon as any state repeats: a deterministic walk that returns to a state
/// is looping forever.
pub fn deterministic_walk<S, F>(start: S, mut step: F) -> Option<Vec<S>>
where
    S: Copy + Eq + Hash,
    F: FnMut(S) -> Option<S>,
{
    let mut seen = HashSet::new();
    let mut walked = Vec::new();
    let mut current = Some(start);
    while let Some(state) = current {
        if !seen.insert(state) {
            return None;
        }
        walked.push(state);
        current = step(state);
    }
    Some(walked)
}

/// The outcome of [`least_cost_paths`].
#[derive(Debug)]
pub struct LeastCostOutcome<S> {
    /// The minimum total cost of reaching any goal state, or `None` when no
    /// goal was reachable. Infeasibility is ordinary data, not an error.
    pub best_cost: Option<u32>,
    /// Every goal state reached at exactly `best_cost`. Ties are kept; a
    /// caller interested in a single winner can take any element.
    pub best_states: Vec<S>,
}

/// Depth-first branch-and-bound over costed transitions.
///
/// States expand from an explicit stack, so exploration is not cost-ordered;
/// pruning keeps it bounded instead:
///
/// - a state costlier than the best goal cost seen so far is abandoned;
/// - `reject` is the caller's seen-state policy, called with each state and
///   its accumulated cost before expansion. Returning `true` abandons the
///   state; a typical policy records best costs per state key and rejects
///   dominated revisits.
///
/// Goal states are recorded and never expanded further.
pub fn least_cost_paths<S, FS, FR, FG>(
    start: S,
    mut successors: FS,
    mut reject: FR,
    mut is_goal: FG,
) -> LeastCostOutcome<S>
where
    FS: FnMut(&S) -> Vec<(S, u32)>,
    FR: FnMut(&S, u32) -> bool,
    FG: FnMut(&S) -> bool,
{
    let mut pending = vec![(start, 0u32)];
    let mut best_cost: Option<u32> = None;
    let mut goal_hits: Vec<(S, u32)> = Vec::new();

    while let Some((state, cost)) = pending.pop() {
        if best_cost.is_some_and(|best| cost > best) {
            continue;
        }
        if reject(&state, cost) {
            continue;
        }
        if is_goal(&state) {
            if best_cost.map_or(true, |best| cost < best) {
                best_cost = Some(cost);
            }
            goal_hits.push((state, cost));
            continue;
        }
        for (next, step_cost) in successors(&state) {
            pending.push((next, cost + step_cost));
        }
    }

    let best_states = goal_hits
        .into_iter()
        .filter(|&(_, cost)| Some(cost) == best_cost)
        .map(|(state, _)| state)
        .collect();
    LeastCostOutcome {
        best_cost,
        best_states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_fill_collects_the_connected_component() {
        // neighbors differing by 1, capped to 0..=5; 10 is unreachable
        let filled = flood_fill(3i32, |state| {
            [state - 1, state + 1]
                .into_iter()
                .filter(|next| (0..=5).contains(next))
                .collect::<Vec<_>>()
        });
        assert_eq!(filled.len(), 6);
        assert!(!filled.contains(&10));
    }

    #[test]
    fn walk_terminates_with_states_in_order() {
        let walked = deterministic_walk(0u8, |state| (state < 3).then_some(state + 1));
        assert_eq!(walked, Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn walk_reports_a_revisit_as_a_loop() {
        let walked = deterministic_walk(0u8, |state| Some((state + 1) % 3));
        assert_eq!(walked, None);
    }

    #[test]
    fn least_cost_keeps_tying_goal_states() {
        // a diamond: two routes of equal cost from 0 to 3
        let outcome = least_cost_paths(
            0u8,
            |&state| match state {
                0 => vec![(1, 1), (2, 1)],
                1 | 2 => vec![(3, 1)],
                _ => vec![],
            },
            |_, _| false,
            |&state| state == 3,
        );
        assert_eq!(outcome.best_cost, Some(2));
        assert_eq!(outcome.best_states, vec![3, 3]);
    }

    #[test]
    fn unreachable_goal_costs_nothing_but_reports_none() {
        let outcome = least_cost_paths(
            0u8,
            |&state| if state < 2 { vec![(state + 1, 1)] } else { vec![] },
            |_, _| false,
            |&state| state == 9,
        );
        assert_eq!(outcome.best_cost, None);
        assert!(outcome.best_states.is_empty());
    }
}
