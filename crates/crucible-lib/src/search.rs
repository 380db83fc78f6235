//! Dijkstra search over a lazily expanded state graph.
//!
//! The engine knows nothing about grids or movement rules. Callers hand it a
//! start state, a neighbour function producing `(weight, state)` pairs and a
//! goal predicate. States may be pushed several times before they are
//! finalised; only the first extraction of a state is authoritative and
//! later ones are discarded instead of decreasing keys in place.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{Error, Result};

/// Accumulated path cost. Signed so that negative weights can be detected.
pub type Cost = i64;

/// The wall clock is only consulted every this many expansions.
const CLOCK_CHECK_INTERVAL: u64 = 1024;

/// Optional resource budget for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states finalised before giving up.
    pub max_expansions: Option<u64>,
    /// Maximum wall-clock time before giving up.
    pub time_limit: Option<Duration>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// Counters describing the work a search performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States finalised (popped for the first time and not the goal).
    pub expanded: u64,
    /// Frontier entries pushed, duplicates included.
    pub pushed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Result of a completed search. `cost` is `None` when the goal is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub cost: Option<Cost>,
    pub stats: SearchStats,
}

/// Find the minimum cost from `start` to any state satisfying `is_goal`.
///
/// Fails with [`Error::NegativeWeight`] as soon as `neighbours` yields a
/// negative weight, and with a resource-limit error when `limits` are hit.
/// Exhausting the frontier without reaching a goal is not an error.
pub fn dijkstra<S, N, I, G>(
    start: S,
    mut neighbours: N,
    mut is_goal: G,
    limits: &SearchLimits,
) -> Result<SearchOutcome>
where
    S: Ord + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (Cost, S)>,
    G: FnMut(&S) -> bool,
{
    let started = Instant::now();
    let mut finalised: HashMap<S, Cost> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut stats = SearchStats::default();

    frontier.push(QueueEntry::new(start, 0));
    stats.pushed = 1;
    stats.frontier_high_water = 1;

    while let Some(QueueEntry { cost, state }) = frontier.pop() {
        if finalised.contains_key(&state) {
            continue;
        }

        if is_goal(&state) {
            tracing::debug!(
                "goal reached at cost {} after expanding {} states",
                cost,
                stats.expanded
            );
            return Ok(SearchOutcome {
                cost: Some(cost),
                stats,
            });
        }

        check_limits(limits, &stats, started)?;

        let successors = neighbours(&state);
        finalised.insert(state, cost);
        stats.expanded += 1;

        for (weight, next) in successors {
            if weight < 0 {
                return Err(Error::NegativeWeight { weight });
            }
            if finalised.contains_key(&next) {
                continue;
            }
            let total = cost
                .checked_add(weight)
                .ok_or(Error::CostOverflow { cost, weight })?;
            frontier.push(QueueEntry::new(next, total));
            stats.pushed += 1;
        }
        stats.frontier_high_water = stats.frontier_high_water.max(frontier.len());
    }

    tracing::debug!(
        "frontier exhausted after expanding {} states; goal unreachable",
        stats.expanded
    );
    Ok(SearchOutcome { cost: None, stats })
}

/// Minimum cost from `start` to a goal state with no resource budget.
pub fn shortest_cost<S, N, I, G>(start: S, neighbours: N, is_goal: G) -> Result<Option<Cost>>
where
    S: Ord + Hash,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (Cost, S)>,
    G: FnMut(&S) -> bool,
{
    dijkstra(start, neighbours, is_goal, &SearchLimits::unlimited()).map(|outcome| outcome.cost)
}

fn check_limits(limits: &SearchLimits, stats: &SearchStats, started: Instant) -> Result<()> {
    if let Some(max) = limits.max_expansions {
        if stats.expanded >= max {
            tracing::warn!("search budget of {} expansions exhausted", max);
            return Err(Error::SearchBudgetExhausted {
                expanded: stats.expanded,
            });
        }
    }

    if let Some(limit) = limits.time_limit {
        if stats.expanded % CLOCK_CHECK_INTERVAL == 0 && started.elapsed() >= limit {
            tracing::warn!("search time limit of {:?} exceeded", limit);
            return Err(Error::SearchTimedOut {
                expanded: stats.expanded,
                limit,
            });
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueueEntry<S> {
    cost: Cost,
    state: S,
}

impl<S> QueueEntry<S> {
    fn new(state: S, cost: Cost) -> Self {
        Self { cost, state }
    }
}

impl<S: Ord> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by (cost, state).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl<S: Ord> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Small weighted digraph over `u8` labels.
    fn edges(node: &u8) -> Vec<(Cost, u8)> {
        match node {
            0 => vec![(7, 1), (2, 2)],
            1 => vec![(1, 3)],
            2 => vec![(3, 1), (9, 3)],
            3 => vec![],
            _ => vec![],
        }
    }

    #[test]
    fn finds_cheapest_route() {
        let cost = shortest_cost(0u8, edges, |n| *n == 3).unwrap();
        assert_eq!(cost, Some(6));
    }

    #[test]
    fn start_satisfying_goal_costs_nothing() {
        let outcome = dijkstra(0u8, edges, |n| *n == 0, &SearchLimits::unlimited()).unwrap();
        assert_eq!(outcome.cost, Some(0));
        assert_eq!(outcome.stats.expanded, 0);
    }

    #[test]
    fn exhausted_frontier_is_unreachable_not_zero() {
        let outcome = dijkstra(0u8, edges, |n| *n == 9, &SearchLimits::unlimited()).unwrap();
        assert_eq!(outcome.cost, None);
        assert_eq!(outcome.stats.expanded, 4);
    }

    #[test]
    fn negative_weight_fails_fast() {
        let err = shortest_cost(0u8, |_| vec![(-1, 1u8)], |n| *n == 1).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { weight: -1 }));
    }

    #[test]
    fn zero_weight_edges_are_allowed() {
        let cost = shortest_cost(
            0u8,
            |n: &u8| if *n < 5 { vec![(0, n + 1)] } else { vec![] },
            |n| *n == 5,
        )
        .unwrap();
        assert_eq!(cost, Some(0));
    }

    #[test]
    fn each_state_is_expanded_once_in_cost_order() {
        // Dense graph with many duplicate pushes.
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let outcome = dijkstra(
            0u32,
            |n: &u32| {
                assert!(seen.insert(*n), "state {n} expanded twice");
                order.push(*n);
                (0..20u32)
                    .filter(|m| m != n)
                    .map(|m| (Cost::from(m.abs_diff(*n)), m))
                    .collect::<Vec<_>>()
            },
            |_| false,
            &SearchLimits::unlimited(),
        )
        .unwrap();

        assert_eq!(outcome.cost, None);
        assert_eq!(outcome.stats.expanded, 20);
        assert!(outcome.stats.pushed > 20, "duplicates must be tolerated");
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn ties_break_on_state_order() {
        let mut order = Vec::new();
        dijkstra(
            0u8,
            |n: &u8| {
                order.push(*n);
                if *n == 0 {
                    vec![(1, 3), (1, 1), (1, 2)]
                } else {
                    vec![]
                }
            },
            |_| false,
            &SearchLimits::unlimited(),
        )
        .unwrap();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn expansion_budget_is_a_distinct_error() {
        let limits = SearchLimits {
            max_expansions: Some(3),
            ..SearchLimits::default()
        };
        let err = dijkstra(0u64, |n: &u64| vec![(1, n + 1)], |_| false, &limits).unwrap_err();
        assert!(matches!(err, Error::SearchBudgetExhausted { expanded: 3 }));
        assert!(err.is_resource_limit());
    }

    #[test]
    fn zero_time_limit_times_out() {
        let limits = SearchLimits {
            time_limit: Some(Duration::ZERO),
            ..SearchLimits::default()
        };
        let err = dijkstra(0u64, |n: &u64| vec![(1, n + 1)], |_| false, &limits).unwrap_err();
        assert!(matches!(err, Error::SearchTimedOut { expanded: 0, .. }));
    }

    #[test]
    fn accumulated_cost_overflow_is_reported() {
        let weight = Cost::MAX / 2 + 1;
        let err = shortest_cost(
            0u8,
            |n: &u8| if *n < 2 { vec![(weight, n + 1)] } else { vec![] },
            |n| *n == 2,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::CostOverflow { cost, weight: w } if cost == weight && w == weight
        ));
        assert!(err.is_resource_limit());
    }
}
