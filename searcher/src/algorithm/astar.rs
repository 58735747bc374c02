//! A* search: Dijkstra's algorithm guided by a heuristic.

use super::dijkstra::Dijkstra;
use super::path::Path;
use crate::traits::{Cost, CostFunction, SearchHeuristic, SearchState, StateGraph};

/// Cheapest path from `init` to the first state satisfying `target`,
/// expanding states in order of cost so far plus `heuristic`.
///
/// The heuristic must never overestimate the remaining cost, and must
/// be consistent, or the path returned may not be the cheapest.
/// Returns an empty path when no target is reachable.
pub fn shortest_path<S, C, G, F, H, P>(
    init: S,
    target: P,
    graph: &G,
    cost: F,
    heuristic: H,
) -> Vec<S>
where
    S: SearchState,
    C: Cost,
    G: StateGraph<S> + ?Sized,
    F: CostFunction<S, C>,
    H: SearchHeuristic<S, C>,
    P: Fn(&S) -> bool,
{
    Dijkstra::new(graph)
        .with_cost(cost)
        .with_heuristic(heuristic)
        .run(init, target)
        .map(Path::into_states)
        .unwrap_or_default()
}
