//! Breadth-first search over an implicit graph.
//!
//! Every edge counts as one step. A state's distance is fixed
//! the first time it is discovered, and `neighbors` is called
//! exactly once for each state taken off the queue.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use log::debug;

use super::path::reconstruct;
use super::{explore, BreadthQueue, SearchQueue};
use crate::traits::{SearchState, StateGraph};

/// Every state reachable from `init`, including `init` itself.
///
/// Only terminates when the reachable set is finite.
pub fn reachable<S, G>(init: S, graph: &G) -> HashSet<S>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    explore::<BreadthQueue<S>, _, _>(init, graph)
}

/// Minimum number of steps from `init` to every reachable state.
pub fn distances<S, G>(init: S, graph: &G) -> HashMap<S, usize>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    levels(init, graph, None)
}

/// Minimum number of steps from `init` to every state at most
/// `threshold` steps away.
///
/// States at exactly `threshold` are never expanded, so this
/// terminates even on an infinite graph.
pub fn within<S, G>(init: S, threshold: usize, graph: &G) -> HashMap<S, usize>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    levels(init, graph, Some(threshold))
}

/// States which could be occupied after exactly `threshold` steps,
/// on a graph where every move can be immediately undone.
///
/// These are the states at most `threshold` steps away whose
/// distance has the same parity as `threshold`: any spare steps
/// are spent walking back and forth in pairs. This does not hold
/// for graphs with one-way edges, which is why it is not the
/// behavior of [within].
pub fn bounded_by_parity<S, G>(init: S, threshold: usize, graph: &G) -> HashSet<S>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    within(init, threshold, graph)
        .into_iter()
        .filter(|(_, distance)| distance % 2 == threshold % 2)
        .map(|(state, _)| state)
        .collect()
}

/// Fewest-steps path from `init` to the first state satisfying `target`.
///
/// Returns `[init]` when `init` is already a target, and an empty
/// path when no target is reachable.
pub fn shortest_path<S, G, P>(init: S, target: P, graph: &G) -> Vec<S>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
    P: Fn(&S) -> bool,
{
    if target(&init) {
        return vec![init];
    }

    let mut predecessors: HashMap<S, S> = HashMap::new();
    let mut queue = BreadthQueue::default();
    let mut seen = HashSet::new();
    seen.insert(init.clone());
    queue.push(init);

    while let Some(state) = queue.pop() {
        for next in graph.neighbors(&state) {
            if seen.contains(&next) {
                continue;
            }
            seen.insert(next.clone());
            predecessors.insert(next.clone(), state.clone());

            if target(&next) {
                let path = reconstruct(next, &predecessors);
                debug!("Found a path of {} steps", path.len() - 1);
                return path;
            }
            queue.push(next);
        }
    }

    debug!("No path found after visiting {} states", seen.len());
    Vec::new()
}

fn levels<S, G>(init: S, graph: &G, threshold: Option<usize>) -> HashMap<S, usize>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    let mut distances = HashMap::new();
    let mut queue = BreadthQueue::default();

    distances.insert(init.clone(), 0);
    queue.push((init, 0));

    while let Some((state, distance)) = queue.pop() {
        if threshold.map_or(false, |t| distance >= t) {
            continue;
        }

        for next in graph.neighbors(&state) {
            if let Entry::Vacant(entry) = distances.entry(next.clone()) {
                entry.insert(distance + 1);
                queue.push((next, distance + 1));
            }
        }
    }

    debug!("Measured distances to {} states", distances.len());
    distances
}
