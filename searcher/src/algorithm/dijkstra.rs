//! Dijkstra's Algorithm
//!
//! Finds the cheapest path from a single state to the first state
//! which satisfies a target predicate, over an implicit graph with
//! non-negative edge costs.
//!
//! [BinaryHeap] has no decrease-key, so whenever a cheaper route to
//! a state is found the state is pushed again with its new cost. The
//! old entry stays in the heap, and is discarded when it is popped
//! because its cost no longer matches the best known cost.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::default::Default;

use log::{debug, trace};

use super::path::{reconstruct, Path};
use super::{SearchOptions, SearchQueue, StepCounter};
use crate::errors::{Result, SearchError};
use crate::traits::{
    Cost, CostFunction, NoHeuristic, SearchHeuristic, SearchState, StateGraph, UnitCost,
};

/// Wrapper for states which sorts appropriately
/// for Dijkstra's Algorithm, cheapest first.
#[derive(Debug)]
struct DijkstraElement<S, C> {
    priority: C,
    cost: C,
    state: S,
}

impl<S, C> PartialEq for DijkstraElement<S, C>
where
    C: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority)
    }
}

impl<S, C> Eq for DijkstraElement<S, C> where C: Ord {}

impl<S, C> Ord for DijkstraElement<S, C>
where
    C: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority).reverse()
    }
}

impl<S, C> PartialOrd for DijkstraElement<S, C>
where
    C: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue to always search the next shortest path
/// by measured distance.
#[derive(Debug)]
struct DijkstraQueue<S, C> {
    queue: BinaryHeap<DijkstraElement<S, C>>,
}

impl<S, C> Default for DijkstraQueue<S, C>
where
    C: Ord,
{
    fn default() -> Self {
        DijkstraQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl<S, C> SearchQueue for DijkstraQueue<S, C>
where
    C: Ord,
{
    type Candidate = DijkstraElement<S, C>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Everything a search learned before it stopped.
#[derive(Debug)]
struct Exploration<S, C> {
    best: HashMap<S, C>,
    predecessors: HashMap<S, S>,
    found: Option<(S, C)>,
}

/// A configured search using Dijkstra's algorithm.
///
/// ```
/// use searcher::{Dijkstra, SearchOptions};
///
/// let graph = |n: &u32| -> Vec<u32> { vec![n + 1, n * 2] };
/// let path = Dijkstra::new(&graph)
///     .with_cost(|a: &u32, b: &u32| -> u32 { if *b == a + 1 { 1 } else { 3 } })
///     .with_options(SearchOptions::new().with_step_limit(1000))
///     .run(1, |&n| n == 8)
///     .unwrap();
/// assert_eq!(path.cost(), 6);
/// ```
#[derive(Debug)]
pub struct Dijkstra<'g, G: ?Sized, F, H> {
    graph: &'g G,
    cost: F,
    heuristic: H,
    options: SearchOptions,
}

impl<'g, G> Dijkstra<'g, G, UnitCost, NoHeuristic>
where
    G: ?Sized,
{
    /// Build a search over `graph` where every edge costs one.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            cost: UnitCost,
            heuristic: NoHeuristic,
            options: SearchOptions::default(),
        }
    }
}

impl<'g, G, F, H> Dijkstra<'g, G, F, H>
where
    G: ?Sized,
{
    /// Use `cost` to weigh each edge.
    pub fn with_cost<F2>(self, cost: F2) -> Dijkstra<'g, G, F2, H> {
        Dijkstra {
            graph: self.graph,
            cost,
            heuristic: self.heuristic,
            options: self.options,
        }
    }

    /// Order the search by cost plus `heuristic`, making this A*.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> Dijkstra<'g, G, F, H2> {
        Dijkstra {
            graph: self.graph,
            cost: self.cost,
            heuristic,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Find the cheapest path from `init` to a state satisfying `target`.
    ///
    /// When `init` satisfies `target`, the path is just `[init]`.
    /// When several paths share the lowest cost, which one is
    /// returned is unspecified.
    pub fn run<S, C, P>(&self, init: S, target: P) -> Result<Path<S, C>>
    where
        S: SearchState,
        C: Cost,
        G: StateGraph<S>,
        F: CostFunction<S, C>,
        H: SearchHeuristic<S, C>,
        P: Fn(&S) -> bool,
    {
        let exploration = self.explore(init, target)?;
        match exploration.found {
            Some((last, cost)) => {
                let states = reconstruct(last, &exploration.predecessors);
                debug!("Found a path of {} states costing {:?}", states.len(), cost);
                Ok(Path::new(states, cost))
            }
            None => Err(SearchError::NoResultFound),
        }
    }

    /// Cheapest cost from `init` to every reachable state.
    pub fn costs<S, C>(&self, init: S) -> Result<HashMap<S, C>>
    where
        S: SearchState,
        C: Cost,
        G: StateGraph<S>,
        F: CostFunction<S, C>,
        H: SearchHeuristic<S, C>,
    {
        self.explore(init, |_: &S| false).map(|e| e.best)
    }

    fn explore<S, C, P>(&self, init: S, target: P) -> Result<Exploration<S, C>>
    where
        S: SearchState,
        C: Cost,
        G: StateGraph<S>,
        F: CostFunction<S, C>,
        H: SearchHeuristic<S, C>,
        P: Fn(&S) -> bool,
    {
        let mut steps = StepCounter::new(&self.options);
        let mut queue = DijkstraQueue::default();
        let mut best = HashMap::new();
        let mut predecessors = HashMap::new();

        best.insert(init.clone(), C::zero());
        queue.push(DijkstraElement {
            priority: self.heuristic.estimate(&init),
            cost: C::zero(),
            state: init,
        });

        while let Some(DijkstraElement { cost, state, .. }) = queue.pop() {
            // A cheaper route was found after this entry was queued.
            if best.get(&state).map_or(false, |b| cost > *b) {
                continue;
            }

            if target(&state) {
                return Ok(Exploration {
                    best,
                    predecessors,
                    found: Some((state, cost)),
                });
            }

            steps.increment(queue.len())?;
            trace!("Expanding {:?} at {:?}", state, cost);

            for next in self.graph.neighbors(&state) {
                let candidate = cost + self.cost.cost(&state, &next);
                let improved = match best.entry(next.clone()) {
                    Entry::Occupied(mut e) if candidate < *e.get() => {
                        e.insert(candidate);
                        true
                    }
                    Entry::Occupied(_) => false,
                    Entry::Vacant(e) => {
                        e.insert(candidate);
                        true
                    }
                };

                if improved {
                    predecessors.insert(next.clone(), state.clone());
                    queue.push(DijkstraElement {
                        priority: candidate + self.heuristic.estimate(&next),
                        cost: candidate,
                        state: next,
                    });
                }
            }
        }

        debug!(
            "Search exhausted after {} steps, {} states seen",
            steps.current(),
            best.len()
        );
        Ok(Exploration {
            best,
            predecessors,
            found: None,
        })
    }
}

/// Perform a search using Dijkstra's algorithm.
///
/// Returns the cheapest path from `init` to the first state satisfying
/// `target`, or an empty path when no such state is reachable.
/// Pass [UnitCost] to count steps.
pub fn shortest_path<S, C, G, F, P>(init: S, target: P, graph: &G, cost: F) -> Vec<S>
where
    S: SearchState,
    C: Cost,
    G: StateGraph<S> + ?Sized,
    F: CostFunction<S, C>,
    P: Fn(&S) -> bool,
{
    Dijkstra::new(graph)
        .with_cost(cost)
        .run(init, target)
        .map(Path::into_states)
        .unwrap_or_default()
}

/// Cheapest cost from `init` to every reachable state.
pub fn costs<S, C, G, F>(init: S, graph: &G, cost: F) -> HashMap<S, C>
where
    S: SearchState,
    C: Cost,
    G: StateGraph<S> + ?Sized,
    F: CostFunction<S, C>,
{
    Dijkstra::new(graph)
        .with_cost(cost)
        .costs(init)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;

    fn weighted(node: &char) -> Vec<char> {
        match node {
            'A' => vec!['B', 'C'],
            'C' => vec!['B'],
            _ => vec![],
        }
    }

    fn weights(from: &char, to: &char) -> u32 {
        match (from, to) {
            ('A', 'B') => 5,
            ('A', 'C') => 1,
            ('C', 'B') => 1,
            _ => unreachable!(),
        }
    }

    #[test_log::test]
    fn cheaper_detour() {
        let path = Dijkstra::new(&weighted)
            .with_cost(weights)
            .run('A', |&n| n == 'B')
            .unwrap();
        assert_eq!(path.states(), &['A', 'C', 'B']);
        assert_eq!(path.cost(), 2);
    }

    #[test_log::test]
    fn already_satisfied() {
        let path = shortest_path('A', |&n| n == 'A', &weighted, weights);
        assert_eq!(path, vec!['A']);
    }

    #[test_log::test]
    fn no_path() {
        assert!(shortest_path('B', |&n| n == 'A', &weighted, weights).is_empty());
        assert_eq!(
            Dijkstra::new(&weighted)
                .with_cost(weights)
                .run('B', |&n| n == 'A'),
            Err(SearchError::NoResultFound)
        );
    }

    #[test_log::test]
    fn cost_map() {
        let c = costs('A', &weighted, weights);
        assert_eq!(c.get(&'A'), Some(&0));
        assert_eq!(c.get(&'B'), Some(&2));
        assert_eq!(c.get(&'C'), Some(&1));
        assert_eq!(c.len(), 3);
    }

    #[test_log::test]
    fn step_limit() {
        let counting = |n: &u64| -> Vec<u64> { vec![n + 1] };
        let result: Result<Path<u64, usize>> = Dijkstra::new(&counting)
            .with_options(SearchOptions::new().with_step_limit(10))
            .run(0, |&n| n == 100);
        assert_eq!(result, Err(SearchError::StepLimitExhausted(10)));

        let result: Result<Path<u64, usize>> = Dijkstra::new(&counting)
            .with_options(SearchOptions::new().with_step_limit(10))
            .run(0, |&n| n == 10);
        assert_eq!(result.map(|p| p.cost()), Ok(10));
    }

    #[test_log::test]
    fn zero_cost_cycle() {
        let cycle = |n: &u8| -> Vec<u8> { vec![(n + 1) % 3] };
        let free = |_: &u8, _: &u8| -> u8 { 0 };
        let path = Dijkstra::new(&cycle)
            .with_cost(free)
            .run(0, |&n| n == 2)
            .unwrap();
        assert_eq!(path.states(), &[0, 1, 2]);
        assert_eq!(path.cost(), 0);
    }

    #[test_log::test]
    fn cost_once_per_edge() {
        let diamond = |n: &char| -> Vec<char> {
            match n {
                'A' => vec!['B', 'C'],
                'B' | 'C' => vec!['D'],
                _ => vec![],
            }
        };
        let calls: RefCell<HashMap<(char, char), usize>> = RefCell::new(HashMap::new());
        let counted = |a: &char, b: &char| -> u32 {
            *calls.borrow_mut().entry((*a, *b)).or_insert(0) += 1;
            1
        };

        let c = Dijkstra::new(&diamond).with_cost(&counted).costs('A').unwrap();
        assert_eq!(c.get(&'D'), Some(&2));
        assert_eq!(calls.borrow().len(), 4);
        assert!(calls.borrow().values().all(|&n| n == 1));

        calls.borrow_mut().clear();
        let path = Dijkstra::new(&diamond)
            .with_cost(&counted)
            .run('A', |&n| n == 'D')
            .unwrap();
        assert_eq!(path.cost(), 2);
        assert!(calls.borrow().values().all(|&n| n == 1));
    }
}
