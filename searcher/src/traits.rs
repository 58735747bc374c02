use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::Zero;

/// A node in an implicitly defined graph.
///
/// States are opaque to the search algorithms: they are only
/// cloned, hashed and compared, never inspected.
pub trait SearchState: Debug + Clone + Eq + Hash {}

impl<T> SearchState for T where T: Debug + Clone + Eq + Hash {}

/// Accumulated cost along a path.
pub trait Cost: Debug + Copy + Ord + Add<Output = Self> + Zero {}

impl<T> Cost for T where T: Debug + Copy + Ord + Add<Output = Self> + Zero {}

/// Provides the edges of an implicit graph on demand.
///
/// Any `Fn(&S) -> Vec<S>` closure is a graph, so most
/// callers never implement this trait by hand.
///
/// Implementations must be deterministic. The search algorithms
/// perform no cycle protection or pruning of their own, so an
/// infinite graph must be bounded by the neighbors returned here.
pub trait StateGraph<S> {
    /// States reachable from `state` in a single step.
    fn neighbors(&self, state: &S) -> Vec<S>;
}

impl<S, F> StateGraph<S> for F
where
    F: Fn(&S) -> Vec<S>,
{
    fn neighbors(&self, state: &S) -> Vec<S> {
        self(state)
    }
}

/// A graph whose edges depend on how a state was reached.
///
/// `path` is the path from the initial state up to and
/// including `state`.
pub trait HistoryGraph<S> {
    fn neighbors(&self, state: &S, path: &[S]) -> Vec<S>;
}

impl<S, F> HistoryGraph<S> for F
where
    F: Fn(&S, &[S]) -> Vec<S>,
{
    fn neighbors(&self, state: &S, path: &[S]) -> Vec<S> {
        self(state, path)
    }
}

/// The cost of moving along a single edge.
///
/// Costs must never be negative. This is not checked.
pub trait CostFunction<S, C> {
    fn cost(&self, from: &S, to: &S) -> C;
}

impl<S, C, F> CostFunction<S, C> for F
where
    F: Fn(&S, &S) -> C,
{
    fn cost(&self, from: &S, to: &S) -> C {
        self(from, to)
    }
}

/// Every edge costs one, so path cost is the number of steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

impl<S> CostFunction<S, usize> for UnitCost {
    fn cost(&self, _from: &S, _to: &S) -> usize {
        1
    }
}

/// An interface for searching when a heuristic can be provided.
///
/// The estimate is a best guess at the remaining cost from
/// a state to the nearest target. It must never overestimate,
/// and must be consistent, for the search to remain optimal.
pub trait SearchHeuristic<S, C> {
    fn estimate(&self, state: &S) -> C;
}

impl<S, C, F> SearchHeuristic<S, C> for F
where
    F: Fn(&S) -> C,
{
    fn estimate(&self, state: &S) -> C {
        self(state)
    }
}

/// The heuristic which turns A* back into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeuristic;

impl<S, C> SearchHeuristic<S, C> for NoHeuristic
where
    C: Zero,
{
    fn estimate(&self, _state: &S) -> C {
        C::zero()
    }
}
