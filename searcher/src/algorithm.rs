//! Provides the building blocks for search algorithms

use std::collections::{HashSet, VecDeque};
use std::default::Default;

use log::debug;

use crate::errors::{Result, SearchError};
use crate::traits::{SearchState, StateGraph};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub(crate) mod path;

/// Trait used to implement the frontier of states
/// which have been discovered but not yet expanded.
pub(crate) trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;
}

/// First in, first out.
#[derive(Debug)]
pub(crate) struct BreadthQueue<S> {
    queue: VecDeque<S>,
}

impl<S> SearchQueue for BreadthQueue<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<S> Default for BreadthQueue<S> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
        }
    }
}

/// Last in, first out.
#[derive(Debug)]
pub(crate) struct DepthStack<S> {
    stack: Vec<S>,
}

impl<S> SearchQueue for DepthStack<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.stack.pop()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.stack.push(item);
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

impl<S> Default for DepthStack<S> {
    fn default() -> Self {
        DepthStack { stack: Vec::new() }
    }
}

/// Discover every state reachable from `init`.
///
/// The queue determines the order of discovery, but not the result.
pub(crate) fn explore<Q, S, G>(init: S, graph: &G) -> HashSet<S>
where
    Q: SearchQueue<Candidate = S> + Default,
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    let mut seen = HashSet::new();
    let mut queue = Q::default();

    seen.insert(init.clone());
    queue.push(init);

    while let Some(state) = queue.pop() {
        for next in graph.neighbors(&state) {
            if !seen.contains(&next) {
                seen.insert(next.clone());
                queue.push(next);
            }
        }
    }

    debug!("Explored {} states", seen.len());
    seen
}

/// Options which tune a single search.
///
/// Neither option changes the result of a search which
/// completes: they only bound it, or make it talk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up with [SearchError::StepLimitExhausted] after expanding
    /// this many states.
    pub step_limit: Option<usize>,

    /// Log progress every this many expanded states.
    pub progress: Option<usize>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a step limit for this search.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Log the state of the search every `interval` steps.
    pub fn with_progress(mut self, interval: usize) -> Self {
        self.progress = Some(interval);
        self
    }
}

/// Counts the states expanded by a search.
#[derive(Debug)]
pub(crate) struct StepCounter {
    current: usize,
    maximum: Option<usize>,
    progress: Option<usize>,
}

impl StepCounter {
    pub(crate) fn new(options: &SearchOptions) -> Self {
        Self {
            current: 0,
            maximum: options.step_limit,
            progress: options.progress.filter(|&p| p > 0),
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    /// Record one more expanded state, with `frontier` states still queued.
    pub(crate) fn increment(&mut self, frontier: usize) -> Result<()> {
        if let Some(maximum) = self.maximum {
            if self.current >= maximum {
                return Err(SearchError::StepLimitExhausted(self.current));
            }
        }
        self.current += 1;

        if let Some(interval) = self.progress {
            if self.current % interval == 0 {
                debug!("Step {} with {} queued", self.current, frontier);
            }
        }
        Ok(())
    }
}
