//! Depth-first search and path enumeration.
//!
//! Both use an explicit stack rather than recursion, so deep
//! search spaces are limited by memory and not by the call stack.

use std::collections::HashSet;
use std::vec;

use log::debug;

use super::{explore, DepthStack};
use crate::traits::{HistoryGraph, SearchState, StateGraph};

/// Every state reachable from `init`, including `init` itself.
///
/// Finds the same set as [crate::bfs::reachable], in depth-first order.
pub fn reachable<S, G>(init: S, graph: &G) -> HashSet<S>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
{
    explore::<DepthStack<S>, _, _>(init, graph)
}

/// Every simple path from `init` to a state satisfying `target`.
///
/// A path is simple when no state appears on it twice. Paths stop
/// at the first target state they reach.
pub fn enumerate_paths<S, G, P>(init: S, target: P, graph: &G) -> Vec<Vec<S>>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
    P: Fn(&S) -> bool,
{
    paths(init, target, graph).collect()
}

/// Every path from `init` to a state satisfying `target`, where
/// `graph` decides from the path so far which states may follow.
///
/// No revisit rule is applied by the search. The graph must forbid
/// cycles, or budget them, or this will never finish.
pub fn enumerate_paths_with_history<S, H, P>(init: S, target: P, graph: &H) -> Vec<Vec<S>>
where
    S: SearchState,
    H: HistoryGraph<S> + ?Sized,
    P: Fn(&S) -> bool,
{
    paths_with_history(init, target, graph).collect()
}

/// Lazily iterate over the paths found by [enumerate_paths].
pub fn paths<'g, S, G, P>(init: S, target: P, graph: &'g G) -> Paths<S, Forgetful<'g, G>, P>
where
    S: SearchState,
    G: StateGraph<S> + ?Sized,
    P: Fn(&S) -> bool,
{
    Paths::new(init, target, Forgetful(graph), true)
}

/// Lazily iterate over the paths found by [enumerate_paths_with_history].
pub fn paths_with_history<'g, S, H, P>(
    init: S,
    target: P,
    graph: &'g H,
) -> Paths<S, Remembering<'g, H>, P>
where
    S: SearchState,
    H: HistoryGraph<S> + ?Sized,
    P: Fn(&S) -> bool,
{
    Paths::new(init, target, Remembering(graph), false)
}

/// A [StateGraph] which ignores the path taken.
#[derive(Debug)]
pub struct Forgetful<'g, G: ?Sized>(&'g G);

impl<'g, S, G> HistoryGraph<S> for Forgetful<'g, G>
where
    G: StateGraph<S> + ?Sized,
{
    fn neighbors(&self, state: &S, _path: &[S]) -> Vec<S> {
        self.0.neighbors(state)
    }
}

/// A borrowed [HistoryGraph].
#[derive(Debug)]
pub struct Remembering<'g, H: ?Sized>(&'g H);

impl<'g, S, H> HistoryGraph<S> for Remembering<'g, H>
where
    H: HistoryGraph<S> + ?Sized,
{
    fn neighbors(&self, state: &S, path: &[S]) -> Vec<S> {
        self.0.neighbors(state, path)
    }
}

/// Iterator over complete paths, in depth-first order.
///
/// The current path and one frame of unexplored neighbors per
/// state on it are kept on an explicit stack.
pub struct Paths<S, H, P> {
    graph: H,
    target: P,
    simple: bool,
    start: Option<S>,
    path: Vec<S>,
    on_path: HashSet<S>,
    stack: Vec<vec::IntoIter<S>>,
    count: Option<usize>,
}

impl<S, H, P> Paths<S, H, P>
where
    S: SearchState,
    H: HistoryGraph<S>,
    P: Fn(&S) -> bool,
{
    fn new(init: S, target: P, graph: H, simple: bool) -> Self {
        Self {
            graph,
            target,
            simple,
            start: Some(init),
            path: Vec::new(),
            on_path: HashSet::new(),
            stack: Vec::new(),
            count: Some(0),
        }
    }

    fn emit(&mut self, path: Vec<S>) -> Option<Vec<S>> {
        if let Some(n) = self.count.as_mut() {
            *n += 1;
        }
        Some(path)
    }

    fn finish(&mut self) -> Option<Vec<S>> {
        if let Some(n) = self.count.take() {
            debug!("Enumerated {} paths", n);
        }
        None
    }

    fn descend(&mut self, state: S) {
        self.path.push(state.clone());
        let children = self.graph.neighbors(&state, &self.path);
        if self.simple {
            self.on_path.insert(state);
        }
        self.stack.push(children.into_iter());
    }

    fn backtrack(&mut self) {
        self.stack.pop();
        if let Some(state) = self.path.pop() {
            self.on_path.remove(&state);
        }
    }
}

impl<S, H, P> Iterator for Paths<S, H, P>
where
    S: SearchState,
    H: HistoryGraph<S>,
    P: Fn(&S) -> bool,
{
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(init) = self.start.take() {
            if (self.target)(&init) {
                return self.emit(vec![init]);
            }
            self.descend(init);
        }

        loop {
            if self.stack.is_empty() {
                return self.finish();
            }
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some(next) => {
                    if self.simple && self.on_path.contains(&next) {
                        continue;
                    }
                    if (self.target)(&next) {
                        let mut found = self.path.clone();
                        found.push(next);
                        return self.emit(found);
                    }
                    self.descend(next);
                }
                None => self.backtrack(),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle(node: &char) -> Vec<char> {
        match node {
            'A' => vec!['B', 'C'],
            'B' => vec!['A', 'C'],
            'C' => vec!['A', 'B'],
            _ => vec![],
        }
    }

    #[test_log::test]
    fn triangle_paths() {
        let mut paths = enumerate_paths('A', |&n| n == 'C', &triangle);
        paths.sort();
        assert_eq!(paths, vec![vec!['A', 'B', 'C'], vec!['A', 'C']]);
    }

    #[test_log::test]
    fn already_there() {
        let paths = enumerate_paths('A', |&n| n == 'A', &triangle);
        assert_eq!(paths, vec![vec!['A']]);
    }

    #[test_log::test]
    fn unreachable() {
        assert!(enumerate_paths('A', |&n| n == 'Z', &triangle).is_empty());
    }

    #[test_log::test]
    fn revisit_budget() {
        // Each node may appear at most twice on a path.
        let twice = |node: &char, path: &[char]| -> Vec<char> {
            triangle(node)
                .into_iter()
                .filter(|n| path.iter().filter(|p| *p == n).count() < 2)
                .collect()
        };
        let paths = enumerate_paths_with_history('A', |&n| n == 'C', &twice);

        assert!(paths.contains(&vec!['A', 'C']));
        assert!(paths.contains(&vec!['A', 'B', 'A', 'C']));
        assert!(paths.contains(&vec!['A', 'B', 'A', 'B', 'C']));
        assert!(paths.iter().all(|p| p.last() == Some(&'C')));
        assert!(paths.iter().all(|p| p.iter().filter(|&&n| n == 'A').count() <= 2));
        assert!(!paths.contains(&vec!['A', 'B', 'A', 'B', 'A', 'C']));
    }

    #[test_log::test]
    fn lazy_paths() {
        let longest = paths('A', |&n| n == 'C', &triangle)
            .map(|p| p.len())
            .max();
        assert_eq!(longest, Some(3));
    }

    #[test_log::test]
    fn reachable_matches() {
        let grid = |p: &(i32, i32)| -> Vec<(i32, i32)> {
            vec![(p.0 + 1, p.1), (p.0 - 1, p.1), (p.0, p.1 + 1), (p.0, p.1 - 1)]
                .into_iter()
                .filter(|&(x, y)| (0..4).contains(&x) && (0..3).contains(&y))
                .collect()
        };
        let found = reachable((0, 0), &grid);
        assert_eq!(found.len(), 12);
        assert_eq!(found, crate::bfs::reachable((0, 0), &grid));
    }

    #[test_log::test]
    fn exhausted_stays_empty() {
        let mut all = paths('A', |&n| n == 'C', &triangle);
        assert_eq!(all.by_ref().count(), 2);
        assert_eq!(all.next(), None);
        assert_eq!(all.next(), None);
    }

    #[test_log::test]
    fn deep_line() {
        const END: u32 = 1_000_000;
        let line = |n: &u32| -> Vec<u32> {
            let mut next = Vec::with_capacity(2);
            if *n > 0 {
                next.push(n - 1);
            }
            if *n < END {
                next.push(n + 1);
            }
            next
        };

        let found = enumerate_paths(0, |&n| n == END, &line);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].len(), END as usize + 1);
        assert_eq!(found[0].last(), Some(&END));

        assert_eq!(reachable(0, &line).len(), END as usize + 1);
    }
}
