//! Generalized search algorithms over implicit graphs.
//!
//! A graph is never stored: it is described by a [StateGraph], which
//! produces the neighbors of a state on demand. Any closure
//! `Fn(&S) -> Vec<S>` will do. States can be anything which is
//! [Clone], [Eq] and [Hash](std::hash::Hash), e.g. grid points, tuples
//! of positions, or bitsets of opened valves.
//!
//! Searches which look for a goal take a target predicate rather than
//! a single goal state. Every search keeps its own bookkeeping, so the
//! same graph can be searched any number of times.
//!
//! ```
//! use searcher::{bfs, dijkstra, UnitCost};
//!
//! let line = |n: &u32| -> Vec<u32> { vec![n.saturating_sub(1), (n + 1).min(4)] };
//! assert_eq!(bfs::distances(0, &line).get(&4), Some(&4));
//! assert_eq!(dijkstra::shortest_path(0, |&n| n == 2, &line, UnitCost), vec![0, 1, 2]);
//! ```

pub mod algorithm;
mod errors;
mod traits;

pub use algorithm::path::Path;
pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Cost;
pub use traits::CostFunction;
pub use traits::HistoryGraph;
pub use traits::NoHeuristic;
pub use traits::SearchHeuristic;
pub use traits::SearchState;
pub use traits::StateGraph;
pub use traits::UnitCost;

pub use algorithm::astar;
pub use algorithm::bfs;
pub use algorithm::dfs;
pub use algorithm::dijkstra;
pub use algorithm::dijkstra::Dijkstra;
pub use algorithm::SearchOptions;
