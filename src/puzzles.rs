//! Puzzle solvers which drive the search algorithms.

pub mod caves;
pub mod garden;
pub mod maze;
