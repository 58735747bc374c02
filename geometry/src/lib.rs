#![deny(clippy::all)]

pub mod coord2d;
pub mod grid;

/// Data type used for coordinates
pub type Position = i32;
