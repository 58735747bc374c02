//! Maps of locations on a coordinate grid, parsed from text.
use std::collections::HashSet;
use std::str::FromStr;

use searcher::{bfs, dfs, dijkstra, UnitCost};
use thiserror::Error;

use crate::coord2d::Point;

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Traversable points one step away from `location`.
    fn neighbors(&self, location: &Point) -> Vec<Point> {
        location
            .adjacent()
            .filter(|&p| self.is_traversable(p))
            .collect()
    }

    /// Build a shortest path on this map, including both ends.
    ///
    /// When no path exists, return None.
    fn path(&self, origin: Point, destination: Point) -> Option<Vec<Point>> {
        if !self.is_traversable(origin) {
            return None;
        }
        let graph = |p: &Point| self.neighbors(p);
        let path = dijkstra::shortest_path(origin, |p| *p == destination, &graph, UnitCost);
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }

    /// Every traversable point connected to `origin`.
    fn region(&self, origin: Point) -> HashSet<Point> {
        if !self.is_traversable(origin) {
            return HashSet::new();
        }
        let graph = |p: &Point| self.neighbors(p);
        dfs::reachable(origin, &graph)
    }

    /// Points which could be occupied after exactly `steps` steps.
    fn after_steps(&self, origin: Point, steps: usize) -> HashSet<Point> {
        let graph = |p: &Point| self.neighbors(p);
        bfs::bounded_by_parity(origin, steps, &graph)
    }
}

/// Error when parsing a grid from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Grid is empty")]
    Empty,

    #[error("Row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// A rectangular grid of characters, where `#` marks a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at `location`, if it is on the grid.
    pub fn get(&self, location: Point) -> Option<char> {
        if location.x < 0 || location.y < 0 {
            return None;
        }
        self.tiles
            .get(location.y as usize)
            .and_then(|row| row.get(location.x as usize))
            .copied()
    }

    /// All points on the grid, in reading order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::from((x, y))))
    }

    /// Find the first point in reading order holding `tile`.
    pub fn find(&self, tile: char) -> Option<Point> {
        self.points().find(|&p| self.get(p) == Some(tile))
    }
}

impl Map for Grid {
    fn is_traversable(&self, location: Point) -> bool {
        matches!(self.get(location), Some(c) if c != '#')
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let width = tiles.first().map(|row| row.len()).ok_or(ParseError::Empty)?;
        if let Some((row, found)) = tiles
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(ParseError::Ragged {
                row,
                found,
                expected: width,
            });
        }

        Ok(Self {
            height: tiles.len(),
            width,
            tiles,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WALLED: &str = "
        #######
        #S..#.#
        #.#.#.#
        #.#...#
        #...#E#
        #######
    ";

    const BLOCKED: &str = "
        #######
        #S..#.#
        #.###.#
        #.##..#
        #...#E#
        #######
    ";

    #[test]
    fn parse() {
        let grid: Grid = WALLED.parse().unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.find('S'), Some(Point::new(1, 1)));
        assert_eq!(grid.find('E'), Some(Point::new(5, 4)));
        assert_eq!(grid.get(Point::new(-1, 0)), None);
        assert_eq!(grid.get(Point::new(6, 5)), Some('#'));
        assert_eq!(grid.get(Point::new(7, 5)), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseError::Empty));
        assert_eq!(
            "...\n..\n".parse::<Grid>(),
            Err(ParseError::Ragged {
                row: 1,
                found: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn shortest() {
        let grid: Grid = WALLED.parse().unwrap();
        let path = grid.path(Point::new(1, 1), Point::new(5, 4)).unwrap();
        assert_eq!(path.len() - 1, 7);
        assert_eq!(grid.path(Point::new(0, 0), Point::new(5, 4)), None);
        assert_eq!(
            grid.path(Point::new(1, 1), Point::new(1, 1)),
            Some(vec![Point::new(1, 1)])
        );
    }

    #[test]
    fn blocked() {
        let grid: Grid = BLOCKED.parse().unwrap();
        assert_eq!(grid.path(Point::new(1, 1), Point::new(5, 4)), None);
        assert_eq!(grid.region(Point::new(1, 1)).len(), 8);
    }

    #[test]
    fn regions() {
        let grid: Grid = WALLED.parse().unwrap();
        assert_eq!(grid.region(Point::new(1, 1)).len(), 15);
        assert!(grid.region(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn exact_steps() {
        let grid: Grid = WALLED.parse().unwrap();
        let two = grid.after_steps(Point::new(1, 1), 2);
        let expected: HashSet<Point> = vec![(1, 1), (3, 1), (1, 3)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(two, expected);
    }
}
