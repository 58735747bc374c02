use anyhow::{anyhow, Error};
use geometry::coord2d::{Direction, Point};
use geometry::grid::{Grid, Map};
use log::info;
use searcher::{bfs, Dijkstra, SearchOptions, SearchResult};

use std::io::Read;
use std::str::FromStr;

const STEP_COST: usize = 1;
const TURN_COST: usize = 1000;

/// Where the reindeer is, and which way it is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Reindeer {
    location: Point,
    facing: Direction,
}

#[derive(Debug)]
struct Maze {
    grid: Grid,
    start: Point,
    end: Point,
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid: Grid = s.parse()?;
        let start = grid.find('S').ok_or(anyhow!("Maze has no start"))?;
        let end = grid.find('E').ok_or(anyhow!("Maze has no end"))?;
        Ok(Maze { grid, start, end })
    }
}

impl Maze {
    /// Steps along the shortest route, ignoring turns.
    fn fewest_steps(&self) -> Option<usize> {
        let graph = |p: &Point| self.grid.neighbors(p);
        let path = bfs::shortest_path(self.start, |p| *p == self.end, &graph);
        path.len().checked_sub(1)
    }

    /// Turn in place either way, or step forward if there is no wall.
    fn moves(&self, reindeer: &Reindeer) -> Vec<Reindeer> {
        let mut next = vec![
            Reindeer {
                facing: reindeer.facing.turn_left(),
                ..*reindeer
            },
            Reindeer {
                facing: reindeer.facing.turn_right(),
                ..*reindeer
            },
        ];

        let ahead = reindeer.location.step(reindeer.facing);
        if self.grid.is_traversable(ahead) {
            next.push(Reindeer {
                location: ahead,
                ..*reindeer
            });
        }
        next
    }

    /// Lowest score to reach the end, facing any direction.
    fn lowest_score(&self, options: SearchOptions) -> SearchResult<usize> {
        let graph = |r: &Reindeer| self.moves(r);
        let cost = |from: &Reindeer, to: &Reindeer| {
            if from.facing == to.facing {
                STEP_COST
            } else {
                TURN_COST
            }
        };

        let end = self.end;
        let distance = |r: &Reindeer| r.location.manhattan_distance(end) as usize;

        let start = Reindeer {
            location: self.start,
            facing: Direction::Right,
        };

        Dijkstra::new(&graph)
            .with_cost(cost)
            .with_heuristic(distance)
            .with_options(options)
            .run(start, |r| r.location == end)
            .map(|path| path.cost())
    }
}

pub(crate) fn main(mut input: Box<dyn Read + 'static>) -> ::std::result::Result<(), Error> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;
    let maze: Maze = buffer.parse()?;
    info!(
        "Maze is {}x{}, from {} to {}",
        maze.grid.width(),
        maze.grid.height(),
        maze.start,
        maze.end
    );

    println!(
        "Part 1: Fewest steps {}",
        maze.fewest_steps().ok_or(anyhow!("No route through the maze!"))?
    );

    let options = SearchOptions::new().with_progress(10_000);
    println!("Part 2: Lowest score {}", maze.lowest_score(options)?);

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::SearchError;

    const SMALL: &str = "
    ###############
    #.......#....E#
    #.#.###.#.###.#
    #.....#.#...#.#
    #.###.#####.#.#
    #.#.#.......#.#
    #.#.#####.###.#
    #...........#.#
    ###.#.#####.#.#
    #...#.....#.#.#
    #.#.#.###.#.#.#
    #.....#...#.#.#
    #.###.#.#.#.#.#
    #S..#.....#...#
    ###############
    ";

    const LARGE: &str = "
    #################
    #...#...#...#..E#
    #.#.#.#.#.#.#.#.#
    #.#.#.#...#...#.#
    #.#.#.#.###.#.#.#
    #...#.#.#.....#.#
    #.#.#.#.#.#####.#
    #.#...#.#.#.....#
    #.#.#####.#.###.#
    #.#.#.......#...#
    #.#.###.#####.###
    #.#.#...#.....#.#
    #.#.#.#####.###.#
    #.#.#.........#.#
    #.#.#.#########.#
    #S#.............#
    #################
    ";

    #[test_log::test]
    fn examples_part1() {
        let maze: Maze = SMALL.parse().unwrap();
        assert_eq!(maze.fewest_steps(), Some(28));

        let maze: Maze = LARGE.parse().unwrap();
        assert_eq!(maze.fewest_steps(), Some(40));
    }

    #[test_log::test]
    fn examples_part2() {
        let maze: Maze = SMALL.parse().unwrap();
        assert_eq!(maze.lowest_score(SearchOptions::default()).unwrap(), 7036);

        let maze: Maze = LARGE.parse().unwrap();
        assert_eq!(maze.lowest_score(SearchOptions::default()).unwrap(), 11048);
    }

    #[test_log::test]
    fn step_limit() {
        let maze: Maze = LARGE.parse().unwrap();
        let options = SearchOptions::new().with_step_limit(5);
        assert_eq!(
            maze.lowest_score(options),
            Err(SearchError::StepLimitExhausted(5))
        );
    }

    #[test_log::test]
    fn walled_in() {
        let maze: Maze = "#####\n#S#E#\n#####".parse().unwrap();
        assert_eq!(maze.fewest_steps(), None);
        assert_eq!(
            maze.lowest_score(SearchOptions::default()),
            Err(SearchError::NoResultFound)
        );
    }

    #[test]
    fn missing_end() {
        assert!("#####\n#S..#\n#####".parse::<Maze>().is_err());
    }
}
