use anyhow::{anyhow, Error};
use log::{debug, info};
use searcher::dfs;

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Cave {
    Start,
    End,
    Big(String),
    Small(String),
}

impl From<&str> for Cave {
    fn from(name: &str) -> Self {
        match name {
            "start" => Cave::Start,
            "end" => Cave::End,
            n if n.chars().all(|c| c.is_ascii_uppercase()) => Cave::Big(n.to_string()),
            n => Cave::Small(n.to_string()),
        }
    }
}

/// How often small caves may be revisited on one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Revisits {
    Never,
    OneCaveTwice,
}

#[derive(Debug, Default)]
struct Caves {
    tunnels: HashMap<Cave, Vec<Cave>>,
}

impl FromStr for Caves {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut caves = Caves::default();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut parts = line.split('-');
            let a: Cave = parts.next().ok_or(anyhow!("Missing cave name!"))?.into();
            let b: Cave = parts
                .next()
                .ok_or(anyhow!("Tunnel {} goes nowhere!", line))?
                .into();

            if matches!((&a, &b), (Cave::Big(_), Cave::Big(_))) {
                return Err(anyhow!("Tunnel {} joins two big caves", line));
            }

            caves.tunnels.entry(a.clone()).or_default().push(b.clone());
            caves.tunnels.entry(b).or_default().push(a);
        }
        Ok(caves)
    }
}

impl Caves {
    /// Caves which may follow `cave` on a path which has visited `path`.
    ///
    /// Two big caves are never joined, so bouncing between big caves
    /// can't go on forever.
    fn next(&self, cave: &Cave, path: &[Cave], revisits: Revisits) -> Vec<Cave> {
        let mut seen = HashSet::new();
        let spent = revisits == Revisits::Never
            || path
                .iter()
                .filter(|c| matches!(c, Cave::Small(_)))
                .any(|c| !seen.insert(c));

        self.tunnels
            .get(cave)
            .map(|tunnels| {
                tunnels
                    .iter()
                    .filter(|&c| match c {
                        Cave::Start => false,
                        Cave::End | Cave::Big(_) => true,
                        Cave::Small(_) => !spent || !path.contains(c),
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn count_paths(&self, revisits: Revisits) -> usize {
        let graph = |cave: &Cave, path: &[Cave]| self.next(cave, path, revisits);
        let count = dfs::paths_with_history(Cave::Start, |c| *c == Cave::End, &graph).count();
        debug!("{} paths with {:?} revisits", count, revisits);
        count
    }
}

pub(crate) fn main(mut input: Box<dyn Read + 'static>) -> ::std::result::Result<(), Error> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;

    let caves: Caves = buffer.parse()?;
    info!("Found {} caves", caves.tunnels.len());

    println!("Part 1: {} paths", caves.count_paths(Revisits::Never));
    println!("Part 2: {} paths", caves.count_paths(Revisits::OneCaveTwice));

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const SMALL: &str = "
    start-A
    start-b
    A-c
    A-b
    b-d
    A-end
    b-end
    ";

    const MEDIUM: &str = "
    dc-end
    HN-start
    start-kj
    dc-start
    dc-HN
    LN-dc
    HN-end
    kj-sa
    kj-HN
    kj-dc
    ";

    #[test_log::test]
    fn examples_part1() {
        let caves: Caves = SMALL.parse().unwrap();
        assert_eq!(caves.count_paths(Revisits::Never), 10);

        let caves: Caves = MEDIUM.parse().unwrap();
        assert_eq!(caves.count_paths(Revisits::Never), 19);
    }

    #[test_log::test]
    fn examples_part2() {
        let caves: Caves = SMALL.parse().unwrap();
        assert_eq!(caves.count_paths(Revisits::OneCaveTwice), 36);

        let caves: Caves = MEDIUM.parse().unwrap();
        assert_eq!(caves.count_paths(Revisits::OneCaveTwice), 103);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Cave::from("start"), Cave::Start);
        assert_eq!(Cave::from("HN"), Cave::Big("HN".to_string()));
        assert_eq!(Cave::from("kj"), Cave::Small("kj".to_string()));
        assert!("A-B".parse::<Caves>().is_err());
        assert!("start".parse::<Caves>().is_err());
    }
}
