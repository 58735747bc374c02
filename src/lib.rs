#![deny(clippy::all)]

use clap::{App, Arg};

use lazy_static::lazy_static;
use log::info;
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;

pub mod puzzles;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(Box<dyn std::io::Read>) -> Result<(), Error>) + Send + Sync + 'static>;

macro_rules! puzzle {
    ($name:ident) => {
        (
            stringify!($name),
            Box::new(puzzles::$name::main) as Actor,
        )
    };
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let puzzles: Vec<(&'static str, Actor)> =
            vec![puzzle!(caves), puzzle!(garden), puzzle!(maze)];
        puzzles.into_iter().collect()
    };
}

pub fn solver() -> Result<(), Error> {
    let mut names: Vec<&str> = SOLVERS.keys().cloned().collect();
    names.sort_unstable();

    let matches = App::new("Puzzle Search")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve grid and graph puzzles with implicit graph search")
        .arg(
            Arg::with_name("puzzle")
                .value_name("PUZZLE")
                .required(true)
                .takes_value(true)
                .possible_values(&names),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .required(false)
                .takes_value(true)
                .help("Puzzle input, or - for stdin"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more about each search"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let name = matches.value_of("puzzle").unwrap_or_default();
    let actor = SOLVERS
        .get(name)
        .ok_or_else(|| PuzzleError::PuzzleNotFound(name.to_string()))?;

    println!("Puzzle {}", name);
    let reader = get_input_reader(name, matches.value_of("input"))?;
    actor(reader)
}

type IOResult<T> = std::io::Result<T>;
type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(name: &str, filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: Box<dyn ::std::io::Read + 'static> = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            info!("Reading {}", path);
            let f: File = File::open(path).map_err(PuzzleError::InputNotFound)?;
            Box::new(f)
        }
        None => get_default_input(name)
            .map_err(|e| PuzzleError::DefaultInputNotFound(name.to_string(), e))?,
    };
    Ok(reader)
}

pub fn get_default_input(name: &str) -> IOResult<BoxedRead> {
    let mut p = ::std::path::PathBuf::from("puzzles");
    p.push(name);
    p.push("input.txt");

    info!("Reading {}", p.display());
    let f = File::open(p)?;

    Ok(Box::new(f))
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("No puzzle named {0}")]
    PuzzleNotFound(String),

    #[error("Input not found: puzzles/{0}/input.txt")]
    DefaultInputNotFound(String, #[source] io::Error),

    #[error("Input not found")]
    InputNotFound(#[from] io::Error),
}
